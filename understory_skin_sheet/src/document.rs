// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serde layout of a skin sheet.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SheetDocument {
    pub(crate) name: Option<String>,
    pub(crate) default_font: Option<FontDef>,
    #[serde(default)]
    pub(crate) fonts: BTreeMap<String, FontDef>,
    #[serde(default)]
    pub(crate) graphic_filters: BTreeMap<String, FilterDef>,
    #[serde(default)]
    pub(crate) hints: Vec<HintDef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FontDef {
    pub(crate) family: Option<String>,
    pub(crate) size: Option<f32>,
    pub(crate) weight: Option<u16>,
    pub(crate) italic: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FilterDef {
    #[serde(default)]
    pub(crate) substitutions: Vec<[String; 2]>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HintDef {
    pub(crate) subcontrol: Option<String>,
    pub(crate) primitive: Option<String>,
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) states: Vec<String>,
    #[serde(default)]
    pub(crate) animator: bool,

    // Value keys; exactly one must be present.
    pub(crate) color: Option<String>,
    pub(crate) metric: Option<f64>,
    pub(crate) size: Option<[f64; 2]>,
    pub(crate) margins: Option<Edges>,
    pub(crate) radius: Option<Corners>,
    pub(crate) border_colors: Option<EdgeColors>,
    pub(crate) flag: Option<u32>,
    pub(crate) alignment: Option<Vec<String>>,
    pub(crate) font_role: Option<String>,
    pub(crate) graphic_role: Option<String>,
    pub(crate) animation: Option<AnimationDef>,
}

/// Insets as one value or `[left, top, right, bottom]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Edges {
    Uniform(f64),
    Sides([f64; 4]),
}

/// Radii as one value or `[top_left, top_right, bottom_right, bottom_left]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Corners {
    Uniform(f64),
    Each([f64; 4]),
}

/// Border colors as one color or `[left, top, right, bottom]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum EdgeColors {
    Uniform(String),
    Sides([String; 4]),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AnimationDef {
    pub(crate) duration_ms: u64,
    #[serde(default)]
    pub(crate) delay_ms: u64,
    #[serde(default)]
    pub(crate) easing: EasingDef,
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum EasingDef {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    OutCubic,
    InOutCubic,
}
