// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use kurbo::{Insets, RoundedRectRadii, Size};
use peniko::Color;
use peniko::color::Srgb;
use understory_skin::{
    Aspect, AnimationHint, BoxBorderColors, Category, Easing, Font, GraphicFilter, Hint, Primitive,
    Skin, SkinBuilder,
};

use crate::document::{
    AnimationDef, Corners, EasingDef, EdgeColors, Edges, FontDef, HintDef, SheetDocument,
};
use crate::error::{HintProblem, SheetError};
use crate::vocabulary::{Vocabulary, alignment_from_names, category_from_name, primitive_from_name};

/// Name of a skin loaded from a sheet without `name`.
pub const UNNAMED_SKIN: &str = "unnamed";

/// Loads a skin from sheet text.
///
/// A sheet without `name` yields a skin named [`UNNAMED_SKIN`].
///
/// # Example
///
/// ```rust
/// use understory_skin::{Primitive, Subcontrol};
/// use understory_skin_sheet::{Vocabulary, load_skin};
///
/// const PANEL: Subcontrol = Subcontrol::new(1);
///
/// let sheet = r##"
/// name = "light"
///
/// [[hints]]
/// subcontrol = "Panel"
/// primitive = "Spacing"
/// metric = 6.0
/// "##;
///
/// let vocabulary = Vocabulary::new().subcontrol("Panel", PANEL);
/// let skin = load_skin(sheet, &vocabulary).unwrap();
/// assert_eq!(skin.name(), "light");
/// assert_eq!(skin.hint(PANEL.aspect(Primitive::Spacing)).and_then(|h| h.as_metric()), Some(6.0));
/// ```
pub fn load_skin(text: &str, vocabulary: &Vocabulary) -> Result<Skin, SheetError> {
    apply_sheet(SkinBuilder::new(UNNAMED_SKIN), text, vocabulary).map(SkinBuilder::build)
}

/// Reads and loads a skin sheet file.
///
/// A sheet without `name` is named after the file stem.
pub fn load_skin_file(path: impl AsRef<Path>, vocabulary: &Vocabulary) -> Result<Skin, SheetError> {
    let path = path.as_ref();
    log::debug!("loading skin sheet {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let name = path.file_stem().map_or_else(
        || UNNAMED_SKIN.to_owned(),
        |stem| stem.to_string_lossy().into_owned(),
    );
    apply_sheet(SkinBuilder::new(name), &text, vocabulary).map(SkinBuilder::build)
}

/// Applies sheet text on top of `builder`.
///
/// This layers a sheet over an existing skin, e.g. one obtained from
/// [`Skin::to_builder`]. Entries of the sheet overwrite entries of the
/// builder; a `name` in the sheet renames the skin.
pub fn apply_sheet(
    mut builder: SkinBuilder,
    text: &str,
    vocabulary: &Vocabulary,
) -> Result<SkinBuilder, SheetError> {
    let document: SheetDocument = toml::from_str(text)?;

    if let Some(name) = document.name {
        builder = builder.name(name);
    }
    if let Some(def) = &document.default_font {
        builder = builder.default_font(font(def));
    }
    for (name, def) in &document.fonts {
        let role = vocabulary.resolve_font_role(name)?;
        builder.set_font(role, font(def));
    }
    for (name, def) in &document.graphic_filters {
        let role = vocabulary.resolve_graphic_role(name)?;
        let mut filter = GraphicFilter::new();
        for [from, to] in &def.substitutions {
            filter = filter.substitute(parse_color(from)?, parse_color(to)?);
        }
        builder.set_graphic_filter(role, filter);
    }

    let mut seen = BTreeSet::new();
    for (index, def) in document.hints.iter().enumerate() {
        let (aspect, value) = hint_entry(def, vocabulary)
            .map_err(|err| err.at(index))?;
        if !seen.insert(aspect) {
            log::warn!("hint #{index} overrides an earlier entry for {aspect}");
        }
        builder.set_hint(aspect, value);
    }
    Ok(builder)
}

/// Parses a CSS color, e.g. `#3366ff`, `rgb(51 102 255 / 50%)` or `teal`.
pub fn parse_color(text: &str) -> Result<Color, SheetError> {
    peniko::color::parse_color(text)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|err| SheetError::InvalidColor {
            value: text.to_owned(),
            reason: err.to_string(),
        })
}

fn font(def: &FontDef) -> Font {
    let fallback = Font::default();
    Font {
        family: def
            .family
            .as_deref()
            .map_or(fallback.family, Arc::from),
        pixel_size: def.size.unwrap_or(fallback.pixel_size),
        weight: def.weight.unwrap_or(fallback.weight),
        italic: def.italic.unwrap_or(fallback.italic),
    }
}

/// An entry failure that is either positional or already a sheet error.
enum EntryError {
    Problem(HintProblem),
    Sheet(SheetError),
}

impl EntryError {
    fn at(self, index: usize) -> SheetError {
        match self {
            Self::Problem(problem) => SheetError::InvalidHint { index, problem },
            Self::Sheet(err) => err,
        }
    }
}

impl From<SheetError> for EntryError {
    fn from(err: SheetError) -> Self {
        Self::Sheet(err)
    }
}

impl From<HintProblem> for EntryError {
    fn from(problem: HintProblem) -> Self {
        Self::Problem(problem)
    }
}

fn hint_entry(def: &HintDef, vocabulary: &Vocabulary) -> Result<(Aspect, Hint), EntryError> {
    let subcontrol = vocabulary.resolve_subcontrol(def.subcontrol.as_deref().unwrap_or("Control"))?;
    let primitive = def.primitive.as_deref().map(primitive_from_name).transpose()?;
    let category = def.category.as_deref().map(category_from_name).transpose()?;
    let state = vocabulary.resolve_states(&def.states)?;

    let category = match (primitive.and_then(|p| p.category()), category) {
        (Some(implied), Some(given)) if implied != given => {
            return Err(HintProblem::CategoryConflict {
                primitive: implied,
                category: given,
            }
            .into());
        }
        (Some(category), _) | (None, Some(category)) => category,
        (None, None) => return Err(HintProblem::MissingPrimitive.into()),
    };

    let (key, value) = hint_value(def, vocabulary)?;
    let aspect = if def.animator {
        if key != "animation" {
            return Err(HintProblem::AnimatorValue.into());
        }
        Aspect::animator(subcontrol, category)
    } else {
        match value_category(key) {
            Some(value_category) if value_category == category => {}
            Some(_) => return Err(HintProblem::CategoryMismatch { key, category }.into()),
            None => return Err(HintProblem::AnimatorValue.into()),
        }
        let primitive = primitive.unwrap_or(Primitive::None);
        let expected = value_keys(primitive, category);
        if !expected.contains(&key) {
            return Err(HintProblem::PrimitiveMismatch {
                key,
                primitive,
                expected,
            }
            .into());
        }
        match primitive {
            Primitive::None => Aspect::category_of(subcontrol, category),
            primitive => Aspect::new(subcontrol, primitive),
        }
    };
    Ok((aspect.with_state(state), value))
}

/// Returns the category a value key fits; `None` for animation values.
fn value_category(key: &str) -> Option<Category> {
    match key {
        "color" | "border_colors" => Some(Category::Color),
        "flag" | "font_role" | "graphic_role" => Some(Category::Flag),
        "animation" => None,
        _ => Some(Category::Metric),
    }
}

/// Returns the value keys whose hints the typed readers of `primitive` accept.
///
/// Category entries without a primitive take the plain value of their
/// category.
fn value_keys(primitive: Primitive, category: Category) -> &'static [&'static str] {
    match primitive {
        Primitive::None => match category {
            Category::Metric => &["metric"],
            Category::Color => &["color"],
            Category::Flag => &["flag"],
        },
        Primitive::Size => &["size"],
        Primitive::Margin | Primitive::Padding | Primitive::Border => &["margins", "metric"],
        Primitive::Shape => &["radius", "metric"],
        Primitive::Spacing => &["metric"],
        Primitive::Alignment => &["alignment"],
        Primitive::Fill | Primitive::Text => &["color"],
        Primitive::BorderColor => &["border_colors", "color"],
        Primitive::Style => &["flag"],
        Primitive::FontRole => &["font_role"],
        Primitive::GraphicRole => &["graphic_role"],
    }
}

fn hint_value(
    def: &HintDef,
    vocabulary: &Vocabulary,
) -> Result<(&'static str, Hint), EntryError> {
    let mut values: Vec<(&'static str, Hint)> = Vec::new();

    if let Some(color) = &def.color {
        values.push(("color", parse_color(color)?.into()));
    }
    if let Some(metric) = def.metric {
        values.push(("metric", metric.into()));
    }
    if let Some([width, height]) = def.size {
        values.push(("size", Size::new(width, height).into()));
    }
    if let Some(edges) = &def.margins {
        values.push(("margins", insets(edges).into()));
    }
    if let Some(corners) = &def.radius {
        values.push(("radius", radii(corners).into()));
    }
    if let Some(colors) = &def.border_colors {
        values.push(("border_colors", border_colors(colors)?.into()));
    }
    if let Some(flag) = def.flag {
        values.push(("flag", flag.into()));
    }
    if let Some(names) = &def.alignment {
        values.push(("alignment", alignment_from_names(names)?.into()));
    }
    if let Some(name) = &def.font_role {
        values.push(("font_role", vocabulary.resolve_font_role(name)?.into()));
    }
    if let Some(name) = &def.graphic_role {
        values.push(("graphic_role", vocabulary.resolve_graphic_role(name)?.into()));
    }
    if let Some(animation) = &def.animation {
        values.push(("animation", animation_hint(animation).into()));
    }

    let mut values = values.into_iter();
    match (values.next(), values.next()) {
        (Some(value), None) => Ok(value),
        (None, _) => Err(HintProblem::MissingValue.into()),
        (Some((first, _)), Some((second, _))) => {
            Err(HintProblem::ConflictingValues(first, second).into())
        }
    }
}

fn insets(edges: &Edges) -> Insets {
    match *edges {
        Edges::Uniform(value) => Insets::uniform(value),
        Edges::Sides([left, top, right, bottom]) => Insets::new(left, top, right, bottom),
    }
}

fn radii(corners: &Corners) -> RoundedRectRadii {
    match *corners {
        Corners::Uniform(value) => RoundedRectRadii::from_single_radius(value),
        Corners::Each([top_left, top_right, bottom_right, bottom_left]) => {
            RoundedRectRadii::new(top_left, top_right, bottom_right, bottom_left)
        }
    }
}

fn border_colors(colors: &EdgeColors) -> Result<BoxBorderColors, SheetError> {
    Ok(match colors {
        EdgeColors::Uniform(color) => BoxBorderColors::uniform(parse_color(color)?),
        EdgeColors::Sides([left, top, right, bottom]) => BoxBorderColors {
            left: parse_color(left)?,
            top: parse_color(top)?,
            right: parse_color(right)?,
            bottom: parse_color(bottom)?,
        },
    })
}

fn animation_hint(def: &AnimationDef) -> AnimationHint {
    let easing = match def.easing {
        EasingDef::Linear => Easing::Linear,
        EasingDef::InQuad => Easing::InQuad,
        EasingDef::OutQuad => Easing::OutQuad,
        EasingDef::InOutQuad => Easing::InOutQuad,
        EasingDef::OutCubic => Easing::OutCubic,
        EasingDef::InOutCubic => Easing::InOutCubic,
    };
    AnimationHint::new(Duration::from_millis(def.duration_ms))
        .with_delay(Duration::from_millis(def.delay_ms))
        .with_easing(easing)
}
