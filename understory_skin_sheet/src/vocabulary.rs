// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use understory_skin::{Alignment, Category, FontRole, GraphicRole, Primitive, State, Subcontrol};

use crate::error::{NameKind, SheetError};

/// Names a sheet may use for subcontrols, states and roles.
///
/// Subcontrols and custom states are control-specific, so each control
/// library registers its own. The built-in names are:
///
/// - subcontrol `Control`
/// - states `HOVERED`, `PRESSED`, `CHECKED`, `FOCUSED`, `DISABLED`
/// - font roles `default`, `caption`, `title`
/// - graphic role `none`
///
/// ```rust
/// use understory_skin::{State, Subcontrol};
/// use understory_skin_sheet::Vocabulary;
///
/// let vocabulary = Vocabulary::new()
///     .subcontrol("Panel", Subcontrol::new(1))
///     .state("Selected", State::from_bits_retain(1 << 8));
///
/// assert_eq!(vocabulary.resolve_subcontrol("Panel").unwrap(), Subcontrol::new(1));
/// assert_eq!(vocabulary.resolve_state("PRESSED").unwrap(), State::PRESSED);
/// assert!(vocabulary.resolve_subcontrol("Knob").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Vocabulary {
    subcontrols: BTreeMap<String, Subcontrol>,
    states: BTreeMap<String, State>,
    font_roles: BTreeMap<String, FontRole>,
    graphic_roles: BTreeMap<String, GraphicRole>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Creates a vocabulary holding the built-in names.
    #[must_use]
    pub fn new() -> Self {
        let states = [
            ("HOVERED", State::HOVERED),
            ("PRESSED", State::PRESSED),
            ("CHECKED", State::CHECKED),
            ("FOCUSED", State::FOCUSED),
            ("DISABLED", State::DISABLED),
        ];
        let font_roles = [
            ("default", FontRole::DEFAULT),
            ("caption", FontRole::CAPTION),
            ("title", FontRole::TITLE),
        ];
        Self {
            subcontrols: BTreeMap::from([("Control".to_owned(), Subcontrol::CONTROL)]),
            states: states
                .into_iter()
                .map(|(name, state)| (name.to_owned(), state))
                .collect(),
            font_roles: font_roles
                .into_iter()
                .map(|(name, role)| (name.to_owned(), role))
                .collect(),
            graphic_roles: BTreeMap::from([("none".to_owned(), GraphicRole::NONE)]),
        }
    }

    /// Registers a subcontrol name.
    #[must_use]
    pub fn subcontrol(mut self, name: impl Into<String>, subcontrol: Subcontrol) -> Self {
        self.subcontrols.insert(name.into(), subcontrol);
        self
    }

    /// Registers a state name.
    #[must_use]
    pub fn state(mut self, name: impl Into<String>, state: State) -> Self {
        self.states.insert(name.into(), state);
        self
    }

    /// Registers a font role name.
    #[must_use]
    pub fn font_role(mut self, name: impl Into<String>, role: FontRole) -> Self {
        self.font_roles.insert(name.into(), role);
        self
    }

    /// Registers a graphic role name.
    #[must_use]
    pub fn graphic_role(mut self, name: impl Into<String>, role: GraphicRole) -> Self {
        self.graphic_roles.insert(name.into(), role);
        self
    }

    /// Looks up a subcontrol.
    pub fn resolve_subcontrol(&self, name: &str) -> Result<Subcontrol, SheetError> {
        lookup(&self.subcontrols, NameKind::Subcontrol, name)
    }

    /// Looks up a state.
    pub fn resolve_state(&self, name: &str) -> Result<State, SheetError> {
        lookup(&self.states, NameKind::State, name)
    }

    /// Looks up a font role.
    pub fn resolve_font_role(&self, name: &str) -> Result<FontRole, SheetError> {
        lookup(&self.font_roles, NameKind::FontRole, name)
    }

    /// Looks up a graphic role.
    pub fn resolve_graphic_role(&self, name: &str) -> Result<GraphicRole, SheetError> {
        lookup(&self.graphic_roles, NameKind::GraphicRole, name)
    }

    /// Unions the named states.
    pub fn resolve_states(&self, names: &[String]) -> Result<State, SheetError> {
        names.iter().try_fold(State::empty(), |acc, name| {
            Ok(acc | self.resolve_state(name)?)
        })
    }
}

fn lookup<T: Copy>(
    table: &BTreeMap<String, T>,
    kind: NameKind,
    name: &str,
) -> Result<T, SheetError> {
    table
        .get(name)
        .copied()
        .ok_or_else(|| SheetError::unknown(kind, name))
}

/// Parses a primitive name such as `Fill` or `BorderColor`.
pub(crate) fn primitive_from_name(name: &str) -> Result<Primitive, SheetError> {
    Ok(match name {
        "Size" => Primitive::Size,
        "Margin" => Primitive::Margin,
        "Padding" => Primitive::Padding,
        "Shape" => Primitive::Shape,
        "Border" => Primitive::Border,
        "Spacing" => Primitive::Spacing,
        "Alignment" => Primitive::Alignment,
        "Fill" => Primitive::Fill,
        "Text" => Primitive::Text,
        "BorderColor" => Primitive::BorderColor,
        "Style" => Primitive::Style,
        "FontRole" => Primitive::FontRole,
        "GraphicRole" => Primitive::GraphicRole,
        _ => return Err(SheetError::unknown(NameKind::Primitive, name)),
    })
}

/// Parses a category name.
pub(crate) fn category_from_name(name: &str) -> Result<Category, SheetError> {
    Ok(match name {
        "Metric" => Category::Metric,
        "Color" => Category::Color,
        "Flag" => Category::Flag,
        _ => return Err(SheetError::unknown(NameKind::Category, name)),
    })
}

/// Unions alignment flags named as in [`Alignment`], e.g. `LEFT` or `V_CENTER`.
pub(crate) fn alignment_from_names(names: &[String]) -> Result<Alignment, SheetError> {
    names.iter().try_fold(Alignment::empty(), |acc, name| {
        Alignment::from_name(name)
            .map(|flag| acc | flag)
            .ok_or_else(|| SheetError::unknown(NameKind::Alignment, name))
    })
}
