// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_skin::{Category, Primitive};

/// The kind of a name looked up while loading a sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameKind {
    /// A subcontrol name.
    Subcontrol,
    /// A state bit name.
    State,
    /// A primitive name.
    Primitive,
    /// A category name.
    Category,
    /// A font role name.
    FontRole,
    /// A graphic role name.
    GraphicRole,
    /// An alignment flag name.
    Alignment,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Subcontrol => "subcontrol",
            Self::State => "state",
            Self::Primitive => "primitive",
            Self::Category => "category",
            Self::FontRole => "font role",
            Self::GraphicRole => "graphic role",
            Self::Alignment => "alignment",
        })
    }
}

/// What is wrong with one `[[hints]]` entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HintProblem {
    /// None of the value keys is present.
    #[error("no value key")]
    MissingValue,
    /// More than one value key is present.
    #[error("conflicting value keys `{0}` and `{1}`")]
    ConflictingValues(&'static str, &'static str),
    /// Neither `primitive` nor `category` is present.
    #[error("neither `primitive` nor `category` given")]
    MissingPrimitive,
    /// `primitive` and `category` disagree.
    #[error("primitive belongs to {primitive}, not {category}")]
    CategoryConflict {
        /// Category of the given primitive.
        primitive: Category,
        /// The given category.
        category: Category,
    },
    /// The value key does not fit the aspect's category.
    #[error("`{key}` value does not fit category {category}")]
    CategoryMismatch {
        /// The value key.
        key: &'static str,
        /// Category of the aspect.
        category: Category,
    },
    /// The value key fits the category but not the primitive, e.g. `metric`
    /// for `Size`.
    #[error("`{key}` value does not fit primitive {primitive:?}, expected one of {expected:?}")]
    PrimitiveMismatch {
        /// The value key.
        key: &'static str,
        /// Primitive of the aspect; [`Primitive::None`] for category entries.
        primitive: Primitive,
        /// Value keys accepted for the primitive.
        expected: &'static [&'static str],
    },
    /// Animator entries must carry `animation` and only they may.
    #[error("`animation` values belong to animator entries")]
    AnimatorValue,
}

/// Errors reported while loading a skin sheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// Reading the sheet failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sheet is not valid TOML or does not match the sheet layout.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A name is not known to the vocabulary.
    #[error("unknown {kind} `{name}`")]
    UnknownName {
        /// What kind of name was looked up.
        kind: NameKind,
        /// The name as written.
        name: String,
    },

    /// A color string could not be parsed.
    #[error("invalid color `{value}`: {reason}")]
    InvalidColor {
        /// The color as written.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A `[[hints]]` entry is malformed.
    #[error("hint #{index}: {problem}")]
    InvalidHint {
        /// Zero-based position in the `hints` array.
        index: usize,
        /// What is wrong with it.
        problem: HintProblem,
    },
}

impl SheetError {
    pub(crate) fn unknown(kind: NameKind, name: &str) -> Self {
        Self::UnknownName {
            kind,
            name: name.to_owned(),
        }
    }
}
