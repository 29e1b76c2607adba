// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effective hint lookup.
//!
//! Resolution completes an aspect with state bits and searches the local and
//! skin tables candidate by candidate:
//!
//! 1. The requested state is the aspect's own mask, or the current state when
//!    the aspect is unresolved.
//! 2. Candidates are all submasks of the requested state, most specific first
//!    (see [`State::combinations`]), ending with the generic entry.
//! 3. For each candidate the local table is consulted before the skin.
//! 4. When nothing matched, the search repeats for [`Subcontrol::CONTROL`].

use core::fmt;

use crate::aspect::{Aspect, State, Subcontrol};
use crate::hint::Hint;
use crate::table::HintTable;

/// Where a resolved hint came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HintSource {
    /// A running transition of the skinnable.
    Animator,
    /// The skinnable's own hint table.
    Local,
    /// The skin's hint table.
    Skin,
}

/// Provenance of a resolved hint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HintStatus {
    /// The table that satisfied the lookup.
    pub source: HintSource,
    /// The fully resolved key that matched.
    pub aspect: Aspect,
}

impl HintStatus {
    /// Returns `true` if a state-specific entry matched.
    #[must_use]
    #[inline]
    pub fn is_state_specific(&self) -> bool {
        self.aspect.is_resolved()
    }
}

impl fmt::Display for HintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} [{}]", self.source, self.aspect)
    }
}

/// Resolves `aspect` against an optional local table and an optional skin table.
///
/// Returns `None` when no candidate matches; this is distinct from a hint that
/// holds a zero or false value.
///
/// # Example
///
/// ```rust
/// use peniko::Color;
/// use understory_skin::{resolve_hint, Hint, HintSource, HintTable, Primitive, State, Subcontrol};
///
/// let fill = Subcontrol::new(1).aspect(Primitive::Fill);
/// let red = Color::from_rgba8(255, 0, 0, 255);
/// let blue = Color::from_rgba8(0, 0, 255, 255);
///
/// let mut local = HintTable::new();
/// local.set_hint(fill.with_state(State::PRESSED), red);
/// let mut skin = HintTable::new();
/// skin.set_hint(fill, blue);
///
/// let (hint, status) = resolve_hint(Some(&local), Some(&skin), fill, State::PRESSED).unwrap();
/// assert_eq!(hint, &Hint::Color(red));
/// assert_eq!(status.source, HintSource::Local);
///
/// let (hint, status) = resolve_hint(Some(&local), Some(&skin), fill, State::empty()).unwrap();
/// assert_eq!(hint, &Hint::Color(blue));
/// assert!(!status.is_state_specific());
/// ```
pub fn resolve_hint<'a>(
    local: Option<&'a HintTable>,
    skin: Option<&'a HintTable>,
    aspect: Aspect,
    current: State,
) -> Option<(&'a Hint, HintStatus)> {
    let requested = if aspect.is_resolved() {
        aspect.state()
    } else {
        current
    };

    let found = resolve_for_subcontrol(local, skin, aspect, requested);
    if found.is_some() || aspect.subcontrol() == Subcontrol::CONTROL {
        return found;
    }
    resolve_for_subcontrol(
        local,
        skin,
        aspect.with_subcontrol(Subcontrol::CONTROL),
        requested,
    )
}

fn resolve_for_subcontrol<'a>(
    local: Option<&'a HintTable>,
    skin: Option<&'a HintTable>,
    aspect: Aspect,
    requested: State,
) -> Option<(&'a Hint, HintStatus)> {
    for state in requested.combinations() {
        let candidate = aspect.with_state(state);
        let tables = [(local, HintSource::Local), (skin, HintSource::Skin)];
        for (table, source) in tables {
            if let Some(hint) = table.and_then(|t| t.hint(candidate)) {
                return Some((
                    hint,
                    HintStatus {
                        source,
                        aspect: candidate,
                    },
                ));
            }
        }
    }
    None
}
