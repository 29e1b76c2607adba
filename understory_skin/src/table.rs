// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact-key hint storage.
//!
//! [`HintTable`] maps fully specified [`Aspect`]s to [`Hint`]s. It performs no
//! state completion or fallback; that belongs to the resolution layer.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::aspect::{Aspect, Subcontrol};
use crate::hint::Hint;

/// A mapping from aspects to hints.
///
/// # Example
///
/// ```rust
/// use understory_skin::{Hint, HintTable, Primitive, State, Subcontrol};
///
/// let panel = Subcontrol::new(1);
/// let pressed = panel.aspect(Primitive::Spacing).with_state(State::PRESSED);
///
/// let mut table = HintTable::new();
/// assert!(table.set_hint(pressed, 4.0).is_none());
/// assert_eq!(table.hint(pressed), Some(&Hint::Metric(4.0)));
///
/// // Lookups are exact: the unresolved aspect is a different key.
/// assert_eq!(table.hint(pressed.unresolved()), None);
///
/// assert!(table.reset_hint(pressed));
/// assert!(!table.reset_hint(pressed));
/// ```
#[derive(Clone, Debug, Default)]
pub struct HintTable {
    hints: HashMap<Aspect, Hint>,
}

impl HintTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Inserts or overwrites the hint for `aspect`, returning the previous one.
    pub fn set_hint(&mut self, aspect: Aspect, value: impl Into<Hint>) -> Option<Hint> {
        self.hints.insert(aspect, value.into())
    }

    /// Removes the hint for `aspect`.
    ///
    /// Returns `true` if an entry existed.
    pub fn reset_hint(&mut self, aspect: Aspect) -> bool {
        self.hints.remove(&aspect).is_some()
    }

    /// Returns the hint stored for exactly `aspect`.
    #[must_use]
    #[inline]
    pub fn hint(&self, aspect: Aspect) -> Option<&Hint> {
        self.hints.get(&aspect)
    }

    /// Returns `true` if a hint is stored for exactly `aspect`.
    #[must_use]
    #[inline]
    pub fn contains(&self, aspect: Aspect) -> bool {
        self.hints.contains_key(&aspect)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.hints.clear();
    }

    /// Returns an iterator over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Aspect, &Hint)> + '_ {
        self.hints.iter().map(|(aspect, hint)| (*aspect, hint))
    }

    /// Returns all keys, sorted.
    #[must_use]
    pub fn aspects(&self) -> Vec<Aspect> {
        let mut aspects: Vec<Aspect> = self.hints.keys().copied().collect();
        aspects.sort_unstable();
        aspects
    }

    /// Adds the state-stripped form of every non-animator key to `out`.
    pub fn collect_unresolved(&self, out: &mut BTreeSet<Aspect>) {
        out.extend(
            self.hints
                .keys()
                .filter(|aspect| !aspect.is_animator())
                .map(|aspect| aspect.unresolved()),
        );
    }

    /// Adds every subcontrol that appears in a key, animator keys included, to `out`.
    pub fn collect_subcontrols(&self, out: &mut BTreeSet<Subcontrol>) {
        out.extend(self.hints.keys().map(|aspect| aspect.subcontrol()));
    }
}

impl<H: Into<Hint>> FromIterator<(Aspect, H)> for HintTable {
    fn from_iter<I: IntoIterator<Item = (Aspect, H)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<H: Into<Hint>> Extend<(Aspect, H)> for HintTable {
    fn extend<I: IntoIterator<Item = (Aspect, H)>>(&mut self, iter: I) {
        for (aspect, hint) in iter {
            self.set_hint(aspect, hint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::{Category, Primitive, State};

    const PANEL: Subcontrol = Subcontrol::new(1);
    const TEXT: Subcontrol = Subcontrol::new(2);

    #[test]
    fn set_overwrites_and_returns_previous() {
        let aspect = PANEL.aspect(Primitive::Spacing);
        let mut table = HintTable::new();
        assert_eq!(table.set_hint(aspect, 1.0), None);
        assert_eq!(table.set_hint(aspect, 2.0), Some(Hint::Metric(1.0)));
        assert_eq!(table.hint(aspect), Some(&Hint::Metric(2.0)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn set_then_reset_restores_absence() {
        let aspect = PANEL.aspect(Primitive::Style);
        let mut table = HintTable::new();
        table.set_hint(aspect, 7_u32);
        assert!(table.reset_hint(aspect));
        assert!(!table.contains(aspect));
        assert!(table.is_empty());
    }

    #[test]
    fn unresolved_keys_are_deduplicated_and_skip_animators() {
        let fill = PANEL.aspect(Primitive::Fill);
        let table: HintTable = [
            (fill, Hint::Metric(0.0)),
            (fill.with_state(State::HOVERED), Hint::Metric(1.0)),
            (fill.with_state(State::PRESSED), Hint::Metric(2.0)),
            (TEXT.aspect(Primitive::Text), Hint::Metric(3.0)),
            (Aspect::animator(PANEL, Category::Color), Hint::Metric(4.0)),
        ]
        .into_iter()
        .collect();

        let mut unresolved = BTreeSet::new();
        table.collect_unresolved(&mut unresolved);
        let unresolved: Vec<Aspect> = unresolved.into_iter().collect();
        assert_eq!(unresolved, [fill, TEXT.aspect(Primitive::Text)]);
    }

    #[test]
    fn subcontrols_include_animator_keys() {
        let table: HintTable = [
            (Subcontrol::CONTROL.aspect(Primitive::Fill), Hint::Metric(0.0)),
            (Aspect::animator(TEXT, Category::Color), Hint::Metric(1.0)),
        ]
        .into_iter()
        .collect();
        let mut subcontrols = BTreeSet::new();
        table.collect_subcontrols(&mut subcontrols);
        assert_eq!(
            subcontrols.into_iter().collect::<Vec<_>>(),
            [Subcontrol::CONTROL, TEXT]
        );
    }

    #[test]
    fn aspects_are_sorted() {
        let a = PANEL.aspect(Primitive::Size);
        let b = TEXT.aspect(Primitive::Size);
        let table: HintTable = [(b, 1.0), (a, 2.0)].into_iter().collect();
        assert_eq!(table.aspects(), [a, b]);
    }
}
