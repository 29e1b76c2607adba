// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hint transitions.
//!
//! When a skinnable changes state with animation enabled, every hint whose
//! effective value changes gets a [`Transition`] from the old to the new value.
//! The [`Animator`] holds the running transitions; while one runs, its
//! interpolated value takes precedence over the hint tables.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Insets, RoundedRectRadii, Size};
use peniko::Color;

use crate::aspect::Aspect;
use crate::hint::{AnimationHint, Hint};

/// A running transition of one unresolved aspect.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    aspect: Aspect,
    from: Hint,
    to: Hint,
    animation: AnimationHint,
    elapsed: Duration,
}

impl Transition {
    /// Creates a transition that has not advanced yet.
    #[must_use]
    pub fn new(aspect: Aspect, from: Hint, to: Hint, animation: AnimationHint) -> Self {
        Self {
            aspect: aspect.unresolved(),
            from,
            to,
            animation,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the animated aspect.
    #[must_use]
    #[inline]
    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Returns the start value.
    #[must_use]
    #[inline]
    pub fn from(&self) -> &Hint {
        &self.from
    }

    /// Returns the target value.
    #[must_use]
    #[inline]
    pub fn to(&self) -> &Hint {
        &self.to
    }

    /// Returns the animation parameters.
    #[must_use]
    #[inline]
    pub fn animation(&self) -> AnimationHint {
        self.animation
    }

    /// Returns eased progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let moving = self.elapsed.saturating_sub(self.animation.delay);
        if self.animation.duration.is_zero() {
            return 1.0;
        }
        let t = moving.as_secs_f32() / self.animation.duration.as_secs_f32();
        self.animation.easing.apply(t)
    }

    /// Returns `true` once the delay and duration have elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.animation.delay + self.animation.duration
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> Hint {
        if self.is_finished() {
            return self.to.clone();
        }
        interpolate(&self.from, &self.to, self.progress())
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }
}

/// The running transitions of one skinnable.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    transitions: Vec<Transition>,
}

impl Animator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no transition is running.
    #[must_use]
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Returns the running transitions in start order.
    #[must_use]
    #[inline]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the transition running for `aspect`, ignoring its state bits.
    #[must_use]
    pub fn transition(&self, aspect: Aspect) -> Option<&Transition> {
        let aspect = aspect.unresolved();
        self.transitions.iter().find(|t| t.aspect == aspect)
    }

    /// Returns the current animated value for `aspect`, if one is running.
    #[must_use]
    pub fn value(&self, aspect: Aspect) -> Option<Hint> {
        self.transition(aspect).map(Transition::value)
    }

    /// Starts a transition, replacing one already running for the same aspect.
    ///
    /// A replaced transition hands over its current value as the new start
    /// value, so interrupted animations do not jump.
    pub fn start(&mut self, mut transition: Transition) {
        if let Some(index) = self
            .transitions
            .iter()
            .position(|t| t.aspect == transition.aspect)
        {
            transition.from = self.transitions[index].value();
            self.transitions.remove(index);
        }
        log::trace!(
            "starting transition for {} over {:?}",
            transition.aspect,
            transition.animation.duration
        );
        self.transitions.push(transition);
    }

    /// Advances all transitions by `dt` and drops finished ones.
    ///
    /// Returns `true` while any transition is still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        for transition in &mut self.transitions {
            transition.advance(dt);
        }
        self.transitions.retain(|t| !t.is_finished());
        !self.transitions.is_empty()
    }

    /// Stops the transition running for `aspect`.
    ///
    /// Returns `true` if one was running.
    pub fn stop(&mut self, aspect: Aspect) -> bool {
        let aspect = aspect.unresolved();
        let before = self.transitions.len();
        self.transitions.retain(|t| t.aspect != aspect);
        self.transitions.len() != before
    }

    /// Keeps only the transitions for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&Transition) -> bool) {
        self.transitions.retain(keep);
    }

    /// Stops every transition.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

/// Interpolates between two hints at eased progress `t`.
///
/// Colors, metrics, sizes, insets and radii interpolate; any other pair keeps
/// `from` until `t` reaches 1.
#[must_use]
pub fn interpolate(from: &Hint, to: &Hint, t: f32) -> Hint {
    let t64 = f64::from(t);
    match (from, to) {
        (Hint::Color(a), Hint::Color(b)) => Hint::Color(lerp_color(*a, *b, t)),
        (Hint::Metric(a), Hint::Metric(b)) => Hint::Metric(lerp(*a, *b, t64)),
        (Hint::Size(a), Hint::Size(b)) => Hint::Size(Size::new(
            lerp(a.width, b.width, t64),
            lerp(a.height, b.height, t64),
        )),
        (Hint::Margins(a), Hint::Margins(b)) => Hint::Margins(Insets::new(
            lerp(a.x0, b.x0, t64),
            lerp(a.y0, b.y0, t64),
            lerp(a.x1, b.x1, t64),
            lerp(a.y1, b.y1, t64),
        )),
        (Hint::Shape(a), Hint::Shape(b)) => Hint::Shape(RoundedRectRadii::new(
            lerp(a.top_left, b.top_left, t64),
            lerp(a.top_right, b.top_right, t64),
            lerp(a.bottom_right, b.bottom_right, t64),
            lerp(a.bottom_left, b.bottom_left, t64),
        )),
        _ if t >= 1.0 => to.clone(),
        _ => from.clone(),
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let mut components = a.components;
    for (c, target) in components.iter_mut().zip(b.components) {
        *c += (target - *c) * t;
    }
    Color::new(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::{Primitive, State, Subcontrol};
    use crate::hint::{Easing, FontRole};

    const PANEL: Subcontrol = Subcontrol::new(1);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn metric_transition(from: f64, to: f64, duration: u64) -> Transition {
        Transition::new(
            PANEL.aspect(Primitive::Spacing),
            Hint::Metric(from),
            Hint::Metric(to),
            AnimationHint::new(ms(duration)),
        )
    }

    #[test]
    fn metric_interpolates_linearly() {
        let mut animator = Animator::new();
        animator.start(metric_transition(0.0, 10.0, 100));
        assert!(animator.advance(ms(50)));
        assert_eq!(
            animator.value(PANEL.aspect(Primitive::Spacing)),
            Some(Hint::Metric(5.0))
        );
    }

    #[test]
    fn stop_ignores_state_bits() {
        let mut animator = Animator::new();
        animator.start(metric_transition(0.0, 10.0, 100));
        let pressed = PANEL.aspect(Primitive::Spacing).with_state(State::PRESSED);
        assert!(animator.stop(pressed));
        assert!(!animator.stop(pressed));
        assert!(animator.is_idle());
    }

    #[test]
    fn finished_transitions_are_dropped() {
        let mut animator = Animator::new();
        animator.start(metric_transition(0.0, 10.0, 100));
        assert!(!animator.advance(ms(100)));
        assert!(animator.is_idle());
        assert_eq!(animator.value(PANEL.aspect(Primitive::Spacing)), None);
    }

    #[test]
    fn lookup_ignores_state_bits() {
        let mut animator = Animator::new();
        animator.start(metric_transition(0.0, 10.0, 100));
        let pressed = PANEL.aspect(Primitive::Spacing).with_state(State::PRESSED);
        assert!(animator.transition(pressed).is_some());
    }

    #[test]
    fn restart_continues_from_current_value() {
        let mut animator = Animator::new();
        animator.start(metric_transition(0.0, 10.0, 100));
        animator.advance(ms(50));
        animator.start(metric_transition(10.0, 0.0, 100));
        assert_eq!(animator.transitions().len(), 1);
        assert_eq!(animator.transitions()[0].from(), &Hint::Metric(5.0));
    }

    #[test]
    fn delay_holds_start_value() {
        let mut animator = Animator::new();
        animator.start(Transition::new(
            PANEL.aspect(Primitive::Spacing),
            Hint::Metric(0.0),
            Hint::Metric(10.0),
            AnimationHint::new(ms(100))
                .with_delay(ms(40))
                .with_easing(Easing::OutQuad),
        ));
        animator.advance(ms(40));
        assert_eq!(
            animator.value(PANEL.aspect(Primitive::Spacing)),
            Some(Hint::Metric(0.0))
        );
        assert!(animator.advance(ms(99)));
        assert!(!animator.advance(ms(1)));
    }

    #[test]
    fn colors_blend_per_component() {
        let black = Color::new([0.0, 0.0, 0.0, 1.0]);
        let white = Color::new([1.0, 1.0, 1.0, 1.0]);
        let mid = interpolate(&Hint::Color(black), &Hint::Color(white), 0.5);
        assert_eq!(mid, Hint::Color(Color::new([0.5, 0.5, 0.5, 1.0])));
    }

    #[test]
    fn discrete_hints_switch_at_the_end() {
        let from = Hint::FontRole(FontRole::DEFAULT);
        let to = Hint::FontRole(FontRole::TITLE);
        assert_eq!(interpolate(&from, &to, 0.9), from);
        assert_eq!(interpolate(&from, &to, 1.0), to);
    }
}
