// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The skinnable facade.
//!
//! [`Skinnable`] combines a local [`HintTable`], a shared [`Skin`], the current
//! [`State`], running transitions and an optional [`SkinletSlot`]. Controls
//! embed one (or several, one per styled part) and expose them through
//! [`SkinnableObject`].

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Insets, Rect, RoundedRectRadii, Size};
use peniko::{Brush, Color, Gradient};

use crate::animation::{Animator, Transition};
use crate::aspect::{self, Aspect, Category, Primitive, State, Subcontrol};
use crate::control::{Control, ControlKind, ControlType, cast_control};
use crate::hint::{
    Alignment, AnimationHint, BoxBorderColors, Font, FontRole, GraphicFilter, GraphicRole, Hint,
};
use crate::resolve::{HintSource, HintStatus, resolve_hint};
use crate::skin::Skin;
use crate::skinlet::{SkinNode, Skinlet, SkinletSlot};
use crate::table::HintTable;

/// Hint storage and resolution state of one styled object.
///
/// # Example
///
/// ```rust
/// use peniko::Color;
/// use understory_skin::{ControlType, Primitive, SkinBuilder, Skinnable, State, Subcontrol};
///
/// const PANEL: Subcontrol = Subcontrol::new(1);
/// let fill = PANEL.aspect(Primitive::Fill);
/// let red = Color::from_rgba8(255, 0, 0, 255);
/// let blue = Color::from_rgba8(0, 0, 255, 255);
///
/// let skin = SkinBuilder::new("demo").hint(fill, blue).build();
/// let mut skinnable = Skinnable::with_skin(ControlType::CONTROL, skin);
/// skinnable.set_color(fill.with_state(State::PRESSED), red);
///
/// assert_eq!(skinnable.color(fill), blue);
/// skinnable.set_skin_state(State::PRESSED, false);
/// assert_eq!(skinnable.color(fill), red);
/// ```
#[derive(Debug)]
pub struct Skinnable {
    control_type: ControlType,
    hints: HintTable,
    skin: Option<Skin>,
    state: State,
    skinlet: Option<SkinletSlot>,
    animator: Animator,
}

impl Skinnable {
    /// Creates a skinnable for a control of class `control_type`, without a skin.
    #[must_use]
    pub fn new(control_type: ControlType) -> Self {
        Self {
            control_type,
            hints: HintTable::new(),
            skin: None,
            state: State::empty(),
            skinlet: None,
            animator: Animator::new(),
        }
    }

    /// Creates a skinnable using `skin`.
    #[must_use]
    pub fn with_skin(control_type: ControlType, skin: Skin) -> Self {
        let mut skinnable = Self::new(control_type);
        skinnable.skin = Some(skin);
        skinnable
    }

    /// Returns the class used for default skinlet lookup.
    #[must_use]
    #[inline]
    pub fn control_type(&self) -> ControlType {
        self.control_type
    }

    // --- Skin ---

    /// Returns the skin snapshot in use.
    #[must_use]
    #[inline]
    pub fn skin(&self) -> Option<&Skin> {
        self.skin.as_ref()
    }

    /// Replaces the skin snapshot.
    pub fn set_skin(&mut self, skin: Option<Skin>) {
        log::debug!(
            "{}: skin {:?} -> {:?}",
            self.control_type,
            self.skin.as_ref().map(Skin::name),
            skin.as_ref().map(Skin::name)
        );
        self.skin = skin;
    }

    // --- Local hint table ---

    /// Returns the local hint table.
    #[must_use]
    #[inline]
    pub fn hint_table(&self) -> &HintTable {
        &self.hints
    }

    /// Returns the local hint table for bulk edits.
    #[inline]
    pub fn hint_table_mut(&mut self) -> &mut HintTable {
        &mut self.hints
    }

    /// Sets a local hint, returning the previous local value.
    pub fn set_hint(&mut self, aspect: Aspect, value: impl Into<Hint>) -> Option<Hint> {
        self.hints.set_hint(aspect, value)
    }

    /// Removes a local hint, reporting whether one existed.
    pub fn reset_hint(&mut self, aspect: Aspect) -> bool {
        self.hints.reset_hint(aspect)
    }

    /// Returns the local hint stored for exactly `aspect`.
    #[must_use]
    pub fn hint(&self, aspect: Aspect) -> Option<&Hint> {
        self.hints.hint(aspect)
    }

    // --- Resolution ---

    /// Resolves `aspect` against the local table and the skin, ignoring
    /// running transitions.
    #[must_use]
    pub fn stored_hint(&self, aspect: Aspect) -> Option<(&Hint, HintStatus)> {
        self.stored_hint_in(aspect, self.state)
    }

    fn stored_hint_in(&self, aspect: Aspect, state: State) -> Option<(&Hint, HintStatus)> {
        resolve_hint(
            Some(&self.hints),
            self.skin.as_ref().map(Skin::hints),
            aspect,
            state,
        )
    }

    /// Resolves `aspect` to its effective value and provenance.
    ///
    /// For unresolved aspects a running transition takes precedence over
    /// the hint tables.
    #[must_use]
    pub fn effective_hint_with_status(&self, aspect: Aspect) -> Option<(Hint, HintStatus)> {
        if !aspect.is_resolved()
            && let Some(value) = self.animator.value(aspect)
        {
            let status = HintStatus {
                source: HintSource::Animator,
                aspect: aspect.with_state(self.state),
            };
            return Some((value, status));
        }
        self.stored_hint(aspect)
            .map(|(hint, status)| (hint.clone(), status))
    }

    /// Resolves `aspect` to its effective value.
    #[must_use]
    pub fn effective_hint(&self, aspect: Aspect) -> Option<Hint> {
        self.effective_hint_with_status(aspect).map(|(hint, _)| hint)
    }

    fn typed<T>(&self, aspect: Aspect, extract: impl FnOnce(&Hint) -> Option<T>) -> Option<T> {
        self.effective_hint(aspect).as_ref().and_then(extract)
    }

    // --- Typed accessors ---

    /// Returns the color for `aspect`, or transparent.
    #[must_use]
    pub fn color(&self, aspect: Aspect) -> Color {
        self.typed(aspect, Hint::as_color)
            .unwrap_or(Color::TRANSPARENT)
    }

    /// Returns the metric for `aspect`, or `0.0`.
    #[must_use]
    pub fn metric(&self, aspect: Aspect) -> f64 {
        self.typed(aspect, Hint::as_metric).unwrap_or(0.0)
    }

    /// Returns the flag for `aspect`, or `0`.
    #[must_use]
    pub fn flag(&self, aspect: Aspect) -> u32 {
        self.typed(aspect, Hint::as_flag).unwrap_or(0)
    }

    /// Returns the strut size of `subcontrol`, or zero.
    #[must_use]
    pub fn strut_size_hint(&self, subcontrol: Subcontrol) -> Size {
        self.typed(subcontrol.aspect(Primitive::Size), Hint::as_size)
            .unwrap_or(Size::ZERO)
    }

    /// Returns the margins of `subcontrol`, or zero.
    #[must_use]
    pub fn margin_hint(&self, subcontrol: Subcontrol) -> Insets {
        self.typed(subcontrol.aspect(Primitive::Margin), Hint::as_margins)
            .unwrap_or(Insets::ZERO)
    }

    /// Returns the padding of `subcontrol`, or zero.
    #[must_use]
    pub fn padding_hint(&self, subcontrol: Subcontrol) -> Insets {
        self.typed(subcontrol.aspect(Primitive::Padding), Hint::as_margins)
            .unwrap_or(Insets::ZERO)
    }

    /// Returns the fill of `subcontrol` as a brush, or a transparent brush.
    ///
    /// Color hints become solid brushes.
    #[must_use]
    pub fn gradient_hint(&self, subcontrol: Subcontrol) -> Brush {
        self.typed(subcontrol.aspect(Primitive::Fill), Hint::as_brush)
            .unwrap_or(Brush::Solid(Color::TRANSPARENT))
    }

    /// Returns the corner radii of `subcontrol`, or square corners.
    #[must_use]
    pub fn box_shape_hint(&self, subcontrol: Subcontrol) -> RoundedRectRadii {
        self.typed(subcontrol.aspect(Primitive::Shape), Hint::as_shape)
            .unwrap_or(RoundedRectRadii::from_single_radius(0.0))
    }

    /// Returns the border widths of `subcontrol`, or zero.
    #[must_use]
    pub fn box_border_metrics_hint(&self, subcontrol: Subcontrol) -> Insets {
        self.typed(subcontrol.aspect(Primitive::Border), Hint::as_margins)
            .unwrap_or(Insets::ZERO)
    }

    /// Returns the border colors of `subcontrol`, or transparent.
    #[must_use]
    pub fn box_border_colors_hint(&self, subcontrol: Subcontrol) -> BoxBorderColors {
        self.typed(
            subcontrol.aspect(Primitive::BorderColor),
            Hint::as_border_colors,
        )
        .unwrap_or_default()
    }

    /// Returns the spacing of `subcontrol`, or `0.0`.
    #[must_use]
    pub fn spacing_hint(&self, subcontrol: Subcontrol) -> f64 {
        self.typed(subcontrol.aspect(Primitive::Spacing), Hint::as_metric)
            .unwrap_or(0.0)
    }

    /// Returns the alignment of `subcontrol`, or `default`.
    #[must_use]
    pub fn alignment_hint(&self, subcontrol: Subcontrol, default: Alignment) -> Alignment {
        self.typed(subcontrol.aspect(Primitive::Alignment), Hint::as_alignment)
            .unwrap_or(default)
    }

    /// Returns the font role of `subcontrol`, or [`FontRole::DEFAULT`].
    #[must_use]
    pub fn font_role_hint(&self, subcontrol: Subcontrol) -> FontRole {
        self.typed(subcontrol.aspect(Primitive::FontRole), Hint::as_font_role)
            .unwrap_or(FontRole::DEFAULT)
    }

    /// Returns the graphic role of `subcontrol`, or [`GraphicRole::NONE`].
    #[must_use]
    pub fn graphic_role_hint(&self, subcontrol: Subcontrol) -> GraphicRole {
        self.typed(
            subcontrol.aspect(Primitive::GraphicRole),
            Hint::as_graphic_role,
        )
        .unwrap_or(GraphicRole::NONE)
    }

    /// Returns the font for `subcontrol`'s font role.
    ///
    /// Without a skin this is [`Font::default`].
    #[must_use]
    pub fn effective_font(&self, subcontrol: Subcontrol) -> Font {
        let role = self.font_role_hint(subcontrol);
        self.skin
            .as_ref()
            .map(|skin| skin.font(role).clone())
            .unwrap_or_default()
    }

    /// Returns the skin's graphic filter for `role`, or the identity filter.
    #[must_use]
    pub fn effective_graphic_filter(&self, role: GraphicRole) -> GraphicFilter {
        self.skin
            .as_ref()
            .and_then(|skin| skin.graphic_filter(role))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the animation hint for `category` transitions of `subcontrol`
    /// into `state`.
    ///
    /// Returns a zero-duration hint when none is configured.
    #[must_use]
    pub fn effective_animation(
        &self,
        category: Category,
        subcontrol: Subcontrol,
        state: State,
    ) -> AnimationHint {
        self.stored_hint_in(Aspect::animator(subcontrol, category), state)
            .and_then(|(hint, _)| hint.as_animation())
            .unwrap_or_default()
    }

    // --- Typed setters ---

    /// Sets a local color hint.
    pub fn set_color(&mut self, aspect: Aspect, color: Color) {
        self.hints.set_hint(aspect, color);
    }

    /// Sets a local metric hint.
    pub fn set_metric(&mut self, aspect: Aspect, metric: f64) {
        self.hints.set_hint(aspect, metric);
    }

    /// Sets a local flag hint.
    pub fn set_flag(&mut self, aspect: Aspect, flag: u32) {
        self.hints.set_hint(aspect, flag);
    }

    /// Sets the local strut size of `subcontrol`.
    pub fn set_strut_size_hint(&mut self, subcontrol: Subcontrol, size: Size) {
        self.hints.set_hint(subcontrol.aspect(Primitive::Size), size);
    }

    /// Sets the local margins of `subcontrol`.
    pub fn set_margin_hint(&mut self, subcontrol: Subcontrol, margins: Insets) {
        self.hints.set_hint(subcontrol.aspect(Primitive::Margin), margins);
    }

    /// Sets the local padding of `subcontrol`.
    pub fn set_padding_hint(&mut self, subcontrol: Subcontrol, padding: Insets) {
        self.hints.set_hint(subcontrol.aspect(Primitive::Padding), padding);
    }

    /// Sets the local gradient fill of `subcontrol`.
    pub fn set_gradient_hint(&mut self, subcontrol: Subcontrol, gradient: Gradient) {
        self.hints.set_hint(subcontrol.aspect(Primitive::Fill), gradient);
    }

    /// Sets the local corner radii of `subcontrol`.
    pub fn set_box_shape_hint(&mut self, subcontrol: Subcontrol, shape: RoundedRectRadii) {
        self.hints.set_hint(subcontrol.aspect(Primitive::Shape), shape);
    }

    /// Sets the local border widths of `subcontrol`.
    pub fn set_box_border_metrics_hint(&mut self, subcontrol: Subcontrol, border: Insets) {
        self.hints.set_hint(subcontrol.aspect(Primitive::Border), border);
    }

    /// Sets the local border colors of `subcontrol`.
    pub fn set_box_border_colors_hint(&mut self, subcontrol: Subcontrol, colors: BoxBorderColors) {
        self.hints
            .set_hint(subcontrol.aspect(Primitive::BorderColor), colors);
    }

    /// Sets the local spacing of `subcontrol`.
    pub fn set_spacing_hint(&mut self, subcontrol: Subcontrol, spacing: f64) {
        self.hints
            .set_hint(subcontrol.aspect(Primitive::Spacing), spacing);
    }

    /// Sets the local alignment of `subcontrol`.
    pub fn set_alignment_hint(&mut self, subcontrol: Subcontrol, alignment: Alignment) {
        self.hints
            .set_hint(subcontrol.aspect(Primitive::Alignment), alignment);
    }

    /// Sets the local font role of `subcontrol`.
    pub fn set_font_role_hint(&mut self, subcontrol: Subcontrol, role: FontRole) {
        self.hints.set_hint(subcontrol.aspect(Primitive::FontRole), role);
    }

    /// Sets the local graphic role of `subcontrol`.
    pub fn set_graphic_role_hint(&mut self, subcontrol: Subcontrol, role: GraphicRole) {
        self.hints
            .set_hint(subcontrol.aspect(Primitive::GraphicRole), role);
    }

    /// Sets the local animation hint for `category` transitions of
    /// `subcontrol` into `state` (empty for any state).
    pub fn set_animation_hint(
        &mut self,
        category: Category,
        subcontrol: Subcontrol,
        state: State,
        animation: AnimationHint,
    ) {
        self.hints.set_hint(
            Aspect::animator(subcontrol, category).with_state(state),
            animation,
        );
    }

    // --- Box geometry ---

    /// Returns padding plus border widths of `subcontrol`.
    #[must_use]
    pub fn inner_padding(&self, subcontrol: Subcontrol) -> Insets {
        let padding = self.padding_hint(subcontrol);
        let border = self.box_border_metrics_hint(subcontrol);
        Insets::new(
            padding.x0 + border.x0,
            padding.y0 + border.y0,
            padding.x1 + border.x1,
            padding.y1 + border.y1,
        )
    }

    /// Returns the content box of `subcontrol` inside `outer`.
    #[must_use]
    pub fn inner_box(&self, subcontrol: Subcontrol, outer: Rect) -> Rect {
        outer - self.inner_padding(subcontrol)
    }

    /// Returns the outer size of `subcontrol` around content of size `inner`.
    #[must_use]
    pub fn outer_box_size(&self, subcontrol: Subcontrol, inner: Size) -> Size {
        let padding = self.inner_padding(subcontrol);
        Size::new(
            inner.width + padding.x_value(),
            inner.height + padding.y_value(),
        )
    }

    // --- State ---

    /// Returns the current skin state.
    #[must_use]
    #[inline]
    pub fn skin_state(&self) -> State {
        self.state
    }

    /// Returns `true` if all bits of `flag` are set.
    #[must_use]
    #[inline]
    pub fn has_skin_state(&self, flag: State) -> bool {
        self.state.contains(flag)
    }

    /// Replaces the skin state.
    ///
    /// With `animated`, hints whose effective value changes and that have an
    /// animation hint start a transition. Without it, running transitions are
    /// stopped so the new state shows immediately. Returns `true` if the state
    /// changed.
    ///
    /// Every transition is accepted here. Controls that veto transitions
    /// through [`SkinnableObject::is_transition_accepted`] change state with
    /// [`SkinnableObject::set_skin_state`] instead.
    pub fn set_skin_state(&mut self, state: State, animated: bool) -> bool {
        if state == self.state {
            return false;
        }
        if animated {
            let transitions = self.plan_transitions(self.state, state, |_| true);
            self.apply_skin_state(state, transitions);
        } else {
            self.animator.clear();
            self.apply_skin_state(state, Vec::new());
        }
        true
    }

    /// Sets or clears `flag` and applies the result with [`Skinnable::set_skin_state`].
    pub fn set_skin_state_flag(&mut self, flag: State, on: bool, animated: bool) -> bool {
        let mut state = self.state;
        state.set(flag, on);
        self.set_skin_state(state, animated)
    }

    /// Computes the transitions a change from `old` to `new` would start.
    ///
    /// Candidates are the state-stripped keys of the local and skin tables.
    /// Keys of [`Subcontrol::CONTROL`] are also tried for every other
    /// subcontrol named in either table, since those inherit them. A candidate
    /// yields a transition when it has a non-zero animation hint for `new`,
    /// its value under `new` differs from the value currently shown, and
    /// `accept` returns `true`. The result is ordered by aspect.
    pub fn plan_transitions(
        &self,
        old: State,
        new: State,
        mut accept: impl FnMut(Aspect) -> bool,
    ) -> Vec<Transition> {
        let mut candidates = BTreeSet::new();
        let mut subcontrols = BTreeSet::new();
        self.hints.collect_unresolved(&mut candidates);
        self.hints.collect_subcontrols(&mut subcontrols);
        if let Some(skin) = &self.skin {
            skin.hints().collect_unresolved(&mut candidates);
            skin.hints().collect_subcontrols(&mut subcontrols);
        }
        let inherited: Vec<Aspect> = candidates
            .iter()
            .filter(|aspect| aspect.subcontrol() == Subcontrol::CONTROL)
            .flat_map(|aspect| {
                subcontrols
                    .iter()
                    .map(move |subcontrol| aspect.with_subcontrol(*subcontrol))
            })
            .collect();
        candidates.extend(inherited);

        let mut transitions = Vec::new();
        for aspect in candidates {
            let animation = self.effective_animation(aspect.category(), aspect.subcontrol(), new);
            if !animation.is_valid() {
                continue;
            }
            let from = match self.animator.value(aspect) {
                Some(value) => value,
                None => match self.stored_hint_in(aspect, old) {
                    Some((hint, _)) => hint.clone(),
                    None => continue,
                },
            };
            let Some((to, _)) = self.stored_hint_in(aspect, new) else {
                continue;
            };
            if from == *to || !accept(aspect) {
                continue;
            }
            transitions.push(Transition::new(aspect, from, to.clone(), animation));
        }
        transitions
    }

    /// Sets the state and starts `transitions`.
    ///
    /// This is the second half of a state change planned with
    /// [`Skinnable::plan_transitions`]. Running transitions that `transitions`
    /// does not restart are stopped, so no value keeps heading to a target of
    /// a state that was left.
    pub fn apply_skin_state(&mut self, state: State, transitions: Vec<Transition>) {
        log::debug!(
            "{}: state {} -> {} ({} transitions)",
            self.control_type,
            printable(self.state),
            printable(state),
            transitions.len()
        );
        self.state = state;
        self.animator
            .retain(|running| transitions.iter().any(|t| t.aspect() == running.aspect()));
        for transition in transitions {
            self.animator.start(transition);
        }
    }

    /// Returns the animator holding running transitions.
    #[must_use]
    #[inline]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Advances running transitions by `dt`.
    ///
    /// Returns `true` while any transition is still running.
    pub fn advance_transitions(&mut self, dt: Duration) -> bool {
        self.animator.advance(dt)
    }

    /// Stops all running transitions.
    pub fn stop_transitions(&mut self) {
        self.animator.clear();
    }

    // --- Skinlet ---

    /// Installs a per-instance skinlet, or reverts to the skin default with `None`.
    ///
    /// The previous slot is dropped; an owned skinlet is destroyed with it.
    pub fn set_skinlet(&mut self, skinlet: Option<SkinletSlot>) {
        log::debug!(
            "{}: skinlet override {} -> {}",
            self.control_type,
            slot_kind(self.skinlet.as_ref()),
            slot_kind(skinlet.as_ref())
        );
        self.skinlet = skinlet;
    }

    /// Returns the per-instance skinlet, if one is installed.
    #[must_use]
    pub fn skinlet(&self) -> Option<&dyn Skinlet> {
        self.skinlet.as_ref().map(SkinletSlot::skinlet)
    }

    /// Returns the per-instance skinlet slot.
    #[must_use]
    pub fn skinlet_slot(&self) -> Option<&SkinletSlot> {
        self.skinlet.as_ref()
    }

    /// Returns the per-instance skinlet, or the skin's default for the
    /// control type.
    #[must_use]
    pub fn effective_skinlet(&self) -> Option<&dyn Skinlet> {
        if let Some(slot) = &self.skinlet {
            return Some(slot.skinlet());
        }
        self.skin
            .as_ref()
            .and_then(|skin| skin.skinlet_for(&self.control_type))
            .map(|skinlet| &**skinlet)
    }

    /// Returns the rectangle of `subcontrol` within `contents_rect`.
    ///
    /// Without a skinlet this is [`Rect::ZERO`].
    #[must_use]
    pub fn subcontrol_rect(&self, contents_rect: Rect, subcontrol: Subcontrol) -> Rect {
        self.effective_skinlet().map_or(Rect::ZERO, |skinlet| {
            skinlet.subcontrol_rect(self, contents_rect, subcontrol)
        })
    }

    /// Returns the skinlet's preferred size under `constraint`.
    #[must_use]
    pub fn size_hint(&self, constraint: Size) -> Size {
        self.effective_skinlet()
            .map_or(Size::ZERO, |skinlet| skinlet.size_hint(self, constraint))
    }

    // --- Diagnostics ---

    /// Returns the current state as text, e.g. `HOVERED | PRESSED`.
    #[must_use]
    pub fn skin_state_as_printable(&self) -> String {
        printable(self.state)
    }

    /// Describes how `aspect` resolves.
    #[must_use]
    pub fn describe_hint(&self, aspect: Aspect) -> String {
        match self.effective_hint_with_status(aspect) {
            Some((hint, status)) => format!("{aspect}: {hint:?} from {status}"),
            None => format!("{aspect}: not found"),
        }
    }

    /// Logs how `aspect` resolves at debug level.
    pub fn debug(&self, aspect: Aspect) {
        log::debug!("{}: {}", self.control_type, self.describe_hint(aspect));
    }
}

fn printable(state: State) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = aspect::write_state(&mut out, state);
    out
}

fn slot_kind(slot: Option<&SkinletSlot>) -> &'static str {
    match slot {
        None => "default",
        Some(SkinletSlot::Owned(_)) => "owned",
        Some(SkinletSlot::Shared(_)) => "shared",
    }
}

/// An object carrying a [`Skinnable`].
///
/// Usually this is the control itself; a control styling several parts
/// independently may aggregate several skinnable objects.
pub trait SkinnableObject {
    /// Returns the skinnable.
    fn skinnable(&self) -> &Skinnable;

    /// Returns the skinnable mutably.
    fn skinnable_mut(&mut self) -> &mut Skinnable;

    /// Returns the control this skinnable belongs to.
    fn owning_control(&self) -> Option<&dyn Control>;

    /// Returns `false` to suppress the transition of `aspect` on a state change.
    fn is_transition_accepted(&self, aspect: Aspect) -> bool {
        let _ = aspect;
        true
    }

    /// Returns the owning control's contents rectangle, or [`Rect::ZERO`].
    fn owner_contents_rect(&self) -> Rect {
        self.owning_control()
            .map_or(Rect::ZERO, |control| control.contents_rect())
    }

    /// Produces or updates the paint node.
    ///
    /// The default delegates to the effective skinlet.
    fn update_node(&self, node: Option<SkinNode>) -> Option<SkinNode> {
        let skinnable = self.skinnable();
        skinnable
            .effective_skinlet()?
            .update_node(skinnable, self.owner_contents_rect(), node)
    }

    /// Returns the rectangle of `subcontrol` within the contents rectangle.
    fn subcontrol_rect(&self, subcontrol: Subcontrol) -> Rect {
        self.skinnable()
            .subcontrol_rect(self.owner_contents_rect(), subcontrol)
    }

    /// Returns the content box of `subcontrol`: its rectangle minus padding
    /// and border.
    fn subcontrol_contents_rect(&self, subcontrol: Subcontrol) -> Rect {
        self.skinnable()
            .inner_box(subcontrol, self.subcontrol_rect(subcontrol))
    }

    /// Replaces the skin state, consulting [`SkinnableObject::is_transition_accepted`]
    /// for every transition.
    fn set_skin_state(&mut self, state: State, animated: bool) -> bool {
        let old = self.skinnable().skin_state();
        if old == state {
            return false;
        }
        if !animated {
            return self.skinnable_mut().set_skin_state(state, false);
        }
        let transitions = self
            .skinnable()
            .plan_transitions(old, state, |aspect| self.is_transition_accepted(aspect));
        self.skinnable_mut().apply_skin_state(state, transitions);
        true
    }

    /// Sets or clears `flag` and applies the result with
    /// [`SkinnableObject::set_skin_state`].
    fn set_skin_state_flag(&mut self, flag: State, on: bool, animated: bool) -> bool {
        let mut state = self.skinnable().skin_state();
        state.set(flag, on);
        self.set_skin_state(state, animated)
    }

    /// Returns the owning control as `C`, or `None` if it is of another type.
    fn control_cast<C: ControlKind>(&self) -> Option<&C>
    where
        Self: Sized,
    {
        cast_control(self.owning_control()?)
    }
}
