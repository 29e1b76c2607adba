// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_skin` crate.
//!
//! These exercise a skinnable embedded in small controls: resolution through
//! local and skin tables, state changes with and without transitions,
//! skinlet delegation and typed control casts.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Insets, Rect, Size};
use peniko::{Brush, Color};
use understory_skin::{
    AnimationHint, Aspect, BoxSkinlet, Category, Control, ControlKind, ControlType, HintSource,
    Primitive, Skin, SkinBuilder, SkinNode, Skinlet, SkinletSlot, Skinnable, SkinnableObject,
    State, Subcontrol, cast_control,
};

const PANEL: Subcontrol = Subcontrol::new(1);
const TEXT: Subcontrol = Subcontrol::new(2);

fn red() -> Color {
    Color::from_rgba8(255, 0, 0, 255)
}

fn blue() -> Color {
    Color::from_rgba8(0, 0, 255, 255)
}

fn fill() -> Aspect {
    PANEL.aspect(Primitive::Fill)
}

struct Button {
    rect: Rect,
    skinnable: Skinnable,
    animate_fill: bool,
}

impl Button {
    fn new(skin: Skin) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, 100.0, 40.0),
            skinnable: Skinnable::with_skin(Self::TYPE, skin),
            animate_fill: true,
        }
    }
}

impl Control for Button {
    fn control_type(&self) -> ControlType {
        Self::TYPE
    }

    fn contents_rect(&self) -> Rect {
        self.rect
    }
}

impl ControlKind for Button {
    const TYPE: ControlType = ControlType::derived("Button", &ControlType::CONTROL);
}

impl SkinnableObject for Button {
    fn skinnable(&self) -> &Skinnable {
        &self.skinnable
    }

    fn skinnable_mut(&mut self) -> &mut Skinnable {
        &mut self.skinnable
    }

    fn owning_control(&self) -> Option<&dyn Control> {
        Some(self)
    }

    fn is_transition_accepted(&self, aspect: Aspect) -> bool {
        self.animate_fill || aspect.primitive() != Primitive::Fill
    }
}

struct PushButton;

impl Control for PushButton {
    fn control_type(&self) -> ControlType {
        Self::TYPE
    }

    fn contents_rect(&self) -> Rect {
        Rect::ZERO
    }
}

impl ControlKind for PushButton {
    const TYPE: ControlType = ControlType::derived("PushButton", &Button::TYPE);
}

/// A part without an owning control.
struct Detached(Skinnable);

impl SkinnableObject for Detached {
    fn skinnable(&self) -> &Skinnable {
        &self.0
    }

    fn skinnable_mut(&mut self) -> &mut Skinnable {
        &mut self.0
    }

    fn owning_control(&self) -> Option<&dyn Control> {
        None
    }
}

fn animated_skin() -> Skin {
    SkinBuilder::new("animated")
        .hint(fill(), blue())
        .hint(fill().with_state(State::PRESSED), red())
        .hint(PANEL.aspect(Primitive::Spacing), 4.0)
        .hint(PANEL.aspect(Primitive::Spacing).with_state(State::PRESSED), 8.0)
        .hint(
            Aspect::animator(PANEL, Category::Color),
            AnimationHint::new(Duration::from_millis(100)),
        )
        .build()
}

#[test]
fn missing_hints_resolve_to_typed_defaults() {
    let button = Button::new(SkinBuilder::new("empty").build());
    let skinnable = button.skinnable();
    assert!(skinnable.effective_hint(fill()).is_none());
    assert_eq!(skinnable.color(fill()), Color::TRANSPARENT);
    assert_eq!(skinnable.metric(PANEL.aspect(Primitive::Spacing)), 0.0);
    assert_eq!(skinnable.margin_hint(PANEL), Insets::ZERO);
    assert_eq!(skinnable.strut_size_hint(PANEL), Size::ZERO);
}

#[test]
fn pressed_entry_applies_only_while_pressed() {
    let skin = SkinBuilder::new("s").hint(fill(), blue()).build();
    let mut button = Button::new(skin);
    button
        .skinnable_mut()
        .set_color(fill().with_state(State::PRESSED), red());

    assert_eq!(button.skinnable().color(fill()), blue());
    assert!(button.set_skin_state(State::PRESSED, false));
    assert_eq!(button.skinnable().color(fill()), red());
    assert!(button.set_skin_state(State::empty(), false));
    assert_eq!(button.skinnable().color(fill()), blue());
}

#[test]
fn local_value_shadows_skin_and_reset_restores_it() {
    let skin = SkinBuilder::new("s").hint(fill(), blue()).build();
    let mut button = Button::new(skin);
    let skinnable = button.skinnable_mut();

    skinnable.set_color(fill(), red());
    let (_, status) = skinnable.effective_hint_with_status(fill()).unwrap();
    assert_eq!(status.source, HintSource::Local);
    assert_eq!(skinnable.color(fill()), red());

    assert!(skinnable.reset_hint(fill()));
    assert!(!skinnable.reset_hint(fill()));
    assert_eq!(skinnable.color(fill()), blue());
}

#[test]
fn non_animated_state_change_starts_no_transition() {
    let mut button = Button::new(animated_skin());
    button.set_skin_state(State::PRESSED, false);
    assert!(button.skinnable().animator().is_idle());
    assert_eq!(button.skinnable().color(fill()), red());
}

#[test]
fn animated_state_change_starts_one_transition_per_animated_change() {
    let mut button = Button::new(animated_skin());
    assert!(button.set_skin_state(State::PRESSED, true));

    // Spacing changes too but has no metric animation hint.
    let transitions = button.skinnable().animator().transitions();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].aspect(), fill());
    assert_eq!(button.skinnable().metric(PANEL.aspect(Primitive::Spacing)), 8.0);
}

#[test]
fn transition_value_wins_until_finished() {
    let mut button = Button::new(animated_skin());
    button.set_skin_state(State::PRESSED, true);

    let skinnable = button.skinnable_mut();
    assert!(skinnable.advance_transitions(Duration::from_millis(50)));
    let (value, status) = skinnable.effective_hint_with_status(fill()).unwrap();
    assert_eq!(status.source, HintSource::Animator);
    let color = value.as_color().unwrap();
    assert_ne!(color, red());
    assert_ne!(color, blue());

    assert!(!skinnable.advance_transitions(Duration::from_millis(50)));
    let (_, status) = skinnable.effective_hint_with_status(fill()).unwrap();
    assert_eq!(status.source, HintSource::Skin);
    assert_eq!(skinnable.color(fill()), red());
}

#[test]
fn explicit_state_lookup_ignores_running_transition() {
    let mut button = Button::new(animated_skin());
    button.set_skin_state(State::PRESSED, true);
    let skinnable = button.skinnable();
    assert_eq!(skinnable.color(fill().with_state(State::PRESSED)), red());
}

#[test]
fn unchanged_values_do_not_animate() {
    let skin = SkinBuilder::new("flat")
        .hint(fill(), blue())
        .hint(
            Aspect::animator(PANEL, Category::Color),
            AnimationHint::new(Duration::from_millis(100)),
        )
        .build();
    let mut button = Button::new(skin);
    button.set_skin_state(State::HOVERED, true);
    assert!(button.skinnable().animator().is_idle());
}

#[test]
fn rejected_transitions_are_skipped() {
    let mut button = Button::new(animated_skin());
    button.animate_fill = false;
    assert!(button.set_skin_state(State::PRESSED, true));
    assert!(button.skinnable().animator().is_idle());
    assert_eq!(button.skinnable().color(fill()), red());
}

#[test]
fn non_animated_change_stops_running_transitions() {
    let mut button = Button::new(animated_skin());
    button.set_skin_state(State::PRESSED, true);
    assert!(!button.skinnable().animator().is_idle());
    button.set_skin_state(State::empty(), false);
    assert!(button.skinnable().animator().is_idle());
    assert_eq!(button.skinnable().color(fill()), blue());
}

#[test]
fn leaving_a_state_without_animation_hint_stops_its_transition() {
    // Only the hovered state animates colors.
    let skin = SkinBuilder::new("hover-only")
        .hint(fill(), blue())
        .hint(fill().with_state(State::HOVERED), red())
        .hint(
            Aspect::animator(PANEL, Category::Color).with_state(State::HOVERED),
            AnimationHint::new(Duration::from_millis(100)),
        )
        .build();
    let mut button = Button::new(skin);
    button.set_skin_state(State::HOVERED, true);
    button
        .skinnable_mut()
        .advance_transitions(Duration::from_millis(50));
    assert!(!button.skinnable().animator().is_idle());

    button.set_skin_state(State::empty(), true);
    assert!(button.skinnable().animator().is_idle());
    button
        .skinnable_mut()
        .advance_transitions(Duration::from_millis(40));
    let (_, status) = button.skinnable().effective_hint_with_status(fill()).unwrap();
    assert_eq!(status.source, HintSource::Skin);
    assert_eq!(button.skinnable().color(fill()), blue());
}

#[test]
fn leaving_a_state_rejected_by_the_control_stops_its_transition() {
    let mut button = Button::new(animated_skin());
    button.set_skin_state(State::PRESSED, true);
    button
        .skinnable_mut()
        .advance_transitions(Duration::from_millis(50));

    button.animate_fill = false;
    button.set_skin_state(State::empty(), true);
    assert!(button.skinnable().animator().is_idle());
    assert_eq!(button.skinnable().color(fill()), blue());
}

#[test]
fn interrupted_transition_continues_from_current_value() {
    let mut button = Button::new(animated_skin());
    button.set_skin_state(State::PRESSED, true);
    button
        .skinnable_mut()
        .advance_transitions(Duration::from_millis(50));
    let midway = button.skinnable().color(fill());

    button.set_skin_state(State::empty(), true);
    let transitions = button.skinnable().animator().transitions();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].from().as_color(), Some(midway));
    assert_eq!(transitions[0].to().as_color(), Some(blue()));
    assert_eq!(button.skinnable().color(fill()), midway);
}

#[test]
fn subcontrol_inheriting_from_control_animates() {
    let control_fill = Subcontrol::CONTROL.aspect(Primitive::Fill);
    let skin = SkinBuilder::new("inherited")
        .hint(control_fill, blue())
        .hint(control_fill.with_state(State::PRESSED), red())
        .hint(
            Aspect::animator(PANEL, Category::Color),
            AnimationHint::new(Duration::from_millis(100)),
        )
        .build();
    let mut button = Button::new(skin);
    button.set_skin_state(State::PRESSED, true);

    let transitions = button.skinnable().animator().transitions();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].aspect(), fill());
    // The whole control has no animation hint and switches at once.
    assert_eq!(button.skinnable().color(control_fill), red());

    button
        .skinnable_mut()
        .advance_transitions(Duration::from_millis(50));
    let (_, status) = button.skinnable().effective_hint_with_status(fill()).unwrap();
    assert_eq!(status.source, HintSource::Animator);
    button
        .skinnable_mut()
        .advance_transitions(Duration::from_millis(50));
    assert_eq!(button.skinnable().color(fill()), red());
}

#[test]
fn plain_skinnable_state_change_skips_the_control_filter() {
    let mut button = Button::new(animated_skin());
    button.animate_fill = false;

    // The skinnable itself knows nothing about the owning control.
    button
        .skinnable_mut()
        .set_skin_state(State::PRESSED, true);
    assert_eq!(button.skinnable().animator().transitions().len(), 1);

    button.set_skin_state(State::empty(), true);
    assert!(button.skinnable().animator().is_idle());
}

#[test]
fn same_state_is_a_no_op() {
    let mut button = Button::new(animated_skin());
    assert!(!button.set_skin_state(State::empty(), true));
    assert!(button.set_skin_state_flag(State::HOVERED, true, false));
    assert!(!button.set_skin_state_flag(State::HOVERED, true, true));
    assert!(button.skinnable().animator().is_idle());
}

#[test]
fn control_cast_checks_tag_and_concrete_type() {
    let button = Button::new(SkinBuilder::new("s").build());
    assert!(button.control_cast::<Button>().is_some());
    assert!(button.control_cast::<PushButton>().is_none());

    let detached = Detached(Skinnable::new(ControlType::CONTROL));
    assert!(detached.control_cast::<Button>().is_none());

    // The tag matches the `Button` family, but the concrete type does not.
    let push = PushButton;
    assert!(cast_control::<PushButton>(&push).is_some());
    assert!(cast_control::<Button>(&push).is_none());
}

#[test]
fn skin_default_skinlet_is_found_through_ancestry() {
    let skin = SkinBuilder::new("s")
        .hint(fill(), blue())
        .hint(PANEL.aspect(Primitive::Margin), 2.0)
        .skinlet(ControlType::CONTROL, Rc::new(BoxSkinlet::new([PANEL])))
        .build();
    let button = Button::new(skin);

    assert_eq!(
        button.subcontrol_rect(PANEL),
        Rect::new(2.0, 2.0, 98.0, 38.0)
    );
    let node = button.update_node(None).unwrap();
    assert_eq!(node.subcontrol, PANEL);
    assert_eq!(node.fill, Brush::Solid(blue()));
}

#[test]
fn without_skinlet_nothing_is_painted() {
    let button = Button::new(SkinBuilder::new("s").build());
    assert!(button.update_node(None).is_none());
    assert_eq!(button.subcontrol_rect(PANEL), Rect::ZERO);
}

#[test]
fn box_skinlet_builds_children_and_reuses_root() {
    let mut button = Button::new(SkinBuilder::new("s").build());
    let skinnable = button.skinnable_mut();
    skinnable.set_skinlet(Some(SkinletSlot::owned(BoxSkinlet::new([PANEL, TEXT]))));
    skinnable.set_color(fill(), blue());
    skinnable.set_color(TEXT.aspect(Primitive::Fill), red());
    skinnable.set_padding_hint(TEXT, Insets::uniform(5.0));

    let node = button.update_node(None).unwrap();
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.child(TEXT).unwrap().fill, Brush::Solid(red()));

    button.skinnable_mut().set_color(fill(), red());
    let node = button.update_node(Some(node)).unwrap();
    assert_eq!(node.fill, Brush::Solid(red()));
    assert_eq!(
        button.subcontrol_contents_rect(TEXT),
        Rect::new(5.0, 5.0, 95.0, 35.0)
    );
}

#[test]
fn detached_part_uses_empty_contents_rect() {
    let mut detached = Detached(Skinnable::new(ControlType::CONTROL));
    detached
        .skinnable_mut()
        .set_skinlet(Some(SkinletSlot::owned(BoxSkinlet::new([PANEL]))));
    let node = detached.update_node(None).unwrap();
    assert_eq!(node.rect, Rect::ZERO);
}

#[derive(Debug)]
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

impl Skinlet for DropCounter {
    fn subcontrol_rect(&self, _: &Skinnable, contents_rect: Rect, _: Subcontrol) -> Rect {
        contents_rect
    }

    fn update_node(&self, _: &Skinnable, _: Rect, node: Option<SkinNode>) -> Option<SkinNode> {
        node
    }
}

#[test]
fn owned_skinlet_is_dropped_on_replacement() {
    let drops = Rc::new(Cell::new(0));
    let mut skinnable = Skinnable::new(ControlType::CONTROL);
    skinnable.set_skinlet(Some(SkinletSlot::owned(DropCounter(drops.clone()))));
    assert!(skinnable.skinlet_slot().unwrap().is_owned());
    skinnable.set_skinlet(None);
    assert_eq!(drops.get(), 1);
}

#[test]
fn shared_skinlet_survives_replacement() {
    let drops = Rc::new(Cell::new(0));
    let shared: Rc<dyn Skinlet> = Rc::new(DropCounter(drops.clone()));

    let mut first = Skinnable::new(ControlType::CONTROL);
    let mut second = Skinnable::new(ControlType::CONTROL);
    first.set_skinlet(Some(shared.clone().into()));
    second.set_skinlet(Some(shared.clone().into()));
    assert_eq!(Rc::strong_count(&shared), 3);

    first.set_skinlet(None);
    drop(second);
    assert_eq!(drops.get(), 0);
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn instance_skinlet_overrides_skin_default() {
    let skin = SkinBuilder::new("s")
        .skinlet(Button::TYPE, Rc::new(BoxSkinlet::new([PANEL])))
        .build();
    let mut button = Button::new(skin);
    button
        .skinnable_mut()
        .set_skinlet(Some(SkinletSlot::owned(BoxSkinlet::new([TEXT]))));
    assert_eq!(button.update_node(None).unwrap().subcontrol, TEXT);

    button.skinnable_mut().set_skinlet(None);
    assert_eq!(button.update_node(None).unwrap().subcontrol, PANEL);
}
