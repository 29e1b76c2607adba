// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Skin: skinnable hint resolution for UI controls.
//!
//! Visual parameters of a control (colors, metrics, margins, fonts, animation
//! timings) are stored as [`Hint`]s keyed by an [`Aspect`]. Lookups go through
//! a fixed precedence chain:
//!
//! **Transition → Local → Skin**, most specific state first, then the
//! [`Subcontrol::CONTROL`] fallback.
//!
//! ## Core Concepts
//!
//! ### Aspects
//!
//! An [`Aspect`] names one visual parameter: a [`Subcontrol`], a [`Primitive`]
//! (which implies its [`Category`]) and an optional [`State`] mask. Aspects
//! without state bits are *unresolved* and are completed with the current
//! state of the skinnable at lookup time.
//!
//! ### Skins
//!
//! A [`Skin`] is an immutable, shared snapshot of theme-wide hints, fonts,
//! graphic filters and default [`Skinlet`]s. [`SkinManager`] keeps named skin
//! factories and the active snapshot.
//!
//! ### Skinnables
//!
//! [`Skinnable`] holds the per-instance hint table, the skin reference, the
//! current state and running transitions. Controls expose it through
//! [`SkinnableObject`], which routes state changes through the control's
//! transition filter and delegates rendering to the effective skinlet.
//!
//! ```rust
//! use kurbo::Rect;
//! use peniko::Color;
//! use understory_skin::{
//!     BoxSkinlet, Control, ControlKind, ControlType, Primitive, SkinBuilder, Skinnable,
//!     SkinnableObject, State, Subcontrol,
//! };
//! use std::rc::Rc;
//!
//! const PANEL: Subcontrol = Subcontrol::new(1);
//!
//! struct Button {
//!     rect: Rect,
//!     skinnable: Skinnable,
//! }
//!
//! impl Control for Button {
//!     fn control_type(&self) -> ControlType { Self::TYPE }
//!     fn contents_rect(&self) -> Rect { self.rect }
//! }
//!
//! impl ControlKind for Button {
//!     const TYPE: ControlType = ControlType::derived("Button", &ControlType::CONTROL);
//! }
//!
//! impl SkinnableObject for Button {
//!     fn skinnable(&self) -> &Skinnable { &self.skinnable }
//!     fn skinnable_mut(&mut self) -> &mut Skinnable { &mut self.skinnable }
//!     fn owning_control(&self) -> Option<&dyn Control> { Some(self) }
//! }
//!
//! let red = Color::from_rgba8(255, 0, 0, 255);
//! let blue = Color::from_rgba8(0, 0, 255, 255);
//! let fill = PANEL.aspect(Primitive::Fill);
//!
//! let skin = SkinBuilder::new("demo")
//!     .hint(fill, blue)
//!     .hint(fill.with_state(State::PRESSED), red)
//!     .skinlet(Button::TYPE, Rc::new(BoxSkinlet::new([PANEL])))
//!     .build();
//!
//! let mut button = Button {
//!     rect: Rect::new(0.0, 0.0, 80.0, 24.0),
//!     skinnable: Skinnable::with_skin(Button::TYPE, skin),
//! };
//!
//! button.set_skin_state(State::PRESSED, false);
//! let node = button.update_node(None).unwrap();
//! assert_eq!(node.rect, Rect::new(0.0, 0.0, 80.0, 24.0));
//! assert_eq!(node.fill, peniko::Brush::Solid(red));
//! assert!(button.control_cast::<Button>().is_some());
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod animation;
mod aspect;
mod control;
mod hint;
mod resolve;
mod skin;
mod skinlet;
mod skinnable;
mod table;

pub use animation::{Animator, Transition, interpolate};
pub use aspect::{Aspect, Category, Primitive, State, Subcontrol};
pub use control::{Control, ControlKind, ControlType, cast_control};
pub use hint::{
    Alignment, AnimationHint, BoxBorderColors, Easing, Font, FontRole, GraphicFilter, GraphicRole,
    Hint,
};
pub use resolve::{HintSource, HintStatus, resolve_hint};
pub use skin::{Skin, SkinBuilder, SkinError, SkinFactory, SkinManager};
pub use skinlet::{BoxSkinlet, SkinNode, Skinlet, SkinletSlot};
pub use skinnable::{Skinnable, SkinnableObject};
pub use table::HintTable;
