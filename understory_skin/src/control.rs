// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control type identity.
//!
//! A [`ControlType`] is a static descriptor naming a control class and its
//! parent class. Skins key their default skinlets by it, and
//! [`SkinnableObject::control_cast`](crate::SkinnableObject::control_cast) uses
//! it as a cheap tag check before the typed downcast.

use core::any::Any;
use core::fmt;

use kurbo::Rect;

/// A control class descriptor.
///
/// ```rust
/// use understory_skin::ControlType;
///
/// const BUTTON: ControlType = ControlType::derived("Button", &ControlType::CONTROL);
/// const PUSH_BUTTON: ControlType = ControlType::derived("PushButton", &BUTTON);
///
/// assert!(PUSH_BUTTON.inherits(&BUTTON));
/// assert!(PUSH_BUTTON.inherits(&ControlType::CONTROL));
/// assert!(!BUTTON.inherits(&PUSH_BUTTON));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ControlType {
    name: &'static str,
    parent: Option<&'static ControlType>,
}

impl ControlType {
    /// The root of every control family.
    pub const CONTROL: Self = Self::root("Control");

    /// Creates a descriptor without a parent.
    #[must_use]
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Creates a descriptor derived from `parent`.
    #[must_use]
    pub const fn derived(name: &'static str, parent: &'static Self) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// Returns the class name.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parent class.
    #[must_use]
    #[inline]
    pub const fn parent(&self) -> Option<&'static Self> {
        self.parent
    }

    /// Returns this type followed by its ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Self> + '_ {
        core::iter::successors(Some(self), |ty| ty.parent)
    }

    /// Returns `true` if `self` is `other` or derives from it.
    #[must_use]
    pub fn inherits(&self, other: &Self) -> bool {
        self.ancestry().any(|ty| ty == other)
    }
}

impl fmt::Debug for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ControlType").field(&self.name).finish()
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A control that owns one or more skinnables.
pub trait Control: Any {
    /// Returns the dynamic class of this control.
    fn control_type(&self) -> ControlType;

    /// Returns the rectangle available to the control's content.
    fn contents_rect(&self) -> Rect;
}

/// A concrete control type with a statically known [`ControlType`].
pub trait ControlKind: Control + Sized {
    /// The class descriptor of `Self`.
    const TYPE: ControlType;
}

/// Returns `control` as `C` if its class belongs to `C`'s family and its
/// concrete type is `C`.
pub fn cast_control<C: ControlKind>(control: &dyn Control) -> Option<&C> {
    if !control.control_type().inherits(&C::TYPE) {
        return None;
    }
    let any: &dyn Any = control;
    any.downcast_ref::<C>()
}
