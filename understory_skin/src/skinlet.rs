// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering and layout delegates.
//!
//! A [`Skinlet`] turns resolved hints into geometry and paint nodes. Skins
//! provide shared default skinlets per control type; a skinnable may install
//! its own through a [`SkinletSlot`].

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Insets, Rect, RoundedRectRadii, Size};
use peniko::Brush;

use crate::aspect::Subcontrol;
use crate::hint::BoxBorderColors;
use crate::skinnable::Skinnable;

/// A paint primitive produced by a skinlet.
///
/// This is a plain description of a box; mapping it onto a scene graph or an
/// imaging backend is up to the embedder.
#[derive(Clone, Debug, PartialEq)]
pub struct SkinNode {
    /// The subcontrol this node paints.
    pub subcontrol: Subcontrol,
    /// Outer rectangle in control coordinates.
    pub rect: Rect,
    /// Interior fill.
    pub fill: Brush,
    /// Corner radii.
    pub shape: RoundedRectRadii,
    /// Border widths.
    pub border: Insets,
    /// Border colors.
    pub border_colors: BoxBorderColors,
    /// Child nodes, painted after this one.
    pub children: Vec<SkinNode>,
}

impl SkinNode {
    /// Returns the child painting `subcontrol`, if any.
    #[must_use]
    pub fn child(&self, subcontrol: Subcontrol) -> Option<&Self> {
        self.children
            .iter()
            .find(|child| child.subcontrol == subcontrol)
    }
}

/// A rendering and layout delegate for skinnables.
pub trait Skinlet: fmt::Debug {
    /// Returns the rectangle of `subcontrol` within `contents_rect`.
    fn subcontrol_rect(
        &self,
        skinnable: &Skinnable,
        contents_rect: Rect,
        subcontrol: Subcontrol,
    ) -> Rect;

    /// Produces or updates the paint node for `skinnable`.
    ///
    /// `node` is the node returned by the previous call, if any. Returning
    /// `None` removes the node.
    fn update_node(
        &self,
        skinnable: &Skinnable,
        contents_rect: Rect,
        node: Option<SkinNode>,
    ) -> Option<SkinNode>;

    /// Returns the preferred size under `constraint`.
    ///
    /// The default is the strut size of the whole control.
    fn size_hint(&self, skinnable: &Skinnable, constraint: Size) -> Size {
        let _ = constraint;
        skinnable.strut_size_hint(Subcontrol::CONTROL)
    }
}

/// A per-instance skinlet installation.
///
/// Owned skinlets are dropped together with the slot. Shared skinlets are
/// reference counted and live as long as any skinnable or skin refers to them.
#[derive(Debug)]
pub enum SkinletSlot {
    /// A skinlet owned by the skinnable.
    Owned(Box<dyn Skinlet>),
    /// A skinlet shared with other skinnables.
    Shared(Rc<dyn Skinlet>),
}

impl SkinletSlot {
    /// Creates an owned slot.
    #[must_use]
    pub fn owned(skinlet: impl Skinlet + 'static) -> Self {
        Self::Owned(Box::new(skinlet))
    }

    /// Returns the installed skinlet.
    #[must_use]
    pub fn skinlet(&self) -> &dyn Skinlet {
        match self {
            Self::Owned(skinlet) => skinlet.as_ref(),
            Self::Shared(skinlet) => skinlet.as_ref(),
        }
    }

    /// Returns `true` if the skinnable owns the skinlet.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl From<Rc<dyn Skinlet>> for SkinletSlot {
    fn from(value: Rc<dyn Skinlet>) -> Self {
        Self::Shared(value)
    }
}

impl From<Box<dyn Skinlet>> for SkinletSlot {
    fn from(value: Box<dyn Skinlet>) -> Self {
        Self::Owned(value)
    }
}

/// A skinlet that paints its subcontrols as stacked boxes.
///
/// Every listed subcontrol occupies the contents rectangle minus its margin
/// hint and is painted with its fill, shape and border hints. The first
/// subcontrol becomes the root node; the rest become its children.
#[derive(Clone, Debug, Default)]
pub struct BoxSkinlet {
    subcontrols: Vec<Subcontrol>,
}

impl BoxSkinlet {
    /// Creates a skinlet painting `subcontrols` in order.
    #[must_use]
    pub fn new(subcontrols: impl IntoIterator<Item = Subcontrol>) -> Self {
        Self {
            subcontrols: subcontrols.into_iter().collect(),
        }
    }

    /// Returns the painted subcontrols.
    #[must_use]
    pub fn subcontrols(&self) -> &[Subcontrol] {
        &self.subcontrols
    }

    fn box_node(&self, skinnable: &Skinnable, contents_rect: Rect, sub: Subcontrol) -> SkinNode {
        SkinNode {
            subcontrol: sub,
            rect: self.subcontrol_rect(skinnable, contents_rect, sub),
            fill: skinnable.gradient_hint(sub),
            shape: skinnable.box_shape_hint(sub),
            border: skinnable.box_border_metrics_hint(sub),
            border_colors: skinnable.box_border_colors_hint(sub),
            children: Vec::new(),
        }
    }
}

impl Skinlet for BoxSkinlet {
    fn subcontrol_rect(
        &self,
        skinnable: &Skinnable,
        contents_rect: Rect,
        subcontrol: Subcontrol,
    ) -> Rect {
        contents_rect - skinnable.margin_hint(subcontrol)
    }

    fn update_node(
        &self,
        skinnable: &Skinnable,
        contents_rect: Rect,
        node: Option<SkinNode>,
    ) -> Option<SkinNode> {
        let (&root, rest) = self.subcontrols.split_first()?;
        let mut node = match node {
            Some(mut node) if node.subcontrol == root => {
                let fresh = self.box_node(skinnable, contents_rect, root);
                node.rect = fresh.rect;
                node.fill = fresh.fill;
                node.shape = fresh.shape;
                node.border = fresh.border;
                node.border_colors = fresh.border_colors;
                node
            }
            _ => self.box_node(skinnable, contents_rect, root),
        };
        node.children = rest
            .iter()
            .map(|&sub| self.box_node(skinnable, contents_rect, sub))
            .collect();
        Some(node)
    }

    fn size_hint(&self, skinnable: &Skinnable, constraint: Size) -> Size {
        let _ = constraint;
        let strut = skinnable.strut_size_hint(Subcontrol::CONTROL);
        self.subcontrols.iter().fold(strut, |acc, &sub| {
            let outer = skinnable.outer_box_size(sub, skinnable.strut_size_hint(sub));
            Size::new(acc.width.max(outer.width), acc.height.max(outer.height))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::Primitive;
    use crate::control::ControlType;
    use peniko::Color;

    const PANEL: Subcontrol = Subcontrol::new(1);
    const LABEL: Subcontrol = Subcontrol::new(2);

    fn contents() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 40.0)
    }

    #[test]
    fn size_hint_covers_control_strut_and_padded_parts() {
        let mut skinnable = Skinnable::new(ControlType::CONTROL);
        skinnable.set_strut_size_hint(Subcontrol::CONTROL, Size::new(10.0, 10.0));
        skinnable.set_strut_size_hint(PANEL, Size::new(20.0, 5.0));
        skinnable.set_padding_hint(PANEL, Insets::uniform(2.0));

        let skinlet = BoxSkinlet::new([PANEL]);
        assert_eq!(
            skinlet.size_hint(&skinnable, Size::new(500.0, 500.0)),
            Size::new(24.0, 10.0)
        );
        // Without parts only the control strut counts.
        assert_eq!(
            BoxSkinlet::default().size_hint(&skinnable, Size::ZERO),
            Size::new(10.0, 10.0)
        );
    }

    #[test]
    fn update_node_reuses_root_and_refreshes_children() {
        let mut skinnable = Skinnable::new(ControlType::CONTROL);
        skinnable.set_color(PANEL.aspect(Primitive::Fill), Color::BLACK);
        skinnable.set_margin_hint(LABEL, Insets::uniform(4.0));
        let skinlet = BoxSkinlet::new([PANEL, LABEL]);

        let first = skinlet.update_node(&skinnable, contents(), None).unwrap();
        assert_eq!(first.subcontrol, PANEL);
        assert_eq!(first.fill, Brush::Solid(Color::BLACK));
        assert_eq!(
            first.child(LABEL).map(|child| child.rect),
            Some(Rect::new(4.0, 4.0, 96.0, 36.0))
        );

        skinnable.set_color(PANEL.aspect(Primitive::Fill), Color::WHITE);
        let mut stale = first.clone();
        stale.children.push(first.clone());
        let second = skinlet
            .update_node(&skinnable, contents(), Some(stale))
            .unwrap();
        assert_eq!(second.subcontrol, PANEL);
        assert_eq!(second.fill, Brush::Solid(Color::WHITE));
        assert_eq!(second.children.len(), 1);
    }

    #[test]
    fn update_node_replaces_foreign_root() {
        let skinnable = Skinnable::new(ControlType::CONTROL);
        let skinlet = BoxSkinlet::new([PANEL]);
        let foreign = BoxSkinlet::new([LABEL])
            .update_node(&skinnable, contents(), None)
            .unwrap();
        let node = skinlet
            .update_node(&skinnable, contents(), Some(foreign))
            .unwrap();
        assert_eq!(node.subcontrol, PANEL);
        assert!(node.children.is_empty());
    }

    #[test]
    fn empty_box_skinlet_removes_the_node() {
        let skinnable = Skinnable::new(ControlType::CONTROL);
        let previous = BoxSkinlet::new([PANEL]).update_node(&skinnable, contents(), None);
        assert!(
            BoxSkinlet::default()
                .update_node(&skinnable, contents(), previous)
                .is_none()
        );
    }

    #[test]
    fn slots_report_ownership() {
        assert!(SkinletSlot::owned(BoxSkinlet::default()).is_owned());
        let shared: Rc<dyn Skinlet> = Rc::new(BoxSkinlet::default());
        assert!(!SkinletSlot::from(shared).is_owned());
    }
}
