// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hint values.
//!
//! A [`Hint`] is the value stored for a resolved [`Aspect`](crate::Aspect).
//! Geometry uses Kurbo types and paint uses Peniko types, the same
//! vocabulary the imaging crates speak.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Insets, RoundedRectRadii, Size};
use peniko::{Brush, Color, Gradient};

/// A styling value.
#[derive(Clone, Debug, PartialEq)]
pub enum Hint {
    /// A solid color.
    Color(Color),
    /// A gradient fill.
    Gradient(Gradient),
    /// A scalar metric (spacing, widths, generic metrics).
    Metric(f64),
    /// A size (strut sizes).
    Size(Size),
    /// Edge values: margins, padding, border widths.
    Margins(Insets),
    /// Corner radii.
    Shape(RoundedRectRadii),
    /// Per-edge border colors.
    BorderColors(BoxBorderColors),
    /// An integer flag.
    Flag(u32),
    /// Content alignment.
    Alignment(Alignment),
    /// A font role.
    FontRole(FontRole),
    /// A graphic filter role.
    GraphicRole(GraphicRole),
    /// Transition parameters.
    Animation(AnimationHint),
}

impl Hint {
    /// Returns the contained color.
    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Returns the contained metric.
    #[must_use]
    pub fn as_metric(&self) -> Option<f64> {
        match self {
            Self::Metric(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained size.
    #[must_use]
    pub fn as_size(&self) -> Option<Size> {
        match self {
            Self::Size(size) => Some(*size),
            _ => None,
        }
    }

    /// Returns the contained edge values.
    ///
    /// A metric is interpreted as uniform insets.
    #[must_use]
    pub fn as_margins(&self) -> Option<Insets> {
        match self {
            Self::Margins(insets) => Some(*insets),
            Self::Metric(value) => Some(Insets::uniform(*value)),
            _ => None,
        }
    }

    /// Returns the contained corner radii.
    ///
    /// A metric is interpreted as a single radius for all corners.
    #[must_use]
    pub fn as_shape(&self) -> Option<RoundedRectRadii> {
        match self {
            Self::Shape(radii) => Some(*radii),
            Self::Metric(value) => Some(RoundedRectRadii::from_single_radius(*value)),
            _ => None,
        }
    }

    /// Returns the hint as a fill brush.
    ///
    /// Colors become solid brushes.
    #[must_use]
    pub fn as_brush(&self) -> Option<Brush> {
        match self {
            Self::Color(color) => Some(Brush::Solid(*color)),
            Self::Gradient(gradient) => Some(Brush::Gradient(gradient.clone())),
            _ => None,
        }
    }

    /// Returns the contained border colors.
    ///
    /// A single color is applied to all edges.
    #[must_use]
    pub fn as_border_colors(&self) -> Option<BoxBorderColors> {
        match self {
            Self::BorderColors(colors) => Some(*colors),
            Self::Color(color) => Some(BoxBorderColors::uniform(*color)),
            _ => None,
        }
    }

    /// Returns the contained flag.
    #[must_use]
    pub fn as_flag(&self) -> Option<u32> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained alignment.
    #[must_use]
    pub fn as_alignment(&self) -> Option<Alignment> {
        match self {
            Self::Alignment(alignment) => Some(*alignment),
            _ => None,
        }
    }

    /// Returns the contained font role.
    #[must_use]
    pub fn as_font_role(&self) -> Option<FontRole> {
        match self {
            Self::FontRole(role) => Some(*role),
            _ => None,
        }
    }

    /// Returns the contained graphic role.
    #[must_use]
    pub fn as_graphic_role(&self) -> Option<GraphicRole> {
        match self {
            Self::GraphicRole(role) => Some(*role),
            _ => None,
        }
    }

    /// Returns the contained animation hint.
    #[must_use]
    pub fn as_animation(&self) -> Option<AnimationHint> {
        match self {
            Self::Animation(animation) => Some(*animation),
            _ => None,
        }
    }
}

impl From<Color> for Hint {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Gradient> for Hint {
    fn from(value: Gradient) -> Self {
        Self::Gradient(value)
    }
}

impl From<f64> for Hint {
    fn from(value: f64) -> Self {
        Self::Metric(value)
    }
}

impl From<Size> for Hint {
    fn from(value: Size) -> Self {
        Self::Size(value)
    }
}

impl From<Insets> for Hint {
    fn from(value: Insets) -> Self {
        Self::Margins(value)
    }
}

impl From<RoundedRectRadii> for Hint {
    fn from(value: RoundedRectRadii) -> Self {
        Self::Shape(value)
    }
}

impl From<BoxBorderColors> for Hint {
    fn from(value: BoxBorderColors) -> Self {
        Self::BorderColors(value)
    }
}

impl From<u32> for Hint {
    fn from(value: u32) -> Self {
        Self::Flag(value)
    }
}

impl From<Alignment> for Hint {
    fn from(value: Alignment) -> Self {
        Self::Alignment(value)
    }
}

impl From<FontRole> for Hint {
    fn from(value: FontRole) -> Self {
        Self::FontRole(value)
    }
}

impl From<GraphicRole> for Hint {
    fn from(value: GraphicRole) -> Self {
        Self::GraphicRole(value)
    }
}

impl From<AnimationHint> for Hint {
    fn from(value: AnimationHint) -> Self {
        Self::Animation(value)
    }
}

/// Border colors of a box, one per edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxBorderColors {
    /// Left edge.
    pub left: Color,
    /// Top edge.
    pub top: Color,
    /// Right edge.
    pub right: Color,
    /// Bottom edge.
    pub bottom: Color,
}

impl BoxBorderColors {
    /// All edges transparent.
    pub const TRANSPARENT: Self = Self::uniform(Color::TRANSPARENT);

    /// Uses `color` for every edge.
    #[must_use]
    pub const fn uniform(color: Color) -> Self {
        Self {
            left: color,
            top: color,
            right: color,
            bottom: color,
        }
    }
}

impl Default for BoxBorderColors {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

bitflags::bitflags! {
    /// Horizontal and vertical content alignment.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Alignment: u8 {
        /// Align to the left edge.
        const LEFT     = 1 << 0;
        /// Center horizontally.
        const H_CENTER = 1 << 1;
        /// Align to the right edge.
        const RIGHT    = 1 << 2;
        /// Align to the top edge.
        const TOP      = 1 << 3;
        /// Center vertically.
        const V_CENTER = 1 << 4;
        /// Align to the bottom edge.
        const BOTTOM   = 1 << 5;
        /// Center in both directions.
        const CENTER   = Self::H_CENTER.bits() | Self::V_CENTER.bits();
    }
}

/// A key into a skin's font table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontRole(pub u16);

impl FontRole {
    /// The default font role.
    pub const DEFAULT: Self = Self(0);
    /// Small print.
    pub const CAPTION: Self = Self(1);
    /// Headings.
    pub const TITLE: Self = Self(2);
}

/// A key into a skin's graphic filter table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphicRole(pub u16);

impl GraphicRole {
    /// No filter.
    pub const NONE: Self = Self(0);
}

/// A font description.
///
/// Font loading and shaping are left to the embedder; this is only the data a
/// skin hands out for a [`FontRole`].
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name.
    pub family: Arc<str>,
    /// Pixel size.
    pub pixel_size: f32,
    /// CSS-style weight (100..=900).
    pub weight: u16,
    /// Italic style.
    pub italic: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: Arc::from("sans-serif"),
            pixel_size: 14.0,
            weight: 400,
            italic: false,
        }
    }
}

/// A color substitution filter applied to graphics.
///
/// Each substitution replaces an exact source color with a target color.
/// The empty filter is the identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphicFilter {
    substitutions: Vec<(Color, Color)>,
}

impl GraphicFilter {
    /// Creates an identity filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a substitution from `from` to `to`.
    #[must_use]
    pub fn substitute(mut self, from: Color, to: Color) -> Self {
        self.substitutions.push((from, to));
        self
    }

    /// Returns `true` if the filter changes nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// Returns the substitutions in insertion order.
    #[must_use]
    pub fn substitutions(&self) -> &[(Color, Color)] {
        &self.substitutions
    }

    /// Applies the filter to `color`.
    ///
    /// The first matching substitution wins.
    #[must_use]
    pub fn apply(&self, color: Color) -> Color {
        self.substitutions
            .iter()
            .find(|(from, _)| *from == color)
            .map_or(color, |(_, to)| *to)
    }
}

/// Easing curve of a transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic, slow start.
    InQuad,
    /// Quadratic, slow end.
    OutQuad,
    /// Quadratic, slow start and end.
    InOutQuad,
    /// Cubic, slow end.
    OutCubic,
    /// Cubic, slow start and end.
    InOutCubic,
}

impl Easing {
    /// Maps linear progress `t` to eased progress.
    ///
    /// `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::OutCubic => {
                let t1 = t - 1.0;
                t1 * t1 * t1 + 1.0
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
        }
    }
}

/// Parameters of a hint transition.
///
/// A zero duration means "do not animate".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnimationHint {
    /// Length of the transition.
    pub duration: Duration,
    /// Time before the transition starts moving.
    pub delay: Duration,
    /// Easing curve.
    pub easing: Easing,
}

impl AnimationHint {
    /// Creates a linear animation hint of the given duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Returns this hint with the easing replaced.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Returns this hint with the delay replaced.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns `true` if this hint describes an actual animation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.duration.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_reject_other_variants() {
        let hint = Hint::Flag(3);
        assert_eq!(hint.as_flag(), Some(3));
        assert_eq!(hint.as_color(), None);
        assert_eq!(hint.as_metric(), None);
    }

    #[test]
    fn metric_widens_to_margins_and_shape() {
        let hint = Hint::Metric(4.0);
        assert_eq!(hint.as_margins(), Some(Insets::uniform(4.0)));
        assert_eq!(
            hint.as_shape(),
            Some(RoundedRectRadii::from_single_radius(4.0))
        );
    }

    #[test]
    fn color_widens_to_brush_and_border_colors() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let hint = Hint::from(red);
        assert_eq!(hint.as_brush(), Some(Brush::Solid(red)));
        assert_eq!(hint.as_border_colors(), Some(BoxBorderColors::uniform(red)));
    }

    #[test]
    fn graphic_filter_substitutes_first_match() {
        let black = Color::from_rgba8(0, 0, 0, 255);
        let white = Color::from_rgba8(255, 255, 255, 255);
        let gray = Color::from_rgba8(128, 128, 128, 255);
        let filter = GraphicFilter::new()
            .substitute(black, white)
            .substitute(black, gray);
        assert_eq!(filter.apply(black), white);
        assert_eq!(filter.apply(gray), gray);
        assert!(GraphicFilter::new().is_identity());
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::InQuad,
            Easing::OutQuad,
            Easing::InOutQuad,
            Easing::OutCubic,
            Easing::InOutCubic,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
        assert_eq!(Easing::InQuad.apply(0.5), 0.25);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn zero_duration_animation_is_invalid() {
        assert!(!AnimationHint::default().is_valid());
        assert!(AnimationHint::new(Duration::from_millis(100)).is_valid());
    }
}
