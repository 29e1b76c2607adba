// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect keys.
//!
//! An [`Aspect`] identifies one style dimension of one [`Subcontrol`]:
//! "the fill color of the panel while pressed", "the padding of the text",
//! "the animation used for color transitions of the handle".
//!
//! Aspects whose [`State`] mask is empty are *unresolved*; resolution
//! completes them with the current skin state of the skinnable.

use core::cmp::Ordering;
use core::fmt;

use smallvec::SmallVec;

/// A stable identifier for a styleable part of a control.
///
/// Subcontrol IDs are application-defined. [`Subcontrol::CONTROL`] denotes the
/// control as a whole and is the fallback when a subcontrol has no hint.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subcontrol(u16);

impl Subcontrol {
    /// The control as a whole.
    pub const CONTROL: Self = Self(0);

    /// Creates a subcontrol with the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Returns an unresolved aspect for `primitive` on this subcontrol.
    #[must_use]
    #[inline]
    pub const fn aspect(self, primitive: Primitive) -> Aspect {
        Aspect::new(self, primitive)
    }
}

impl fmt::Debug for Subcontrol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subcontrol").field(&self.0).finish()
    }
}

impl fmt::Display for Subcontrol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::CONTROL {
            f.write_str("Control")
        } else {
            write!(f, "Subcontrol({})", self.0)
        }
    }
}

/// The value family an aspect belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Geometric values: sizes, margins, radii, spacing, alignment.
    Metric,
    /// Colors and gradients.
    Color,
    /// Enumerations and roles.
    Flag,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Metric => "Metric",
            Self::Color => "Color",
            Self::Flag => "Flag",
        })
    }
}

/// The concrete property within a [`Category`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    /// No primitive; the aspect addresses its category as a whole.
    None,
    /// Strut (minimum) size.
    Size,
    /// Outer margins.
    Margin,
    /// Inner padding.
    Padding,
    /// Corner radii of a box.
    Shape,
    /// Border widths of a box.
    Border,
    /// Spacing between children.
    Spacing,
    /// Alignment of content.
    Alignment,
    /// Background fill.
    Fill,
    /// Text color.
    Text,
    /// Border colors.
    BorderColor,
    /// A control-specific style flag.
    Style,
    /// Font role.
    FontRole,
    /// Graphic filter role.
    GraphicRole,
}

impl Primitive {
    /// Returns the category this primitive belongs to.
    ///
    /// [`Primitive::None`] belongs to no category by itself.
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::None => None,
            Self::Size
            | Self::Margin
            | Self::Padding
            | Self::Shape
            | Self::Border
            | Self::Spacing
            | Self::Alignment => Some(Category::Metric),
            Self::Fill | Self::Text | Self::BorderColor => Some(Category::Color),
            Self::Style | Self::FontRole | Self::GraphicRole => Some(Category::Flag),
        }
    }
}

bitflags::bitflags! {
    /// Style-affecting instance conditions.
    ///
    /// The named bits cover the common interaction states. Controls may use
    /// any other bit for their own states; unknown bits are retained.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct State: u16 {
        /// Pointer is over the control.
        const HOVERED  = 1 << 0;
        /// Control is pressed.
        const PRESSED  = 1 << 1;
        /// Control is checked or selected.
        const CHECKED  = 1 << 2;
        /// Control has keyboard focus.
        const FOCUSED  = 1 << 3;
        /// Control does not accept input.
        const DISABLED = 1 << 4;

        const _ = !0;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::empty()
    }
}

impl State {
    /// Returns every submask of `self`, most specific first.
    ///
    /// Masks are ordered by descending number of set bits; masks with the same
    /// count are ordered by descending bit pattern, so higher bits are
    /// considered more significant. The last item is always the empty mask.
    ///
    /// ```rust
    /// use understory_skin::State;
    ///
    /// let combos: Vec<State> = (State::HOVERED | State::PRESSED).combinations().collect();
    /// assert_eq!(
    ///     combos,
    ///     [
    ///         State::HOVERED | State::PRESSED,
    ///         State::PRESSED,
    ///         State::HOVERED,
    ///         State::empty(),
    ///     ]
    /// );
    /// ```
    pub fn combinations(self) -> impl Iterator<Item = Self> {
        let mask = self.bits();
        let mut combos: SmallVec<[u16; 8]> = SmallVec::new();
        let mut sub = mask;
        loop {
            combos.push(sub);
            if sub == 0 {
                break;
            }
            sub = (sub - 1) & mask;
        }
        combos.sort_unstable_by(|a, b| specificity_order(*a, *b));
        combos.into_iter().map(Self::from_bits_retain)
    }
}

fn specificity_order(a: u16, b: u16) -> Ordering {
    b.count_ones()
        .cmp(&a.count_ones())
        .then_with(|| b.cmp(&a))
}

/// A composite key identifying a style dimension.
///
/// Aspects compare by value and have a total order, so they can key both hash
/// and ordered maps.
///
/// ```rust
/// use understory_skin::{Aspect, Category, Primitive, State, Subcontrol};
///
/// const PANEL: Subcontrol = Subcontrol::new(1);
///
/// let fill = PANEL.aspect(Primitive::Fill);
/// assert_eq!(fill.category(), Category::Color);
/// assert!(!fill.is_resolved());
///
/// let pressed = fill.with_state(State::PRESSED);
/// assert!(pressed.is_resolved());
/// assert_eq!(pressed.unresolved(), fill);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Aspect {
    subcontrol: Subcontrol,
    category: Category,
    primitive: Primitive,
    state: State,
    animator: bool,
}

impl Aspect {
    /// Creates an unresolved aspect for `primitive` on `subcontrol`.
    ///
    /// The category is derived from the primitive. [`Primitive::None`] has no
    /// category of its own, so `Aspect::new(sub, Primitive::None)` is the same
    /// key as `Aspect::category_of(sub, Category::Metric)`; address the color
    /// or flag category as a whole with [`Aspect::category_of`].
    #[must_use]
    pub const fn new(subcontrol: Subcontrol, primitive: Primitive) -> Self {
        let category = match primitive.category() {
            Some(category) => category,
            None => Category::Metric,
        };
        Self {
            subcontrol,
            category,
            primitive,
            state: State::empty(),
            animator: false,
        }
    }

    /// Creates an aspect addressing a whole category of `subcontrol`.
    #[must_use]
    pub const fn category_of(subcontrol: Subcontrol, category: Category) -> Self {
        Self {
            subcontrol,
            category,
            primitive: Primitive::None,
            state: State::empty(),
            animator: false,
        }
    }

    /// Creates the aspect under which animation hints for `category`
    /// transitions of `subcontrol` are stored.
    #[must_use]
    pub const fn animator(subcontrol: Subcontrol, category: Category) -> Self {
        Self {
            subcontrol,
            category,
            primitive: Primitive::None,
            state: State::empty(),
            animator: true,
        }
    }

    /// Returns the subcontrol.
    #[must_use]
    #[inline]
    pub const fn subcontrol(self) -> Subcontrol {
        self.subcontrol
    }

    /// Returns the category.
    #[must_use]
    #[inline]
    pub const fn category(self) -> Category {
        self.category
    }

    /// Returns the primitive.
    #[must_use]
    #[inline]
    pub const fn primitive(self) -> Primitive {
        self.primitive
    }

    /// Returns the state mask.
    #[must_use]
    #[inline]
    pub const fn state(self) -> State {
        self.state
    }

    /// Returns `true` if this aspect addresses an animation hint.
    #[must_use]
    #[inline]
    pub const fn is_animator(self) -> bool {
        self.animator
    }

    /// Returns `true` if the state mask is non-empty.
    #[must_use]
    #[inline]
    pub const fn is_resolved(self) -> bool {
        !self.state.is_empty()
    }

    /// Returns this aspect with the state mask replaced.
    #[must_use]
    #[inline]
    pub const fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Returns this aspect with the subcontrol replaced.
    #[must_use]
    #[inline]
    pub const fn with_subcontrol(mut self, subcontrol: Subcontrol) -> Self {
        self.subcontrol = subcontrol;
        self
    }

    /// Returns this aspect with the state mask cleared.
    #[must_use]
    #[inline]
    pub const fn unresolved(self) -> Self {
        self.with_state(State::empty())
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.subcontrol, self.category)?;
        if self.primitive != Primitive::None {
            write!(f, " | {:?}", self.primitive)?;
        }
        if self.animator {
            f.write_str(" | Animator")?;
        }
        if !self.state.is_empty() {
            f.write_str(" | ")?;
            write_state(f, self.state)?;
        }
        Ok(())
    }
}

/// Writes `state` as `NAME | NAME | 0x..`, or `NoState` when empty.
pub(crate) fn write_state(out: &mut impl fmt::Write, state: State) -> fmt::Result {
    if state.is_empty() {
        return out.write_str("NoState");
    }
    bitflags::parser::to_writer(&state, out)
}
