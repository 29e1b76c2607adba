// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme-wide hint providers.
//!
//! A [`Skin`] is an immutable snapshot shared by every skinnable that uses it.
//! Theme switches never mutate a skin in place: derive a new one with
//! [`Skin::to_builder`] and publish it, for example through a [`SkinManager`].

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::aspect::Aspect;
use crate::control::ControlType;
use crate::hint::{Font, FontRole, GraphicFilter, GraphicRole, Hint};
use crate::skinlet::Skinlet;
use crate::table::HintTable;

/// An immutable, reference-counted skin snapshot.
///
/// Cloning is cheap; clones share the same tables.
///
/// # Example
///
/// ```rust
/// use understory_skin::{FontRole, Font, Primitive, SkinBuilder, Subcontrol};
///
/// let panel = Subcontrol::new(1);
/// let skin = SkinBuilder::new("light")
///     .hint(panel.aspect(Primitive::Spacing), 6.0)
///     .font(FontRole::TITLE, Font { pixel_size: 20.0, ..Font::default() })
///     .build();
///
/// assert_eq!(skin.name(), "light");
/// assert_eq!(skin.font(FontRole::TITLE).pixel_size, 20.0);
/// // Unknown roles fall back to the default font.
/// assert_eq!(skin.font(FontRole::CAPTION), skin.default_font());
///
/// // Derive a tweaked snapshot; the original is untouched.
/// let dense = skin.to_builder().name("light-dense").hint(panel.aspect(Primitive::Spacing), 2.0).build();
/// assert_ne!(skin.hint(panel.aspect(Primitive::Spacing)), dense.hint(panel.aspect(Primitive::Spacing)));
/// ```
#[derive(Clone, Debug)]
pub struct Skin {
    inner: Rc<SkinData>,
}

#[derive(Clone, Debug, Default)]
struct SkinData {
    name: String,
    hints: HintTable,
    default_font: Font,
    fonts: BTreeMap<FontRole, Font>,
    graphic_filters: BTreeMap<GraphicRole, GraphicFilter>,
    skinlets: HashMap<ControlType, Rc<dyn Skinlet>>,
}

impl Skin {
    /// Returns the skin name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the skin's hint table.
    #[must_use]
    #[inline]
    pub fn hints(&self) -> &HintTable {
        &self.inner.hints
    }

    /// Returns the hint stored for exactly `aspect`.
    #[must_use]
    #[inline]
    pub fn hint(&self, aspect: Aspect) -> Option<&Hint> {
        self.inner.hints.hint(aspect)
    }

    /// Returns the font for `role`, or the default font.
    #[must_use]
    pub fn font(&self, role: FontRole) -> &Font {
        self.inner
            .fonts
            .get(&role)
            .unwrap_or(&self.inner.default_font)
    }

    /// Returns the font used for roles without an entry.
    #[must_use]
    #[inline]
    pub fn default_font(&self) -> &Font {
        &self.inner.default_font
    }

    /// Returns the graphic filter for `role`, if any.
    #[must_use]
    pub fn graphic_filter(&self, role: GraphicRole) -> Option<&GraphicFilter> {
        self.inner.graphic_filters.get(&role)
    }

    /// Returns the default skinlet for `control_type`.
    ///
    /// The lookup walks up the type's ancestry, so a skinlet registered for a
    /// base class serves derived classes without their own entry.
    #[must_use]
    pub fn skinlet_for(&self, control_type: &ControlType) -> Option<&Rc<dyn Skinlet>> {
        control_type
            .ancestry()
            .find_map(|ty| self.inner.skinlets.get(ty))
    }

    /// Returns `true` if both handles share the same snapshot.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns a builder seeded with this skin's contents.
    #[must_use]
    pub fn to_builder(&self) -> SkinBuilder {
        SkinBuilder {
            data: (*self.inner).clone(),
        }
    }
}

/// Builder for constructing [`Skin`] snapshots.
#[derive(Debug, Default)]
pub struct SkinBuilder {
    data: SkinData,
}

impl SkinBuilder {
    /// Creates an empty builder for a skin called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: SkinData {
                name: name.into(),
                ..SkinData::default()
            },
        }
    }

    /// Renames the skin.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.data.name = name.into();
        self
    }

    /// Sets a hint, replacing any previous value.
    #[must_use]
    pub fn hint(mut self, aspect: Aspect, value: impl Into<Hint>) -> Self {
        self.data.hints.set_hint(aspect, value);
        self
    }

    /// Removes a hint.
    #[must_use]
    pub fn reset_hint(mut self, aspect: Aspect) -> Self {
        self.data.hints.reset_hint(aspect);
        self
    }

    /// Sets the font for `role`.
    #[must_use]
    pub fn font(mut self, role: FontRole, font: Font) -> Self {
        self.data.fonts.insert(role, font);
        self
    }

    /// Sets the font used for roles without an entry.
    #[must_use]
    pub fn default_font(mut self, font: Font) -> Self {
        self.data.default_font = font;
        self
    }

    /// Sets the graphic filter for `role`.
    #[must_use]
    pub fn graphic_filter(mut self, role: GraphicRole, filter: GraphicFilter) -> Self {
        self.data.graphic_filters.insert(role, filter);
        self
    }

    /// Sets the default skinlet for `control_type`.
    #[must_use]
    pub fn skinlet(mut self, control_type: ControlType, skinlet: Rc<dyn Skinlet>) -> Self {
        self.data.skinlets.insert(control_type, skinlet);
        self
    }

    /// Inserts a hint without consuming the builder.
    pub fn set_hint(&mut self, aspect: Aspect, value: impl Into<Hint>) -> Option<Hint> {
        self.data.hints.set_hint(aspect, value)
    }

    /// Inserts a font without consuming the builder.
    pub fn set_font(&mut self, role: FontRole, font: Font) {
        self.data.fonts.insert(role, font);
    }

    /// Inserts a graphic filter without consuming the builder.
    pub fn set_graphic_filter(&mut self, role: GraphicRole, filter: GraphicFilter) {
        self.data.graphic_filters.insert(role, filter);
    }

    /// Builds the skin.
    #[must_use]
    pub fn build(self) -> Skin {
        Skin {
            inner: Rc::new(self.data),
        }
    }
}

/// Errors reported by [`SkinManager`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkinError {
    /// No factory is registered under the requested name.
    #[error("unknown skin `{0}`")]
    UnknownSkin(String),
}

/// A function producing a fresh skin snapshot.
pub type SkinFactory = Box<dyn Fn() -> Skin>;

/// A registry of named skins with one active snapshot.
///
/// Activating a skin publishes a new snapshot and bumps [`SkinManager::generation`],
/// which dependants can compare against to pick up the change.
///
/// ```rust
/// use understory_skin::{SkinBuilder, SkinManager};
///
/// let mut manager = SkinManager::new();
/// manager.register("light", || SkinBuilder::new("light").build());
/// manager.register("dark", || SkinBuilder::new("dark").build());
///
/// assert!(manager.active().is_none());
/// let skin = manager.set_active("dark").unwrap().clone();
/// assert_eq!(skin.name(), "dark");
/// assert_eq!(manager.generation(), 1);
/// assert!(manager.set_active("neon").is_err());
/// ```
#[derive(Default)]
pub struct SkinManager {
    factories: BTreeMap<String, SkinFactory>,
    active: Option<Skin>,
    generation: u64,
}

impl core::fmt::Debug for SkinManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkinManager")
            .field("skins", &self.factories.keys().collect::<Vec<_>>())
            .field("active", &self.active.as_ref().map(Skin::name))
            .field("generation", &self.generation)
            .finish()
    }
}

impl SkinManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `name`, replacing any previous one.
    pub fn register(&mut self, name: &str, factory: impl Fn() -> Skin + 'static) {
        if self
            .factories
            .insert(name.to_owned(), Box::new(factory))
            .is_some()
        {
            log::debug!("replacing skin factory `{name}`");
        }
    }

    /// Returns the registered skin names, sorted.
    pub fn skin_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }

    /// Creates a fresh snapshot of the skin registered under `name`.
    pub fn create(&self, name: &str) -> Result<Skin, SkinError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| SkinError::UnknownSkin(name.to_owned()))
    }

    /// Creates and publishes the skin registered under `name`.
    pub fn set_active(&mut self, name: &str) -> Result<&Skin, SkinError> {
        let skin = self.create(name)?;
        self.generation = self.generation.wrapping_add(1);
        log::debug!(
            "activating skin `{name}` (generation {})",
            self.generation
        );
        Ok(self.active.insert(skin))
    }

    /// Publishes an externally built snapshot.
    pub fn publish(&mut self, skin: Skin) -> &Skin {
        self.generation = self.generation.wrapping_add(1);
        log::debug!(
            "publishing skin `{}` (generation {})",
            skin.name(),
            self.generation
        );
        self.active.insert(skin)
    }

    /// Returns the active snapshot.
    #[must_use]
    pub fn active(&self) -> Option<&Skin> {
        self.active.as_ref()
    }

    /// Returns the number of snapshots published so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
