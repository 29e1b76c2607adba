// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Skin Sheet: TOML skin sheets for `understory_skin`.
//!
//! A sheet describes a [`Skin`](understory_skin::Skin): its name, fonts per
//! role, graphic filters per role and a list of hints. Subcontrol, state and
//! role names are mapped through a [`Vocabulary`] supplied by the control
//! library.
//!
//! ```toml
//! name = "light"
//!
//! [default_font]
//! family = "Inter"
//! size = 14.0
//!
//! [fonts.title]
//! size = 20.0
//! weight = 700
//!
//! [graphic_filters.inverted]
//! substitutions = [["#000000", "#ffffff"]]
//!
//! [[hints]]
//! subcontrol = "Panel"
//! primitive = "Fill"
//! color = "#f0f0f0"
//!
//! [[hints]]
//! subcontrol = "Panel"
//! primitive = "Fill"
//! states = ["PRESSED"]
//! color = "#c0c0c0"
//!
//! [[hints]]
//! subcontrol = "Panel"
//! category = "Color"
//! animator = true
//! animation = { duration_ms = 150, easing = "out-quad" }
//! ```
//!
//! Every `[[hints]]` entry takes exactly one value key:
//!
//! | Key | Value | Category |
//! |-----|-------|----------|
//! | `color` | CSS color | Color |
//! | `border_colors` | color or `[left, top, right, bottom]` | Color |
//! | `metric` | number | Metric |
//! | `size` | `[width, height]` | Metric |
//! | `margins` | number or `[left, top, right, bottom]` | Metric |
//! | `radius` | number or `[top_left, top_right, bottom_right, bottom_left]` | Metric |
//! | `alignment` | list of flag names, e.g. `["LEFT", "V_CENTER"]` | Metric |
//! | `flag` | integer | Flag |
//! | `font_role` | role name | Flag |
//! | `graphic_role` | role name | Flag |
//! | `animation` | `{ duration_ms, delay_ms, easing }` | animator entries only |
//!
//! The key must also suit the primitive: `Size` takes `size`, `Spacing` takes
//! `metric`, `Shape` takes `radius` or `metric`, `Margin`, `Padding` and
//! `Border` take `margins` or `metric`, `BorderColor` takes `border_colors` or
//! `color`. Entries with only a `category` take `metric`, `color` or `flag`.
//!
//! Later entries for the same aspect overwrite earlier ones with a warning.
//! A sheet without `name` is named after its file, or [`UNNAMED_SKIN`] when
//! loaded from text.

mod document;
mod error;
mod load;
mod vocabulary;

pub use error::{HintProblem, NameKind, SheetError};
pub use load::{UNNAMED_SKIN, apply_sheet, load_skin, load_skin_file, parse_color};
pub use vocabulary::Vocabulary;
