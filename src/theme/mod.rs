//! The theme-settings model and its import/export/reset protocol.
//!
//! [`ThemeSettings`] is a flat record of style properties seeded from a fixed
//! default configuration. Every mutation goes through a single entry point,
//! [`ThemeStore`], and produces a fresh record rather than editing in place.
//! Export and import round-trip the record through the same JSON document a
//! user would download from the customizer.

mod error;
mod field;
mod io;
mod settings;
mod store;

pub use error::ThemeError;
pub use field::{FieldKind, SettingField, SettingValue};
pub use io::{EXPORT_FILE_NAME, parse_settings, render_settings};
pub use settings::{BACKGROUND_POSITIONS, FONT_FAMILIES, FONT_WEIGHTS, ThemeSettings};
pub use store::ThemeStore;
