//! Core crate exports for the Galleria theme engine.
//!
//! The root module re-exports the theme store and the bundled gallery
//! fixtures so that embedders can drive the customizer without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod gallery;
pub mod theme;

pub use gallery::{
    AdminStats, Artwork, ArtworkStatus, Author, AuthorStatus, CatalogEntry, FixtureGallery,
    GalleryProvider, RosterEntry,
};
pub use theme::{
    EXPORT_FILE_NAME, FieldKind, SettingField, SettingValue, ThemeError, ThemeSettings, ThemeStore,
};
