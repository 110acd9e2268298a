//! Gallery content types and the bundled sample data.
//!
//! Browse and admin views consume content through [`GalleryProvider`] so the
//! fixture data stays clearly separated from anything that renders it.
//! [`FixtureGallery`] is the only provider shipped with the crate; a real
//! backend would implement the same trait.

mod fixtures;
mod search;
mod types;

pub use fixtures::FixtureGallery;
pub use search::{filter_artworks, filter_authors};
pub use types::{
    AdminStats, Artwork, ArtworkStatus, Author, AuthorStatus, CatalogEntry, RosterEntry,
};

/// Read-only source of gallery content.
pub trait GalleryProvider {
    /// Author profiles shown on the browse page.
    fn authors(&self) -> &[Author];

    /// Artworks shown on the browse page.
    fn artworks(&self) -> &[Artwork];

    /// Category filters offered by the browse page, `"all"` first.
    fn categories(&self) -> &[&str];

    /// Headline statistics for the admin dashboard.
    fn admin_stats(&self) -> AdminStats;

    /// The author roster managed from the admin panel.
    fn roster(&self) -> &[RosterEntry];

    /// The artwork catalog managed from the admin panel.
    fn catalog(&self) -> &[CatalogEntry];
}
