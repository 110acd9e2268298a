//! Compile-time sample content mirrored from the showcase site.
//!
//! Nothing here is live data; it exists so the browse and admin views have
//! something to render until a real backend provides the same trait.

use super::GalleryProvider;
use super::types::{
    AdminStats, Artwork, ArtworkStatus, Author, AuthorStatus, CatalogEntry, RosterEntry,
};

const AUTHORS: [Author; 2] = [
    Author {
        id: "1",
        name: "Мария Петрова",
        bio: "Съвременна художничка, специализираща в абстрактно изкуство и модерни техники на рисуване.",
        artworks_count: 24,
        followers_count: 1205,
        categories: &["Абстрактно", "Модерно", "Портрети"],
        is_following: false,
    },
    Author {
        id: "2",
        name: "Георги Димитров",
        bio: "Класически художник с фокус върху пейзажи и традиционни техники на рисуване.",
        artworks_count: 18,
        followers_count: 892,
        categories: &["Пейзажи", "Класическо", "Реализъм"],
        is_following: true,
    },
];

const ARTWORKS: [Artwork; 3] = [
    Artwork {
        id: "1",
        title: "Абстрактни форми",
        artist: "Мария Петрова",
        category: "Абстрактно",
        price: 1200,
        rating: 5,
        reviews_count: 24,
        is_liked: false,
        dimensions: "80x60 см",
        year: 2024,
    },
    Artwork {
        id: "2",
        title: "Планински пейзаж",
        artist: "Георги Димитров",
        category: "Пейзажи",
        price: 850,
        rating: 4,
        reviews_count: 16,
        is_liked: true,
        dimensions: "100x70 см",
        year: 2023,
    },
    Artwork {
        id: "3",
        title: "Дигитално изкуство",
        artist: "Мария Петрова",
        category: "Модерно",
        price: 950,
        rating: 5,
        reviews_count: 31,
        is_liked: false,
        dimensions: "60x60 см",
        year: 2024,
    },
];

const CATEGORIES: [&str; 7] = [
    "all",
    "Абстрактно",
    "Пейзажи",
    "Модерно",
    "Класическо",
    "Портрети",
    "Реализъм",
];

const ADMIN_STATS: AdminStats = AdminStats {
    total_authors: 24,
    total_artworks: 156,
    total_views: 12_340,
    total_sales: 45_600,
};

const ROSTER: [RosterEntry; 3] = [
    RosterEntry {
        id: "1",
        name: "Мария Петрова",
        email: "maria@example.com",
        artworks_count: 15,
        status: AuthorStatus::Active,
    },
    RosterEntry {
        id: "2",
        name: "Георги Димитров",
        email: "georgi@example.com",
        artworks_count: 22,
        status: AuthorStatus::Active,
    },
    RosterEntry {
        id: "3",
        name: "Елена Стоянова",
        email: "elena@example.com",
        artworks_count: 8,
        status: AuthorStatus::Pending,
    },
];

const CATALOG: [CatalogEntry; 3] = [
    CatalogEntry {
        id: "1",
        title: "Абстрактни форми",
        artist: "Мария Петрова",
        status: ArtworkStatus::Published,
        views: 234,
        price: 1200,
    },
    CatalogEntry {
        id: "2",
        title: "Планински пейзаж",
        artist: "Георги Димитров",
        status: ArtworkStatus::Published,
        views: 156,
        price: 850,
    },
    CatalogEntry {
        id: "3",
        title: "Модерно изкуство",
        artist: "Елена Стоянова",
        status: ArtworkStatus::Review,
        views: 89,
        price: 950,
    },
];

/// Fixture-backed provider serving the bundled sample content.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGallery;

impl GalleryProvider for FixtureGallery {
    fn authors(&self) -> &[Author] {
        &AUTHORS
    }

    fn artworks(&self) -> &[Artwork] {
        &ARTWORKS
    }

    fn categories(&self) -> &[&str] {
        &CATEGORIES
    }

    fn admin_stats(&self) -> AdminStats {
        ADMIN_STATS
    }

    fn roster(&self) -> &[RosterEntry] {
        &ROSTER
    }

    fn catalog(&self) -> &[CatalogEntry] {
        &CATALOG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_artworks_reference_known_categories() {
        let gallery = FixtureGallery;
        for artwork in gallery.artworks() {
            assert!(
                gallery.categories().contains(&artwork.category),
                "unknown category {}",
                artwork.category
            );
        }
    }

    #[test]
    fn fixture_artworks_reference_known_authors() {
        let gallery = FixtureGallery;
        for artwork in gallery.artworks() {
            assert!(
                gallery
                    .authors()
                    .iter()
                    .any(|author| author.name == artwork.artist),
                "unknown artist {}",
                artwork.artist
            );
        }
    }

    #[test]
    fn fixture_ids_are_unique_per_collection() {
        let gallery = FixtureGallery;

        let mut artwork_ids: Vec<_> = gallery.artworks().iter().map(|a| a.id).collect();
        artwork_ids.sort_unstable();
        artwork_ids.dedup();
        assert_eq!(artwork_ids.len(), gallery.artworks().len());

        let mut roster_ids: Vec<_> = gallery.roster().iter().map(|r| r.id).collect();
        roster_ids.sort_unstable();
        roster_ids.dedup();
        assert_eq!(roster_ids.len(), gallery.roster().len());
    }
}
