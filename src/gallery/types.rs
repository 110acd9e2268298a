use serde::Serialize;

/// An author profile as shown on the browse page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: &'static str,
    pub name: &'static str,
    pub bio: &'static str,
    pub artworks_count: u32,
    pub followers_count: u32,
    pub categories: &'static [&'static str],
    pub is_following: bool,
}

/// An artwork card as shown on the browse page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artwork {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub category: &'static str,
    pub price: u32,
    pub rating: u8,
    pub reviews_count: u32,
    pub is_liked: bool,
    pub dimensions: &'static str,
    pub year: u16,
}

/// Headline numbers on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_authors: u32,
    pub total_artworks: u32,
    pub total_views: u64,
    pub total_sales: u64,
}

/// Moderation state of an author account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorStatus {
    Active,
    Pending,
    Inactive,
}

/// Moderation state of an artwork listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    Published,
    Draft,
    Review,
}

/// One row of the admin panel's author roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub artworks_count: u32,
    pub status: AuthorStatus,
}

/// One row of the admin panel's artwork catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub status: ArtworkStatus,
    pub views: u32,
    pub price: u32,
}
