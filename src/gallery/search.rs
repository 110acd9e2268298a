//! Case-insensitive filtering over gallery content, matching the browse
//! page's search box and category selector.

use super::types::{Artwork, Author};

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter artworks by a free-text query over title and artist, plus an
/// optional category (`"all"` disables the category filter).
pub fn filter_artworks<'a>(
    artworks: &'a [Artwork],
    query: &str,
    category: &str,
) -> Vec<&'a Artwork> {
    artworks
        .iter()
        .filter(|artwork| matches(artwork.title, query) || matches(artwork.artist, query))
        .filter(|artwork| category == "all" || artwork.category == category)
        .collect()
}

/// Filter authors by a free-text query over name and bio.
pub fn filter_authors<'a>(authors: &'a [Author], query: &str) -> Vec<&'a Author> {
    authors
        .iter()
        .filter(|author| matches(author.name, query) || matches(author.bio, query))
        .collect()
}
