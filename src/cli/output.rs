use anyhow::Result;
use galleria::gallery::GalleryProvider;
use galleria::theme::{SettingField, ThemeSettings, render_settings};
use serde_json::json;

use super::GallerySelection;

/// Print the settings record as one `key = value` line per field.
pub(crate) fn print_settings_plain(settings: &ThemeSettings) {
    for field in SettingField::ALL {
        println!("{} = {}", field.key(), field.get(settings));
    }
}

/// Format the settings record as its export document.
pub(crate) fn format_settings_json(settings: &ThemeSettings) -> Result<String> {
    Ok(render_settings(settings)?)
}

/// Print every field with its kind, default value and control range.
pub(crate) fn print_fields_plain() {
    let defaults = ThemeSettings::default();
    for field in SettingField::ALL {
        let mut line = format!(
            "{:<22} {:<7} default={}",
            field.key(),
            field.kind().to_string(),
            field.get(&defaults)
        );
        if let Some((min, max, step)) = field.range() {
            line.push_str(&format!("  range {min}..{max} step {step}"));
        }
        println!("{line}");
    }
}

/// Format the field listing as JSON.
pub(crate) fn format_fields_json() -> Result<String> {
    let defaults = ThemeSettings::default();
    let fields: Vec<_> = SettingField::ALL
        .into_iter()
        .map(|field| {
            let range = field.range().map(|(min, max, step)| {
                json!({ "min": min, "max": max, "step": step })
            });
            json!({
                "key": field.key(),
                "kind": field.kind().to_string(),
                "default": field.get(&defaults).to_string(),
                "range": range,
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&fields)?)
}

/// Print the selected fixture collections in a readable form.
pub(crate) fn print_gallery_plain(gallery: &dyn GalleryProvider, selection: GallerySelection) {
    let everything = selection.everything();

    if everything || selection.stats {
        let stats = gallery.admin_stats();
        println!("authors: {}", stats.total_authors);
        println!("artworks: {}", stats.total_artworks);
        println!("views: {}", stats.total_views);
        println!("sales: {}", stats.total_sales);
    }

    if everything || selection.authors {
        for author in gallery.authors() {
            println!(
                "{}: {} artworks, {} followers [{}]",
                author.name,
                author.artworks_count,
                author.followers_count,
                author.categories.join(", ")
            );
        }
    }

    if everything || selection.artworks {
        for artwork in gallery.artworks() {
            println!(
                "{} by {} ({}), {} лв., {}",
                artwork.title, artwork.artist, artwork.category, artwork.price, artwork.year
            );
        }
    }
}

/// Format the selected fixture collections as a JSON document.
pub(crate) fn format_gallery_json(
    gallery: &dyn GalleryProvider,
    selection: GallerySelection,
) -> Result<String> {
    let everything = selection.everything();
    let mut payload = serde_json::Map::new();

    if everything || selection.stats {
        payload.insert("stats".into(), serde_json::to_value(gallery.admin_stats())?);
    }
    if everything || selection.authors {
        payload.insert("authors".into(), serde_json::to_value(gallery.authors())?);
    }
    if everything || selection.artworks {
        payload.insert("artworks".into(), serde_json::to_value(gallery.artworks())?);
    }

    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
        payload,
    ))?)
}

#[cfg(test)]
mod tests {
    use galleria::gallery::FixtureGallery;
    use serde_json::Value;

    use super::*;

    #[test]
    fn settings_json_is_the_export_document() {
        let settings = ThemeSettings::default();
        let json = format_settings_json(&settings).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["primaryColor"], "#dc2626");
        assert_eq!(value["fontSize"], 16);
    }

    #[test]
    fn fields_json_lists_all_fields() {
        let json = format_fields_json().expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        let fields = value.as_array().expect("array");
        assert_eq!(fields.len(), 23);
        assert_eq!(fields[0]["key"], "primaryColor");
        assert_eq!(fields[0]["kind"], "text");
        assert!(fields[0]["range"].is_null());
    }

    #[test]
    fn gallery_json_honours_the_selection() {
        let selection = GallerySelection {
            stats: true,
            ..GallerySelection::default()
        };
        let json = format_gallery_json(&FixtureGallery, selection).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");

        assert_eq!(value["stats"]["total_views"], 12_340);
        assert!(value.get("authors").is_none());
        assert!(value.get("artworks").is_none());
    }
}
