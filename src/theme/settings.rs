use serde::{Deserialize, Serialize};

/// Font families offered by the typography controls.
pub const FONT_FAMILIES: [&str; 6] = [
    "Inter",
    "Playfair Display",
    "JetBrains Mono",
    "Open Sans",
    "Roboto",
    "Montserrat",
];

/// Font weights offered by the typography controls, string-encoded as the
/// exported document stores them.
pub const FONT_WEIGHTS: [&str; 5] = ["300", "400", "500", "600", "700"];

/// Background positions offered by the media controls.
pub const BACKGROUND_POSITIONS: [&str; 5] = ["center", "top", "bottom", "left", "right"];

/// The flat record of style-configuration fields driven by the customizer.
///
/// Every field always carries a value; [`ThemeSettings::default`] supplies
/// the stock gallery look. The record is immutable-by-replacement: controls
/// never edit it in place, they go through
/// [`SettingField::apply`](super::SettingField::apply) which yields a new
/// record.
///
/// Serialization uses the camelCase keys of the exported document. Missing
/// fields take their defaults on import and unknown fields are ignored, so a
/// partially edited export still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSettings {
    // Colors
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub menu_background_color: String,
    pub menu_text_color: String,

    // Typography
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: String,
    pub line_height: f64,
    pub letter_spacing: f64,

    // Layout
    pub header_height: u32,
    pub menu_spacing: u32,
    pub content_margins: u32,
    pub border_radius: u32,

    // Effects
    pub blur_intensity: u32,
    pub blur_periphery: u32,
    pub shadow_intensity: f64,
    pub animation_speed: u32,

    // Media
    pub logo_url: String,
    pub favicon_url: String,
    pub background_image_url: String,
    pub background_opacity: f64,
    pub background_position: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: "#dc2626".into(),
            background_color: "#ffffff".into(),
            text_color: "#1f2937".into(),
            menu_background_color: "#f9fafb".into(),
            menu_text_color: "#374151".into(),
            font_family: "Inter".into(),
            font_size: 16,
            font_weight: "400".into(),
            line_height: 1.6,
            letter_spacing: 0.0,
            header_height: 64,
            menu_spacing: 32,
            content_margins: 24,
            border_radius: 8,
            blur_intensity: 12,
            blur_periphery: 4,
            shadow_intensity: 0.1,
            animation_speed: 200,
            logo_url: String::new(),
            favicon_url: String::new(),
            background_image_url: String::new(),
            background_opacity: 0.1,
            background_position: "center".into(),
        }
    }
}
