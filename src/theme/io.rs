//! Serialization of [`ThemeSettings`] for manual save and restore.
//!
//! The exported document is the indented JSON a user downloads from the
//! customizer; import accepts the same document back. Parsing is structural
//! only: no schema validation happens beyond what deserialization needs.

use super::settings::ThemeSettings;

/// Canonical file name offered when exporting the settings record.
pub const EXPORT_FILE_NAME: &str = "theme-settings.json";

/// Render the record as the indented export document.
pub fn render_settings(settings: &ThemeSettings) -> serde_json::Result<String> {
    serde_json::to_string_pretty(settings)
}

/// Parse an export document back into a settings record.
///
/// Missing fields take their defaults and unknown fields are ignored. A
/// malformed document is the only failure.
pub fn parse_settings(text: &str) -> serde_json::Result<ThemeSettings> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{SettingField, SettingValue};

    #[test]
    fn export_then_import_is_identity() {
        let mut settings = ThemeSettings::default();
        settings = SettingField::PrimaryColor
            .apply(&settings, "#123456".into())
            .expect("apply");
        settings = SettingField::LineHeight
            .apply(&settings, SettingValue::Number(2.2))
            .expect("apply");
        settings = SettingField::BackgroundImageUrl
            .apply(&settings, "https://example.com/bg.jpg".into())
            .expect("apply");

        let document = render_settings(&settings).expect("render");
        let restored = parse_settings(&document).expect("parse");

        assert_eq!(restored, settings);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let restored = parse_settings(r##"{ "primaryColor": "#00ff00" }"##).expect("parse");

        assert_eq!(restored.primary_color, "#00ff00");
        assert_eq!(restored.font_family, "Inter");
        assert_eq!(restored.animation_speed, 200);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let restored =
            parse_settings(r##"{ "primaryColor": "#00ff00", "glitter": true }"##).expect("parse");

        assert_eq!(restored.primary_color, "#00ff00");
    }

    #[test]
    fn malformed_documents_fail_to_parse() {
        assert!(parse_settings("not json at all").is_err());
        assert!(parse_settings(r#"{ "fontSize": "sixteen" }"#).is_err());
    }
}
