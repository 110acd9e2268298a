use std::fmt;
use std::str::FromStr;

use super::error::ThemeError;
use super::settings::ThemeSettings;

/// Identifies one field of the [`ThemeSettings`] record.
///
/// Every control in the customizer is bound to exactly one variant; the
/// variant's [`key`](Self::key) is the camelCase name used in exported
/// documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    PrimaryColor,
    BackgroundColor,
    TextColor,
    MenuBackgroundColor,
    MenuTextColor,
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    HeaderHeight,
    MenuSpacing,
    ContentMargins,
    BorderRadius,
    BlurIntensity,
    BlurPeriphery,
    ShadowIntensity,
    AnimationSpeed,
    LogoUrl,
    FaviconUrl,
    BackgroundImageUrl,
    BackgroundOpacity,
    BackgroundPosition,
}

/// The kind of value a field stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("text"),
            FieldKind::Number => f.write_str("number"),
        }
    }
}

/// A value destined for one settings field.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Text(String),
    Number(f64),
}

impl SettingValue {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            SettingValue::Text(_) => FieldKind::Text,
            SettingValue::Number(_) => FieldKind::Number,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(value) => f.write_str(value),
            SettingValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Number(value)
    }
}

impl SettingField {
    /// Every field of the record, in document order.
    pub const ALL: [SettingField; 23] = [
        SettingField::PrimaryColor,
        SettingField::BackgroundColor,
        SettingField::TextColor,
        SettingField::MenuBackgroundColor,
        SettingField::MenuTextColor,
        SettingField::FontFamily,
        SettingField::FontSize,
        SettingField::FontWeight,
        SettingField::LineHeight,
        SettingField::LetterSpacing,
        SettingField::HeaderHeight,
        SettingField::MenuSpacing,
        SettingField::ContentMargins,
        SettingField::BorderRadius,
        SettingField::BlurIntensity,
        SettingField::BlurPeriphery,
        SettingField::ShadowIntensity,
        SettingField::AnimationSpeed,
        SettingField::LogoUrl,
        SettingField::FaviconUrl,
        SettingField::BackgroundImageUrl,
        SettingField::BackgroundOpacity,
        SettingField::BackgroundPosition,
    ];

    /// The camelCase key used in exported documents.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SettingField::PrimaryColor => "primaryColor",
            SettingField::BackgroundColor => "backgroundColor",
            SettingField::TextColor => "textColor",
            SettingField::MenuBackgroundColor => "menuBackgroundColor",
            SettingField::MenuTextColor => "menuTextColor",
            SettingField::FontFamily => "fontFamily",
            SettingField::FontSize => "fontSize",
            SettingField::FontWeight => "fontWeight",
            SettingField::LineHeight => "lineHeight",
            SettingField::LetterSpacing => "letterSpacing",
            SettingField::HeaderHeight => "headerHeight",
            SettingField::MenuSpacing => "menuSpacing",
            SettingField::ContentMargins => "contentMargins",
            SettingField::BorderRadius => "borderRadius",
            SettingField::BlurIntensity => "blurIntensity",
            SettingField::BlurPeriphery => "blurPeriphery",
            SettingField::ShadowIntensity => "shadowIntensity",
            SettingField::AnimationSpeed => "animationSpeed",
            SettingField::LogoUrl => "logoUrl",
            SettingField::FaviconUrl => "faviconUrl",
            SettingField::BackgroundImageUrl => "backgroundImageUrl",
            SettingField::BackgroundOpacity => "backgroundOpacity",
            SettingField::BackgroundPosition => "backgroundPosition",
        }
    }

    /// Whether the field stores text or a number.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            SettingField::PrimaryColor
            | SettingField::BackgroundColor
            | SettingField::TextColor
            | SettingField::MenuBackgroundColor
            | SettingField::MenuTextColor
            | SettingField::FontFamily
            | SettingField::FontWeight
            | SettingField::LogoUrl
            | SettingField::FaviconUrl
            | SettingField::BackgroundImageUrl
            | SettingField::BackgroundPosition => FieldKind::Text,
            _ => FieldKind::Number,
        }
    }

    /// Control metadata for numeric fields: the `(min, max, step)` enforced
    /// by the bound slider. The mutator itself performs no range checks.
    #[must_use]
    pub fn range(self) -> Option<(f64, f64, f64)> {
        match self {
            SettingField::FontSize => Some((12.0, 24.0, 1.0)),
            SettingField::LineHeight => Some((1.0, 2.5, 0.1)),
            SettingField::HeaderHeight => Some((48.0, 120.0, 4.0)),
            SettingField::MenuSpacing => Some((8.0, 64.0, 4.0)),
            SettingField::ContentMargins => Some((8.0, 48.0, 4.0)),
            SettingField::BorderRadius => Some((0.0, 20.0, 1.0)),
            SettingField::BlurIntensity => Some((0.0, 32.0, 1.0)),
            SettingField::BlurPeriphery => Some((0.0, 16.0, 1.0)),
            SettingField::ShadowIntensity => Some((0.0, 0.5, 0.05)),
            SettingField::AnimationSpeed => Some((100.0, 500.0, 50.0)),
            SettingField::BackgroundOpacity => Some((0.0, 1.0, 0.05)),
            _ => None,
        }
    }

    /// Read this field's current value out of a settings record.
    #[must_use]
    pub fn get(self, settings: &ThemeSettings) -> SettingValue {
        match self {
            SettingField::PrimaryColor => settings.primary_color.as_str().into(),
            SettingField::BackgroundColor => settings.background_color.as_str().into(),
            SettingField::TextColor => settings.text_color.as_str().into(),
            SettingField::MenuBackgroundColor => settings.menu_background_color.as_str().into(),
            SettingField::MenuTextColor => settings.menu_text_color.as_str().into(),
            SettingField::FontFamily => settings.font_family.as_str().into(),
            SettingField::FontSize => f64::from(settings.font_size).into(),
            SettingField::FontWeight => settings.font_weight.as_str().into(),
            SettingField::LineHeight => settings.line_height.into(),
            SettingField::LetterSpacing => settings.letter_spacing.into(),
            SettingField::HeaderHeight => f64::from(settings.header_height).into(),
            SettingField::MenuSpacing => f64::from(settings.menu_spacing).into(),
            SettingField::ContentMargins => f64::from(settings.content_margins).into(),
            SettingField::BorderRadius => f64::from(settings.border_radius).into(),
            SettingField::BlurIntensity => f64::from(settings.blur_intensity).into(),
            SettingField::BlurPeriphery => f64::from(settings.blur_periphery).into(),
            SettingField::ShadowIntensity => settings.shadow_intensity.into(),
            SettingField::AnimationSpeed => f64::from(settings.animation_speed).into(),
            SettingField::LogoUrl => settings.logo_url.as_str().into(),
            SettingField::FaviconUrl => settings.favicon_url.as_str().into(),
            SettingField::BackgroundImageUrl => settings.background_image_url.as_str().into(),
            SettingField::BackgroundOpacity => settings.background_opacity.into(),
            SettingField::BackgroundPosition => settings.background_position.as_str().into(),
        }
    }

    /// Produce a new record identical to `current` except for this field.
    ///
    /// This is the single mutation path for every control. Values are not
    /// range-checked here; sliders clamp on their own and free-text inputs
    /// accept anything, matching the customizer's contract.
    pub fn apply(
        self,
        current: &ThemeSettings,
        value: SettingValue,
    ) -> Result<ThemeSettings, ThemeError> {
        let mut next = current.clone();
        match (self, value) {
            (SettingField::PrimaryColor, SettingValue::Text(v)) => next.primary_color = v,
            (SettingField::BackgroundColor, SettingValue::Text(v)) => next.background_color = v,
            (SettingField::TextColor, SettingValue::Text(v)) => next.text_color = v,
            (SettingField::MenuBackgroundColor, SettingValue::Text(v)) => {
                next.menu_background_color = v;
            }
            (SettingField::MenuTextColor, SettingValue::Text(v)) => next.menu_text_color = v,
            (SettingField::FontFamily, SettingValue::Text(v)) => next.font_family = v,
            (SettingField::FontSize, SettingValue::Number(v)) => next.font_size = v as u32,
            (SettingField::FontWeight, SettingValue::Text(v)) => next.font_weight = v,
            (SettingField::LineHeight, SettingValue::Number(v)) => next.line_height = v,
            (SettingField::LetterSpacing, SettingValue::Number(v)) => next.letter_spacing = v,
            (SettingField::HeaderHeight, SettingValue::Number(v)) => next.header_height = v as u32,
            (SettingField::MenuSpacing, SettingValue::Number(v)) => next.menu_spacing = v as u32,
            (SettingField::ContentMargins, SettingValue::Number(v)) => {
                next.content_margins = v as u32;
            }
            (SettingField::BorderRadius, SettingValue::Number(v)) => next.border_radius = v as u32,
            (SettingField::BlurIntensity, SettingValue::Number(v)) => {
                next.blur_intensity = v as u32;
            }
            (SettingField::BlurPeriphery, SettingValue::Number(v)) => {
                next.blur_periphery = v as u32;
            }
            (SettingField::ShadowIntensity, SettingValue::Number(v)) => next.shadow_intensity = v,
            (SettingField::AnimationSpeed, SettingValue::Number(v)) => {
                next.animation_speed = v as u32;
            }
            (SettingField::LogoUrl, SettingValue::Text(v)) => next.logo_url = v,
            (SettingField::FaviconUrl, SettingValue::Text(v)) => next.favicon_url = v,
            (SettingField::BackgroundImageUrl, SettingValue::Text(v)) => {
                next.background_image_url = v;
            }
            (SettingField::BackgroundOpacity, SettingValue::Number(v)) => {
                next.background_opacity = v;
            }
            (SettingField::BackgroundPosition, SettingValue::Text(v)) => {
                next.background_position = v;
            }
            (field, value) => {
                return Err(ThemeError::WrongKind {
                    field: field.key(),
                    expected: field.kind(),
                    got: value.kind(),
                });
            }
        }
        Ok(next)
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingField {
    type Err = ThemeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SettingField::ALL
            .into_iter()
            .find(|field| field.key() == name)
            .ok_or_else(|| ThemeError::UnknownField(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    /// A probe value distinguishable from every default.
    fn probe_for(field: SettingField) -> SettingValue {
        match field.kind() {
            FieldKind::Text => SettingValue::Text("probe".into()),
            FieldKind::Number => SettingValue::Number(7.0),
        }
    }

    #[test]
    fn mutating_one_field_leaves_the_others_unchanged() {
        let defaults = ThemeSettings::default();
        let default_doc = serde_json::to_value(&defaults).expect("serialize defaults");

        for field in SettingField::ALL {
            let mutated = field
                .apply(&defaults, probe_for(field))
                .expect("apply probe");
            let mutated_doc = serde_json::to_value(&mutated).expect("serialize mutated");

            let default_map = default_doc.as_object().expect("object");
            let mutated_map = mutated_doc.as_object().expect("object");

            for (key, value) in default_map {
                if key == field.key() {
                    assert_ne!(mutated_map[key], *value, "{key} should have changed");
                } else {
                    assert_eq!(mutated_map[key], *value, "{key} should be untouched");
                }
            }
        }
    }

    #[test]
    fn apply_replaces_rather_than_edits() {
        let defaults = ThemeSettings::default();
        let next = SettingField::PrimaryColor
            .apply(&defaults, "#00ff00".into())
            .expect("apply");

        assert_eq!(defaults.primary_color, "#dc2626");
        assert_eq!(next.primary_color, "#00ff00");
    }

    #[test]
    fn wrong_value_kind_is_rejected() {
        let defaults = ThemeSettings::default();
        let err = SettingField::FontSize
            .apply(&defaults, SettingValue::Text("large".into()))
            .expect_err("text into numeric field");

        assert_eq!(
            err,
            ThemeError::WrongKind {
                field: "fontSize",
                expected: FieldKind::Number,
                got: FieldKind::Text,
            }
        );
    }

    #[test]
    fn field_names_round_trip_through_their_keys() {
        for field in SettingField::ALL {
            assert_eq!(field.key().parse::<SettingField>(), Ok(field));
        }
        assert_eq!(
            "primary_color".parse::<SettingField>(),
            Err(ThemeError::UnknownField("primary_color".into()))
        );
    }

    #[test]
    fn keys_match_the_serialized_document() {
        let doc = serde_json::to_value(ThemeSettings::default()).expect("serialize");
        let Value::Object(map) = doc else {
            panic!("settings serialize to an object");
        };

        for field in SettingField::ALL {
            assert!(map.contains_key(field.key()), "missing {}", field.key());
        }
    }

    #[test]
    fn numeric_fields_carry_control_ranges() {
        for field in SettingField::ALL {
            match field.kind() {
                FieldKind::Text => assert!(field.range().is_none()),
                FieldKind::Number => {
                    // letterSpacing has no slider bound to it.
                    if field != SettingField::LetterSpacing {
                        let (min, max, step) = field.range().expect("range");
                        assert!(min < max);
                        assert!(step > 0.0);
                    }
                }
            }
        }
    }
}
