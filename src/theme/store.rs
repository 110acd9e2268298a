use tracing::{debug, error, info};

use super::error::ThemeError;
use super::field::{SettingField, SettingValue};
use super::io;
use super::settings::ThemeSettings;

/// Owns the live settings record and the preview flag.
///
/// This is the single update entry point for every customizer control. The
/// record is replaced wholesale on reset and successful import, and
/// field-by-field through [`update`](Self::update); nothing edits it in
/// place.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    settings: ThemeSettings,
    preview: bool,
}

impl ThemeStore {
    /// Create a store seeded from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store around an existing record, preview off.
    #[must_use]
    pub fn from_settings(settings: ThemeSettings) -> Self {
        Self {
            settings,
            preview: false,
        }
    }

    /// The current settings record.
    #[must_use]
    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Replace one field, producing a fresh record.
    pub fn update(&mut self, field: SettingField, value: SettingValue) -> Result<(), ThemeError> {
        self.settings = field.apply(&self.settings, value)?;
        debug!(field = field.key(), "updated theme setting");
        Ok(())
    }

    /// Restore the default configuration wholesale. No confirmation, no
    /// undo.
    pub fn reset(&mut self) {
        self.settings = ThemeSettings::default();
        info!("theme settings reset to default");
    }

    /// Serialize the current record as an indented export document.
    pub fn export_json(&self) -> serde_json::Result<String> {
        io::render_settings(&self.settings)
    }

    /// Apply an import document, replacing the record wholesale.
    ///
    /// On parse failure the error goes to the diagnostic channel and the
    /// current record is left untouched. Returns whether the document was
    /// applied; callers surface no error to the user either way.
    pub fn import_json(&mut self, text: &str) -> bool {
        match io::parse_settings(text) {
            Ok(settings) => {
                self.settings = settings;
                info!("theme imported successfully");
                true
            }
            Err(err) => {
                error!(%err, "error importing theme");
                false
            }
        }
    }

    /// Flip the preview flag, returning the new state.
    ///
    /// The flag is stored but drives nothing; it exists so the customizer
    /// can label its toggle button.
    pub fn toggle_preview(&mut self) -> bool {
        self.preview = !self.preview;
        debug!(enabled = self.preview, "preview mode toggled");
        self.preview
    }

    /// Whether preview mode is currently on.
    #[must_use]
    pub fn preview_enabled(&self) -> bool {
        self.preview
    }
}
