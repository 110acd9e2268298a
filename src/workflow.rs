//! Translates CLI commands into theme-store operations and file IO.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use galleria::gallery::FixtureGallery;
use galleria::theme::{
    EXPORT_FILE_NAME, FieldKind, SettingField, SettingValue, ThemeStore, parse_settings,
};

use crate::cli::{
    Command, OutputFormat, format_fields_json, format_gallery_json, format_settings_json,
    print_fields_plain, print_gallery_plain, print_settings_plain,
};
use crate::settings::ResolvedConfig;

/// Drives the theme store across invocations via a working settings file.
pub(crate) struct ThemeWorkflow {
    store: ThemeStore,
    theme_file: PathBuf,
    output: OutputFormat,
}

impl ThemeWorkflow {
    /// Seed the store from the working file, or from defaults when the file
    /// is missing or unreadable.
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        let store = load_store(&config.theme_file);
        Self {
            store,
            theme_file: config.theme_file,
            output: config.output,
        }
    }

    pub(crate) fn run(mut self, command: Command) -> Result<()> {
        match command {
            Command::Show => self.show(),
            Command::Get { field } => self.get(&field),
            Command::Set { field, value } => self.set(&field, &value),
            Command::Reset => self.reset(),
            Command::Export { out } => self.export(out),
            Command::Import { file } => self.import(&file),
            Command::Preview => self.preview(),
            Command::Fields => self.fields(),
            Command::Gallery(selection) => match self.output {
                OutputFormat::Plain => {
                    print_gallery_plain(&FixtureGallery, selection);
                    Ok(())
                }
                OutputFormat::Json => {
                    println!("{}", format_gallery_json(&FixtureGallery, selection)?);
                    Ok(())
                }
            },
        }
    }

    fn show(&self) -> Result<()> {
        match self.output {
            OutputFormat::Plain => print_settings_plain(self.store.settings()),
            OutputFormat::Json => println!("{}", format_settings_json(self.store.settings())?),
        }
        Ok(())
    }

    fn get(&self, field: &str) -> Result<()> {
        let field: SettingField = field.parse()?;
        println!("{}", field.get(self.store.settings()));
        Ok(())
    }

    fn set(&mut self, field: &str, value: &str) -> Result<()> {
        let field: SettingField = field.parse()?;
        let value = match field.kind() {
            FieldKind::Text => SettingValue::Text(value.to_string()),
            FieldKind::Number => SettingValue::Number(
                value
                    .parse()
                    .with_context(|| format!("field '{field}' expects a number"))?,
            ),
        };

        self.store.update(field, value)?;
        self.save()
    }

    fn reset(&mut self) -> Result<()> {
        self.store.reset();
        self.save()
    }

    fn export(&self, out: Option<PathBuf>) -> Result<()> {
        let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
        let document = self.store.export_json()?;
        fs::write(&path, document)
            .with_context(|| format!("failed to write export to {}", path.display()))?;
        println!("exported to {}", path.display());
        Ok(())
    }

    fn import(&mut self, file: &Path) -> Result<()> {
        let text = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        // A document that fails to parse is logged and the record kept; the
        // customizer shows the user nothing either way.
        if self.store.import_json(&text) {
            self.save()?;
        }
        Ok(())
    }

    fn preview(&mut self) -> Result<()> {
        let enabled = self.store.toggle_preview();
        println!(
            "preview mode {}",
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }

    fn fields(&self) -> Result<()> {
        match self.output {
            OutputFormat::Plain => print_fields_plain(),
            OutputFormat::Json => println!("{}", format_fields_json()?),
        }
        Ok(())
    }

    /// Persist the current record to the working file.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.theme_file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let document = self.store.export_json()?;
        fs::write(&self.theme_file, document)
            .with_context(|| format!("failed to write {}", self.theme_file.display()))?;
        Ok(())
    }
}

/// Read the working file into a store; any failure means defaults.
fn load_store(path: &Path) -> ThemeStore {
    match fs::read_to_string(path) {
        Ok(text) => match parse_settings(&text) {
            Ok(settings) => ThemeStore::from_settings(settings),
            Err(err) => {
                debug!(%err, path = %path.display(), "working file unreadable, using defaults");
                ThemeStore::new()
            }
        },
        Err(_) => ThemeStore::new(),
    }
}
