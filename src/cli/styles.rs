use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use galleria::app_dirs;
use galleria::theme::{SettingField, ThemeSettings};

use crate::settings::WORKING_FILE_NAME;

/// Produce the full version banner: where the working theme file lives and
/// how many fields the record carries.
pub(super) fn long_version() -> &'static str {
    let mut details = format!("galleria {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);

    match app_dirs::get_config_dir() {
        Ok(dir) => {
            let _ = writeln!(details, "config directory: {}", dir.display());
            let _ = writeln!(
                details,
                "working theme file: {}",
                dir.join(WORKING_FILE_NAME).display()
            );
        }
        Err(err) => {
            let _ = writeln!(details, "config directory: unavailable ({err})");
        }
    }

    let defaults = ThemeSettings::default();
    let _ = writeln!(
        details,
        "theme fields: {} (default accent {})",
        SettingField::ALL.len(),
        defaults.primary_color
    );

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}
