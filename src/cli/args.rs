use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `galleria` binary.
#[derive(Parser, Debug)]
#[command(
    name = "galleria",
    version,
    long_version = long_version(),
    about = "Theme customizer and fixture inspector for the Galleria art site",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "GALLERIA_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long = "theme-file",
        value_name = "FILE",
        help = "Override the working settings file location (default: config directory)"
    )]
    pub(crate) theme_file: Option<PathBuf>,
    #[arg(
        short = 'o',
        long,
        value_enum,
        help = "Output format for printed records (default: plain)"
    )]
    pub(crate) output: Option<OutputFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Operations on the theme-settings record and the bundled fixtures.
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the working settings record.
    Show,
    /// Print a single field value.
    Get {
        /// Field key as it appears in the exported document, e.g. primaryColor.
        field: String,
    },
    /// Replace a single field value.
    Set {
        /// Field key as it appears in the exported document.
        field: String,
        /// New value; numeric fields accept any number the control would.
        value: String,
    },
    /// Restore the default configuration. No confirmation, no undo.
    Reset,
    /// Write the settings as a theme-settings.json export.
    Export {
        #[arg(
            long,
            value_name = "FILE",
            help = "Destination path (default: theme-settings.json in the current directory)"
        )]
        out: Option<PathBuf>,
    },
    /// Replace the settings from a previously exported document.
    Import {
        /// The document to read.
        file: PathBuf,
    },
    /// Toggle preview mode for this invocation.
    Preview,
    /// List every theme field with its kind, default and control range.
    Fields,
    /// Dump the bundled gallery fixtures.
    Gallery(GallerySelection),
}

/// Which fixture collections to dump; none selected means all of them.
#[derive(Args, Debug, Clone, Copy, Default)]
pub(crate) struct GallerySelection {
    #[arg(long, help = "Admin dashboard statistics")]
    pub(crate) stats: bool,
    #[arg(long, help = "Author profiles")]
    pub(crate) authors: bool,
    #[arg(long, help = "Artwork cards")]
    pub(crate) artworks: bool,
}

impl GallerySelection {
    pub(crate) fn everything(self) -> bool {
        !(self.stats || self.authors || self.artworks)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn set_command_captures_field_and_value() {
        let cli = CliArgs::parse_from(["galleria", "set", "primaryColor", "#00ff00"]);
        match cli.command {
            Command::Set { field, value } => {
                assert_eq!(field, "primaryColor");
                assert_eq!(value, "#00ff00");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_apply_before_the_subcommand() {
        let cli = CliArgs::parse_from([
            "galleria",
            "--theme-file",
            "/tmp/theme.json",
            "--output",
            "json",
            "show",
        ]);

        assert_eq!(cli.theme_file, Some(PathBuf::from("/tmp/theme.json")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Command::Show));
    }

    #[test]
    fn gallery_defaults_to_everything() {
        let cli = CliArgs::parse_from(["galleria", "gallery"]);
        match cli.command {
            Command::Gallery(selection) => assert!(selection.everything()),
            other => panic!("unexpected command {other:?}"),
        }

        let cli = CliArgs::parse_from(["galleria", "gallery", "--stats"]);
        match cli.command {
            Command::Gallery(selection) => {
                assert!(!selection.everything());
                assert!(selection.stats);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn export_accepts_an_output_path() {
        let cli = CliArgs::parse_from(["galleria", "export", "--out", "snapshot.json"]);
        match cli.command {
            Command::Export { out } => assert_eq!(out, Some(PathBuf::from("snapshot.json"))),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
