mod args;
mod options;
mod output;
mod styles;

use clap::Parser;
pub(crate) use args::{CliArgs, Command, GallerySelection};
pub(crate) use options::OutputFormat;
pub(crate) use output::{
    format_fields_json, format_gallery_json, format_settings_json, print_fields_plain,
    print_gallery_plain, print_settings_plain,
};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
