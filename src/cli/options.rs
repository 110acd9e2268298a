use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    /// Resolve a format from its configuration-file spelling.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(OutputFormat::Plain),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
