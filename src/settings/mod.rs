//! Application configuration for the `galleria` binary.
//!
//! Layers default configuration files, environment variables and CLI
//! overrides in the usual precedence order: CLI flags win, then environment,
//! then config files. `load` is the entry point and returns the
//! [`ResolvedConfig`] consumed by the workflow.

mod sources;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use galleria::app_dirs;

use crate::cli::{CliArgs, OutputFormat};

/// Name of the working settings file kept between invocations.
pub(crate) const WORKING_FILE_NAME: &str = "theme.json";

/// Mirror of the configuration file representation before CLI overrides are
/// applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    theme_file: Option<PathBuf>,
    output: Option<String>,
}

/// Fully resolved configuration used by the workflow.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) theme_file: PathBuf,
    pub(crate) output: OutputFormat,
}

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = sources::build_config(cli)?;
    let raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;

    let theme_file = match cli.theme_file.clone().or(raw.theme_file) {
        Some(path) => path,
        None => app_dirs::get_config_dir()?.join(WORKING_FILE_NAME),
    };

    let output = match (cli.output, raw.output.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => OutputFormat::from_name(name)
            .ok_or_else(|| anyhow!("unknown output format: {name}"))?,
        (None, None) => OutputFormat::Plain,
    };

    Ok(ResolvedConfig { theme_file, output })
}
