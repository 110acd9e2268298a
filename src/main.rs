mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use tracing_subscriber::EnvFilter;
use workflow::ThemeWorkflow;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    ThemeWorkflow::from_config(resolved).run(cli.command)
}
