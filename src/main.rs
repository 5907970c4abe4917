use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use countrydeck::config::Config;
use countrydeck::loader::{CountrySource, RestCountriesClient};
use countrydeck::logging::init_tracing;
use countrydeck::ui;

#[derive(Parser, Debug)]
#[command(
    name = "countrydeck",
    version,
    about = "Browse, filter and rank the countries of the world in your terminal"
)]
struct Cli {
    /// Config file (default: ~/.config/countrydeck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the countries endpoint from config
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u32>,
}

fn main() {
    let cli = Cli::parse();
    if let Some(path) = init_tracing() {
        tracing::info!(path = %path.display(), "Logging enabled");
    }

    if let Err(err) = run(&cli) {
        tracing::error!("Exiting with error: {err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let source: Arc<dyn CountrySource> = Arc::new(RestCountriesClient::new(&config.source)?);
    ui::runtime::run(&config, source, runtime.handle()).context("Terminal UI failed")?;

    runtime.shutdown_background();
    Ok(())
}

/// Config file first, then command-line overrides, then validation.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(endpoint) = &cli.endpoint {
        config.source.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.source.timeout_seconds = timeout;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "countrydeck",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--endpoint",
            "http://127.0.0.1:9/all",
            "--timeout",
            "7",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.source.endpoint, "http://127.0.0.1:9/all");
        assert_eq!(config.source.timeout_seconds, 7);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "countrydeck",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--timeout",
            "0",
        ]);
        assert!(resolve_config(&cli).is_err());
    }
}
