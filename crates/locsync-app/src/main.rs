use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use locsync_config::DEFAULT_CONFIG_FILE;
use locsync_core::store;
use locsync_translator::AzureTranslator;
use tracing_subscriber::EnvFilter;

pub mod config_file;
pub mod status;
pub mod sync;


use self::config_file::load_or_create_config;
use self::sync::Synchronizer;

/// Fill missing keys in localization files by machine translation
#[derive(Parser)]
#[command(name = "locale-sync", version)]
struct Cli {
    /// Config file, created with defaults when absent
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// List missing keys per language without translating anything
    #[arg(long)]
    dry_run: bool,

    /// Process only these languages instead of the configured list
    #[arg(long = "language", value_name = "ID")]
    languages: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // A missing .env is fine
    dotenvy::dotenv().ok();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let project_dir = std::env::current_dir().context("Failed to read working directory")?;

    let mut config = load_or_create_config(&project_dir.join(&cli.config))?;
    config.translator.apply_env();
    config.resolve_paths(&project_dir);
    if !cli.languages.is_empty() {
        config.languages = cli.languages;
    }

    if config.translator.has_placeholder_credentials() && !cli.dry_run {
        tracing::warn!("Azure credentials are not set, translation requests will fail");
    }

    let source = store::load_source(&config.language_source)?;

    let translator = AzureTranslator::new(
        config.translator.azure_api_key.clone(),
        config.translator.azure_api_region.clone(),
        config.translator.azure_endpoint.clone(),
        config.translator.request_timeout(),
    )?;

    let report = Synchronizer::new(&config, source, Arc::new(translator))
        .dry_run(cli.dry_run)
        .run()
        .await?;
    report.log_summary();

    let failures = report.failures();
    if failures > 0 {
        anyhow::bail!("{failures} of {} languages failed", report.outcomes.len());
    }

    tracing::info!("All translations completed!");
    Ok(())
}
