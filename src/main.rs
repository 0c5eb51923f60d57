use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use wellpulse::cli::{Cli, Commands};
use wellpulse::config::Config;
use wellpulse::{briefing, engine, gateway, providers};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let config = Config::load_or_init()?;

    match cli.command {
        Commands::Recommend { file, score } => {
            let records = read_records(&file)?;
            let report = engine::recommend(&records, score)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Brief {
            file,
            score,
            provider,
            model,
            temperature,
        } => {
            let records = read_records(&file)?;
            let report = engine::recommend(&records, score)?;

            let provider_name = provider
                .or_else(|| config.default_provider.clone())
                .unwrap_or_else(|| "openai".to_string());
            let provider = providers::create_provider(&provider_name, config.api_key.as_deref())?;
            let model = model
                .or(config.default_model)
                .unwrap_or_else(|| "gpt-4o-mini".to_string());
            let temperature = temperature.unwrap_or(config.default_temperature);

            let message =
                briefing::compose_briefing(provider.as_ref(), &report, &model, temperature).await?;
            println!("{message}");
        }

        Commands::Gateway { host, port } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            gateway::run_gateway(&host, port, config).await?;
        }
    }

    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<serde_json::Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of score records", path.display()))
}
