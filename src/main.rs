use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mock_cm_composer::chain::{parse_coins, ExecuteEnvelope, MessageComposer};
use mock_cm_composer::config::{Config, OutputFormat};
use mock_cm_composer::types::{Positions, VaultConfig};

#[derive(Parser)]
#[command(name = "mock-cm-composer")]
#[command(about = "Compose execute messages for the mock credit manager contract", version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Sender address, overrides the config file
    #[arg(long, global = true)]
    sender: Option<String>,

    /// Contract address, overrides the config file
    #[arg(long, global = true)]
    contract: Option<String>,

    /// Attached funds, e.g. "100uosmo,25uatom"
    #[arg(long, global = true)]
    funds: Option<String>,

    /// Output encoding
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a default configuration file
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,
    },

    /// Seed the positions returned for a credit account
    SetPositionsResponse {
        #[arg(long)]
        account_id: String,

        /// JSON file holding the positions
        #[arg(long)]
        positions: PathBuf,
    },

    /// Refresh the allowed coin list
    SetAllowedCoins,

    /// Store the config reported for a vault
    SetVaultConfig {
        /// Vault address
        #[arg(long)]
        address: String,

        /// JSON file holding the vault config
        #[arg(long)]
        vault_config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_cm_composer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Commands::Init { output } = &cli.command {
        Config::default().save(output)?;
        info!("Configuration file created at: {}", output.display());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let composer = MessageComposer::new(
        cli.sender.clone().unwrap_or(config.composer.sender.clone()),
        cli.contract.clone().unwrap_or(config.composer.contract_address.clone()),
    );
    let funds = match cli.funds.as_deref().or(config.composer.funds.as_deref()) {
        Some(text) => Some(parse_coins(text)?),
        None => None,
    };
    let format = cli.format.unwrap_or(config.output.format);

    let envelope = match cli.command {
        Commands::SetPositionsResponse { account_id, positions } => {
            let positions: Positions = read_json(&positions)?;
            composer.set_positions_response(account_id, positions, funds)?
        }
        Commands::SetAllowedCoins => composer.set_allowed_coins(funds)?,
        Commands::SetVaultConfig { address, vault_config } => {
            let vault_config: VaultConfig = read_json(&vault_config)?;
            composer.set_vault_config(address, vault_config, funds)?
        }
        Commands::Init { .. } => unreachable!("handled above"),
    };

    info!(
        "Composed {} for contract {}",
        envelope.decode_msg()?.name(),
        composer.contract_address()
    );
    println!("{}", render(&envelope, format)?);

    Ok(())
}

/// Config file is optional when sender and contract are given on the command line
fn load_config(cli: &Cli) -> Result<Config> {
    if cli.config.exists() {
        return Config::load(&cli.config)
            .with_context(|| format!("failed to load {}", cli.config.display()));
    }
    if cli.sender.is_none() || cli.contract.is_none() {
        anyhow::bail!(
            "{} not found; run `init` or pass --sender and --contract",
            cli.config.display()
        );
    }
    Ok(Config::default())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn render(envelope: &ExecuteEnvelope, format: OutputFormat) -> Result<String> {
    use prost::Message;

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&envelope.to_json()?)?,
        OutputFormat::Hex => hex::encode(envelope.to_any().encode_to_vec()),
        OutputFormat::Base64 => BASE64.encode(envelope.to_any().encode_to_vec()),
    })
}
