use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::chain::MessageComposer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub composer: ComposerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Account that will sign the execute message
    pub sender: String,
    pub contract_address: String,
    /// Default funds in "<amount><denom>,..." form
    #[serde(default)]
    pub funds: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Encode object with the payload inlined
    #[default]
    Json,
    /// Protobuf Any, hex encoded
    Hex,
    /// Protobuf Any, base64 encoded
    Base64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            composer: ComposerConfig {
                sender: "osmo1cyyzpxplxdzkeea7kwsydadg87357qnahakaks".to_string(),
                contract_address: "osmo14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9sq2r9g9".to_string(),
                funds: None,
            },
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn composer(&self) -> MessageComposer {
        MessageComposer::new(&self.composer.sender, &self.composer.contract_address)
    }
}
