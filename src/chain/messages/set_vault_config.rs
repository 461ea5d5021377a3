use serde::{Serialize, Deserialize};
use super::{ExecuteMsg, MessageBuilder};
use crate::types::VaultConfig;

/// Message storing the config the mock reports for a vault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetVaultConfigMsg {
    pub address: String,
    pub config: VaultConfig,
}

impl SetVaultConfigMsg {
    pub fn new(address: impl Into<String>, config: VaultConfig) -> Self {
        Self {
            address: address.into(),
            config,
        }
    }
}

impl MessageBuilder for SetVaultConfigMsg {
    fn build_msg(&self) -> ExecuteMsg {
        ExecuteMsg::SetVaultConfig {
            address: self.address.clone(),
            config: self.config.clone(),
        }
    }
}
