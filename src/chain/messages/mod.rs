mod set_positions_response;
mod set_allowed_coins;
mod set_vault_config;

pub use set_positions_response::SetPositionsResponseMsg;
pub use set_allowed_coins::SetAllowedCoinsMsg;
pub use set_vault_config::SetVaultConfigMsg;

use serde::{Serialize, Deserialize};

use crate::types::{Positions, VaultConfig};
use super::error::Result;

/// ExecuteMsg of the mock credit manager contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetPositionsResponse { account_id: String, positions: Positions },
    SetAllowedCoins {},
    SetVaultConfig { address: String, config: VaultConfig },
}

impl ExecuteMsg {
    /// Top-level JSON key this message serializes under
    pub fn name(&self) -> &'static str {
        match self {
            ExecuteMsg::SetPositionsResponse { .. } => "set_positions_response",
            ExecuteMsg::SetAllowedCoins {} => "set_allowed_coins",
            ExecuteMsg::SetVaultConfig { .. } => "set_vault_config",
        }
    }
}

/// The contract takes an empty instantiate message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstantiateMsg {}

/// Helper trait for building messages
pub trait MessageBuilder {
    /// Build the ExecuteMsg for this message
    fn build_msg(&self) -> ExecuteMsg;

    /// Serialize the message to JSON bytes
    fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let msg = self.build_msg();
        Ok(serde_json::to_vec(&msg)?)
    }
}

impl MessageBuilder for ExecuteMsg {
    fn build_msg(&self) -> ExecuteMsg {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_execute_msg_is_externally_tagged() {
        let bytes = ExecuteMsg::SetAllowedCoins {}.to_json_bytes().unwrap();
        assert_eq!(bytes, br#"{"set_allowed_coins":{}}"#);

        let decoded: ExecuteMsg = serde_json::from_value(json!({"set_allowed_coins": {}})).unwrap();
        assert_eq!(decoded.name(), "set_allowed_coins");
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let decoded = serde_json::from_value::<ExecuteMsg>(json!({"update_config": {}}));
        assert!(decoded.is_err());
    }

    #[test]
    fn test_instantiate_msg_is_empty_object() {
        assert_eq!(serde_json::to_string(&InstantiateMsg {}).unwrap(), "{}");
    }
}
