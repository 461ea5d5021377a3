use super::{ExecuteMsg, MessageBuilder};
use crate::types::Positions;

/// Message seeding the positions the mock returns for an account
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SetPositionsResponseMsg {
    /// Credit account the response is stored under
    pub account_id: String,
    pub positions: Positions,
}

impl SetPositionsResponseMsg {
    pub fn new(account_id: impl Into<String>, positions: Positions) -> Self {
        Self {
            account_id: account_id.into(),
            positions,
        }
    }
}

impl MessageBuilder for SetPositionsResponseMsg {
    fn build_msg(&self) -> ExecuteMsg {
        ExecuteMsg::SetPositionsResponse {
            account_id: self.account_id.clone(),
            positions: self.positions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DebtAmount, VaultAmount, VaultBase, VaultPosition, VaultPositionAmount};
    use cosmwasm_std::{coin, Addr, Uint128};
    use serde_json::{json, Value};

    fn sample_positions() -> Positions {
        Positions {
            account_id: "42".to_string(),
            deposits: vec![coin(300, "uosmo")],
            debts: vec![DebtAmount {
                denom: "uatom".to_string(),
                shares: Uint128::new(1_000_000),
                amount: Uint128::new(51),
            }],
            lends: vec![],
            vaults: vec![VaultPosition {
                vault: VaultBase { address: Addr::unchecked("osmo1vault") },
                amount: VaultPositionAmount::Unlocked(VaultAmount::new(9)),
            }],
        }
    }

    #[test]
    fn test_message_serialization() {
        let msg = SetPositionsResponseMsg::new("42", sample_positions());

        let value: Value = serde_json::from_slice(&msg.to_json_bytes().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "set_positions_response": {
                    "account_id": "42",
                    "positions": {
                        "account_id": "42",
                        "deposits": [{"denom": "uosmo", "amount": "300"}],
                        "debts": [{"denom": "uatom", "shares": "1000000", "amount": "51"}],
                        "lends": [],
                        "vaults": [{"vault": {"address": "osmo1vault"}, "amount": {"unlocked": "9"}}]
                    }
                }
            })
        );
    }

    #[test]
    fn test_build_msg() {
        let msg = SetPositionsResponseMsg::new("7", Positions::empty("7"));

        match msg.build_msg() {
            ExecuteMsg::SetPositionsResponse { account_id, positions } => {
                assert_eq!(account_id, "7");
                assert_eq!(positions, Positions::empty("7"));
            }
            _ => panic!("Wrong message type"),
        }
    }
}
