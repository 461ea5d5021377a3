/// Composer for mock credit manager execute messages
/// Wraps contract payloads in MsgExecuteContract envelopes for a fixed sender and contract

use prost::Message;
use serde_json::{json, Value};

use super::error::{ComposeError, Result};
use super::messages::{
    ExecuteMsg, MessageBuilder, SetAllowedCoinsMsg, SetPositionsResponseMsg, SetVaultConfigMsg,
};
use super::proto::{Any, Coin, MsgExecuteContract, MSG_EXECUTE_CONTRACT_TYPE_URL};
use crate::types::{Positions, VaultConfig};

/// Encode object for a contract execution: type URL plus message value
#[derive(Clone, PartialEq)]
pub struct ExecuteEnvelope {
    pub type_url: String,
    pub value: MsgExecuteContract,
}

impl ExecuteEnvelope {
    /// Wrap the protobuf-encoded value in an Any
    pub fn to_any(&self) -> Any {
        Any {
            type_url: self.type_url.clone(),
            value: self.value.encode_to_vec(),
        }
    }

    /// Protobuf encoding of the value
    pub fn encode_to_vec(&self) -> Vec<u8> {
        self.value.encode_to_vec()
    }

    /// Read an envelope back from an Any
    pub fn from_any(any: &Any) -> Result<Self> {
        if any.type_url != MSG_EXECUTE_CONTRACT_TYPE_URL {
            return Err(ComposeError::UnexpectedTypeUrl(any.type_url.clone()));
        }
        Ok(Self {
            type_url: any.type_url.clone(),
            value: MsgExecuteContract::decode(any.value.as_slice())?,
        })
    }

    /// Payload parsed as generic JSON
    pub fn msg_json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.value.msg)?)
    }

    /// Payload parsed back into the contract's ExecuteMsg
    pub fn decode_msg(&self) -> Result<ExecuteMsg> {
        Ok(serde_json::from_slice(&self.value.msg)?)
    }

    /// Display form with the payload inlined as JSON
    pub fn to_json(&self) -> Result<Value> {
        Ok(json!({
            "typeUrl": self.type_url,
            "value": {
                "sender": self.value.sender,
                "contract": self.value.contract,
                "msg": self.msg_json()?,
                "funds": self.value.funds,
            },
        }))
    }
}

impl std::fmt::Debug for ExecuteEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecuteEnvelope")
            .field("type_url", &self.type_url)
            .field("sender", &self.value.sender)
            .field("contract", &self.value.contract)
            .field("msg", &String::from_utf8_lossy(&self.value.msg))
            .field("funds", &self.value.funds)
            .finish()
    }
}

/// Builds execute envelopes for one (sender, contract) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageComposer {
    sender: String,
    contract_address: String,
}

impl MessageComposer {
    pub fn new(sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            contract_address: contract_address.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    /// Wrap any contract message in an execute envelope
    pub fn execute<M: MessageBuilder + ?Sized>(
        &self,
        msg: &M,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecuteEnvelope> {
        let msg = msg.to_json_bytes()?;
        let funds = funds.unwrap_or_default();

        log::debug!(
            "Composed execute message for {}: {} bytes, {} coin(s)",
            self.contract_address,
            msg.len(),
            funds.len()
        );

        Ok(ExecuteEnvelope {
            type_url: MSG_EXECUTE_CONTRACT_TYPE_URL.to_string(),
            value: MsgExecuteContract {
                sender: self.sender.clone(),
                contract: self.contract_address.clone(),
                msg,
                funds,
            },
        })
    }

    pub fn set_positions_response(
        &self,
        account_id: impl Into<String>,
        positions: Positions,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecuteEnvelope> {
        self.execute(&SetPositionsResponseMsg::new(account_id, positions), funds)
    }

    pub fn set_allowed_coins(&self, funds: Option<Vec<Coin>>) -> Result<ExecuteEnvelope> {
        self.execute(&SetAllowedCoinsMsg::new(), funds)
    }

    pub fn set_vault_config(
        &self,
        address: impl Into<String>,
        config: VaultConfig,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecuteEnvelope> {
        self.execute(&SetVaultConfigMsg::new(address, config), funds)
    }
}
