/// Protobuf definitions for the CosmWasm execute message
/// Field tags follow cosmos/base/v1beta1/coin.proto and cosmwasm/wasm/v1/tx.proto

pub use prost_types::Any;

/// Type URL of the generic contract execution message
pub const MSG_EXECUTE_CONTRACT_TYPE_URL: &str = "/cosmwasm.wasm.v1.MsgExecuteContract";

/// cosmos.base.v1beta1.Coin
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,

    /// Integer amount, kept as a string to avoid precision loss
    #[prost(string, tag = "2")]
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl ToString, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }
}

/// cosmwasm.wasm.v1.MsgExecuteContract
#[derive(Clone, PartialEq, prost::Message)]
pub struct MsgExecuteContract {
    /// Sender is the actor that signed the message
    #[prost(string, tag = "1")]
    pub sender: String,

    /// Contract is the address of the smart contract
    #[prost(string, tag = "2")]
    pub contract: String,

    /// Msg json encoded message to be passed to the contract
    #[prost(bytes = "vec", tag = "3")]
    pub msg: Vec<u8>,

    /// Funds coins that are transferred to the contract on execution
    #[prost(message, repeated, tag = "4")]
    pub funds: Vec<Coin>,
}

impl MsgExecuteContract {
    /// Get the protobuf type URL
    pub fn type_url() -> &'static str {
        MSG_EXECUTE_CONTRACT_TYPE_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_execute_msg_wire_roundtrip() {
        let msg = MsgExecuteContract {
            sender: "osmo1sender".to_string(),
            contract: "osmo1contract".to_string(),
            msg: br#"{"set_allowed_coins":{}}"#.to_vec(),
            funds: vec![Coin::new(100u128, "uosmo"), Coin::new("5", "uatom")],
        };

        let bytes = msg.encode_to_vec();
        // Field 1, wire type 2 (length-delimited)
        assert_eq!(bytes[0], 0x0a);

        let decoded = MsgExecuteContract::decode(&bytes[..]).unwrap();
        assert_eq!(decoded, msg);
        assert_eq!(decoded.funds[0].amount, "100");
        assert_eq!(decoded.funds[1].denom, "uatom");
    }

    #[test]
    fn test_empty_funds_are_omitted_on_the_wire() {
        let no_funds = MsgExecuteContract {
            sender: "a".to_string(),
            contract: "b".to_string(),
            msg: b"{}".to_vec(),
            funds: vec![],
        };
        // 3 length-delimited fields: tag + len + payload each
        assert_eq!(no_funds.encode_to_vec().len(), (2 + 1) + (2 + 1) + (2 + 2));
    }
}
