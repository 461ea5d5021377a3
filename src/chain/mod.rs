pub mod composer;
pub mod error;
pub mod funds;
pub mod messages;
pub mod proto;

pub use composer::{ExecuteEnvelope, MessageComposer};
pub use error::ComposeError;
pub use funds::parse_coins;
pub use messages::{
    ExecuteMsg, InstantiateMsg, MessageBuilder, SetAllowedCoinsMsg, SetPositionsResponseMsg,
    SetVaultConfigMsg,
};
pub use proto::{Coin, MsgExecuteContract, MSG_EXECUTE_CONTRACT_TYPE_URL};
