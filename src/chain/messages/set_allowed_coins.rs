use super::{ExecuteMsg, MessageBuilder};

/// Message telling the mock to refresh its allowed coin list
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SetAllowedCoinsMsg {}

impl SetAllowedCoinsMsg {
    pub fn new() -> Self {
        Self {}
    }
}

impl MessageBuilder for SetAllowedCoinsMsg {
    fn build_msg(&self) -> ExecuteMsg {
        ExecuteMsg::SetAllowedCoins {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let json_bytes = SetAllowedCoinsMsg::new().to_json_bytes().unwrap();
        let json_str = String::from_utf8(json_bytes).unwrap();

        assert_eq!(json_str, r#"{"set_allowed_coins":{}}"#);
    }
}
