/// Funds helpers: the `<amount><denom>` list form used on the command line
/// and conversion from cosmwasm coins

use super::error::{ComposeError, Result};
use super::proto::Coin;

/// Parse a comma-separated coin list like "100uosmo,25uatom"
/// An empty or whitespace-only string yields no funds
pub fn parse_coins(input: &str) -> Result<Vec<Coin>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_coin)
        .collect()
}

/// Parse a single "<amount><denom>" entry
pub fn parse_coin(input: &str) -> Result<Coin> {
    let invalid = || ComposeError::InvalidCoin(input.to_string());

    // Find where the number ends and denom begins
    let split_pos = input
        .chars()
        .position(|c| !c.is_ascii_digit())
        .ok_or_else(invalid)?;

    let (amount_str, denom) = input.split_at(split_pos);
    if amount_str.is_empty() || !denom.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    let amount: u128 = amount_str.parse().map_err(|_| invalid())?;

    Ok(Coin::new(amount, denom))
}

/// Convert cosmwasm coins into wire coins, preserving order
pub fn from_cosmwasm(coins: &[cosmwasm_std::Coin]) -> Vec<Coin> {
    coins.iter().cloned().map(Coin::from).collect()
}

impl From<cosmwasm_std::Coin> for Coin {
    fn from(coin: cosmwasm_std::Coin) -> Self {
        Self {
            denom: coin.denom,
            amount: coin.amount.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coin_list_keeps_order() {
        let coins = parse_coins("100uosmo, 25uatom,7ibc/27394FB092D2ECCD").unwrap();
        assert_eq!(coins.len(), 3);
        assert_eq!(coins[0], Coin::new(100u128, "uosmo"));
        assert_eq!(coins[1], Coin::new(25u128, "uatom"));
        assert_eq!(coins[2].denom, "ibc/27394FB092D2ECCD");
    }

    #[test]
    fn test_parse_empty_is_no_funds() {
        assert!(parse_coins("").unwrap().is_empty());
        assert!(parse_coins("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["uosmo", "100", "100 uosmo", "-5uosmo", "1.5uosmo"] {
            let err = parse_coin(bad).unwrap_err();
            assert!(err.to_string().contains("invalid coin"), "{bad} should fail");
        }
    }

    #[test]
    fn test_from_cosmwasm() {
        let coins = from_cosmwasm(&[cosmwasm_std::coin(12, "uosmo"), cosmwasm_std::coin(3, "uatom")]);
        assert_eq!(coins, vec![Coin::new(12u128, "uosmo"), Coin::new(3u128, "uatom")]);
    }
}
