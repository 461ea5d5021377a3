/// Value shapes of the mock credit manager contract schema.
/// Field names and enum tags match the contract's snake_case JSON.

use cosmwasm_std::{Addr, Coin, Decimal, Uint128};
use serde::{Deserialize, Serialize};

/// Full position snapshot for a credit account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positions {
    pub account_id: String,
    pub deposits: Vec<Coin>,
    pub debts: Vec<DebtAmount>,
    pub lends: Vec<LentAmount>,
    pub vaults: Vec<VaultPosition>,
}

impl Positions {
    /// Empty snapshot for an account
    pub fn empty(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            deposits: vec![],
            debts: vec![],
            lends: vec![],
            vaults: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtAmount {
    pub denom: String,
    /// Debt shares owned by the account
    pub shares: Uint128,
    /// Amount of coins the shares represent
    pub amount: Uint128,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LentAmount {
    pub denom: String,
    pub shares: Uint128,
    pub amount: Uint128,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultBase<T> {
    pub address: T,
}

pub type VaultBaseForAddr = VaultBase<Addr>;
pub type VaultBaseForString = VaultBase<String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultPosition {
    pub vault: VaultBaseForAddr,
    pub amount: VaultPositionAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaultPositionAmount {
    Unlocked(VaultAmount),
    Locking(LockingVaultAmount),
}

impl VaultPositionAmount {
    /// Locked plus unlocked vault tokens, excluding coins already unlocking
    pub fn vault_tokens(&self) -> Uint128 {
        match self {
            VaultPositionAmount::Unlocked(amount) => amount.0,
            VaultPositionAmount::Locking(locking) => locking.locked.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultAmount(pub Uint128);

impl VaultAmount {
    pub fn new(amount: u128) -> Self {
        Self(Uint128::new(amount))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockingVaultAmount {
    pub locked: VaultAmount,
    pub unlocking: UnlockingPositions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockingPositions(pub Vec<VaultUnlockingPosition>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultUnlockingPosition {
    /// Unlocking id assigned by the vault
    pub id: u64,
    pub coin: Coin,
}

/// Per-vault settings the credit manager enforces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultConfig {
    pub deposit_cap: Coin,
    pub max_ltv: Decimal,
    pub liquidation_threshold: Decimal,
    pub whitelisted: bool,
}
