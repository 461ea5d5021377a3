// Library exports for mock_cm_composer

pub mod chain;
pub mod config;
pub mod types;

// Re-export main types for convenience
pub use chain::{Coin, ComposeError, ExecuteEnvelope, ExecuteMsg, MessageComposer};
pub use types::{Positions, VaultConfig};
