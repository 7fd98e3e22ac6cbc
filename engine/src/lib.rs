//! Patron core — the creator-support staking state machine.
//!
//! Supporters lock value behind a creator: a configured share pays out
//! immediately, the rest is staked and accrues time-weighted rewards at the
//! configured APR. This crate holds:
//! - the singleton protocol configuration
//! - the creator registry and per-(supporter, creator) stake ledger
//! - the support transaction (validate, split, move funds, record)
//! - the claim transaction (accrue, scale, split, mint, settle)

pub mod config;
pub mod engine;
pub mod error;
pub mod reward;
pub mod state;
pub mod support;

pub use config::ProtocolConfig;
pub use engine::{ClaimReceipt, ProtocolEngine, SupportReceipt};
pub use error::EngineError;
pub use state::{Creator, StakeKey, SupporterStake};
