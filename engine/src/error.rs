//! Engine-specific errors.
//!
//! Every failure path is a distinct variant. Validation errors are raised
//! before any mutation or custody call; port errors propagate via `#[from]`
//! and always mean the transaction aborted with zero state change.

use patron_custody::{MintError, TransferError};
use patron_types::AccountAddress;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("protocol config already initialized")]
    AlreadyInitialized,

    #[error("protocol config not initialized")]
    NotInitialized,

    #[error("creator {0} is already registered")]
    CreatorAlreadyExists(AccountAddress),

    #[error("creator {0} not found")]
    CreatorNotFound(AccountAddress),

    #[error("no stake from {supporter} on {creator}")]
    StakeNotFound {
        supporter: AccountAddress,
        creator: AccountAddress,
    },

    #[error("amount must be non-zero")]
    InvalidAmount,

    #[error("support of {amount} is below the minimum stake of {minimum}")]
    BelowMinimum { amount: u64, minimum: u64 },

    #[error("support leaves nothing to stake")]
    NothingToStake,

    #[error("no time has elapsed since the last claim")]
    NothingToClaim,

    #[error("accrued reward rounds to zero")]
    ZeroReward,

    #[error("unstake of {requested} exceeds the withdrawable {available}")]
    UnstakeTooLarge { requested: u64, available: u64 },

    #[error("arithmetic overflow in reward computation")]
    Overflow,

    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("mint failed: {0}")]
    Mint(#[from] MintError),
}
