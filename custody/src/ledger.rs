//! The custody ledger port — atomic transfers and mints.
//!
//! The core never manipulates balances directly. Every balance effect goes
//! through this trait, and each call is all-or-nothing: `Ok` means the full
//! amount moved, `Err` means nothing moved.

use patron_types::{AccountAddress, Asset};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Authority under which the protocol mints reward tokens.
///
/// The ledger registers one authority per mintable asset; a mint presented
/// with any other authority is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintAuthority(String);

impl MintAuthority {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MintAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("insufficient {asset} funds in {holder}: need {needed}, available {available}")]
    InsufficientFunds {
        asset: Asset,
        holder: AccountAddress,
        needed: u64,
        available: u64,
    },

    #[error("transfer rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum MintError {
    #[error("{presented} is not the registered mint authority for {asset}")]
    UnauthorizedAuthority {
        asset: Asset,
        presented: MintAuthority,
    },

    #[error("mint rejected: {0}")]
    Rejected(String),
}

/// Atomic asset movement commands against the external ledger.
///
/// The paired operations exist because some transactions settle into two
/// holdings at once and must never be observable half-done: a split that
/// fails leaves both recipients uncredited and the source undebited, and a
/// failed pair mint leaves both recipients at their prior balances.
pub trait CustodyLedger {
    /// Move `amount` units of `asset` from `from` to `to`. All-or-nothing.
    fn transfer(
        &self,
        asset: Asset,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), TransferError>;

    /// Debit `from` once and credit two recipients, each given as
    /// `(recipient, amount)`. A zero amount skips that leg. All-or-nothing
    /// across both legs.
    fn transfer_split(
        &self,
        asset: Asset,
        from: &AccountAddress,
        first: (&AccountAddress, u64),
        second: (&AccountAddress, u64),
    ) -> Result<(), TransferError>;

    /// Create `amount` new units of `asset` in `to`, under `authority`.
    /// The authority must match the ledger's registered minting authority
    /// for that asset. All-or-nothing.
    fn mint(
        &self,
        asset: Asset,
        authority: &MintAuthority,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), MintError>;

    /// Mint to two recipients under one authority, each given as
    /// `(recipient, amount)`. A zero amount skips that leg. All-or-nothing
    /// across both legs.
    fn mint_pair(
        &self,
        asset: Asset,
        authority: &MintAuthority,
        first: (&AccountAddress, u64),
        second: (&AccountAddress, u64),
    ) -> Result<(), MintError>;
}

impl<T: CustodyLedger + ?Sized> CustodyLedger for &T {
    fn transfer(
        &self,
        asset: Asset,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), TransferError> {
        (**self).transfer(asset, from, to, amount)
    }

    fn transfer_split(
        &self,
        asset: Asset,
        from: &AccountAddress,
        first: (&AccountAddress, u64),
        second: (&AccountAddress, u64),
    ) -> Result<(), TransferError> {
        (**self).transfer_split(asset, from, first, second)
    }

    fn mint(
        &self,
        asset: Asset,
        authority: &MintAuthority,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), MintError> {
        (**self).mint(asset, authority, to, amount)
    }

    fn mint_pair(
        &self,
        asset: Asset,
        authority: &MintAuthority,
        first: (&AccountAddress, u64),
        second: (&AccountAddress, u64),
    ) -> Result<(), MintError> {
        (**self).mint_pair(asset, authority, first, second)
    }
}
