//! Nullable custody ledger — an in-memory asset ledger for testing.
//!
//! Tracks per-(asset, holder) balances, enforces the registered mint
//! authority, and supports one-shot failure injection for exercising the
//! engine's abort paths.

use patron_custody::{CustodyLedger, MintAuthority, MintError, TransferError};
use patron_types::{AccountAddress, Asset};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An in-memory custody ledger for testing.
/// Thread-safe, like the external ledger it stands in for.
pub struct NullCustody {
    balances: Mutex<HashMap<(Asset, String), u64>>,
    authorities: Mutex<HashMap<Asset, MintAuthority>>,
    fail_transfer: AtomicBool,
    fail_mint: AtomicBool,
}

impl NullCustody {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            authorities: Mutex::new(HashMap::new()),
            fail_transfer: AtomicBool::new(false),
            fail_mint: AtomicBool::new(false),
        }
    }

    /// Register the minting authority for an asset.
    pub fn register_authority(&self, asset: Asset, authority: MintAuthority) {
        self.authorities.lock().unwrap().insert(asset, authority);
    }

    /// Credit a holder directly. Test setup only; bypasses all checks.
    pub fn credit(&self, asset: Asset, holder: &AccountAddress, amount: u64) {
        *self
            .balances
            .lock()
            .unwrap()
            .entry((asset, holder.as_str().to_string()))
            .or_insert(0) += amount;
    }

    /// Current balance of a holder.
    pub fn balance(&self, asset: Asset, holder: &AccountAddress) -> u64 {
        self.balances
            .lock()
            .unwrap()
            .get(&(asset, holder.as_str().to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Make the next transfer fail. The flag is consumed by that failure.
    pub fn fail_next_transfer(&self) {
        self.fail_transfer.store(true, Ordering::SeqCst);
    }

    /// Make the next mint fail. The flag is consumed by that failure.
    pub fn fail_next_mint(&self) {
        self.fail_mint.store(true, Ordering::SeqCst);
    }
}

impl Default for NullCustody {
    fn default() -> Self {
        Self::new()
    }
}

impl CustodyLedger for NullCustody {
    fn transfer(
        &self,
        asset: Asset,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), TransferError> {
        if self.fail_transfer.swap(false, Ordering::SeqCst) {
            return Err(TransferError::Rejected("injected transfer failure".into()));
        }
        let mut balances = self.balances.lock().unwrap();
        let from_key = (asset, from.as_str().to_string());
        let available = balances.get(&from_key).copied().unwrap_or(0);
        if available < amount {
            return Err(TransferError::InsufficientFunds {
                asset,
                holder: from.clone(),
                needed: amount,
                available,
            });
        }
        balances.insert(from_key, available - amount);
        *balances
            .entry((asset, to.as_str().to_string()))
            .or_insert(0) += amount;
        Ok(())
    }

    fn transfer_split(
        &self,
        asset: Asset,
        from: &AccountAddress,
        first: (&AccountAddress, u64),
        second: (&AccountAddress, u64),
    ) -> Result<(), TransferError> {
        if self.fail_transfer.swap(false, Ordering::SeqCst) {
            return Err(TransferError::Rejected("injected transfer failure".into()));
        }
        let total = first
            .1
            .checked_add(second.1)
            .ok_or_else(|| TransferError::Rejected("split total overflows".into()))?;
        // One lock across the debit and both credits keeps the split atomic.
        let mut balances = self.balances.lock().unwrap();
        let from_key = (asset, from.as_str().to_string());
        let available = balances.get(&from_key).copied().unwrap_or(0);
        if available < total {
            return Err(TransferError::InsufficientFunds {
                asset,
                holder: from.clone(),
                needed: total,
                available,
            });
        }
        balances.insert(from_key, available - total);
        for (to, amount) in [first, second] {
            if amount > 0 {
                *balances
                    .entry((asset, to.as_str().to_string()))
                    .or_insert(0) += amount;
            }
        }
        Ok(())
    }

    fn mint(
        &self,
        asset: Asset,
        authority: &MintAuthority,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), MintError> {
        if self.fail_mint.swap(false, Ordering::SeqCst) {
            return Err(MintError::Rejected("injected mint failure".into()));
        }
        match self.authorities.lock().unwrap().get(&asset) {
            Some(registered) if registered == authority => {}
            _ => {
                return Err(MintError::UnauthorizedAuthority {
                    asset,
                    presented: authority.clone(),
                })
            }
        }
        *self
            .balances
            .lock()
            .unwrap()
            .entry((asset, to.as_str().to_string()))
            .or_insert(0) += amount;
        Ok(())
    }

    fn mint_pair(
        &self,
        asset: Asset,
        authority: &MintAuthority,
        first: (&AccountAddress, u64),
        second: (&AccountAddress, u64),
    ) -> Result<(), MintError> {
        if self.fail_mint.swap(false, Ordering::SeqCst) {
            return Err(MintError::Rejected("injected mint failure".into()));
        }
        match self.authorities.lock().unwrap().get(&asset) {
            Some(registered) if registered == authority => {}
            _ => {
                return Err(MintError::UnauthorizedAuthority {
                    asset,
                    presented: authority.clone(),
                })
            }
        }
        // Both credits land under one lock; a rejection above leaves both
        // recipients at their prior balances.
        let mut balances = self.balances.lock().unwrap();
        for (to, amount) in [first, second] {
            if amount > 0 {
                *balances
                    .entry((asset, to.as_str().to_string()))
                    .or_insert(0) += amount;
            }
        }
        Ok(())
    }
}
