//! Per-creator and per-stake ledger records.

use patron_types::{AccountAddress, Timestamp};
use serde::{Deserialize, Serialize};

/// Aggregate record for a registered creator.
///
/// Created once by registration, mutated only by support/claim/unstake
/// transactions, never deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Creator {
    /// When the creator registered.
    pub registered_at: Timestamp,
    /// Cumulative immediate payouts received from supporters.
    pub total_support_amount: u64,
    /// Principal currently staked on this creator across all supporters.
    pub total_staked: u64,
    /// Number of distinct supporter stakes opened against this creator.
    pub supporters: u32,
    /// Cumulative creator-side reward mints.
    pub accumulated_rewards: u64,
}

impl Creator {
    pub fn new(registered_at: Timestamp) -> Self {
        Self {
            registered_at,
            total_support_amount: 0,
            total_staked: 0,
            supporters: 0,
            accumulated_rewards: 0,
        }
    }
}

/// Composite key identifying one supporter's stake on one creator.
///
/// Replaces the seed-derived stake account of ledger deployments: uniqueness
/// is the map's key-uniqueness invariant, nothing cryptographic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StakeKey {
    pub supporter: AccountAddress,
    pub creator: AccountAddress,
}

impl StakeKey {
    pub fn new(supporter: AccountAddress, creator: AccountAddress) -> Self {
        Self { supporter, creator }
    }
}

/// One supporter's staked principal on one creator.
///
/// `staked_amount` grows with each further support and shrinks only through
/// unstaking; claims never touch it. `last_claim_time` is the settlement
/// cursor: accrual always runs from here to now, and further support leaves
/// it alone so the open claim window keeps accruing on the combined
/// principal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SupporterStake {
    pub staked_amount: u64,
    pub created_at: Timestamp,
    pub last_claim_time: Timestamp,
}

impl SupporterStake {
    pub fn new(staked_amount: u64, now: Timestamp) -> Self {
        Self {
            staked_amount,
            created_at: now,
            last_claim_time: now,
        }
    }
}
