//! The protocol state machine.
//!
//! `ProtocolEngine` owns all protocol state: the singleton config, the
//! creator registry, and the per-(supporter, creator) stake ledger. Balance
//! effects go through the injected [`CustodyLedger`]; time comes in as an
//! explicit `now` argument. Every transaction validates and completes its
//! arithmetic before the first custody call, so a failure at any point
//! leaves engine state untouched.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use patron_custody::{CustodyLedger, MintAuthority};
use patron_types::{AccountAddress, Asset, Timestamp};
use serde::{Deserialize, Serialize};

use crate::config::ProtocolConfig;
use crate::error::EngineError;
use crate::state::{Creator, StakeKey, SupporterStake};
use crate::{reward, support};

/// Outcome of a successful support transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportReceipt {
    /// Paid out to the creator immediately.
    pub payout: u64,
    /// Newly staked by this transaction.
    pub staked_delta: u64,
    /// The supporter's total stake on this creator after the transaction.
    pub staked_total: u64,
}

/// Outcome of a successful claim transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    /// Length of the claim window that was settled.
    pub elapsed_secs: u64,
    /// Reward tokens minted to the supporter.
    pub supporter_share: u64,
    /// Reward tokens minted to the creator.
    pub creator_share: u64,
}

pub struct ProtocolEngine {
    config: Option<ProtocolConfig>,
    mint_authority: MintAuthority,
    creators: HashMap<AccountAddress, Creator>,
    stakes: HashMap<StakeKey, SupporterStake>,
}

impl ProtocolEngine {
    pub fn new(mint_authority: MintAuthority) -> Self {
        Self {
            config: None,
            mint_authority,
            creators: HashMap::new(),
            stakes: HashMap::new(),
        }
    }

    pub fn config(&self) -> Option<&ProtocolConfig> {
        self.config.as_ref()
    }

    pub fn get_creator(&self, creator: &AccountAddress) -> Option<&Creator> {
        self.creators.get(creator)
    }

    pub fn get_stake(
        &self,
        supporter: &AccountAddress,
        creator: &AccountAddress,
    ) -> Option<&SupporterStake> {
        self.stakes
            .get(&StakeKey::new(supporter.clone(), creator.clone()))
    }

    /// Set the protocol configuration. Callable exactly once.
    pub fn initialize(&mut self, config: ProtocolConfig) -> Result<(), EngineError> {
        if self.config.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }
        config.validate()?;
        self.config = Some(config);
        Ok(())
    }

    /// Register a creator. Registration does not require the protocol
    /// config; a creator can exist before the economics are set.
    pub fn initialize_creator(
        &mut self,
        creator: AccountAddress,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        match self.creators.entry(creator) {
            Entry::Occupied(occupied) => Err(EngineError::CreatorAlreadyExists(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(Creator::new(now));
                Ok(())
            }
        }
    }

    /// Support a creator: pay out the configured share immediately and
    /// stake the remainder in the creator's custody holding.
    ///
    /// The two halves always conserve `amount` exactly. A repeat support
    /// grows the existing stake and leaves its claim cursor alone, so the
    /// open window keeps accruing on the combined principal.
    pub fn support_creator(
        &mut self,
        custody: impl CustodyLedger,
        supporter: &AccountAddress,
        creator: &AccountAddress,
        amount: u64,
        now: Timestamp,
    ) -> Result<SupportReceipt, EngineError> {
        let config = self.config.as_ref().ok_or(EngineError::NotInitialized)?;
        let ratio = config.supporter_reward_ratio;
        let minimum = config.min_stake_amount;

        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        if amount < minimum {
            return Err(EngineError::BelowMinimum { amount, minimum });
        }

        let record = self
            .creators
            .get(creator)
            .ok_or_else(|| EngineError::CreatorNotFound(creator.clone()))?;

        let (payout, staked_delta) = support::split_payment(amount, ratio);
        if staked_delta == 0 {
            return Err(EngineError::NothingToStake);
        }

        let key = StakeKey::new(supporter.clone(), creator.clone());
        let staked_total = self
            .stakes
            .get(&key)
            .map(|stake| stake.staked_amount)
            .unwrap_or(0)
            .checked_add(staked_delta)
            .ok_or(EngineError::Overflow)?;
        let total_support = record
            .total_support_amount
            .checked_add(payout)
            .ok_or(EngineError::Overflow)?;
        let total_staked = record
            .total_staked
            .checked_add(staked_delta)
            .ok_or(EngineError::Overflow)?;

        // One batched call: the payout and the stake settle together or not
        // at all, so the creator is never paid without the stake landing.
        custody.transfer_split(
            Asset::Stable,
            supporter,
            (creator, payout),
            (&AccountAddress::custody_for(creator), staked_delta),
        )?;

        let is_new = match self.stakes.entry(key) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().staked_amount = staked_total;
                false
            }
            Entry::Vacant(vacant) => {
                vacant.insert(SupporterStake::new(staked_delta, now));
                true
            }
        };

        // Existence was checked above; the map cannot have lost the entry.
        if let Some(record) = self.creators.get_mut(creator) {
            record.total_support_amount = total_support;
            record.total_staked = total_staked;
            if is_new {
                record.supporters = record.supporters.saturating_add(1);
            }
        }

        Ok(SupportReceipt {
            payout,
            staked_delta,
            staked_total,
        })
    }

    /// Claim accrued rewards on a stake: accrue over the open window, scale,
    /// split, and mint both shares.
    ///
    /// The claim cursor advances only on success. If accrual rounds to zero
    /// the claim fails with `ZeroReward` and the window stays open, so dust
    /// keeps accumulating instead of being burned by an early claim.
    pub fn claim_rewards(
        &mut self,
        custody: impl CustodyLedger,
        supporter: &AccountAddress,
        creator: &AccountAddress,
        now: Timestamp,
    ) -> Result<ClaimReceipt, EngineError> {
        let config = self
            .config
            .as_ref()
            .ok_or(EngineError::NotInitialized)?
            .clone();

        let key = StakeKey::new(supporter.clone(), creator.clone());
        let stake = self.stakes.get(&key).ok_or_else(|| EngineError::StakeNotFound {
            supporter: supporter.clone(),
            creator: creator.clone(),
        })?;

        let elapsed_secs = stake.last_claim_time.elapsed_since(now);
        if elapsed_secs == 0 {
            return Err(EngineError::NothingToClaim);
        }

        let raw = reward::accrued(stake.staked_amount, config.apr, elapsed_secs)?;
        let scaled = reward::scale(raw, &config)?;
        if scaled == 0 {
            return Err(EngineError::ZeroReward);
        }
        let (supporter_share, creator_share) =
            reward::split_shares(scaled, config.supporter_reward_ratio);

        let accumulated = self
            .creators
            .get(creator)
            .map(|record| record.accumulated_rewards)
            .unwrap_or(0)
            .checked_add(creator_share)
            .ok_or(EngineError::Overflow)?;

        // Both shares settle in one batched mint; a failure leaves neither
        // minted and the window open, so a retry can never pay one side a
        // second time.
        custody.mint_pair(
            Asset::Reward,
            &self.mint_authority,
            (supporter, supporter_share),
            (creator, creator_share),
        )?;

        if let Some(stake) = self.stakes.get_mut(&key) {
            stake.last_claim_time = now;
        }
        if let Some(record) = self.creators.get_mut(creator) {
            record.accumulated_rewards = accumulated;
        }

        Ok(ClaimReceipt {
            elapsed_secs,
            supporter_share,
            creator_share,
        })
    }

    /// Withdraw staked principal back to the supporter.
    ///
    /// Only the supporter's configured share of the stake is withdrawable;
    /// the rest stays locked behind the creator. Returns the stake remaining
    /// after the withdrawal.
    pub fn unstake(
        &mut self,
        custody: impl CustodyLedger,
        supporter: &AccountAddress,
        creator: &AccountAddress,
        amount: u64,
    ) -> Result<u64, EngineError> {
        let config = self.config.as_ref().ok_or(EngineError::NotInitialized)?;
        let ratio = config.supporter_reward_ratio;

        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }

        let key = StakeKey::new(supporter.clone(), creator.clone());
        let stake = self.stakes.get(&key).ok_or_else(|| EngineError::StakeNotFound {
            supporter: supporter.clone(),
            creator: creator.clone(),
        })?;

        let available = (stake.staked_amount as u128 * ratio as u128 / 100) as u64;
        if amount > available {
            return Err(EngineError::UnstakeTooLarge {
                requested: amount,
                available,
            });
        }

        let remaining = stake
            .staked_amount
            .checked_sub(amount)
            .ok_or(EngineError::Overflow)?;
        let total_staked = self
            .creators
            .get(creator)
            .map(|record| record.total_staked)
            .unwrap_or(0)
            .checked_sub(amount)
            .ok_or(EngineError::Overflow)?;

        custody.transfer(
            Asset::Stable,
            &AccountAddress::custody_for(creator),
            supporter,
            amount,
        )?;

        if let Some(stake) = self.stakes.get_mut(&key) {
            stake.staked_amount = remaining;
        }
        if let Some(record) = self.creators.get_mut(creator) {
            record.total_staked = total_staked;
        }

        Ok(remaining)
    }
}
