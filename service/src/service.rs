//! The service facade over the protocol engine.
//!
//! `PatronService` owns the engine behind a mutex and supplies the two
//! collaborators the engine refuses to own itself: the clock and the custody
//! ledger. Every public operation takes the engine lock, stamps the call
//! with the clock's current time, and emits a structured trace event for
//! the outcome.

use std::sync::Mutex;

use patron_custody::{Clock, CustodyLedger, MintAuthority};
use patron_engine::{
    ClaimReceipt, Creator, ProtocolConfig, ProtocolEngine, SupportReceipt, SupporterStake,
};
use patron_types::AccountAddress;
use tracing::{info, warn};

use crate::{ServiceConfig, ServiceError};

pub struct PatronService<L, C> {
    engine: Mutex<ProtocolEngine>,
    custody: L,
    clock: C,
}

impl<L: CustodyLedger, C: Clock> PatronService<L, C> {
    /// Create a service with an uninitialized engine. The protocol config
    /// must be installed with [`PatronService::initialize`] before any
    /// support or claim can run.
    pub fn new(mint_authority: MintAuthority, custody: L, clock: C) -> Self {
        Self {
            engine: Mutex::new(ProtocolEngine::new(mint_authority)),
            custody,
            clock,
        }
    }

    /// Create a service and install the protocol config from a
    /// [`ServiceConfig`] in one step.
    pub fn from_config(config: &ServiceConfig, custody: L, clock: C) -> Result<Self, ServiceError> {
        let service = Self::new(
            MintAuthority::new(config.mint_authority.clone()),
            custody,
            clock,
        );
        service.initialize(config.protocol.clone())?;
        Ok(service)
    }

    fn engine(&self) -> std::sync::MutexGuard<'_, ProtocolEngine> {
        self.engine.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Install the protocol configuration. Once only.
    pub fn initialize(&self, config: ProtocolConfig) -> Result<(), ServiceError> {
        self.engine().initialize(config)?;
        info!("protocol initialized");
        Ok(())
    }

    /// Register a creator.
    pub fn initialize_creator(&self, creator: &AccountAddress) -> Result<(), ServiceError> {
        let now = self.clock.now();
        self.engine().initialize_creator(creator.clone(), now)?;
        info!(creator = %creator, "creator registered");
        Ok(())
    }

    /// Support a creator with `amount` of the stable asset.
    pub fn support_creator(
        &self,
        supporter: &AccountAddress,
        creator: &AccountAddress,
        amount: u64,
    ) -> Result<SupportReceipt, ServiceError> {
        let now = self.clock.now();
        let result =
            self.engine()
                .support_creator(&self.custody, supporter, creator, amount, now);
        match &result {
            Ok(receipt) => info!(
                supporter = %supporter,
                creator = %creator,
                payout = receipt.payout,
                staked = receipt.staked_delta,
                "support accepted"
            ),
            Err(err) => warn!(
                supporter = %supporter,
                creator = %creator,
                amount,
                error = %err,
                "support rejected"
            ),
        }
        Ok(result?)
    }

    /// Claim accrued rewards on the supporter's stake.
    pub fn claim_rewards(
        &self,
        supporter: &AccountAddress,
        creator: &AccountAddress,
    ) -> Result<ClaimReceipt, ServiceError> {
        let now = self.clock.now();
        let result = self
            .engine()
            .claim_rewards(&self.custody, supporter, creator, now);
        match &result {
            Ok(receipt) => info!(
                supporter = %supporter,
                creator = %creator,
                elapsed_secs = receipt.elapsed_secs,
                supporter_share = receipt.supporter_share,
                creator_share = receipt.creator_share,
                "rewards claimed"
            ),
            Err(err) => warn!(
                supporter = %supporter,
                creator = %creator,
                error = %err,
                "claim rejected"
            ),
        }
        Ok(result?)
    }

    /// Withdraw staked principal. Returns the stake remaining afterwards.
    pub fn unstake(
        &self,
        supporter: &AccountAddress,
        creator: &AccountAddress,
        amount: u64,
    ) -> Result<u64, ServiceError> {
        let result = self
            .engine()
            .unstake(&self.custody, supporter, creator, amount);
        match &result {
            Ok(remaining) => info!(
                supporter = %supporter,
                creator = %creator,
                amount,
                remaining,
                "unstaked"
            ),
            Err(err) => warn!(
                supporter = %supporter,
                creator = %creator,
                amount,
                error = %err,
                "unstake rejected"
            ),
        }
        Ok(result?)
    }

    /// Snapshot of a creator's aggregate record.
    pub fn creator(&self, creator: &AccountAddress) -> Option<Creator> {
        self.engine().get_creator(creator).cloned()
    }

    /// Snapshot of one supporter's stake on one creator.
    pub fn stake(
        &self,
        supporter: &AccountAddress,
        creator: &AccountAddress,
    ) -> Option<SupporterStake> {
        self.engine().get_stake(supporter, creator).cloned()
    }
}
