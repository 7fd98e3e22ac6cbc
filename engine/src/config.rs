//! Protocol configuration — the admin-set economic parameters.
//!
//! One config governs the whole deployment. It is created exactly once by
//! `ProtocolEngine::initialize` and never mutated afterwards; a second
//! initialize is rejected rather than silently resetting the economics.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Global protocol parameters, set once per deployment.
///
/// Percentages are plain integers: `apr` is in basis points (1000 = 10.00%),
/// `supporter_reward_ratio` is a percentage (0–100), and the reward
/// multiplier is in hundredths (150 = 1.5x).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Unit price used in impact-based multiplier calculations.
    pub price_per_impact: u64,

    /// Upper bound on any computed reward multiplier (hundredths).
    pub max_reward_multiplier: u64,

    /// Normalizer applied when converting impact into a multiplier.
    /// Must be non-zero.
    pub scaling_factor: u64,

    /// Annual reward rate in basis points.
    pub apr: u64,

    /// Percentage (0–100) of a support payment paid out immediately to the
    /// creator. Also the supporter's share of minted rewards.
    pub supporter_reward_ratio: u64,

    /// Minimum support amount accepted per call. Gates the raw amount,
    /// before the payout/stake split.
    pub min_stake_amount: u64,
}

impl ProtocolConfig {
    /// Fixed-point base of the reward multiplier (100 = 1.0x).
    pub const MULTIPLIER_BASE: u64 = 100;

    /// The parameters of the reference deployment: 10% APR, 70/30
    /// payout/stake split, 1-token minimum (6 decimals).
    pub fn reference_defaults() -> Self {
        Self {
            price_per_impact: 100,
            max_reward_multiplier: 150,
            scaling_factor: 50,
            apr: 1000,
            supporter_reward_ratio: 70,
            min_stake_amount: 1_000_000,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.supporter_reward_ratio > 100 {
            return Err(EngineError::InvalidConfig(
                "supporter_reward_ratio must be 0-100",
            ));
        }
        if self.scaling_factor == 0 {
            return Err(EngineError::InvalidConfig(
                "scaling_factor must be non-zero",
            ));
        }
        Ok(())
    }

    /// The reward multiplier in hundredths, bounded by
    /// `max_reward_multiplier`.
    ///
    /// The impact metric feeding this is supplied by an external oracle that
    /// is not part of this slice; until it lands, the multiplier is the
    /// configured unit price normalized by the scaling factor, capped.
    pub fn reward_multiplier(&self) -> u64 {
        (self.price_per_impact / self.scaling_factor).min(self.max_reward_multiplier)
    }
}

/// Default is the reference deployment configuration.
impl Default for ProtocolConfig {
    fn default() -> Self {
        Self::reference_defaults()
    }
}
