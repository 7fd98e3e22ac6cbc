//! Reward accrual arithmetic.
//!
//! All intermediate products are computed in u128 and narrowed at the end;
//! any width excess surfaces as `Overflow` instead of silently truncating.

use crate::config::ProtocolConfig;
use crate::error::EngineError;

/// Seconds in a (non-leap) year — the accrual denominator.
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// Basis-point denominator for the APR.
pub const BASIS_POINTS: u64 = 10_000;

/// Raw time-weighted accrual on a staked principal.
///
/// `staked * apr * elapsed / (SECONDS_PER_YEAR * 10_000)`, truncating.
pub fn accrued(staked_amount: u64, apr_bps: u64, elapsed_secs: u64) -> Result<u128, EngineError> {
    let numerator = (staked_amount as u128)
        .checked_mul(apr_bps as u128)
        .and_then(|v| v.checked_mul(elapsed_secs as u128))
        .ok_or(EngineError::Overflow)?;
    Ok(numerator / (SECONDS_PER_YEAR as u128 * BASIS_POINTS as u128))
}

/// Apply the configuration-bounded multiplier and narrow back to u64.
pub fn scale(reward: u128, config: &ProtocolConfig) -> Result<u64, EngineError> {
    let scaled = reward
        .checked_mul(config.reward_multiplier() as u128)
        .ok_or(EngineError::Overflow)?
        / ProtocolConfig::MULTIPLIER_BASE as u128;
    u64::try_from(scaled).map_err(|_| EngineError::Overflow)
}

/// Split a scaled reward between supporter and creator.
///
/// The supporter takes `ratio`% (truncating); the creator takes the rest,
/// so the shares always sum to the input exactly.
pub fn split_shares(scaled_reward: u64, supporter_reward_ratio: u64) -> (u64, u64) {
    let supporter = (scaled_reward as u128 * supporter_reward_ratio as u128 / 100) as u64;
    (supporter, scaled_reward - supporter)
}
