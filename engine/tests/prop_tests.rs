//! Property tests for the payment-split and reward arithmetic.

use patron_engine::config::ProtocolConfig;
use patron_engine::reward;
use patron_engine::support;
use proptest::prelude::*;

proptest! {
    /// Payout and stake always reassemble the original amount exactly.
    #[test]
    fn split_payment_conserves_value(amount in 0u64..=u64::MAX, ratio in 0u64..=100) {
        let (payout, staked) = support::split_payment(amount, ratio);
        prop_assert_eq!(payout as u128 + staked as u128, amount as u128);
    }

    /// The payout never exceeds the ratio's share of the amount.
    #[test]
    fn payout_is_bounded_by_ratio(amount in 0u64..=u64::MAX, ratio in 0u64..=100) {
        let (payout, _) = support::split_payment(amount, ratio);
        prop_assert!(payout as u128 * 100 <= amount as u128 * ratio as u128);
    }

    /// Reward shares always sum to the scaled reward exactly.
    #[test]
    fn reward_shares_conserve_value(scaled in 0u64..=u64::MAX, ratio in 0u64..=100) {
        let (supporter, creator) = reward::split_shares(scaled, ratio);
        prop_assert_eq!(supporter as u128 + creator as u128, scaled as u128);
    }

    /// Accrual is monotonically non-decreasing in elapsed time.
    #[test]
    fn accrual_is_monotonic_in_time(
        staked in 0u64..=1_000_000_000_000,
        apr in 0u64..=100_000,
        earlier in 0u64..=10_000_000_000,
        extra in 0u64..=10_000_000_000,
    ) {
        let later = earlier + extra;
        let first = reward::accrued(staked, apr, earlier).unwrap();
        let second = reward::accrued(staked, apr, later).unwrap();
        prop_assert!(second >= first);
    }

    /// Zero elapsed time accrues exactly nothing.
    #[test]
    fn zero_elapsed_accrues_nothing(staked in 0u64..=u64::MAX, apr in 0u64..=u64::MAX) {
        prop_assert_eq!(reward::accrued(staked, apr, 0).unwrap(), 0);
    }

    /// Scaling never exceeds the max-multiplier bound.
    #[test]
    fn scaled_reward_is_bounded_by_max_multiplier(
        raw in 0u128..=(u64::MAX / 10_000) as u128,
        price in 1u64..=1_000_000,
        scaling in 1u64..=1_000_000,
        cap in 1u64..=10_000,
    ) {
        let config = ProtocolConfig {
            price_per_impact: price,
            scaling_factor: scaling,
            max_reward_multiplier: cap,
            ..ProtocolConfig::default()
        };
        let scaled = reward::scale(raw, &config).unwrap();
        prop_assert!(scaled as u128 <= raw * cap as u128 / ProtocolConfig::MULTIPLIER_BASE as u128);
    }
}
