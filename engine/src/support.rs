//! Support-payment arithmetic.

/// Split a support payment into the immediate payout and the staked
/// remainder.
///
/// `payout = amount * ratio / 100` with truncating division; the remainder
/// is staked, so `payout + staked == amount` holds exactly. Truncation
/// shifts dust from the payout to the stake, never out of the total.
pub fn split_payment(amount: u64, supporter_reward_ratio: u64) -> (u64, u64) {
    // ratio <= 100 is enforced at config validation; the widened product
    // cannot overflow u128 and the quotient fits back into u64.
    let payout = (amount as u128 * supporter_reward_ratio as u128 / 100) as u64;
    (payout, amount - payout)
}
