//! Asset kinds moved by the custody ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two asset kinds the protocol touches.
///
/// `Stable` is the support currency supporters pay with; `Reward` is the
/// protocol-minted reward token. The core never holds balances of either;
/// it only instructs the custody ledger to move or mint them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// The stablecoin supporters pay with.
    Stable,
    /// The protocol-minted reward token.
    Reward,
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Stable => write!(f, "stable"),
            Asset::Reward => write!(f, "reward"),
        }
    }
}
