//! Account address type with `ptrn_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Patron account address, always prefixed with `ptrn_`.
///
/// Identifies a supporter, a creator, or a protocol custody holding. The
/// core never derives addresses cryptographically; uniqueness is enforced by
/// the maps keyed on these addresses, not by the address format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The standard prefix for all Patron account addresses.
    pub const PREFIX: &'static str = "ptrn_";

    /// Create a new account address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `ptrn_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with ptrn_");
        Self(s)
    }

    /// The protocol's custody holding for a creator's staked principal.
    ///
    /// Deterministic per creator: every stake for the same creator lands in
    /// the same holding.
    pub fn custody_for(creator: &AccountAddress) -> Self {
        Self(format!(
            "{}custody.{}",
            Self::PREFIX,
            &creator.0[Self::PREFIX.len()..]
        ))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
