//! Nullable ports for deterministic testing.
//!
//! The engine's external dependencies (clock, custody ledger) are traits;
//! this crate provides implementations that return deterministic values, can
//! be controlled programmatically, and never touch a real ledger or the
//! system clock. Swap them in wherever a test needs to advance time or force
//! a transfer/mint to fail.

pub mod clock;
pub mod custody;

pub use clock::NullClock;
pub use custody::NullCustody;
