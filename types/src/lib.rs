//! Fundamental types for the Patron protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, asset kinds, and timestamps.

pub mod address;
pub mod asset;
pub mod time;

pub use address::AccountAddress;
pub use asset::Asset;
pub use time::Timestamp;
