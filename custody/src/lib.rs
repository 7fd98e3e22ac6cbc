//! Ports to the Patron protocol's external collaborators.
//!
//! The engine is a pure state machine; everything side-effecting lives behind
//! the traits here: asset custody (transfer/mint) and time. Production wires
//! real implementations, tests wire the nullables.

pub mod clock;
pub mod ledger;

pub use clock::{Clock, SystemClock};
pub use ledger::{CustodyLedger, MintAuthority, MintError, TransferError};
