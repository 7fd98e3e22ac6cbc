//! Patron service layer.
//!
//! Wires the protocol engine to its production collaborators: the system
//! clock, an external custody ledger, structured logging, and TOML
//! configuration. Tests wire the same service to the nullable doubles
//! instead.

pub mod config;
pub mod error;
pub mod logging;
pub mod service;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use logging::{init_logging, LogFormat};
pub use service::PatronService;
