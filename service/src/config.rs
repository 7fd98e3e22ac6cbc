//! Service configuration with TOML file support.

use patron_engine::ProtocolConfig;
use serde::{Deserialize, Serialize};

use crate::{LogFormat, ServiceError};

/// Configuration for a Patron service instance.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name of the mint authority this instance presents to the ledger.
    #[serde(default = "default_mint_authority")]
    pub mint_authority: String,

    /// Economic parameters installed at startup.
    #[serde(default)]
    pub protocol: ProtocolConfig,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_mint_authority() -> String {
    "patron_mint".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ServiceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ServiceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ServiceError> {
        toml::from_str(s).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ServiceConfig is always serializable to TOML")
    }

    /// Initialise global logging from `log_format` and `log_level`.
    ///
    /// Fails with a config error on an unrecognised format, before any
    /// global state is touched. Callable once per process.
    pub fn init_logging(&self) -> Result<(), ServiceError> {
        let format = self
            .log_format
            .parse::<LogFormat>()
            .map_err(ServiceError::Config)?;
        crate::logging::init_logging(format, &self.log_level);
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mint_authority: default_mint_authority(),
            protocol: ProtocolConfig::default(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
