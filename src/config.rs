//! Configuration for nimbus-ingest
//!
//! Centralized configuration with sensible defaults. The ingestion service is
//! configured through [`Config`]; the outbound mail collaborator is configured
//! through [`MailConfig`], loaded once at startup from the environment and
//! passed along by reference, never read ad hoc mid-operation.

use std::env;
use std::path::PathBuf;

use crate::error::{IngestError, Result};

/// Default TCP port both peers agree on out-of-band
pub const DEFAULT_PORT: u16 = 5784;

/// Main configuration for a nimbus-ingest instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Connection read timeout (milliseconds, 0 disables)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 disables)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Path of the append-only customer store file
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("127.0.0.1:{}", DEFAULT_PORT),
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            store_path: PathBuf::from("./nimbus_data/customers.txt"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the path of the append-only store file
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

// =============================================================================
// Mail Configuration
// =============================================================================

/// Settings for the outbound mail collaborator
///
/// Recognized environment variables:
/// - `MAIL_RECIPIENT` - default delivery address for generated reports
/// - `MAIL_SENDER`    - sender address
/// - `SMTP_HOST`      - mail relay host
/// - `SMTP_PORT`      - mail relay port
/// - `SMTP_PASSWORD`  - sender credentials
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub recipient: String,
    pub sender: String,
    pub host: String,
    pub port: u16,
    pub credentials: String,
}

impl MailConfig {
    /// Load mail settings from the environment
    ///
    /// Every variable is required; a missing or unparseable value is a
    /// configuration error naming the offending variable.
    pub fn from_env() -> Result<Self> {
        let port_raw = required_var("SMTP_PORT")?;
        let port = port_raw.parse::<u16>().map_err(|_| {
            IngestError::Config(format!("SMTP_PORT is not a valid port: {port_raw:?}"))
        })?;

        Ok(Self {
            recipient: required_var("MAIL_RECIPIENT")?,
            sender: required_var("MAIL_SENDER")?,
            host: required_var("SMTP_HOST")?,
            port,
            credentials: required_var("SMTP_PASSWORD")?,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| IngestError::Config(format!("missing environment variable {name}")))
}
