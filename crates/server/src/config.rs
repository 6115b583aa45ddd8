//! Configuration loading and validation for the node API.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any variable is present but invalid.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// OTLP/gRPC endpoint for span export. Logs go to stdout only when unset.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,

    /// Delay between two live-update events, in milliseconds.
    #[serde(default = "default_live_updates_interval_ms")]
    pub live_updates_interval_ms: u64,

    /// Reconnection delay advertised to live-update clients, in seconds.
    #[serde(default = "default_live_updates_retry_secs")]
    pub live_updates_retry_secs: u64,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    8080
}
fn default_live_updates_interval_ms() -> u64 {
    1000
}
fn default_live_updates_retry_secs() -> u64 {
    60
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Interval between live-update events.
    pub fn live_updates_interval(&self) -> Duration {
        Duration::from_millis(self.live_updates_interval_ms)
    }

    /// Reconnection delay sent with every live-update event.
    pub fn live_updates_retry(&self) -> Duration {
        Duration::from_secs(self.live_updates_retry_secs)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.listen_port == 0 {
            anyhow::bail!("LISTEN_PORT must be a non-zero port");
        }
        if self.live_updates_interval_ms == 0 {
            anyhow::bail!("LIVE_UPDATES_INTERVAL_MS must be > 0");
        }
        if let Some(endpoint) = &self.otel_exporter_otlp_endpoint {
            if endpoint.trim().is_empty() {
                anyhow::bail!("OTEL_EXPORTER_OTLP_ENDPOINT must not be empty when set");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        Config {
            listen_port: default_listen_port(),
            otel_exporter_otlp_endpoint: None,
            live_updates_interval_ms: default_live_updates_interval_ms(),
            live_updates_retry_secs: default_live_updates_retry_secs(),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_listen_port(), 8080);
        assert_eq!(default_live_updates_interval_ms(), 1000);
        assert_eq!(default_live_updates_retry_secs(), 60);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let cfg = Config {
            listen_port: 0,
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let cfg = Config {
            live_updates_interval_ms: 0,
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_otlp_endpoint() {
        let cfg = Config {
            otel_exporter_otlp_endpoint: Some("  ".into()),
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn durations() {
        let cfg = valid();
        assert_eq!(cfg.live_updates_interval(), Duration::from_secs(1));
        assert_eq!(cfg.live_updates_retry(), Duration::from_secs(60));
    }
}
