//! Layered application configuration
//!
//! Layers, later overriding earlier:
//! 1) serialized defaults -> 2) YAML file -> 3) env (`APP__*`) -> 4) CLI overrides

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Prefix for environment overrides, e.g. `APP__SERVER__BIND_ADDR`.
pub const ENV_PREFIX: &str = "APP__";

const MAX_FORECAST_DAYS: u32 = 30;

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_forecast_days() -> u32 {
    5
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `RUST_LOG` nor `-v` is given.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastConfig {
    #[serde(default = "default_forecast_days")]
    pub days: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days: default_forecast_days(),
        }
    }
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `APP__*` env overrides.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or a layer fails to parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to parse configuration (YAML or APP__ environment)")
    }

    /// Apply CLI overrides on top of the loaded layers.
    ///
    /// # Errors
    /// Returns an error if `--port` is given but `server.bind_addr` cannot be parsed.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>) -> Result<()> {
        if let Some(port) = port {
            let mut addr = self.bind_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error naming the first field that fails validation.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        if !(1..=MAX_FORECAST_DAYS).contains(&self.forecast.days) {
            bail!(
                "invalid forecast.days {}: expected 1..={MAX_FORECAST_DAYS}",
                self.forecast.days
            );
        }

        EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("invalid logging.level '{}'", self.logging.level))?;

        Ok(())
    }

    /// Parsed `server.bind_addr`.
    ///
    /// # Errors
    /// Returns an error if the address is not a valid socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr '{}'", self.server.bind_addr))
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.forecast.days, 5);
        config.validate().unwrap();
    }

    #[test]
    fn test_config_parse_partial_yaml() {
        let yaml = r#"
server:
  bind_addr: "0.0.0.0:9000"
logging:
  format: json
"#;
        let config: AppConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.forecast.days, 5);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = r#"
server:
  bind_addr: "0.0.0.0:9000"
  secret: "nope"
"#;
        let result: Result<AppConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = AppConfig::load_or_default(Some(Path::new("/nonexistent/config.yaml")))
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "forecast:\n  days: 7\n").unwrap();

        let config = AppConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.forecast.days, 7);
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_port_override_keeps_host() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(Some(9999)).unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:9999");
    }

    #[test]
    fn test_validate_rejects_bad_bind_addr() {
        let mut config = AppConfig::default();
        config.server.bind_addr = "not-an-address".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.bind_addr"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_days() {
        let mut config = AppConfig::default();
        config.forecast.days = 0;
        assert!(config.validate().is_err());
        config.forecast.days = 31;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_yaml_round_trips() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed: AppConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed.server.bind_addr, config.server.bind_addr);
        assert_eq!(parsed.forecast.days, config.forecast.days);
    }
}
