//! Configuration loading and constants.
//!
//! Configuration comes from environment variables read once at startup.
//! `ServerConfig` is the immutable root configuration handed to the router and
//! the listener; `LoggingConfig` selects the log output format.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// TCP port the listener binds
pub const ENV_PORT: &str = "PORT";

/// Environment label reported by `GET /`
pub const ENV_APP_ENV: &str = "APP_ENV";

/// Legacy key for the environment label, consulted when `APP_ENV` is unset
pub const ENV_FLASK_ENV: &str = "FLASK_ENV";

/// Log output format ("text" or "json")
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Environment label used when neither `APP_ENV` nor `FLASK_ENV` is set
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Wildcard address; the listener accepts on every interface
pub const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Fixed greeting returned by `GET /`
pub const GREETING: &str = "Hello from AutoDocker Rust!";

/// Value of the `status` field returned by `GET /health`
pub const HEALTHY_STATUS: &str = "healthy";

/// Cache-Control for every route; responses are computed per request
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "autodocker_hello=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Process-wide configuration, resolved once before the listener is bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port the listener binds on all interfaces
    pub port: u16,
    /// Label copied into the `environment` field of the root response
    pub environment: String,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// The environment label is taken from the first key that is set, even when
    /// its value is empty. A `PORT` that is present but not a valid non-zero
    /// port is an error, never a silent fallback to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(ENV_PORT) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let environment = [ENV_APP_ENV, ENV_FLASK_ENV]
            .iter()
            .find_map(|key| lookup(key))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let logging = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => LoggingConfig::parse(&raw)?,
            None => LoggingConfig::default(),
        };

        Ok(Self {
            port,
            environment,
            logging,
        })
    }

    /// Socket address the listener binds.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(BIND_HOST, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let invalid = || ConfigError::InvalidPort(raw.to_string());
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(port) => Ok(port),
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl LoggingConfig {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        let format = match raw.trim().to_ascii_lowercase().as_str() {
            "" | DEFAULT_LOG_FORMAT => LogFormat::Text,
            "json" => LogFormat::Json,
            _ => return Err(ConfigError::InvalidLogFormat(raw.to_string())),
        };
        Ok(Self { format })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {0:?}: expected an integer between 1 and 65535")]
    InvalidPort(String),
    #[error("Invalid LOG_FORMAT value {0:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_port_from_env() {
        let config = resolve(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_port_trims_whitespace() {
        assert_eq!(resolve(&[("PORT", " 9000\n")]).unwrap().port, 9000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        for raw in ["", "  ", "abc", "80a", "-1", "0", "65536", "5000.0"] {
            let err = resolve(&[("PORT", raw)]).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidPort(ref v) if v == raw),
                "expected InvalidPort for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_environment_prefers_app_env() {
        let config = resolve(&[("APP_ENV", "staging"), ("FLASK_ENV", "production")]).unwrap();
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_environment_falls_back_to_flask_env() {
        let config = resolve(&[("FLASK_ENV", "production")]).unwrap();
        assert_eq!(config.environment, "production");

    }

    #[test]
    fn test_empty_environment_is_passed_through() {
        let config = ServerConfig::from_lookup(|key| (key == "FLASK_ENV").then(String::new)).unwrap();
        assert_eq!(config.environment, "");

        // A set but empty APP_ENV still wins over FLASK_ENV
        let config = resolve(&[("APP_ENV", ""), ("FLASK_ENV", "production")]).unwrap();
        assert_eq!(config.environment, "");
    }

    #[test]
    fn test_log_format() {
        let config = resolve(&[("LOG_FORMAT", "JSON")]).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);

        let config = resolve(&[("LOG_FORMAT", "text")]).unwrap();
        assert_eq!(config.logging.format, LogFormat::Text);

        let err = resolve(&[("LOG_FORMAT", "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat(_)));
    }

    #[test]
    fn test_error_messages_name_the_variable() {
        let err = resolve(&[("PORT", "abc")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("\"abc\""));
    }
}
