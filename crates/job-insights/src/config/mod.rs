use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::insights::BoardLists;

const DEFAULT_TRELLO_BASE_URL: &str = "https://api.trello.com/1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub trello: TrelloConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = env::var("APP_LOG_ANSI")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, ansi },
            trello: TrelloConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Credentials and list identifiers for the upstream board.
#[derive(Clone)]
pub struct TrelloConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_token: String,
    pub lists: BoardLists,
    pub timeout: Duration,
}

impl TrelloConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("TRELLO_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TRELLO_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match env::var("TRELLO_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key: required("TRELLO_API_KEY")?,
            api_token: required("TRELLO_API_TOKEN")?,
            lists: BoardLists {
                applied: required("TRELLO_APPLIED_LIST_ID")?,
                interviewing: required("TRELLO_INTERVIEWING_LIST_ID")?,
                closed: required("TRELLO_CLOSED_LIST_ID")?,
            },
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// Keeps the key and token out of `{:?}` output in logs and panics.
impl std::fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_token", &"<redacted>")
            .field("lists", &self.lists)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: std::net::AddrParseError },
    #[error("TRELLO_TIMEOUT_SECS must be a positive number of seconds")]
    InvalidTimeout,
    #[error("{0} must be set")]
    MissingVar(&'static str),
}
