use crate::workflows::reality_check::{RealityCheckConfig, ScoringPolicy};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HISTORY_LIMIT: usize = 10;

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
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let scoring_policy = match env::var("APP_SCORING_POLICY") {
            Ok(raw) => raw
                .parse::<ScoringPolicy>()
                .map_err(|err| ConfigError::InvalidScoringPolicy { value: err.value })?,
            Err(_) => ScoringPolicy::default(),
        };

        let history_limit = match env::var("APP_HISTORY_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidHistoryLimit { value: raw })?,
            Err(_) => DEFAULT_HISTORY_LIMIT,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            engine: EngineConfig {
                scoring_policy,
                history_limit,
            },
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Scoring and run-history dials.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub scoring_policy: ScoringPolicy,
    pub history_limit: usize,
}

impl EngineConfig {
    pub fn reality_check(&self) -> RealityCheckConfig {
        RealityCheckConfig {
            scoring_policy: self.scoring_policy,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring_policy: ScoringPolicy::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidScoringPolicy { value: String },
    InvalidHistoryLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidScoringPolicy { value } => write!(
                f,
                "APP_SCORING_POLICY must be 'total' or 'direct' (found '{value}')"
            ),
            ConfigError::InvalidHistoryLimit { value } => write!(
                f,
                "APP_HISTORY_LIMIT must be a positive integer (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidScoringPolicy { .. }
            | ConfigError::InvalidHistoryLimit { .. } => None,
        }
    }
}
