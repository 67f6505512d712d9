//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CONSOLE_HOST` - Bind address (default: 127.0.0.1)
//! - `CONSOLE_PORT` - Listen port (default: 3001)
//! - `CONSOLE_BASE_URL` - Public URL; `https://` marks the session cookie Secure
//!   (default: `http://localhost:3001`)
//! - `CONSOLE_SHARED_PASSWORD` - Password accepted for every console account
//!   (default: loyalty123)
//! - `CONSOLE_LOGIN_DELAY_MS` - Simulated login latency (default: 1000)
//! - `CONSOLE_REGISTRATION_DELAY_MS` - Simulated registration latency (default: 1500)
//! - `CONSOLE_SESSION_TTL_SECS` - Session inactivity expiry (default: 86400)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Password accepted for every built-in account unless overridden.
pub const DEFAULT_SHARED_PASSWORD: &str = "loyalty123";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
const DEFAULT_REGISTRATION_DELAY_MS: u64 = 1500;
const DEFAULT_SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Console application configuration.
///
/// Implements `Debug` manually to redact the shared password.
#[derive(Clone)]
pub struct ConsoleConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the console
    pub base_url: String,
    /// Password every directory account logs in with
    pub shared_password: SecretString,
    /// Simulated latency before a login attempt is answered
    pub login_delay: Duration,
    /// Simulated latency before a staff registration is answered
    pub registration_delay: Duration,
    /// Session inactivity expiry in seconds
    pub session_ttl_secs: i64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl std::fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .field("shared_password", &"[REDACTED]")
            .field("login_delay", &self.login_delay)
            .field("registration_delay", &self.registration_delay)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("sentry_dsn", &self.sentry_dsn)
            .field("sentry_environment", &self.sentry_environment)
            .field("sentry_sample_rate", &self.sentry_sample_rate)
            .field("sentry_traces_sample_rate", &self.sentry_traces_sample_rate)
            .finish()
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            base_url: format!("http://localhost:{DEFAULT_PORT}"),
            shared_password: SecretString::from(DEFAULT_SHARED_PASSWORD),
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            registration_delay: Duration::from_millis(DEFAULT_REGISTRATION_DELAY_MS),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env_or("CONSOLE_HOST", defaults.host)?;
        let port = parse_env_or("CONSOLE_PORT", defaults.port)?;
        let base_url = get_optional_env("CONSOLE_BASE_URL").unwrap_or(defaults.base_url);
        let shared_password = get_optional_env("CONSOLE_SHARED_PASSWORD")
            .map_or(defaults.shared_password, SecretString::from);
        let login_delay = Duration::from_millis(parse_env_or(
            "CONSOLE_LOGIN_DELAY_MS",
            DEFAULT_LOGIN_DELAY_MS,
        )?);
        let registration_delay = Duration::from_millis(parse_env_or(
            "CONSOLE_REGISTRATION_DELAY_MS",
            DEFAULT_REGISTRATION_DELAY_MS,
        )?);
        let session_ttl_secs = parse_env_or("CONSOLE_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        if session_ttl_secs <= 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CONSOLE_SESSION_TTL_SECS".to_string(),
                "must be positive".to_string(),
            ));
        }

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.sentry_sample_rate);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.sentry_traces_sample_rate);

        Ok(Self {
            host,
            port,
            base_url,
            shared_password,
            login_delay,
            registration_delay,
            session_ttl_secs,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the console is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional environment variable, falling back to `default`.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
