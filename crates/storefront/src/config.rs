//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run the site against an
//! embedded SQLite file in the working directory.
//!
//! - `FESTIVA_DATABASE_URL` - SQLite connection string
//!   (default: `sqlite://festiva.db`; falls back to `DATABASE_URL`)
//! - `FESTIVA_HOST` - Bind address (default: 127.0.0.1)
//! - `FESTIVA_PORT` - Listen port (default: 3000)
//! - `FESTIVA_SECRET_KEY` - Session signing secret for the transport layer
//! - `FESTIVA_SESSION_LIFETIME_MINUTES` - Session lifetime (default: 30)
//! - `MAIL_SERVER` / `MAIL_PORT` / `MAIL_USE_TLS` - Outbound mail endpoint
//! - `MAIL_USERNAME` / `MAIL_PASSWORD` - Outbound mail credentials
//! - `FESTIVA_PRODUCTS_PER_PAGE` - Catalog page size (default: 12)
//! - `FESTIVA_BLOG_POSTS_PER_PAGE` - Blog page size (default: 6)
//! - `FESTIVA_NEWS_PER_PAGE` - News page size (default: 10)
//!
//! The mail settings are consumed by the external order notifier, and the
//! page sizes are reserved for pagination; neither is read by the query
//! logic itself.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Default store location when no database URL is configured.
const DEFAULT_DATABASE_URL: &str = "sqlite://festiva.db";

/// Development-only fallback for the session signing secret.
const DEFAULT_SECRET_KEY: &str = "festiva-dev-secret-key";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// SQLite connection string (e.g. `sqlite://festiva.db`)
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Session signing secret, consumed by the transport layer
    pub secret_key: SecretString,
    /// Session lifetime
    pub session_lifetime: Duration,
    /// Outbound mail configuration for the order notifier
    pub mail: MailConfig,
    /// Page-size constants, reserved for pagination
    pub pages: PageSizes,
}

/// Outbound mail configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct MailConfig {
    /// SMTP server hostname
    pub server: String,
    /// SMTP server port
    pub port: u16,
    /// Whether to use STARTTLS
    pub use_tls: bool,
    /// SMTP username, if configured
    pub username: Option<String>,
    /// SMTP password, if configured
    pub password: Option<SecretString>,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Page-size constants for product, blog, and news listings.
///
/// Declared on the config surface and overridable from the environment,
/// but not yet applied to the list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    pub products_per_page: u32,
    pub blog_posts_per_page: u32,
    pub news_per_page: u32,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            products_per_page: 12,
            blog_posts_per_page: 6,
            news_per_page: 10,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url();
        let host = parse_env("FESTIVA_HOST", "127.0.0.1")?;
        let port = parse_env("FESTIVA_PORT", "3000")?;
        let secret_key =
            SecretString::from(get_env_or_default("FESTIVA_SECRET_KEY", DEFAULT_SECRET_KEY));
        let lifetime_minutes: u64 = parse_env("FESTIVA_SESSION_LIFETIME_MINUTES", "30")?;

        let mail = MailConfig::from_env()?;
        let pages = PageSizes::from_env()?;

        Ok(Self {
            database_url,
            host,
            port,
            secret_key,
            session_lifetime: Duration::from_secs(lifetime_minutes * 60),
            mail,
            pages,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl MailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: get_env_or_default("MAIL_SERVER", "smtp.gmail.com"),
            port: parse_env("MAIL_PORT", "587")?,
            use_tls: parse_env("MAIL_USE_TLS", "true")?,
            username: get_optional_env("MAIL_USERNAME"),
            password: get_optional_env("MAIL_PASSWORD").map(SecretString::from),
        })
    }
}

impl PageSizes {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            products_per_page: parse_env("FESTIVA_PRODUCTS_PER_PAGE", "12")?,
            blog_posts_per_page: parse_env("FESTIVA_BLOG_POSTS_PER_PAGE", "6")?,
            news_per_page: parse_env("FESTIVA_NEWS_PER_PAGE", "10")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the database URL with fallback to generic `DATABASE_URL`, then the
/// embedded-file default.
fn get_database_url() -> String {
    if let Ok(value) = std::env::var("FESTIVA_DATABASE_URL") {
        return value;
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return value;
    }
    DEFAULT_DATABASE_URL.to_string()
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable with a default value.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            secret_key: SecretString::from(DEFAULT_SECRET_KEY),
            session_lifetime: Duration::from_secs(30 * 60),
            mail: MailConfig {
                server: "smtp.gmail.com".to_string(),
                port: 587,
                use_tls: true,
                username: None,
                password: Some(SecretString::from("hunter2-but-long")),
            },
            pages: PageSizes::default(),
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_default_page_sizes() {
        let pages = PageSizes::default();
        assert_eq!(pages.products_per_page, 12);
        assert_eq!(pages.blog_posts_per_page, 6);
        assert_eq!(pages.news_per_page, 10);
    }

    #[test]
    fn test_mail_config_debug_redacts_password() {
        let config = test_config();
        let debug_output = format!("{:?}", config.mail);

        assert!(debug_output.contains("smtp.gmail.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter2-but-long"));
    }
}
