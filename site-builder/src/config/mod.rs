//! Configuration management for site-builder
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `SITE_BUILDER_` prefix)
//! 2. `./config.toml` (development)
//! 3. `~/.config/site-builder/{service}/config.toml` (user config, XDG)
//! 4. `/etc/site-builder/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! request_timeout_ms = 5000
//!
//! [builder]
//! website_type = "service"
//! featured_limit = 12
//!
//! [htmx]
//! auto_vary = true
//!
//! [features]
//! popular_badges = true
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use site_builder::config::SiteBuilderConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = SiteBuilderConfig::load_for_service("my-site")?;
//!
//! let port = config.server.port;
//! let website_type = &config.builder.website_type;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::WebsiteType;
use crate::error::SiteBuilderError;

const ENV_PREFIX: &str = "SITE_BUILDER_";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_ms: 5000,
        }
    }
}

impl ServerSettings {
    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// Returns [`SiteBuilderError::Config`] if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, SiteBuilderError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|err| SiteBuilderError::Config(format!("invalid bind address: {err}")))
    }

    /// Request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Page builder configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderSettings {
    /// Website type used when a request does not name one
    pub website_type: WebsiteType,

    /// Cap on the number of featured templates shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_limit: Option<usize>,
}

/// HTMX-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmxSettings {
    /// Enable auto-vary middleware for caching
    pub auto_vary: bool,
}

impl Default for HtmxSettings {
    fn default() -> Self {
        Self { auto_vary: true }
    }
}

/// Complete site-builder configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteBuilderConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Page builder settings
    #[serde(default)]
    pub builder: BuilderSettings,

    /// HTMX-specific settings
    #[serde(default)]
    pub htmx: HtmxSettings,

    /// Feature flags
    #[serde(default)]
    pub features: HashMap<String, bool>,
}

impl SiteBuilderConfig {
    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`SITE_BUILDER_*`, `__` for nesting)
    /// 2. `./config.toml`
    /// 3. `~/.config/site-builder/{service_name}/config.toml`
    /// 4. `/etc/site-builder/{service_name}/config.toml`
    /// 5. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - Configuration values fail type conversion
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Self::defaults()?;

        let system_config = PathBuf::from("/etc/site-builder")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config = figment.merge(Self::env()).extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place. Environment variables still
    /// override the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML syntax
    /// - Configuration values fail type conversion
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use site_builder::config::SiteBuilderConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = SiteBuilderConfig::load_from("./config/production.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Self::defaults()?
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env())
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use site_builder::config::SiteBuilderConfig;
    ///
    /// let path = SiteBuilderConfig::recommended_path("my-site");
    /// // Returns: ~/.config/site-builder/my-site/config.toml
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("site-builder")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Create config directory for a service
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_config_dir(service_name: &str) -> anyhow::Result<PathBuf> {
        let config_path = Self::recommended_path(service_name);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(config_path)
    }

    /// Value of a feature flag, or `default` when the flag is unset
    #[must_use]
    pub fn feature(&self, name: &str, default: bool) -> bool {
        self.features.get(name).copied().unwrap_or(default)
    }

    fn defaults() -> anyhow::Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__").lowercase(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SiteBuilderConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.builder.website_type, WebsiteType::Ecommerce);
        assert_eq!(config.builder.featured_limit, None);
        assert!(config.htmx.auto_vary);
        assert!(config.feature("popular_badges", true));
        assert!(!config.feature("popular_badges", false));
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerSettings::default();
        assert_eq!(server.socket_addr().unwrap().port(), 3000);

        let bad = ServerSettings {
            host: "not a host".to_string(),
            ..ServerSettings::default()
        };
        assert!(matches!(bad.socket_addr(), Err(SiteBuilderError::Config(_))));
    }

    #[test]
    fn test_recommended_path() {
        let path = SiteBuilderConfig::recommended_path("test-site");
        let path = path.to_str().unwrap();

        assert!(path.contains("test-site"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let config = SiteBuilderConfig::load_from("/nonexistent/path/config.toml").unwrap();
        assert_eq!(config.server.request_timeout_ms, 5000);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8080

[builder]
website_type = "service"
featured_limit = 6

[htmx]
auto_vary = false

[features]
popular_badges = false
"#
        )
        .unwrap();

        let config = SiteBuilderConfig::load_from(file.path()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.builder.website_type, WebsiteType::Service);
        assert_eq!(config.builder.featured_limit, Some(6));
        assert!(!config.htmx.auto_vary);
        assert!(!config.feature("popular_badges", true));
    }
}
