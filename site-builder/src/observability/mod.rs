//! Observability (structured logging)
//!
//! Installs a `tracing` subscriber with environment-based filtering: pretty
//! output for development builds, JSON lines for release builds.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Observability configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Emit JSON lines instead of pretty output
    pub json: bool,

    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "site-builder".to_string(),
            json: !cfg!(debug_assertions),
            default_filter: if cfg!(debug_assertions) {
                "debug,site_builder=trace".to_string()
            } else {
                "info".to_string()
            },
        }
    }
}

impl ObservabilityConfig {
    /// Create new observability config
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Force JSON output
    #[must_use]
    pub fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Force pretty output
    #[must_use]
    pub fn with_pretty(mut self) -> Self {
        self.json = false;
        self
    }

    /// Filter used when `RUST_LOG` is not set
    #[must_use]
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Initialize the observability stack with defaults
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use site_builder::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    init_with(&ObservabilityConfig::default())
}

/// Initialize the observability stack
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    tracing::debug!(
        service = %config.service_name,
        json = config.json,
        "Observability initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "site-builder");
        assert_eq!(config.json, !cfg!(debug_assertions));
    }

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("my-site")
            .with_json()
            .with_default_filter("warn");

        assert_eq!(config.service_name, "my-site");
        assert!(config.json);
        assert_eq!(config.default_filter, "warn");
        assert!(!config.with_pretty().json);
    }
}
