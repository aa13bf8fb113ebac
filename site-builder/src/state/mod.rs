//! Application state shared by the HTTP handlers
//!
//! Everything here is read-only: dialog state travels in each request.

use crate::{catalog::Catalog, config::SiteBuilderConfig, observability::ObservabilityConfig};
use std::sync::Arc;

/// Application state for the section service
///
/// # Example
///
/// ```rust
/// use site_builder::state::AppState;
///
/// let state = AppState::new();
/// let app: axum::Router = site_builder::handlers::routes().with_state(state);
/// ```
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<SiteBuilderConfig>,

    /// Observability configuration
    observability: Arc<ObservabilityConfig>,

    /// Section catalog
    catalog: &'static Catalog,
}

impl AppState {
    /// Create application state with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SiteBuilderConfig::default())
    }

    /// Create application state with custom configuration
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use site_builder::{config::SiteBuilderConfig, state::AppState};
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = SiteBuilderConfig::load_for_service("my-site")?;
    /// let state = AppState::with_config(config);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn with_config(config: SiteBuilderConfig) -> Self {
        Self {
            config: Arc::new(config),
            observability: Arc::new(ObservabilityConfig::default()),
            catalog: Catalog::builtin(),
        }
    }

    /// Replace the observability configuration
    #[must_use]
    pub fn with_observability(mut self, observability: ObservabilityConfig) -> Self {
        self.observability = Arc::new(observability);
        self
    }

    /// Get configuration reference
    #[must_use]
    pub fn config(&self) -> &SiteBuilderConfig {
        &self.config
    }

    /// Get observability configuration
    #[must_use]
    pub fn observability(&self) -> &ObservabilityConfig {
        &self.observability
    }

    /// Section catalog
    #[must_use]
    pub const fn catalog(&self) -> &'static Catalog {
        self.catalog
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
