//! site-builder: the "Add Section" catalog of a multi-tenant website builder
//!
//! Site owners add sections to a page from a dialog: a sidebar of section
//! categories (hero, about, navbar, footer, …) and a grid of visual templates.
//! This crate holds everything behind that dialog:
//!
//! - **catalog**: the static registry of categories and templates, with the
//!   website-type visibility rule and the sidebar search
//! - **selector**: which templates the grid shows (featured or per category)
//! - **dialog**: the dialog state machine and the [`dialog::SelectionHandler`]
//!   contract through which a template click reaches the page builder
//! - **payload**: navbar presets, footer styles and the page API bodies
//! - **handlers**: an axum + HTMX rendition of the dialog
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use site_builder::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     site_builder::observability::init()?;
//!
//!     let config = SiteBuilderConfig::load_for_service("site-builder")?;
//!     let addr = config.server.socket_addr()?;
//!     let app = site_builder::handlers::app(AppState::with_config(config));
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Resolving a click without the dialog
//!
//! ```rust
//! use site_builder::prelude::*;
//!
//! let selection = resolve_selection(
//!     Catalog::builtin(),
//!     &WebsiteType::Ecommerce,
//!     "navbar-sections",
//!     "navbar-5",
//! )?;
//!
//! match selection {
//!     Selection::Navbar { data } => {
//!         assert_eq!(data.banner_text.as_deref(), Some("Get free delivery on orders over $100"));
//!     }
//!     other => panic!("unexpected selection: {other:?}"),
//! }
//! # Ok::<(), SiteBuilderError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod dialog;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod observability;
pub mod payload;
pub mod registry;
pub mod selector;
pub mod state;
pub mod template;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use site_builder::prelude::*;
    //! ```

    pub use crate::catalog::{
        Catalog, ComponentCategory, SectionType, TemplateItem, Visibility, Visible, WebsiteType,
    };
    pub use crate::config::SiteBuilderConfig;
    pub use crate::dialog::{resolve_selection, AddSectionDialog, DialogState, SelectionHandler};
    pub use crate::error::SiteBuilderError;
    pub use crate::payload::{
        FooterData, FooterPayload, FooterStyle, NavbarData, NavbarPayload, NavbarStyle, Selection,
    };
    pub use crate::registry::{ComponentGroup, ComponentType};
    pub use crate::selector::{TemplateEntry, TemplateSelector};
    pub use crate::state::AppState;
    pub use crate::template::HxTemplate;

    pub use axum_htmx::{AutoVaryLayer, HxRequest, HxResponseTrigger};
}
