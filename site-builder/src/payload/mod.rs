//! Payloads produced by a template selection
//!
//! A navbar template yields a complete [`NavbarData`], a footer template a
//! [`FooterStyle`], and every other template the `(component_id, template_id)`
//! pair that the page builder turns into section data itself.
//!
//! [`NavbarPayload`] and [`FooterPayload`] are the create/replace request bodies
//! the page API expects for the two site-wide components.

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub mod footer;
pub mod navbar;

pub use footer::{FooterData, FooterStyle};
pub use navbar::{navbar_data, NavbarData, NavbarStyle};

use crate::registry::ComponentType;

/// Outcome of a template click, ready for the page-update API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Selection {
    /// A regular page section
    #[serde(rename_all = "camelCase")]
    Component {
        /// Category id (e.g. `hero-sections`)
        component_id: String,
        /// Template id (e.g. `hero-3`)
        template_id: Option<String>,
        /// Page component type the category creates, when known
        #[serde(default, skip_serializing_if = "Option::is_none")]
        component_type: Option<ComponentType>,
    },
    /// A navbar configuration
    Navbar {
        /// The navbar configuration
        data: NavbarData,
    },
    /// A footer style
    Footer {
        /// The footer style
        style: FooterStyle,
    },
}

impl Selection {
    /// Component selection for a regular section
    #[must_use]
    pub fn component(component_id: &str, template_id: Option<&str>) -> Self {
        Self::Component {
            component_id: component_id.to_string(),
            template_id: template_id.map(str::to_string),
            component_type: ComponentType::for_section(component_id),
        }
    }

    /// Name of the HTMX event announcing this selection
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Component { .. } => "sectionSelected",
            Self::Navbar { .. } => "navbarSelected",
            Self::Footer { .. } => "footerSelected",
        }
    }
}

fn timestamped_id(prefix: &str) -> String {
    format!("{prefix}-{}", Utc::now().timestamp_millis())
}

/// Create/replace body for the site navbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarPayload {
    /// Placeholder content
    pub content: String,
    /// Navbar configuration
    pub navbar_data: NavbarData,
    /// Component id (`nav-<millis>`)
    #[serde(rename = "component_id")]
    pub component_id: String,
}

impl NavbarPayload {
    /// Wrap `navbar_data` with a fresh component id
    #[must_use]
    pub fn new(navbar_data: NavbarData) -> Self {
        Self {
            content: "navbar content".to_string(),
            navbar_data,
            component_id: timestamped_id("nav"),
        }
    }
}

/// Create/replace body for the site footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterPayload {
    /// Placeholder content
    pub content: String,
    /// Footer configuration
    pub footer_data: FooterData,
    /// Component id (`footer-<millis>`)
    #[serde(rename = "component_id")]
    pub component_id: String,
}

impl FooterPayload {
    /// Starter footer for `style` with a fresh component id
    #[must_use]
    pub fn new(style: FooterStyle) -> Self {
        Self {
            content: "footer content".to_string(),
            footer_data: FooterData::starter(style),
            component_id: timestamped_id("footer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_selection_json() {
        let selection = Selection::component("hero-sections", Some("hero-2"));
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["kind"], "component");
        assert_eq!(json["componentId"], "hero-sections");
        assert_eq!(json["templateId"], "hero-2");
        assert_eq!(json["componentType"], "hero");
    }

    #[test]
    fn test_footer_selection_json() {
        let selection = Selection::Footer {
            style: FooterStyle::Style3,
        };
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "footer", "style": "style-3"}));
        assert_eq!(selection.event_name(), "footerSelected");
    }

    #[test]
    fn test_navbar_payload() {
        let payload = NavbarPayload::new(navbar_data("navbar-1").unwrap());
        assert!(payload.component_id.starts_with("nav-"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["content"], "navbar content");
        assert_eq!(json["navbarData"]["style"], "style-1");
        assert!(json["component_id"].is_string());
    }

    #[test]
    fn test_footer_payload() {
        let payload = FooterPayload::new(FooterStyle::Style5);
        assert!(payload.component_id.starts_with("footer-"));
        assert_eq!(payload.footer_data.style, FooterStyle::Style5);
    }
}
