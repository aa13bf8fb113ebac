//! Section catalog
//!
//! The catalog is the static registry behind the "Add Section" dialog: every
//! kind of page section the builder can insert, with its sidebar label, icon,
//! search keywords and the visual templates it ships with.
//!
//! # Ordering
//!
//! [`Catalog::builtin`] lists the navbar first, then every section category
//! sorted by label (case-insensitive), then the footer. All filters preserve
//! this order.
//!
//! # Example
//!
//! ```rust
//! use site_builder::catalog::{Catalog, WebsiteType};
//!
//! let catalog = Catalog::builtin();
//! let visible = catalog.search(&WebsiteType::Service, "hero");
//! assert_eq!(visible[0].id, "hero-sections");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[rustfmt::skip]
mod data;
pub mod featured;
pub mod visibility;

pub use featured::featured_template_ids;
pub use visibility::{is_visible, Visibility, Visible};

/// Kind of website the owner is building
///
/// Unknown values are kept verbatim so that allow-lists can still be evaluated
/// against them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebsiteType {
    /// Online store (default)
    #[default]
    Ecommerce,
    /// Service business
    Service,
    /// Any other website type
    Other(String),
}

impl WebsiteType {
    /// Wire name of the website type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::Service => "service",
            Self::Other(name) => name,
        }
    }

    /// Whether this is a service website
    #[must_use]
    pub const fn is_service(&self) -> bool {
        matches!(self, Self::Service)
    }
}

impl From<&str> for WebsiteType {
    fn from(value: &str) -> Self {
        match value {
            "ecommerce" => Self::Ecommerce,
            "service" => Self::Service,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for WebsiteType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<WebsiteType> for String {
    fn from(value: WebsiteType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for WebsiteType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for WebsiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a category's selection is handed to the page builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    /// Regular page section
    Section,
    /// Site navbar
    Navbar,
    /// Site footer
    Footer,
}

/// Sidebar icon of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Compass arrow
    Navigation,
    /// Square outline
    Square,
    /// Info circle
    Info,
    /// Calendar
    Calendar,
    /// Picture frame
    Image,
    /// Document
    FileText,
    /// Letter T
    Type,
    /// Open folder
    FolderOpen,
    /// Envelope
    Mail,
    /// Crown
    Crown,
    /// Shield
    Shield,
    /// Dollar sign
    DollarSign,
    /// Package box
    Package,
    /// Hamburger menu
    Menu,
    /// Price tag
    Tag,
    /// Quotation mark
    Quote,
}

impl Icon {
    /// Icon name in the icon font
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Square => "square",
            Self::Info => "info",
            Self::Calendar => "calendar",
            Self::Image => "image",
            Self::FileText => "file-text",
            Self::Type => "type",
            Self::FolderOpen => "folder-open",
            Self::Mail => "mail",
            Self::Crown => "crown",
            Self::Shield => "shield",
            Self::DollarSign => "dollar-sign",
            Self::Package => "package",
            Self::Menu => "menu",
            Self::Tag => "tag",
            Self::Quote => "quote",
        }
    }
}

/// One visual variant of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    /// Template id, unique across the catalog (e.g. `hero-3`)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Preview image path
    pub image: &'static str,
    /// Optional one-line description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Website types this template is restricted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_for_website_types: Option<&'static [&'static str]>,
}

/// One kind of page section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentCategory {
    /// Category id (e.g. `hero-sections`)
    pub id: &'static str,
    /// Sidebar label
    pub label: &'static str,
    /// Sidebar icon
    pub icon: Icon,
    /// Extra search terms
    pub keywords: &'static [&'static str],
    /// Header description shown when the category is opened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Whether the category opens a template list
    pub has_templates: bool,
    /// Templates in display order
    pub templates: &'static [TemplateItem],
    /// Marked with a star in the featured grid
    pub popular: bool,
    /// How a selection is dispatched
    #[serde(rename = "type")]
    pub section_type: SectionType,
    /// Hidden on service websites
    pub hide_for_service: bool,
    /// Website types this category is restricted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_for_website_types: Option<&'static [&'static str]>,
}

impl ComponentCategory {
    /// Look up one of this category's templates
    #[must_use]
    pub fn template(&self, template_id: &str) -> Option<&'static TemplateItem> {
        self.templates.iter().find(|template| template.id == template_id)
    }

    /// Templates of this category visible for `website_type`
    ///
    /// Does not check the category's own visibility.
    pub fn visible_templates<'a>(
        &self,
        website_type: &'a WebsiteType,
    ) -> impl Iterator<Item = &'static TemplateItem> + 'a {
        let templates: &'static [TemplateItem] = self.templates;
        templates
            .iter()
            .filter(move |template| template.is_visible_for(website_type))
    }

    /// Whether a normalized (trimmed, lowercase, non-empty) query matches
    #[must_use]
    pub fn matches_query(&self, normalized_query: &str) -> bool {
        let mut haystack = String::with_capacity(64);
        haystack.push_str(self.label);
        haystack.push(' ');
        haystack.push_str(self.id);
        for keyword in self.keywords {
            haystack.push(' ');
            haystack.push_str(keyword);
        }
        haystack.to_lowercase().contains(normalized_query)
    }
}

/// Normalize a search query the way the sidebar compares it
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Keep the categories whose label, id or keywords contain `query`
///
/// An empty (or whitespace-only) query returns the input unchanged.
#[must_use]
pub fn filter_by_query(
    categories: &[&'static ComponentCategory],
    query: &str,
) -> Vec<&'static ComponentCategory> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return categories.to_vec();
    }
    categories
        .iter()
        .copied()
        .filter(|category| category.matches_query(&normalized))
        .collect()
}

static BUILTIN: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_parts(&data::NAVBAR, data::SECTIONS, &data::FOOTER));

/// Ordered, indexed view over the static section registry
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<&'static ComponentCategory>,
    templates: HashMap<&'static str, (&'static ComponentCategory, &'static TemplateItem)>,
}

impl Catalog {
    /// The built-in catalog
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn from_parts(
        navbar: &'static ComponentCategory,
        sections: &'static [ComponentCategory],
        footer: &'static ComponentCategory,
    ) -> Self {
        let mut sorted: Vec<&'static ComponentCategory> = sections.iter().collect();
        sorted.sort_by_cached_key(|category| category.label.to_lowercase());

        let mut categories = Vec::with_capacity(sorted.len() + 2);
        categories.push(navbar);
        categories.extend(sorted);
        categories.push(footer);

        let mut templates = HashMap::new();
        for category in &categories {
            for template in category.templates {
                if templates.insert(template.id, (*category, template)).is_some() {
                    tracing::warn!(template_id = template.id, "Duplicate template id in catalog");
                }
            }
        }

        Self {
            categories,
            templates,
        }
    }

    /// Every category, in catalog order
    #[must_use]
    pub fn categories(&self) -> &[&'static ComponentCategory] {
        &self.categories
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, component_id: &str) -> Option<&'static ComponentCategory> {
        self.categories
            .iter()
            .copied()
            .find(|category| category.id == component_id)
    }

    /// Look up a template and its owning category by template id
    #[must_use]
    pub fn template(
        &self,
        template_id: &str,
    ) -> Option<(&'static ComponentCategory, &'static TemplateItem)> {
        self.templates.get(template_id).copied()
    }

    /// Number of templates across all categories
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Categories visible for `website_type`
    #[must_use]
    pub fn visible_categories(
        &self,
        website_type: &WebsiteType,
    ) -> Vec<&'static ComponentCategory> {
        self.categories
            .iter()
            .copied()
            .filter(|category| category.is_visible_for(website_type))
            .collect()
    }

    /// Sidebar categories: visible for `website_type` and matching `query`
    #[must_use]
    pub fn search(
        &self,
        website_type: &WebsiteType,
        query: &str,
    ) -> Vec<&'static ComponentCategory> {
        filter_by_query(&self.visible_categories(website_type), query)
    }

    /// Visible categories flagged as popular
    #[must_use]
    pub fn popular(&self, website_type: &WebsiteType) -> Vec<&'static ComponentCategory> {
        self.visible_categories(website_type)
            .into_iter()
            .filter(|category| category.popular)
            .collect()
    }
}
