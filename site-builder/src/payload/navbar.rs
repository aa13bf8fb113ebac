//! Navbar configuration built when a navbar template is picked
//!
//! Each navbar template id maps to an explicit preset. Templates without
//! hand-written content use the base preset with their own style.

use serde::{Deserialize, Serialize};

use crate::error::SiteBuilderError;

/// Navbar layout style, serialized as `style-<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavbarStyle {
    /// Logo, links and a call to action
    #[serde(rename = "style-1")]
    Style1,
    /// Centered logo
    #[serde(rename = "style-2")]
    Style2,
    /// With search
    #[serde(rename = "style-3")]
    Style3,
    /// With categories
    #[serde(rename = "style-4")]
    Style4,
    /// E-commerce with banner
    #[serde(rename = "style-5")]
    Style5,
    /// E-commerce with top bar
    #[serde(rename = "style-6")]
    Style6,
    /// E-commerce with social links
    #[serde(rename = "style-7")]
    Style7,
    /// Social links
    #[serde(rename = "style-8")]
    Style8,
    /// Minimal
    #[serde(rename = "style-9")]
    Style9,
}

/// How the logo is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoType {
    /// Text only
    Text,
    /// Image only
    Image,
    /// Image followed by text
    Both,
}

/// Button appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled
    Primary,
    /// Muted fill
    Secondary,
    /// Border only
    Outline,
}

/// Navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link id, unique within the navbar
    pub id: String,
    /// Link text
    pub text: String,
    /// Target URL
    pub href: String,
}

/// Navbar button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavButton {
    /// Button id, unique within the navbar
    pub id: String,
    /// Button label
    pub text: String,
    /// Appearance
    pub variant: ButtonVariant,
    /// Target URL
    pub href: String,
}

/// Item of the thin bar above the navbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBarItem {
    /// Item id
    pub id: String,
    /// Item text
    pub text: String,
    /// Target URL
    pub href: String,
}

/// Navbar configuration handed to the page builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarData {
    /// Layout style
    pub style: NavbarStyle,
    /// Logo text
    pub logo_text: String,
    /// Logo rendering
    pub logo_type: LogoType,
    /// Show the cart icon
    pub show_cart: bool,
    /// Navigation links
    pub links: Vec<NavLink>,
    /// Buttons on the right-hand side
    pub buttons: Vec<NavButton>,
    /// Announcement banner text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_text: Option<String>,
    /// Top bar items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_bar_items: Vec<TopBarItem>,
}

fn link(id: &str, text: &str) -> NavLink {
    NavLink {
        id: id.to_string(),
        text: text.to_string(),
        href: "#".to_string(),
    }
}

fn button(id: &str, text: &str, variant: ButtonVariant) -> NavButton {
    NavButton {
        id: id.to_string(),
        text: text.to_string(),
        variant,
        href: "#".to_string(),
    }
}

fn links(texts: &[&str]) -> Vec<NavLink> {
    texts
        .iter()
        .zip(1..)
        .map(|(text, id)| link(&id.to_string(), text))
        .collect()
}

impl NavbarData {
    /// Base preset shared by every style
    #[must_use]
    pub fn base(style: NavbarStyle) -> Self {
        Self {
            style,
            logo_text: "Brand".to_string(),
            logo_type: LogoType::Text,
            show_cart: true,
            links: links(&["Home", "About", "Contact"]),
            buttons: Vec::new(),
            banner_text: None,
            top_bar_items: Vec::new(),
        }
    }
}

type Preset = fn(NavbarData) -> NavbarData;

const PRESETS: &[(&str, NavbarStyle, Preset)] = &[
    ("navbar-1", NavbarStyle::Style1, simple),
    ("navbar-2", NavbarStyle::Style2, centered),
    ("navbar-3", NavbarStyle::Style3, search),
    ("navbar-4", NavbarStyle::Style4, store),
    ("navbar-5", NavbarStyle::Style5, shop_with_banner),
    ("navbar-6", NavbarStyle::Style6, top_bar),
    ("navbar-7", NavbarStyle::Style7, unchanged),
    ("navbar-8", NavbarStyle::Style8, unchanged),
    ("navbar-9", NavbarStyle::Style9, unchanged),
];

fn simple(data: NavbarData) -> NavbarData {
    NavbarData {
        buttons: vec![button("1", "Get Started", ButtonVariant::Primary)],
        ..data
    }
}

fn centered(data: NavbarData) -> NavbarData {
    NavbarData {
        logo_text: "Centered".to_string(),
        links: links(&["Home", "About", "Services", "Contact"]),
        buttons: vec![button("1", "Book Now", ButtonVariant::Primary)],
        ..data
    }
}

fn search(data: NavbarData) -> NavbarData {
    NavbarData {
        logo_text: "SearchNav".to_string(),
        links: links(&["Home", "Products", "About"]),
        buttons: vec![button("1", "Search", ButtonVariant::Outline)],
        ..data
    }
}

fn store(data: NavbarData) -> NavbarData {
    NavbarData {
        logo_text: "Store".to_string(),
        links: links(&["Home", "Categories", "Deals"]),
        buttons: vec![button("1", "Shop Now", ButtonVariant::Primary)],
        ..data
    }
}

fn shop_with_banner(data: NavbarData) -> NavbarData {
    NavbarData {
        banner_text: Some("Get free delivery on orders over $100".to_string()),
        links: links(&["Women", "Men", "New Arrivals", "Sale"]),
        buttons: vec![
            button("1", "Sign in", ButtonVariant::Outline),
            button("2", "Create account", ButtonVariant::Primary),
        ],
        ..data
    }
}

fn top_bar(data: NavbarData) -> NavbarData {
    NavbarData {
        links: links(&["About Us", "FAQ", "Privacy Policy"]),
        buttons: Vec::new(),
        top_bar_items: vec![TopBarItem {
            id: "1".to_string(),
            text: "Customer Service: +977-9860425440".to_string(),
            href: "tel:+9779860425440".to_string(),
        }],
        ..data
    }
}

const fn unchanged(data: NavbarData) -> NavbarData {
    data
}

/// Navbar template ids that have a preset
pub fn navbar_template_ids() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(id, _, _)| *id)
}

/// Build the navbar configuration for a navbar template
///
/// # Errors
///
/// Returns [`SiteBuilderError::UnknownTemplate`] if `template_id` has no preset.
pub fn navbar_data(template_id: &str) -> Result<NavbarData, SiteBuilderError> {
    let (_, style, preset) = PRESETS
        .iter()
        .find(|(id, _, _)| *id == template_id)
        .ok_or_else(|| SiteBuilderError::UnknownTemplate(template_id.to_string()))?;
    Ok(preset(NavbarData::base(*style)))
}
