//! Page component registry
//!
//! Maps dialog categories to the page component types the builder creates and
//! describes each type: display name, builder group and default variant.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Group a component type is listed under in the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentGroup {
    /// Core building blocks
    Basic,
    /// Editorial content
    Content,
    /// Backed by site data (blog posts, services, …)
    Dynamic,
    /// Store-specific
    Ecommerce,
    /// Legal pages
    Legal,
    /// Site navigation
    Navigation,
    /// Site footer
    Footer,
}

/// Page component type created by the page-update API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Hero section
    Hero,
    /// Miscellaneous marketing blocks
    Others,
    /// About us
    About,
    /// Call to action
    Cta,
    /// Pricing tables
    Pricing,
    /// Product grid
    Products,
    /// Product categories
    Category,
    /// Product subcategories
    Subcategory,
    /// Services
    Services,
    /// Client logos
    OurClients,
    /// Contact form
    Contact,
    /// Appointment form
    Appointment,
    /// Team members
    Team,
    /// Testimonials
    Testimonials,
    /// Image gallery
    Gallery,
    /// Blog posts
    Blog,
    /// FAQ
    Faq,
    /// Portfolio
    Portfolio,
    /// Banner
    Banner,
    /// Embedded videos
    Videos,
    /// Newsletter signup
    Newsletter,
    /// Policies
    Policies,
    /// Free text
    TextEditor,
}

const SECTIONS: &[(&str, ComponentType)] = &[
    ("hero-sections", ComponentType::Hero),
    ("others-sections", ComponentType::Others),
    ("about-sections", ComponentType::About),
    ("cta-sections", ComponentType::Cta),
    ("pricing-sections", ComponentType::Pricing),
    ("products-sections", ComponentType::Products),
    ("categories-sections", ComponentType::Category),
    ("subcategories-sections", ComponentType::Subcategory),
    ("services-sections", ComponentType::Services),
    ("our-clients-sections", ComponentType::OurClients),
    ("contact-sections", ComponentType::Contact),
    ("appointment-sections", ComponentType::Appointment),
    ("team-members-sections", ComponentType::Team),
    ("testimonials-sections", ComponentType::Testimonials),
    ("gallery-sections", ComponentType::Gallery),
    ("blog-sections", ComponentType::Blog),
    ("faq-sections", ComponentType::Faq),
    ("portfolio-sections", ComponentType::Portfolio),
    ("banner-sections", ComponentType::Banner),
    ("videos-sections", ComponentType::Videos),
    ("youtube-sections", ComponentType::Videos),
    ("newsletter-sections", ComponentType::Newsletter),
    ("policies-sections", ComponentType::Policies),
    ("text-editor-sections", ComponentType::TextEditor),
];

impl ComponentType {
    /// Component type created by a dialog category
    ///
    /// Navbar and footer categories are handled separately and return `None`.
    #[must_use]
    pub fn for_section(component_id: &str) -> Option<Self> {
        SECTIONS
            .iter()
            .find(|(id, _)| *id == component_id)
            .map(|(_, component_type)| *component_type)
    }

    /// Name shown in the page outline
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Others => "Others",
            Self::About => "About Us",
            Self::Cta => "CTA",
            Self::Pricing => "Pricing",
            Self::Products => "Products",
            Self::Category => "Category",
            Self::Subcategory => "SubCategory",
            Self::Services => "Services",
            Self::OurClients => "Our Clients",
            Self::Contact => "Contact",
            Self::Appointment => "Appointment",
            Self::Team => "Team",
            Self::Testimonials => "Testimonials",
            Self::Gallery => "Gallery",
            Self::Blog => "Blog",
            Self::Faq => "FAQ",
            Self::Portfolio => "Portfolio",
            Self::Banner => "Banner",
            Self::Videos => "Videos",
            Self::Newsletter => "Newsletter",
            Self::Policies => "Policies",
            Self::TextEditor => "Text Editor",
        }
    }

    /// Builder group
    #[must_use]
    pub const fn group(self) -> ComponentGroup {
        match self {
            Self::Hero
            | Self::Contact
            | Self::Cta
            | Self::Newsletter
            | Self::Banner
            | Self::Others => ComponentGroup::Basic,
            Self::About
            | Self::Team
            | Self::Testimonials
            | Self::Faq
            | Self::Gallery
            | Self::Videos
            | Self::TextEditor
            | Self::OurClients => ComponentGroup::Content,
            Self::Blog
            | Self::Appointment
            | Self::Portfolio
            | Self::Services
            | Self::Pricing => ComponentGroup::Dynamic,
            Self::Products | Self::Category | Self::Subcategory => ComponentGroup::Ecommerce,
            Self::Policies => ComponentGroup::Legal,
        }
    }

    /// Variant used when no (or an unknown) template is given
    #[must_use]
    pub const fn default_variant(self) -> &'static str {
        match self {
            Self::Hero => "hero-1",
            Self::Others => "others-1",
            Self::About => "about-1",
            Self::Cta => "cta-1",
            Self::Pricing => "pricing-1",
            Self::Products => "product-1",
            Self::Category => "category-1",
            Self::Subcategory => "subcategory-1",
            Self::Services => "services-1",
            Self::OurClients => "our-clients-1",
            Self::Contact => "contact-1",
            Self::Appointment => "appointment-1",
            Self::Team => "team-1",
            Self::Testimonials => "testimonial-1",
            Self::Gallery => "gallery-1",
            Self::Blog => "blog-1",
            Self::Faq => "faq-1",
            Self::Portfolio => "portfolio-1",
            Self::Banner => "banner-1",
            Self::Videos => "videos-1",
            Self::Newsletter => "newsletter-1",
            Self::Policies => "privacy-policy",
            Self::TextEditor => "default",
        }
    }

    /// Variant to create for `template_id`
    ///
    /// The template is kept when the catalog files it under a category of this
    /// type; anything else falls back to [`Self::default_variant`].
    #[must_use]
    pub fn resolve_variant<'a>(self, catalog: &Catalog, template_id: Option<&'a str>) -> &'a str {
        template_id
            .filter(|id| {
                catalog
                    .template(id)
                    .and_then(|(component, _)| Self::for_section(component.id))
                    == Some(self)
            })
            .unwrap_or_else(|| self.default_variant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SectionType;

    #[test]
    fn test_every_section_category_has_a_type() {
        for category in Catalog::builtin().categories() {
            let mapped = ComponentType::for_section(category.id);
            match category.section_type {
                SectionType::Section => assert!(mapped.is_some(), "{} unmapped", category.id),
                SectionType::Navbar | SectionType::Footer => assert!(mapped.is_none()),
            }
        }
    }

    #[test]
    fn test_mapping() {
        assert_eq!(
            ComponentType::for_section("team-members-sections"),
            Some(ComponentType::Team)
        );
        assert_eq!(
            ComponentType::for_section("text-editor-sections"),
            Some(ComponentType::TextEditor)
        );
        assert_eq!(ComponentType::for_section("navbar-sections"), None);
    }

    #[test]
    fn test_groups_and_names() {
        assert_eq!(ComponentType::Products.group(), ComponentGroup::Ecommerce);
        assert_eq!(ComponentType::Policies.group(), ComponentGroup::Legal);
        assert_eq!(ComponentType::Faq.display_name(), "FAQ");
        assert_eq!(
            serde_json::to_string(&ComponentType::OurClients).unwrap(),
            r#""our_clients""#
        );
    }

    #[test]
    fn test_resolve_variant() {
        let catalog = Catalog::builtin();
        assert_eq!(
            ComponentType::Hero.resolve_variant(catalog, Some("hero-7")),
            "hero-7"
        );
        assert_eq!(
            ComponentType::Hero.resolve_variant(catalog, Some("about-2")),
            "hero-1"
        );
        assert_eq!(ComponentType::Policies.resolve_variant(catalog, None), "privacy-policy");
    }
}
