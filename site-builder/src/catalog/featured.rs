//! Featured templates shown before any category is opened

use super::WebsiteType;

const BASE: &[&str] = &[
    "newsletter-3",
    "youtube-1",
    "hero-1",
    "about-1",
    "contact-1",
    "policies-1",
    "text-editor-1",
    "navbar-1",
    "footer-1",
    "pricing-1",
];

const ECOMMERCE: &[&str] = &["product-1", "category-1", "testimonial-1"];

const SERVICE: &[&str] = &["services-1", "team-1", "testimonial-1"];

/// Template ids featured for `website_type`
///
/// The base list applies to every website type; e-commerce and service
/// websites get a few type-specific additions.
#[must_use]
pub fn featured_template_ids(website_type: &WebsiteType) -> Vec<&'static str> {
    let extra = match website_type {
        WebsiteType::Ecommerce => ECOMMERCE,
        WebsiteType::Service => SERVICE,
        WebsiteType::Other(_) => &[],
    };
    BASE.iter().chain(extra).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_featured_ids_exist_in_catalog() {
        let catalog = Catalog::builtin();
        for website_type in [
            WebsiteType::Ecommerce,
            WebsiteType::Service,
            WebsiteType::from("portfolio"),
        ] {
            for id in featured_template_ids(&website_type) {
                assert!(catalog.template(id).is_some(), "featured id {id} missing");
            }
        }
    }

    #[test]
    fn test_type_specific_additions() {
        let ecommerce = featured_template_ids(&WebsiteType::Ecommerce);
        assert!(ecommerce.contains(&"product-1"));
        assert!(!ecommerce.contains(&"services-1"));

        let service = featured_template_ids(&WebsiteType::Service);
        assert!(service.contains(&"team-1"));
        assert!(!service.contains(&"product-1"));

        assert_eq!(featured_template_ids(&WebsiteType::from("blog")).len(), BASE.len());
    }

    #[test]
    fn test_no_duplicates() {
        let ids = featured_template_ids(&WebsiteType::Ecommerce);
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
