//! Website-type visibility rules
//!
//! Categories and templates both carry an optional allow-list of website types;
//! categories may additionally be hidden for service websites. The same
//! [`Visibility`] rule evaluates both levels, and an entry in the template grid is
//! shown only when its category and the template itself pass.

use super::{ComponentCategory, TemplateItem, WebsiteType};

/// Visibility rule attached to a catalog item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    /// When set, the item is shown only for these website types
    pub show_for_website_types: Option<&'static [&'static str]>,

    /// Hide the item on service websites (ignored when an allow-list is set)
    pub hide_for_service: bool,
}

impl Visibility {
    /// Rule that admits every website type
    pub const ALWAYS: Self = Self {
        show_for_website_types: None,
        hide_for_service: false,
    };

    /// Whether the rule admits `website_type`
    ///
    /// An explicit allow-list decides on its own; otherwise `hide_for_service`
    /// excludes service websites only.
    #[must_use]
    pub fn allows(&self, website_type: &WebsiteType) -> bool {
        if let Some(allowed) = self.show_for_website_types {
            return allowed.contains(&website_type.as_str());
        }
        !(self.hide_for_service && website_type.is_service())
    }
}

/// Catalog items with a [`Visibility`] rule
pub trait Visible {
    /// The item's visibility rule
    fn visibility(&self) -> Visibility;

    /// Whether the item is visible for `website_type`
    fn is_visible_for(&self, website_type: &WebsiteType) -> bool {
        self.visibility().allows(website_type)
    }
}

impl Visible for ComponentCategory {
    fn visibility(&self) -> Visibility {
        Visibility {
            show_for_website_types: self.show_for_website_types,
            hide_for_service: self.hide_for_service,
        }
    }
}

impl Visible for TemplateItem {
    fn visibility(&self) -> Visibility {
        Visibility {
            show_for_website_types: self.show_for_website_types,
            hide_for_service: false,
        }
    }
}

/// Whether `template` may be shown inside `category` for `website_type`
#[must_use]
pub fn is_visible(
    category: &ComponentCategory,
    template: &TemplateItem,
    website_type: &WebsiteType,
) -> bool {
    category.is_visible_for(website_type) && template.is_visible_for(website_type)
}
