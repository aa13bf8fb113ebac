//! Template grid selection
//!
//! Decides which templates the main panel of the dialog shows:
//!
//! - with no category selected, the featured templates of every sidebar
//!   category (the query narrows the sidebar and therefore the featured grid)
//! - with a category selected, every visible template of that category
//!
//! Each entry carries its owning category so that a click can be routed back
//! to the right handler.

use serde::Serialize;

use crate::catalog::{
    featured_template_ids, Catalog, ComponentCategory, TemplateItem, Visible, WebsiteType,
};

/// A template together with the category that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEntry {
    /// Owning category
    pub component: &'static ComponentCategory,
    /// The template
    pub template: &'static TemplateItem,
}

impl TemplateEntry {
    /// Id of the owning category
    #[must_use]
    pub const fn component_id(&self) -> &'static str {
        self.component.id
    }

    /// Id of the template
    #[must_use]
    pub const fn template_id(&self) -> &'static str {
        self.template.id
    }
}

/// Computes template grids for one website type
#[derive(Debug, Clone, Copy)]
pub struct TemplateSelector<'a> {
    catalog: &'a Catalog,
    website_type: &'a WebsiteType,
}

impl<'a> TemplateSelector<'a> {
    /// Create a selector over `catalog` for `website_type`
    #[must_use]
    pub const fn new(catalog: &'a Catalog, website_type: &'a WebsiteType) -> Self {
        Self {
            catalog,
            website_type,
        }
    }

    /// Featured templates of the categories matching `query`
    #[must_use]
    pub fn featured(&self, query: &str) -> Vec<TemplateEntry> {
        let featured = featured_template_ids(self.website_type);
        self.catalog
            .search(self.website_type, query)
            .into_iter()
            .flat_map(|component| {
                component
                    .visible_templates(self.website_type)
                    .map(move |template| TemplateEntry {
                        component,
                        template,
                    })
            })
            .filter(|entry| featured.contains(&entry.template.id))
            .collect()
    }

    /// Every visible template of `component_id`
    ///
    /// Unknown categories and categories hidden for the website type yield an
    /// empty list.
    #[must_use]
    pub fn category(&self, component_id: &str) -> Vec<TemplateEntry> {
        let Some(component) = self.catalog.category(component_id) else {
            return Vec::new();
        };
        if !component.is_visible_for(self.website_type) {
            return Vec::new();
        }
        component
            .visible_templates(self.website_type)
            .map(|template| TemplateEntry {
                component,
                template,
            })
            .collect()
    }

    /// Templates for the dialog's current filter state
    #[must_use]
    pub fn current(&self, selected_category: Option<&str>, query: &str) -> Vec<TemplateEntry> {
        match selected_category {
            Some(component_id) => self.category(component_id),
            None => self.featured(query),
        }
    }
}
