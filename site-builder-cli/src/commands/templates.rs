//! List the template grid

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use site_builder::catalog::{Catalog, Visible, WebsiteType};
use site_builder::selector::TemplateSelector;

use super::POPULAR;

/// List the templates the grid shows
///
/// Without `--category` this is the featured grid narrowed by `--query`.
#[derive(Debug, Clone, Args)]
pub struct TemplatesCommand {
    /// Website type (ecommerce, service, ...)
    #[arg(short, long, default_value = "ecommerce")]
    pub website_type: String,

    /// Category to list
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sidebar search query (ignored with `--category`)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl TemplatesCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the category is unknown or hidden for the website
    /// type, or if the JSON output cannot be serialized.
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Render the command output
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn render(&self) -> Result<String> {
        let catalog = Catalog::builtin();
        let website_type = WebsiteType::from(self.website_type.as_str());

        if let Some(id) = &self.category {
            match catalog.category(id) {
                None => bail!("Unknown category: {id}"),
                Some(category) if !category.is_visible_for(&website_type) => {
                    bail!("{id} is not available for {website_type} websites")
                }
                Some(_) => {}
            }
        }

        let entries = TemplateSelector::new(catalog, &website_type)
            .current(self.category.as_deref(), &self.query);

        if self.json {
            let rows: Vec<serde_json::Value> = entries
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "componentId": entry.component_id(),
                        "template": entry.template,
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&rows)?);
        }

        let heading = self
            .category
            .as_deref()
            .and_then(|id| catalog.category(id))
            .map_or_else(|| "Featured templates".to_string(), |c| c.label.to_string());

        let mut out = format!("{}\n", style(heading).bold());
        for entry in &entries {
            let marker = if entry.component.popular {
                POPULAR.to_string()
            } else {
                " ".to_string()
            };
            out.push_str(&format!(
                "  {marker} {:<16} {:<24} {}\n",
                entry.template_id(),
                entry.template.name,
                style(entry.component_id()).dim()
            ));
        }
        if entries.is_empty() {
            out.push_str("  No templates available.\n");
        }
        Ok(out)
    }
}
