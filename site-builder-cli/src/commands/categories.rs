//! List the sidebar categories

use anyhow::Result;
use clap::Args;
use console::style;
use site_builder::catalog::{Catalog, WebsiteType};

use super::POPULAR;

/// List the categories shown in the sidebar
#[derive(Debug, Clone, Args)]
pub struct CategoriesCommand {
    /// Website type (ecommerce, service, ...)
    #[arg(short, long, default_value = "ecommerce")]
    pub website_type: String,

    /// Sidebar search query
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl CategoriesCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON output cannot be serialized.
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Render the command output
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON output cannot be serialized.
    pub fn render(&self) -> Result<String> {
        let website_type = WebsiteType::from(self.website_type.as_str());
        let categories = Catalog::builtin().search(&website_type, &self.query);

        if self.json {
            return Ok(serde_json::to_string_pretty(&categories)?);
        }

        let mut out = format!(
            "{} {} for {} websites\n",
            style(categories.len()).bold(),
            style("categories").bold(),
            style(&website_type).cyan()
        );
        for category in categories {
            let visible = category.visible_templates(&website_type).count();
            let marker = if category.popular {
                POPULAR.to_string()
            } else {
                " ".to_string()
            };
            out.push_str(&format!(
                "  {marker} {:<24} {} {}\n",
                category.id,
                category.label,
                style(format!("({visible} templates)")).dim()
            ));
        }
        Ok(out)
    }
}
