//! Resolve a template click into its page API payload

use anyhow::{Context, Result};
use clap::Args;
use site_builder::catalog::WebsiteType;
use site_builder::dialog::resolve_selection;
use site_builder::handlers::sections::SelectionResponse;
use site_builder::state::AppState;

/// Print the payload a template click produces
#[derive(Debug, Clone, Args)]
pub struct SelectCommand {
    /// Category id (e.g. `navbar-sections`)
    pub component_id: String,

    /// Template id (e.g. `navbar-5`)
    pub template_id: String,

    /// Website type (ecommerce, service, ...)
    #[arg(short, long, default_value = "ecommerce")]
    pub website_type: String,
}

impl SelectCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the click does not resolve (unknown ids, template
    /// outside the category, hidden for the website type).
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Render the payload as pretty JSON
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn render(&self) -> Result<String> {
        let state = AppState::new();
        let website_type = WebsiteType::from(self.website_type.as_str());
        let selection = resolve_selection(
            state.catalog(),
            &website_type,
            &self.component_id,
            &self.template_id,
        )
        .with_context(|| format!("Cannot select {}/{}", self.component_id, self.template_id))?;

        let body = SelectionResponse::new(&state, selection);
        Ok(serde_json::to_string_pretty(&body)?)
    }
}
