//! "Add Section" dialog handlers
//!
//! The dialog is stateless on the server: every request carries the website
//! type, the search query (`q`) and the selected category.
//!
//! # Example Usage
//!
//! ```rust
//! use site_builder::{handlers::sections, state::AppState};
//! use axum::{routing::{get, post}, Router};
//!
//! let app: Router = Router::new()
//!     .route("/sections", get(sections::dialog))
//!     .route("/sections/select", post(sections::select))
//!     .with_state(AppState::new());
//! ```

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use axum_htmx::{HxEvent, HxRequest, HxResponseTrigger};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::catalog::{ComponentCategory, WebsiteType};
use crate::dialog::resolve_selection;
use crate::error::SiteBuilderError;
use crate::extractors::{ValidatedForm, ValidatedQuery};
use crate::payload::{FooterPayload, NavbarPayload, Selection};
use crate::registry::ComponentType;
use crate::selector::{TemplateEntry, TemplateSelector};
use crate::state::AppState;
use crate::template::helpers::{attrs, hx_get, hx_include, hx_post, hx_trigger, hx_vals};
use crate::template::HxTemplate;

const FILTER_FORM: &str = "#section-filter";
const SIDEBAR_TARGET: &str = "#section-sidebar";
const GRID_ID: &str = "section-grid";
const GRID_TARGET: &str = "#section-grid";

/// Feature flag for the popular star on template cards
pub const POPULAR_BADGES: &str = "popular_badges";

/// Event that closes and resets the dialog after a selection
pub const CLOSE_EVENT: &str = "closeAddSection";

/// Dialog filter parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SectionQuery {
    /// Website type; the configured default when absent
    #[validate(length(min = 1, max = 32))]
    pub website_type: Option<String>,

    /// Sidebar search query
    #[serde(default)]
    #[validate(length(max = 100))]
    pub q: String,

    /// Selected category id; empty means none
    #[validate(length(max = 64))]
    pub category: Option<String>,
}

impl SectionQuery {
    fn website_type(&self, state: &AppState) -> WebsiteType {
        self.website_type.as_deref().map_or_else(
            || state.config().builder.website_type.clone(),
            WebsiteType::from,
        )
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|id| !id.is_empty())
    }
}

/// Template click
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectForm {
    /// Category id
    #[validate(length(min = 1, max = 64))]
    pub component_id: String,

    /// Template id
    #[validate(length(min = 1, max = 64))]
    pub template_id: String,

    /// Website type; the configured default when absent
    #[validate(length(min = 1, max = 32))]
    pub website_type: Option<String>,
}

/// Sidebar row
#[derive(Debug, Clone)]
pub struct SidebarItem {
    /// Category id
    pub id: &'static str,
    /// Label
    pub label: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Popular flag
    pub popular: bool,
    /// Currently selected
    pub active: bool,
    /// `hx-*` attributes that open the category
    pub hx: String,
}

impl SidebarItem {
    fn new(category: &'static ComponentCategory, selected: Option<&str>) -> Self {
        Self {
            id: category.id,
            label: category.label,
            icon: category.icon.as_str(),
            popular: category.popular,
            active: selected == Some(category.id),
            hx: attrs([
                hx_get("/sections/templates", GRID_TARGET, "innerHTML"),
                hx_include(FILTER_FORM),
                hx_vals(&json!({ "category": category.id })),
            ]),
        }
    }
}

/// Header above the grid of a selected category
#[derive(Debug, Clone)]
pub struct GridHeading {
    /// Category label
    pub label: &'static str,
    /// Category description
    pub description: Option<&'static str>,
    /// `hx-*` attributes of the back button
    pub back_hx: String,
}

/// Template card
#[derive(Debug, Clone)]
pub struct GridCard {
    /// Owning category id
    pub component_id: &'static str,
    /// Template id
    pub template_id: &'static str,
    /// Template name
    pub name: &'static str,
    /// Preview image
    pub image: &'static str,
    /// Template description
    pub description: Option<&'static str>,
    /// Owning category is popular
    pub popular: bool,
    /// `hx-*` attributes that select the template
    pub hx: String,
}

impl From<TemplateEntry> for GridCard {
    fn from(entry: TemplateEntry) -> Self {
        Self {
            component_id: entry.component_id(),
            template_id: entry.template_id(),
            name: entry.template.name,
            image: entry.template.image,
            description: entry.template.description,
            popular: entry.component.popular,
            hx: attrs([
                hx_post("/sections/select", "this", "none"),
                hx_include(FILTER_FORM),
                hx_vals(&json!({
                    "component_id": entry.component_id(),
                    "template_id": entry.template_id(),
                })),
            ]),
        }
    }
}

/// Full dialog page; the dialog body is the HTMX partial
#[derive(Template)]
#[template(path = "sections/dialog.html")]
pub struct DialogTemplate {
    /// Active website type
    pub website_type: String,
    /// Search query
    pub query: String,
    /// `hx-*` attributes of the search input
    pub search_hx: String,
    /// Sidebar rows
    pub sidebar: Vec<SidebarItem>,
    /// Grid header when a category is selected
    pub heading: Option<GridHeading>,
    /// Template cards
    pub cards: Vec<GridCard>,
    /// Mark popular categories with a star
    pub show_popular: bool,
}

/// Sidebar partial
#[derive(Template)]
#[template(path = "sections/_sidebar.html")]
pub struct SidebarTemplate {
    /// Sidebar rows
    pub sidebar: Vec<SidebarItem>,
}

/// Template grid partial
#[derive(Template)]
#[template(path = "sections/_grid.html")]
pub struct GridTemplate {
    /// Grid header when a category is selected
    pub heading: Option<GridHeading>,
    /// Template cards
    pub cards: Vec<GridCard>,
    /// Mark popular categories with a star
    pub show_popular: bool,
}

struct DialogView {
    website_type: WebsiteType,
    sidebar: Vec<SidebarItem>,
    heading: Option<GridHeading>,
    cards: Vec<GridCard>,
    show_popular: bool,
}

impl DialogView {
    fn build(state: &AppState, query: &SectionQuery) -> Self {
        let catalog = state.catalog();
        let website_type = query.website_type(state);
        let selected = query.category();

        let sidebar = catalog
            .search(&website_type, &query.q)
            .into_iter()
            .map(|category| SidebarItem::new(category, selected))
            .collect();

        let selector = TemplateSelector::new(catalog, &website_type);
        let mut entries = selector.current(selected, &query.q);
        if selected.is_none() {
            if let Some(limit) = state.config().builder.featured_limit {
                entries.truncate(limit);
            }
        }

        let heading = selected
            .and_then(|id| catalog.category(id))
            .filter(|_| !entries.is_empty())
            .map(|category| GridHeading {
                label: category.label,
                description: category.description,
                back_hx: attrs([
                    hx_get("/sections/templates", GRID_TARGET, "innerHTML"),
                    hx_include(FILTER_FORM),
                    hx_vals(&json!({ "category": "" })),
                ]),
            });

        tracing::debug!(
            website_type = %website_type,
            query = %query.q,
            category = selected,
            templates = entries.len(),
            "Built section dialog view"
        );

        Self {
            sidebar,
            heading,
            cards: entries.into_iter().map(GridCard::from).collect(),
            show_popular: state.config().feature(POPULAR_BADGES, true),
            website_type,
        }
    }

    fn grid(self) -> GridTemplate {
        GridTemplate {
            heading: self.heading,
            cards: self.cards,
            show_popular: self.show_popular,
        }
    }
}

/// Render the "Add Section" dialog
///
/// Returns the full page, or only the dialog body for HTMX requests.
///
/// # Example
///
/// ```bash
/// GET /sections?website_type=service&q=hero
/// ```
pub async fn dialog(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    ValidatedQuery(query): ValidatedQuery<SectionQuery>,
) -> Response {
    let view = DialogView::build(&state, &query);
    DialogTemplate {
        website_type: view.website_type.to_string(),
        search_hx: attrs([
            hx_get("/sections/categories", SIDEBAR_TARGET, "innerHTML"),
            hx_trigger("input changed delay:300ms, search"),
            hx_include(FILTER_FORM),
        ]),
        query: query.q,
        sidebar: view.sidebar,
        heading: view.heading,
        cards: view.cards,
        show_popular: view.show_popular,
    }
    .render_htmx(is_htmx)
}

/// Render the sidebar for the current search query
///
/// HTMX requests without a selected category also receive the featured grid
/// as an out-of-band swap, so search-as-you-type narrows both panels.
///
/// # Errors
///
/// Returns [`SiteBuilderError::Render`] if a template fails to render.
///
/// # Example
///
/// ```bash
/// GET /sections/categories?website_type=ecommerce&q=video
/// ```
pub async fn categories(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    ValidatedQuery(query): ValidatedQuery<SectionQuery>,
) -> Result<Html<String>, SiteBuilderError> {
    let view = DialogView::build(&state, &query);
    let mut html = SidebarTemplate {
        sidebar: view.sidebar.clone(),
    }
    .render()?;

    if is_htmx && query.category().is_none() {
        html.push_str(&view.grid().render_oob_str(GRID_ID, Some("innerHTML"))?);
    }
    Ok(Html(html))
}

/// Render the template grid for the current filter state
///
/// # Errors
///
/// Returns [`SiteBuilderError::Render`] if the template fails to render.
///
/// # Example
///
/// ```bash
/// GET /sections/templates?website_type=service&category=navbar-sections
/// ```
pub async fn templates(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SectionQuery>,
) -> Result<Html<String>, SiteBuilderError> {
    let html = DialogView::build(&state, &query).grid().render()?;
    Ok(Html(html))
}

/// Body of a successful selection
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SelectionResponse {
    /// A regular section to insert
    #[serde(rename_all = "camelCase")]
    Component {
        /// Category id
        component_id: String,
        /// Template id as clicked
        template_id: Option<String>,
        /// Page component type
        #[serde(skip_serializing_if = "Option::is_none")]
        component_type: Option<ComponentType>,
        /// Variant the page builder creates
        #[serde(skip_serializing_if = "Option::is_none")]
        variant: Option<String>,
    },
    /// Navbar create/replace body
    Navbar(NavbarPayload),
    /// Footer create/replace body
    Footer(FooterPayload),
}

impl SelectionResponse {
    /// Build the response body for a resolved selection
    #[must_use]
    pub fn new(state: &AppState, selection: Selection) -> Self {
        match selection {
            Selection::Component {
                component_id,
                template_id,
                component_type,
            } => {
                let variant = component_type.map(|component_type| {
                    component_type
                        .resolve_variant(state.catalog(), template_id.as_deref())
                        .to_string()
                });
                Self::Component {
                    component_id,
                    template_id,
                    component_type,
                    variant,
                }
            }
            Selection::Navbar { data } => Self::Navbar(NavbarPayload::new(data)),
            Selection::Footer { style } => Self::Footer(FooterPayload::new(style)),
        }
    }
}

/// Detail of the selection event sent in `HX-Trigger`
///
/// Only catalog ids travel in the header; header values are read as Latin-1
/// and the payload text is not ASCII.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedEvent<'a> {
    /// Category id
    pub component_id: &'a str,
    /// Template id
    pub template_id: &'a str,
}

/// Resolve a template click
///
/// Responds with the JSON payload for the page-update API and an `HX-Trigger`
/// header with two events: the selection (`sectionSelected`, `navbarSelected`
/// or `footerSelected`, detail [`SelectedEvent`]) and [`CLOSE_EVENT`].
///
/// # Errors
///
/// Returns the [`SiteBuilderError`] from resolving the selection: unknown
/// category or template (404), template outside the category (422), hidden
/// for the website type (403).
///
/// # Example
///
/// ```bash
/// POST /sections/select
/// component_id=footer-sections&template_id=footer-3
/// ```
///
/// Response:
/// ```json
/// {
///   "kind": "footer",
///   "content": "footer content",
///   "footerData": { "style": "style-3", "...": "..." },
///   "component_id": "footer-1760000000000"
/// }
/// ```
pub async fn select(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<SelectForm>,
) -> Result<Response, SiteBuilderError> {
    let website_type = form.website_type.as_deref().map_or_else(
        || state.config().builder.website_type.clone(),
        WebsiteType::from,
    );

    let selection = resolve_selection(
        state.catalog(),
        &website_type,
        &form.component_id,
        &form.template_id,
    )?;
    let event_name = selection.event_name();

    tracing::info!(
        component_id = %form.component_id,
        template_id = %form.template_id,
        website_type = %website_type,
        event = event_name,
        "Section selected"
    );

    let detail = SelectedEvent {
        component_id: &form.component_id,
        template_id: &form.template_id,
    };
    let event = HxEvent::new_with_data(event_name, &detail)
        .map_err(|err| SiteBuilderError::Render(err.to_string()))?;
    let trigger = HxResponseTrigger::normal([event, HxEvent::new(CLOSE_EVENT)]);

    let body = SelectionResponse::new(&state, selection);
    Ok((trigger, Json(body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(website_type: &str, q: &str, category: Option<&str>) -> SectionQuery {
        SectionQuery {
            website_type: Some(website_type.to_string()),
            q: q.to_string(),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_view_featured_grid() {
        let state = AppState::new();
        let view = DialogView::build(&state, &query("ecommerce", "hero", None));

        assert!(view.heading.is_none());
        let ids: Vec<&str> = view.cards.iter().map(|card| card.template_id).collect();
        assert_eq!(ids, vec!["hero-1"]);
        assert_eq!(view.sidebar.len(), 1);
    }

    #[test]
    fn test_view_selected_category() {
        let state = AppState::new();
        let view = DialogView::build(&state, &query("ecommerce", "", Some("footer-sections")));

        let heading = view.heading.as_ref().unwrap();
        assert_eq!(heading.label, "Footer");
        assert_eq!(heading.description, Some("Site footer with multiple layout options"));
        assert_eq!(view.cards.len(), 7);
        assert!(view.sidebar.iter().any(|item| item.active && item.id == "footer-sections"));
    }

    #[test]
    fn test_view_empty_category_means_none() {
        let state = AppState::new();
        let view = DialogView::build(&state, &query("service", "", Some("")));
        assert!(view.heading.is_none());
        assert!(view.cards.iter().any(|card| card.template_id == "services-1"));
    }

    #[test]
    fn test_featured_limit() {
        let mut config = crate::config::SiteBuilderConfig::default();
        config.builder.featured_limit = Some(2);
        let state = AppState::with_config(config);

        let view = DialogView::build(&state, &SectionQuery::default());
        assert_eq!(view.cards.len(), 2);
    }

    #[test]
    fn test_card_attributes() {
        let state = AppState::new();
        let view = DialogView::build(&state, &query("ecommerce", "hero", None));
        let card = &view.cards[0];

        assert!(card.hx.contains(r#"hx-post="/sections/select""#));
        assert!(card.hx.contains(r#"hx-swap="none""#));
        assert!(card.hx.contains(r#""template_id":"hero-1""#));
        assert!(card.hx.contains(r##"hx-include="#section-filter""##));
    }

    #[test]
    fn test_selection_response_variant() {
        let state = AppState::new();
        let selection = Selection::component("hero-sections", Some("hero-4"));
        let json = serde_json::to_value(SelectionResponse::new(&state, selection)).unwrap();

        assert_eq!(json["kind"], "component");
        assert_eq!(json["componentType"], "hero");
        assert_eq!(json["variant"], "hero-4");
    }
}
