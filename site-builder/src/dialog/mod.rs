//! "Add Section" dialog
//!
//! [`AddSectionDialog`] holds the dialog-local filter state (search query and
//! selected category) and routes template clicks to a [`SelectionHandler`]:
//!
//! ```text
//! Closed ──open──▶ Open(browsing) ──select_category──▶ Open(category)
//!   ▲                   ▲  │                                │  │
//!   │                   │  └──────────── close ─────────────┼──┤
//!   │                   └─────────────── back ──────────────┘  │
//!   └──────────── template clicked (handler succeeded) ────────┘
//! ```
//!
//! The filter state is reset whenever the dialog closes.
//!
//! # Example
//!
//! ```rust
//! use site_builder::catalog::{Catalog, WebsiteType};
//! use site_builder::dialog::{AddSectionDialog, SelectionHandler};
//! use site_builder::error::SiteBuilderError;
//! use site_builder::payload::{FooterStyle, NavbarData};
//!
//! #[derive(Default)]
//! struct Recorder(Vec<String>);
//!
//! impl SelectionHandler for Recorder {
//!     type Error = SiteBuilderError;
//!
//!     fn on_component_click(
//!         &mut self,
//!         component_id: &str,
//!         template_id: Option<&str>,
//!     ) -> Result<(), Self::Error> {
//!         self.0.push(format!("{component_id}/{}", template_id.unwrap_or_default()));
//!         Ok(())
//!     }
//!
//!     fn on_navbar_select(&mut self, _data: NavbarData) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn on_footer_select(&mut self, _style: FooterStyle) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let mut dialog = AddSectionDialog::new(Catalog::builtin(), WebsiteType::Ecommerce);
//! let mut handler = Recorder::default();
//!
//! dialog.open();
//! dialog.select_category("hero-sections")?;
//! dialog.select_template("hero-sections", "hero-3", &mut handler)?;
//!
//! assert_eq!(handler.0, vec!["hero-sections/hero-3"]);
//! assert!(!dialog.is_open());
//! # Ok::<(), SiteBuilderError>(())
//! ```

use crate::catalog::{Catalog, ComponentCategory, SectionType, Visible, WebsiteType};
use crate::error::SiteBuilderError;
use crate::payload::{navbar_data, FooterStyle, NavbarData, Selection};
use crate::selector::{TemplateEntry, TemplateSelector};

/// Receives the outcome of a template click
///
/// Implemented by the page builder; each method forwards to the page-update API.
pub trait SelectionHandler {
    /// Error returned by the page builder
    type Error: From<SiteBuilderError>;

    /// A regular section template was clicked
    ///
    /// # Errors
    ///
    /// Any error from the page builder; the dialog stays open.
    fn on_component_click(
        &mut self,
        component_id: &str,
        template_id: Option<&str>,
    ) -> Result<(), Self::Error>;

    /// A navbar template was clicked
    ///
    /// # Errors
    ///
    /// Any error from the page builder; the dialog stays open.
    fn on_navbar_select(&mut self, data: NavbarData) -> Result<(), Self::Error>;

    /// A footer template was clicked
    ///
    /// # Errors
    ///
    /// Any error from the page builder; the dialog stays open.
    fn on_footer_select(&mut self, style: FooterStyle) -> Result<(), Self::Error>;
}

/// Resolve a template click into the payload for its category
///
/// # Errors
///
/// - [`SiteBuilderError::UnknownCategory`] if `component_id` is not in the catalog
/// - [`SiteBuilderError::UnknownTemplate`] if `template_id` is not in the catalog
/// - [`SiteBuilderError::TemplateNotInCategory`] if it belongs elsewhere
/// - [`SiteBuilderError::NotAvailable`] if either is hidden for `website_type`
pub fn resolve_selection(
    catalog: &Catalog,
    website_type: &WebsiteType,
    component_id: &str,
    template_id: &str,
) -> Result<Selection, SiteBuilderError> {
    let component = catalog
        .category(component_id)
        .ok_or_else(|| SiteBuilderError::UnknownCategory(component_id.to_string()))?;
    let (owner, template) = catalog
        .template(template_id)
        .ok_or_else(|| SiteBuilderError::UnknownTemplate(template_id.to_string()))?;

    if owner.id != component.id {
        return Err(SiteBuilderError::TemplateNotInCategory {
            component_id: component_id.to_string(),
            template_id: template_id.to_string(),
        });
    }
    if !component.is_visible_for(website_type) {
        return Err(not_available(component.id, website_type));
    }
    if !template.is_visible_for(website_type) {
        return Err(not_available(template.id, website_type));
    }

    match component.section_type {
        SectionType::Navbar => Ok(Selection::Navbar {
            data: navbar_data(template_id)?,
        }),
        SectionType::Footer => Ok(Selection::Footer {
            style: FooterStyle::for_template(template_id)?,
        }),
        SectionType::Section => Ok(Selection::component(component_id, Some(template_id))),
    }
}

fn not_available(item: &str, website_type: &WebsiteType) -> SiteBuilderError {
    SiteBuilderError::NotAvailable {
        item: item.to_string(),
        website_type: website_type.to_string(),
    }
}

/// Hand a resolved selection to `handler`
///
/// # Errors
///
/// Whatever the handler returns.
pub fn dispatch<H: SelectionHandler>(
    selection: Selection,
    handler: &mut H,
) -> Result<(), H::Error> {
    match selection {
        Selection::Component {
            component_id,
            template_id,
            ..
        } => handler.on_component_click(&component_id, template_id.as_deref()),
        Selection::Navbar { data } => handler.on_navbar_select(data),
        Selection::Footer { style } => handler.on_footer_select(style),
    }
}

/// Dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    /// Not shown
    #[default]
    Closed,
    /// Shown, with its filter state
    Open {
        /// Sidebar search query
        query: String,
        /// Category whose templates fill the grid
        selected_category: Option<String>,
    },
}

/// The "Add Section" dialog for one website
#[derive(Debug, Clone)]
pub struct AddSectionDialog<'a> {
    catalog: &'a Catalog,
    website_type: WebsiteType,
    state: DialogState,
}

impl<'a> AddSectionDialog<'a> {
    /// Create a closed dialog
    #[must_use]
    pub fn new(catalog: &'a Catalog, website_type: WebsiteType) -> Self {
        Self {
            catalog,
            website_type,
            state: DialogState::Closed,
        }
    }

    /// Active website type
    #[must_use]
    pub const fn website_type(&self) -> &WebsiteType {
        &self.website_type
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &DialogState {
        &self.state
    }

    /// Whether the dialog is shown
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    /// Current search query (empty when closed)
    #[must_use]
    pub fn query(&self) -> &str {
        match &self.state {
            DialogState::Open { query, .. } => query,
            DialogState::Closed => "",
        }
    }

    /// Selected category id, if any
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        match &self.state {
            DialogState::Open {
                selected_category, ..
            } => selected_category.as_deref(),
            DialogState::Closed => None,
        }
    }

    /// Show the dialog on the featured grid with an empty filter
    pub fn open(&mut self) {
        tracing::debug!(website_type = %self.website_type, "Opening add section dialog");
        self.state = DialogState::Open {
            query: String::new(),
            selected_category: None,
        };
    }

    /// Show the dialog directly on one category, as the replace flow does
    ///
    /// # Errors
    ///
    /// Fails like [`Self::select_category`]; the dialog stays closed then.
    pub fn open_with_category(&mut self, component_id: &str) -> Result<(), SiteBuilderError> {
        let component = self.visible_category(component_id)?;
        tracing::debug!(
            website_type = %self.website_type,
            component_id = component.id,
            "Opening add section dialog on category"
        );
        self.state = DialogState::Open {
            query: String::new(),
            selected_category: Some(component.id.to_string()),
        };
        Ok(())
    }

    /// Update the sidebar search query
    ///
    /// # Errors
    ///
    /// Returns [`SiteBuilderError::DialogClosed`] if the dialog is not open.
    pub fn set_query(&mut self, new_query: &str) -> Result<(), SiteBuilderError> {
        match &mut self.state {
            DialogState::Open { query, .. } => {
                new_query.clone_into(query);
                Ok(())
            }
            DialogState::Closed => Err(SiteBuilderError::DialogClosed),
        }
    }

    /// Show every template of `component_id`
    ///
    /// # Errors
    ///
    /// - [`SiteBuilderError::DialogClosed`] if the dialog is not open
    /// - [`SiteBuilderError::UnknownCategory`] for ids not in the catalog
    /// - [`SiteBuilderError::NotAvailable`] for categories hidden for the website type
    pub fn select_category(&mut self, component_id: &str) -> Result<(), SiteBuilderError> {
        if !self.is_open() {
            return Err(SiteBuilderError::DialogClosed);
        }
        let component = self.visible_category(component_id)?;
        if let DialogState::Open {
            selected_category, ..
        } = &mut self.state
        {
            *selected_category = Some(component.id.to_string());
        }
        Ok(())
    }

    /// Return from a category to the featured grid
    ///
    /// The query is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SiteBuilderError::DialogClosed`] if the dialog is not open.
    pub fn back(&mut self) -> Result<(), SiteBuilderError> {
        match &mut self.state {
            DialogState::Open {
                selected_category, ..
            } => {
                *selected_category = None;
                Ok(())
            }
            DialogState::Closed => Err(SiteBuilderError::DialogClosed),
        }
    }

    /// Hide the dialog and reset the filter
    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Sidebar categories for the current query
    ///
    /// # Errors
    ///
    /// Returns [`SiteBuilderError::DialogClosed`] if the dialog is not open.
    pub fn sidebar(&self) -> Result<Vec<&'static ComponentCategory>, SiteBuilderError> {
        self.ensure_open()?;
        Ok(self.catalog.search(&self.website_type, self.query()))
    }

    /// Template grid for the current filter state
    ///
    /// # Errors
    ///
    /// Returns [`SiteBuilderError::DialogClosed`] if the dialog is not open.
    pub fn templates(&self) -> Result<Vec<TemplateEntry>, SiteBuilderError> {
        self.ensure_open()?;
        Ok(TemplateSelector::new(self.catalog, &self.website_type)
            .current(self.selected_category(), self.query()))
    }

    /// Route a template click to `handler` and close the dialog
    ///
    /// The dialog closes only when the handler succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SiteBuilderError::DialogClosed`] or any error from
    /// [`resolve_selection`] (the handler is not called then), or the
    /// handler's own error.
    pub fn select_template<H: SelectionHandler>(
        &mut self,
        component_id: &str,
        template_id: &str,
        handler: &mut H,
    ) -> Result<Selection, H::Error> {
        self.ensure_open()?;
        let selection =
            resolve_selection(self.catalog, &self.website_type, component_id, template_id)?;

        tracing::info!(
            component_id,
            template_id,
            website_type = %self.website_type,
            event = selection.event_name(),
            "Template selected"
        );

        dispatch(selection.clone(), handler)?;
        self.close();
        Ok(selection)
    }

    fn ensure_open(&self) -> Result<(), SiteBuilderError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(SiteBuilderError::DialogClosed)
        }
    }

    fn visible_category(
        &self,
        component_id: &str,
    ) -> Result<&'static ComponentCategory, SiteBuilderError> {
        let component = self
            .catalog
            .category(component_id)
            .ok_or_else(|| SiteBuilderError::UnknownCategory(component_id.to_string()))?;
        if component.is_visible_for(&self.website_type) {
            Ok(component)
        } else {
            Err(not_available(component.id, &self.website_type))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::NavbarStyle;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Component(String, Option<String>),
        Navbar(NavbarStyle),
        Footer(FooterStyle),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        fail: bool,
    }

    impl SelectionHandler for Recorder {
        type Error = SiteBuilderError;

        fn on_component_click(
            &mut self,
            component_id: &str,
            template_id: Option<&str>,
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(SiteBuilderError::Render("page api unavailable".into()));
            }
            self.calls.push(Call::Component(
                component_id.to_string(),
                template_id.map(str::to_string),
            ));
            Ok(())
        }

        fn on_navbar_select(&mut self, data: NavbarData) -> Result<(), Self::Error> {
            self.calls.push(Call::Navbar(data.style));
            Ok(())
        }

        fn on_footer_select(&mut self, style: FooterStyle) -> Result<(), Self::Error> {
            self.calls.push(Call::Footer(style));
            Ok(())
        }
    }

    fn dialog(website_type: WebsiteType) -> AddSectionDialog<'static> {
        let mut dialog = AddSectionDialog::new(Catalog::builtin(), website_type);
        dialog.open();
        dialog
    }

    #[test]
    fn test_new_dialog_is_closed() {
        let dialog = AddSectionDialog::new(Catalog::builtin(), WebsiteType::default());
        assert!(!dialog.is_open());
        assert_eq!(dialog.sidebar(), Err(SiteBuilderError::DialogClosed));
    }

    #[test]
    fn test_back_returns_to_browsing_state() {
        let mut dialog = dialog(WebsiteType::Ecommerce);
        dialog.set_query("hero").unwrap();
        let before = dialog.state().clone();

        dialog.select_category("hero-sections").unwrap();
        assert_eq!(dialog.selected_category(), Some("hero-sections"));
        dialog.back().unwrap();

        assert_eq!(dialog.state(), &before);
    }

    #[test]
    fn test_select_hidden_category_is_rejected() {
        let mut dialog = dialog(WebsiteType::Service);
        assert!(matches!(
            dialog.select_category("products-sections"),
            Err(SiteBuilderError::NotAvailable { .. })
        ));
        assert_eq!(
            dialog.select_category("nope"),
            Err(SiteBuilderError::UnknownCategory("nope".into()))
        );
        assert_eq!(dialog.selected_category(), None);
    }

    #[test]
    fn test_section_click_calls_component_handler_and_closes() {
        let mut dialog = dialog(WebsiteType::Ecommerce);
        let mut handler = Recorder::default();
        dialog.set_query("about").unwrap();

        let selection = dialog
            .select_template("about-sections", "about-4", &mut handler)
            .unwrap();

        assert_eq!(selection.event_name(), "sectionSelected");
        assert_eq!(
            handler.calls,
            vec![Call::Component("about-sections".into(), Some("about-4".into()))]
        );
        assert!(!dialog.is_open());
        assert_eq!(dialog.query(), "");
    }

    #[test]
    fn test_navbar_and_footer_dispatch() {
        let mut handler = Recorder::default();

        dialog(WebsiteType::Ecommerce)
            .select_template("navbar-sections", "navbar-5", &mut handler)
            .unwrap();
        dialog(WebsiteType::Ecommerce)
            .select_template("footer-sections", "footer-3", &mut handler)
            .unwrap();

        assert_eq!(
            handler.calls,
            vec![
                Call::Navbar(NavbarStyle::Style5),
                Call::Footer(FooterStyle::Style3)
            ]
        );
    }

    #[test]
    fn test_invalid_clicks_do_not_reach_handler() {
        let mut dialog = dialog(WebsiteType::Service);
        let mut handler = Recorder::default();

        assert!(matches!(
            dialog.select_template("hero-sections", "about-1", &mut handler),
            Err(SiteBuilderError::TemplateNotInCategory { .. })
        ));
        assert!(matches!(
            dialog.select_template("navbar-sections", "navbar-1", &mut handler),
            Err(SiteBuilderError::NotAvailable { .. })
        ));
        assert_eq!(
            dialog.select_template("navbar-sections", "navbar-99", &mut handler),
            Err(SiteBuilderError::UnknownTemplate("navbar-99".into()))
        );
        assert!(handler.calls.is_empty());
        assert!(dialog.is_open());
    }

    #[test]
    fn test_handler_error_keeps_dialog_open() {
        let mut dialog = dialog(WebsiteType::Ecommerce);
        dialog.select_category("faq-sections").unwrap();
        let mut handler = Recorder {
            fail: true,
            ..Recorder::default()
        };

        assert!(dialog
            .select_template("faq-sections", "faq-2", &mut handler)
            .is_err());
        assert!(dialog.is_open());
        assert_eq!(dialog.selected_category(), Some("faq-sections"));
    }

    #[test]
    fn test_closed_dialog_rejects_operations() {
        let mut dialog = AddSectionDialog::new(Catalog::builtin(), WebsiteType::Ecommerce);
        let mut handler = Recorder::default();

        assert_eq!(dialog.set_query("x"), Err(SiteBuilderError::DialogClosed));
        assert_eq!(dialog.back(), Err(SiteBuilderError::DialogClosed));
        assert_eq!(
            dialog.select_category("hero-sections"),
            Err(SiteBuilderError::DialogClosed)
        );
        assert_eq!(
            dialog.select_template("hero-sections", "hero-1", &mut handler),
            Err(SiteBuilderError::DialogClosed)
        );
    }

    #[test]
    fn test_open_with_category() {
        let mut dialog = AddSectionDialog::new(Catalog::builtin(), WebsiteType::Ecommerce);
        dialog.open_with_category("footer-sections").unwrap();

        assert!(dialog.is_open());
        assert_eq!(dialog.templates().unwrap().len(), 7);

        let mut closed = AddSectionDialog::new(Catalog::builtin(), WebsiteType::Service);
        assert!(closed.open_with_category("categories-sections").is_err());
        assert!(!closed.is_open());
    }

    #[test]
    fn test_close_resets_filter() {
        let mut dialog = dialog(WebsiteType::Ecommerce);
        dialog.set_query("faq").unwrap();
        dialog.select_category("faq-sections").unwrap();
        dialog.close();
        dialog.open();

        assert_eq!(dialog.query(), "");
        assert_eq!(dialog.selected_category(), None);
    }
}
