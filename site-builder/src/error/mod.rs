//! Error types and error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Error type for catalog lookups, dialog transitions and selection dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteBuilderError {
    /// No category with this id exists in the catalog
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// No template with this id exists in the catalog
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// The template exists but belongs to a different category
    #[error("Template {template_id} does not belong to category {component_id}")]
    TemplateNotInCategory {
        /// Category the click was routed to
        component_id: String,
        /// Template that was clicked
        template_id: String,
    },

    /// The category or template is hidden for the active website type
    #[error("{item} is not available for {website_type} websites")]
    NotAvailable {
        /// Category or template id
        item: String,
        /// Active website type
        website_type: String,
    },

    /// The dialog must be open for this operation
    #[error("The add section dialog is closed")]
    DialogClosed,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template rendering error
    #[error("Render error: {0}")]
    Render(String),
}

impl SiteBuilderError {
    /// HTTP status matching this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownCategory(_) | Self::UnknownTemplate(_) => StatusCode::NOT_FOUND,
            Self::TemplateNotInCategory { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotAvailable { .. } => StatusCode::FORBIDDEN,
            Self::DialogClosed => StatusCode::CONFLICT,
            Self::Config(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<askama::Error> for SiteBuilderError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err.to_string())
    }
}

impl IntoResponse for SiteBuilderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SiteBuilderError::UnknownTemplate("navbar-99".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SiteBuilderError::NotAvailable {
                item: "products-sections".into(),
                website_type: "service".into(),
            }
            .status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(SiteBuilderError::DialogClosed.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_display() {
        let err = SiteBuilderError::TemplateNotInCategory {
            component_id: "hero-sections".into(),
            template_id: "about-1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Template about-1 does not belong to category hero-sections"
        );
    }
}
