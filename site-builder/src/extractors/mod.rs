//! Validated request extractors
//!
//! [`ValidatedForm`] and [`ValidatedQuery`] deserialize the request with axum's
//! `Form`/`Query` extractors and run the `validator` rules before the handler
//! sees the data.
//!
//! # Example
//!
//! ```rust,no_run
//! use site_builder::extractors::ValidatedForm;
//! use serde::Deserialize;
//! use validator::Validate;
//!
//! #[derive(Debug, Deserialize, Validate)]
//! struct Rename {
//!     #[validate(length(min = 1, max = 64))]
//!     label: String,
//! }
//!
//! async fn rename(ValidatedForm(form): ValidatedForm<Rename>) -> String {
//!     form.label
//! }
//! ```

use axum::{
    extract::{Form, FromRequest, FromRequestParts, Query, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Form body that passed validation
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync + 'static,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(data) = Form::<T>::from_request(req, state)
            .await
            .map_err(|err| ValidationError::Rejected(err.body_text()))?;

        data.validate()?;
        Ok(Self(data))
    }
}

/// Query string that passed validation
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| ValidationError::Rejected(err.body_text()))?;

        data.validate()?;
        Ok(Self(data))
    }
}

/// Rejection of a validated extractor
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The request could not be deserialized
    #[error("Invalid request data: {0}")]
    Rejected(String),

    /// The data was parsed but breaks a validation rule
    #[error("Validation failed: {}", format_validation_errors(.0))]
    Invalid(#[from] ValidationErrors),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::debug!(error = %self, "Request data rejected");
        (status, self.to_string()).into_response()
    }
}

/// Validation errors as `field: message` pairs, sorted by field
#[must_use]
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                error.message.as_ref().map_or_else(
                    || format!("{field}: {}", error.code),
                    |message| format!("{field}: {message}"),
                )
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
