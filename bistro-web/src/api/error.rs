//! HTTP error mapping for page handlers

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use bistro_common::Error;
use tracing::error;

use crate::views;

/// Failures surfaced by the page and form handlers.
///
/// Form-validation rejections are not errors; handlers re-render the form
/// with a message instead.
#[derive(Debug)]
pub enum PageError {
    /// Unknown restaurant id; renders the not-found page
    RestaurantNotFound(i64),
    /// Store or internal failure; renders the generic error page
    Internal(Error),
}

impl From<Error> for PageError {
    fn from(err: Error) -> Self {
        PageError::Internal(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::RestaurantNotFound(id) => {
                (StatusCode::NOT_FOUND, Html(views::not_found_page(id))).into_response()
            }
            PageError::Internal(err) => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
            }
        }
    }
}
