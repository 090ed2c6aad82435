//! Embedded static assets

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

const STYLE_CSS: &str = include_str!("../ui/style.css");
const FAVICON_ICO: &[u8] = include_bytes!("../ui/favicon.ico");

/// GET /static/style.css
///
/// Serves the shared stylesheet
pub async fn serve_style_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], STYLE_CSS).into_response()
}

/// GET /favicon.ico
pub async fn serve_favicon() -> Response {
    (
        StatusCode::OK,
        [("content-type", "image/vnd.microsoft.icon")],
        FAVICON_ICO,
    )
        .into_response()
}
