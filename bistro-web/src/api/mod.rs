//! HTTP API handlers for bistro-web

pub mod error;
pub mod forms;
pub mod health;
pub mod pages;
pub mod ui;

pub use error::PageError;
pub use forms::{add_restaurant, add_review};
pub use health::health_routes;
pub use pages::{create_restaurant_form, details, index};
pub use ui::{serve_favicon, serve_style_css};
