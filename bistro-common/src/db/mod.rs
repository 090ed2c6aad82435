//! Database access layer
//!
//! Pool initialization, schema creation, and entity operations. Every
//! operation takes the pool explicitly; there is no shared store handle.

pub mod init;
pub mod models;
pub mod restaurants;
pub mod reviews;

pub use init::init_database;
pub use models::{NewRestaurant, NewReview, Restaurant, Review};
