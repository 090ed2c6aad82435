//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub street_address: String,
    pub description: String,
}

/// A persisted review, referencing its restaurant by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub restaurant: i64,
    pub user_name: String,
    /// Star score 1-5; absent when the reviewer left no rating
    pub rating: Option<i64>,
    pub review_text: String,
    pub review_date: DateTime<Utc>,
}

/// Fields for creating a restaurant
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub street_address: String,
    pub description: String,
}

/// Fields for creating a review; `review_date` is stamped at insert time
#[derive(Debug, Clone)]
pub struct NewReview {
    pub restaurant: i64,
    pub user_name: String,
    pub rating: Option<i64>,
    pub review_text: String,
}
