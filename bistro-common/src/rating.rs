//! Star-rating aggregation
//!
//! Pure read-side computation, recomputed on every request. The working set
//! (reviews per restaurant) is small enough that no caching is warranted.

use crate::db::models::Review;
use serde::Serialize;

/// Aggregate rating for one restaurant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarRating {
    /// Mean of the non-null ratings, 0.0 when no review carries one
    pub avg_rating: f64,
    /// Number of reviews, rated or not
    pub review_count: i64,
    /// `avg_rating` as a share of the 5-star maximum, rounded to a whole percent
    pub stars_percent: i64,
}

/// Aggregate a restaurant's reviews into its star rating
pub fn star_rating(reviews: &[Review]) -> StarRating {
    let review_count = reviews.len() as i64;
    let ratings: Vec<i64> = reviews.iter().filter_map(|r| r.rating).collect();

    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<i64>() as f64 / ratings.len() as f64
    };

    let stars_percent = if ratings.is_empty() {
        0
    } else {
        (avg_rating / 5.0 * 100.0).round() as i64
    };

    StarRating {
        avg_rating,
        review_count,
        stars_percent,
    }
}
