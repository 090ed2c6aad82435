//! Review entity operations

use crate::db::models::{NewReview, Review};
use crate::rating::{self, StarRating};
use crate::{Error, Result};
use chrono::Utc;
use sqlx::SqlitePool;

/// Create a review and persist it immediately.
///
/// `review_date` is stamped with the current server time. The rating, when
/// present, must lie in [1, 5]; the referenced restaurant must exist.
pub async fn create_review(pool: &SqlitePool, new: NewReview) -> Result<Review> {
    if let Some(rating) = new.rating {
        if !(1..=5).contains(&rating) {
            return Err(Error::InvalidInput(format!(
                "rating must be between 1 and 5, got {}",
                rating
            )));
        }
    }

    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM restaurant WHERE id = ?)")
        .bind(new.restaurant)
        .fetch_one(pool)
        .await?;
    if !exists {
        return Err(Error::NotFound(format!("restaurant {}", new.restaurant)));
    }

    let review_date = Utc::now();
    let result = sqlx::query(
        "INSERT INTO review (restaurant, user_name, rating, review_text, review_date)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(new.restaurant)
    .bind(&new.user_name)
    .bind(new.rating)
    .bind(&new.review_text)
    .bind(review_date)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    let review = sqlx::query_as::<_, Review>(
        "SELECT id, restaurant, user_name, rating, review_text, review_date
         FROM review WHERE id = ?",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(review)
}

/// Fetch all reviews for a restaurant, newest first
pub async fn reviews_for_restaurant(pool: &SqlitePool, restaurant_id: i64) -> Result<Vec<Review>> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, restaurant, user_name, rating, review_text, review_date
         FROM review WHERE restaurant = ?
         ORDER BY review_date DESC, id DESC",
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}

/// Fetch a restaurant's reviews and aggregate their star rating
pub async fn star_rating(pool: &SqlitePool, restaurant_id: i64) -> Result<StarRating> {
    let reviews = reviews_for_restaurant(pool, restaurant_id).await?;
    Ok(rating::star_rating(&reviews))
}
