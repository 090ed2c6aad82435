//! Restaurant entity operations

use crate::db::models::{NewRestaurant, Restaurant};
use crate::{Error, Result};
use sqlx::SqlitePool;

/// Create a restaurant and persist it immediately.
///
/// Returns the stored entity including its assigned id. Field contents are
/// free-form; the store declares column sizes but does not enforce them.
pub async fn create_restaurant(pool: &SqlitePool, new: NewRestaurant) -> Result<Restaurant> {
    let result = sqlx::query(
        "INSERT INTO restaurant (name, street_address, description) VALUES (?, ?, ?)",
    )
    .bind(&new.name)
    .bind(&new.street_address)
    .bind(&new.description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get_restaurant(pool, id)
        .await?
        .ok_or_else(|| Error::Internal(format!("restaurant {} missing after insert", id)))
}

/// Fetch a restaurant by id
pub async fn get_restaurant(pool: &SqlitePool, id: i64) -> Result<Option<Restaurant>> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, street_address, description FROM restaurant WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(restaurant)
}

/// List all restaurants in insertion order
pub async fn list_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, street_address, description FROM restaurant ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(restaurants)
}

/// Delete a restaurant. Returns whether a row was removed.
///
/// The store cascades the delete to the restaurant's reviews. Not exposed
/// over HTTP; the web surface is append-only.
pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM restaurant WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
