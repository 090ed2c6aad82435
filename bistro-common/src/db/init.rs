//! Database initialization
//!
//! Creates the schema automatically at startup when absent. Initialization
//! is idempotent and safe to run from multiple processes.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize the database connection pool and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Use sqlite options to create the database if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // The cascade from restaurant to review requires foreign key enforcement
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers while a write commits
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_restaurant_table(&pool).await?;
    create_review_table(&pool).await?;

    Ok(pool)
}

/// Create the restaurant table
///
/// Ids are store-assigned integers. Declared column sizes follow the
/// entity contract but SQLite does not enforce them at insert time.
async fn create_restaurant_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurant (
            id INTEGER PRIMARY KEY,
            name VARCHAR(50) NOT NULL,
            street_address VARCHAR(50) NOT NULL,
            description VARCHAR(250) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the review table
///
/// `restaurant` references the parent row and cascades on delete. The
/// rating range invariant is also enforced here, at the store level.
async fn create_review_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS review (
            id INTEGER PRIMARY KEY,
            restaurant INTEGER NOT NULL REFERENCES restaurant(id) ON DELETE CASCADE,
            user_name VARCHAR(30) NOT NULL,
            rating INTEGER,
            review_text VARCHAR(500) NOT NULL,
            review_date TIMESTAMP NOT NULL,
            CHECK (rating IS NULL OR (rating >= 1 AND rating <= 5))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_review_restaurant ON review(restaurant)")
        .execute(pool)
        .await?;

    Ok(())
}
