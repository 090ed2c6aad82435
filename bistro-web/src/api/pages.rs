//! Page handlers rendering the server-side HTML views

use axum::extract::{Path, State};
use axum::response::Html;
use bistro_common::db::{restaurants, reviews};
use bistro_common::rating;
use tracing::info;

use crate::api::PageError;
use crate::views;
use crate::AppState;

/// GET /
///
/// Lists all restaurants with their aggregate star ratings.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    info!("Request for index page received");

    let restaurants = restaurants::list_restaurants(&state.db).await?;

    // One aggregation per restaurant shown
    let mut listings = Vec::with_capacity(restaurants.len());
    for restaurant in restaurants {
        let stars = reviews::star_rating(&state.db, restaurant.id).await?;
        listings.push((restaurant, stars));
    }

    Ok(Html(views::index_page(&listings)))
}

/// GET /:restaurant_id
///
/// Restaurant detail view with its reviews and review-submission form.
pub async fn details(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let restaurant = restaurants::get_restaurant(&state.db, restaurant_id)
        .await?
        .ok_or(PageError::RestaurantNotFound(restaurant_id))?;

    let reviews = reviews::reviews_for_restaurant(&state.db, restaurant_id).await?;
    let stars = rating::star_rating(&reviews);

    Ok(Html(views::details_page(&restaurant, &reviews, &stars, None)))
}

/// GET /create
///
/// Empty restaurant-creation form.
pub async fn create_restaurant_form() -> Html<String> {
    info!("Request for add restaurant page received");
    Html(views::create_page(None))
}
