//! Form-submission handlers
//!
//! Missing or invalid fields re-render the originating page with a
//! user-facing message and a 422 status; only store failures surface as
//! error pages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use bistro_common::db::models::{NewRestaurant, NewReview, Restaurant};
use bistro_common::db::{restaurants, reviews};
use bistro_common::rating;
use bistro_common::Error;
use serde::Deserialize;
use tracing::info;

use crate::api::PageError;
use crate::views;
use crate::AppState;

/// Form fields for POST /add
#[derive(Debug, Deserialize)]
pub struct RestaurantForm {
    pub restaurant_name: Option<String>,
    pub street_address: Option<String>,
    pub description: Option<String>,
}

/// Form fields for POST /review/:restaurant_id
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub user_name: Option<String>,
    pub rating: Option<String>,
    pub review_text: Option<String>,
}

/// POST /add
///
/// Creates a restaurant and redirects to its detail page.
pub async fn add_restaurant(
    State(state): State<AppState>,
    Form(form): Form<RestaurantForm>,
) -> Result<Response, PageError> {
    let name = non_blank(form.restaurant_name);
    let street_address = non_blank(form.street_address);
    let description = non_blank(form.description);

    let (Some(name), Some(street_address), Some(description)) =
        (name, street_address, description)
    else {
        let body = views::create_page(Some(
            "You must include a restaurant name, address, and description",
        ));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response());
    };

    let restaurant = restaurants::create_restaurant(
        &state.db,
        NewRestaurant {
            name,
            street_address,
            description,
        },
    )
    .await?;

    info!("Added restaurant {} ({})", restaurant.id, restaurant.name);
    Ok(Redirect::to(&format!("/{}", restaurant.id)).into_response())
}

/// POST /review/:restaurant_id
///
/// Creates a review and redirects back to the restaurant's detail page.
pub async fn add_review(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
    Form(form): Form<ReviewForm>,
) -> Result<Response, PageError> {
    let restaurant = restaurants::get_restaurant(&state.db, restaurant_id)
        .await?
        .ok_or(PageError::RestaurantNotFound(restaurant_id))?;

    let new = match parse_review_form(restaurant_id, form) {
        Ok(new) => new,
        Err(message) => return rejected(&state, &restaurant, &message).await,
    };

    match reviews::create_review(&state.db, new).await {
        Ok(review) => {
            info!(
                "Added review {} for restaurant {} by {}",
                review.id, restaurant_id, review.user_name
            );
            Ok(Redirect::to(&format!("/{}", restaurant_id)).into_response())
        }
        // Range violations come back from the entity operation
        Err(Error::InvalidInput(message)) => rejected(&state, &restaurant, &message).await,
        Err(err) => Err(err.into()),
    }
}

/// Validate the review form fields.
///
/// The rating is optional; when present it must be a whole number (the
/// range check belongs to the entity operation).
fn parse_review_form(restaurant_id: i64, form: ReviewForm) -> Result<NewReview, String> {
    let user_name = non_blank(form.user_name)
        .ok_or_else(|| "You must include your name and some review text".to_string())?;
    let review_text = non_blank(form.review_text)
        .ok_or_else(|| "You must include your name and some review text".to_string())?;

    let rating = match form.rating.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<i64>()
                .map_err(|_| format!("\"{}\" is not a valid rating", raw))?,
        ),
    };

    Ok(NewReview {
        restaurant: restaurant_id,
        user_name,
        rating,
        review_text,
    })
}

/// Re-render the detail page with a validation message
async fn rejected(
    state: &AppState,
    restaurant: &Restaurant,
    message: &str,
) -> Result<Response, PageError> {
    let reviews = reviews::reviews_for_restaurant(&state.db, restaurant.id).await?;
    let stars = rating::star_rating(&reviews);
    let body = views::details_page(restaurant, &reviews, &stars, Some(message));
    Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response())
}

fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
