//! Server-side HTML rendering
//!
//! Pages are rendered with `format!` against a shared embedded stylesheet,
//! the same way the other UI surfaces in this workspace are built.

use bistro_common::db::models::{Restaurant, Review};
use bistro_common::StarRating;

/// Escape text for interpolation into HTML content or attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header>
        <h1><a href="/">Bistro</a></h1>
        <nav><a class="button" href="/create">Add restaurant</a></nav>
    </header>
    <main>
{body}    </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Five-star bar filled to `stars_percent`
fn star_bar(stars: &StarRating) -> String {
    format!(
        r#"<span class="stars"><span class="stars-filled" style="width: {}%;">★★★★★</span><span class="stars-empty">★★★★★</span></span>"#,
        stars.stars_percent
    )
}

fn error_banner(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            "        <p class=\"error-message\">{}</p>\n",
            escape(message)
        ),
        None => String::new(),
    }
}

/// Restaurant list page
pub fn index_page(listings: &[(Restaurant, StarRating)]) -> String {
    let body = if listings.is_empty() {
        "        <p class=\"empty\">No restaurants yet. <a href=\"/create\">Add the first one.</a></p>\n"
            .to_string()
    } else {
        let mut items = String::from("        <ul class=\"restaurant-list\">\n");
        for (restaurant, stars) in listings {
            items.push_str(&format!(
                r#"            <li class="card">
                <h2><a href="/{id}">{name}</a></h2>
                <p class="address">{street_address}</p>
                <p>{star_bar} <span class="review-count">{count} review{plural}</span></p>
            </li>
"#,
                id = restaurant.id,
                name = escape(&restaurant.name),
                street_address = escape(&restaurant.street_address),
                star_bar = star_bar(stars),
                count = stars.review_count,
                plural = if stars.review_count == 1 { "" } else { "s" },
            ));
        }
        items.push_str("        </ul>\n");
        items
    };

    page_shell("Restaurants", &body)
}

/// Restaurant detail page with reviews and the review form
pub fn details_page(
    restaurant: &Restaurant,
    reviews: &[Review],
    stars: &StarRating,
    error_message: Option<&str>,
) -> String {
    let mut body = format!(
        r#"        <section class="card">
            <h2>{name}</h2>
            <p class="address">{street_address}</p>
            <p>{description}</p>
            <p>{star_bar} <span class="review-count">{avg:.1} average from {count} review{plural}</span></p>
        </section>
"#,
        name = escape(&restaurant.name),
        street_address = escape(&restaurant.street_address),
        description = escape(&restaurant.description),
        star_bar = star_bar(stars),
        avg = stars.avg_rating,
        count = stars.review_count,
        plural = if stars.review_count == 1 { "" } else { "s" },
    );

    body.push_str(&error_banner(error_message));

    body.push_str(&format!(
        r#"        <section class="card">
            <h3>Add a review</h3>
            <form action="/review/{id}" method="post">
                <label for="user_name">Name</label>
                <input type="text" id="user_name" name="user_name" maxlength="30">
                <label for="rating">Rating</label>
                <select id="rating" name="rating">
                    <option value="">No rating</option>
                    <option value="1">1 star</option>
                    <option value="2">2 stars</option>
                    <option value="3">3 stars</option>
                    <option value="4">4 stars</option>
                    <option value="5">5 stars</option>
                </select>
                <label for="review_text">Review</label>
                <textarea id="review_text" name="review_text" maxlength="500" rows="4"></textarea>
                <button type="submit">Submit review</button>
            </form>
        </section>
"#,
        id = restaurant.id,
    ));

    if reviews.is_empty() {
        body.push_str("        <p class=\"empty\">No reviews yet.</p>\n");
    } else {
        body.push_str("        <ul class=\"review-list\">\n");
        for review in reviews {
            let rating_text = match review.rating {
                Some(rating) => format!("{} / 5", rating),
                None => "No rating".to_string(),
            };
            body.push_str(&format!(
                r#"            <li class="card">
                <p class="review-head"><strong>{user_name}</strong> <span class="rating">{rating}</span> <span class="date">{date}</span></p>
                <p>{review_text}</p>
            </li>
"#,
                user_name = escape(&review.user_name),
                rating = rating_text,
                date = review.review_date.format("%Y-%m-%d"),
                review_text = escape(&review.review_text),
            ));
        }
        body.push_str("        </ul>\n");
    }

    page_shell(&restaurant.name, &body)
}

/// Restaurant-creation form page
pub fn create_page(error_message: Option<&str>) -> String {
    let mut body = error_banner(error_message);

    body.push_str(
        r#"        <section class="card">
            <h2>Add a restaurant</h2>
            <form action="/add" method="post">
                <label for="restaurant_name">Name</label>
                <input type="text" id="restaurant_name" name="restaurant_name" maxlength="50">
                <label for="street_address">Street address</label>
                <input type="text" id="street_address" name="street_address" maxlength="50">
                <label for="description">Description</label>
                <textarea id="description" name="description" maxlength="250" rows="4"></textarea>
                <button type="submit">Add restaurant</button>
            </form>
        </section>
"#,
    );

    page_shell("Add a restaurant", &body)
}

/// Not-found page for an unknown restaurant id
pub fn not_found_page(id: i64) -> String {
    let body = format!(
        "        <p class=\"empty\">No restaurant with id {}. <a href=\"/\">Back to the list.</a></p>\n",
        id
    );
    page_shell("Not found", &body)
}

/// Generic failure page
pub fn error_page() -> String {
    let body =
        "        <p class=\"empty\">Something went wrong. <a href=\"/\">Back to the list.</a></p>\n"
            .to_string();
    page_shell("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<b>"Fish & Chips"</b>"#),
            "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("it's"), "it&#39;s");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_index_page_escapes_names() {
        let restaurant = Restaurant {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
            street_address: "1 Elm".to_string(),
            description: "d".to_string(),
        };
        let stars = StarRating {
            avg_rating: 0.0,
            review_count: 0,
            stars_percent: 0,
        };

        let html = index_page(&[(restaurant, stars)]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_create_page_shows_error_message() {
        let html = create_page(Some("missing fields"));
        assert!(html.contains("missing fields"));
        assert!(html.contains("error-message"));

        let html = create_page(None);
        assert!(!html.contains("error-message"));
    }
}
