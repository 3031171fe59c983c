//! Server-side rendering of the leptos components into HTML strings.

use leptos::logging::log;
use leptos::*;

use crate::components::product_reviews::ProductReviews;
use crate::db::Database;
use crate::models::review::Review;

/// Number of reviews shown by the review list and the history endpoint.
pub const RECENT_REVIEWS_LIMIT: usize = 5;

pub fn render_reviews_fragment(reviews: Vec<Review>) -> String {
    leptos::ssr::render_to_string(move || view! { <ProductReviews reviews=reviews /> })
        .to_string()
}

/// Markup for the `[product_reviews]` shortcode: the most recent reviews as a styled list.
pub async fn render_product_reviews(db: &Database) -> Result<String, rusqlite::Error> {
    let reviews = db.list_recent(RECENT_REVIEWS_LIMIT).await?;
    log!("[RENDER] Rendering {} recent reviews", reviews.len());
    Ok(render_reviews_fragment(reviews))
}

/// Wraps a rendered body fragment into a complete page.
pub fn html_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/><title>{}</title></head><body>{}</body></html>",
        title, body
    )
}
