//! `[product_reviews]` shortcode expansion for stored content.

use crate::db::Database;
use crate::render::render_product_reviews;

pub const PRODUCT_REVIEWS_TAG: &str = "[product_reviews]";

/// Replaces every `[product_reviews]` tag in `content` with the recent-reviews list.
/// Content without the tag is returned as-is and the store is not queried.
pub async fn expand_shortcodes(db: &Database, content: &str) -> Result<String, rusqlite::Error> {
    if !content.contains(PRODUCT_REVIEWS_TAG) {
        return Ok(content.to_string());
    }

    let fragment = render_product_reviews(db).await?;
    Ok(content.replace(PRODUCT_REVIEWS_TAG, &fragment))
}
