use leptos::*;
use crate::models::review::Review;

pub const PRODUCT_REVIEWS_STYLE: &str = "
    .review-positive { color: green; font-weight: bold; }
    .review-negative { color: red; font-weight: bold; }
";

/// CSS class for a stored sentiment label; anything but positive/negative stays unstyled.
pub fn sentiment_class(sentiment: &str) -> Option<&'static str> {
    match sentiment {
        "positive" => Some("review-positive"),
        "negative" => Some("review-negative"),
        _ => None,
    }
}

/// Recent reviews, one list item per review with its sentiment in parentheses.
#[component]
pub fn ProductReviews(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <style>{PRODUCT_REVIEWS_STYLE}</style>
        <ul>
            {
                reviews.into_iter().map(|review| {
                    let class = sentiment_class(&review.sentiment);
                    let line = format!("{} (Sentiment: {})", review.title, review.sentiment);
                    view! {
                        <li class=class>{line}</li>
                    }
                }).collect::<Vec<_>>()
            }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_class() {
        assert_eq!(sentiment_class("positive"), Some("review-positive"));
        assert_eq!(sentiment_class("negative"), Some("review-negative"));
        assert_eq!(sentiment_class("neutral"), None);
        assert_eq!(sentiment_class("Positive"), None);
        assert_eq!(sentiment_class(""), None);
    }
}
