// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meta key holding the free-text sentiment label of a review.
pub const SENTIMENT_META_KEY: &str = "sentiment";
/// Meta key holding the numeric sentiment score of a review.
pub const SENTIMENT_SCORE_META_KEY: &str = "sentiment_score";

/// Label reported when a review has no stored sentiment.
pub const DEFAULT_SENTIMENT: &str = "neutral";
/// Score reported when a review has no stored (or no parsable) score.
pub const DEFAULT_SENTIMENT_SCORE: f64 = 0.5;

/// Static description of a registered content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType {
    pub name: &'static str,
    pub plural_label: &'static str,
    pub singular_label: &'static str,
    pub show_in_rest: bool,
}

pub const PRODUCT_REVIEW: ContentType = ContentType {
    name: "product_review",
    plural_label: "Product Reviews",
    singular_label: "Product Review",
    show_in_rest: true,
};

/// Three-way output of the sentiment classifier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product review as read back from the store, with metadata defaults applied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,                    // Assigned by the store, never changes
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub sentiment: String,          // Free text; not necessarily a SentimentLabel
    pub sentiment_score: f64,
}

/// One entry of the review history endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub id: i64,
    pub title: String,
    pub sentiment: String,
    pub score: f64,
}

impl From<Review> for ReviewSummary {
    fn from(review: Review) -> Self {
        ReviewSummary {
            id: review.id,
            title: review.title,
            sentiment: review.sentiment,
            score: review.sentiment_score,
        }
    }
}
