/// Placeholder sentiment classifier.
/// Maps a numeric score onto a label by comparing it with the neutral midpoint.
use crate::models::review::{SentimentLabel, DEFAULT_SENTIMENT_SCORE};

pub fn classify(score: f64) -> SentimentLabel {
    if score > DEFAULT_SENTIMENT_SCORE {
        SentimentLabel::Positive
    } else if score < DEFAULT_SENTIMENT_SCORE {
        SentimentLabel::Negative
    } else {
        // Exactly 0.5, or NaN
        SentimentLabel::Neutral
    }
}
