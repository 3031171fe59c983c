//! Save hook for the sentiment metaboxes.

use leptos::logging::log;
use serde::Deserialize;

use crate::db::Database;
use crate::models::review::{SENTIMENT_META_KEY, SENTIMENT_SCORE_META_KEY};
use crate::sanitize::{float_val, sanitize_text};

/// How the save of the owning review was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Explicit,
    Autosave,
}

/// Metabox fields as submitted with the review form. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaboxSubmission {
    pub sentiment: Option<String>,
    #[serde(alias = "sentimentScore")]
    pub sentiment_score: Option<String>,
    pub sentiment_nonce: Option<String>,
}

/// Persists the submitted metabox fields for review `id`.
///
/// Autosaves never touch metadata. Otherwise each submitted field is written
/// independently: the label as sanitized plain text, the score through
/// [`float_val`] so malformed input stores `0`.
pub async fn save_review_metabox(
    db: &Database,
    id: i64,
    kind: SaveKind,
    submission: &MetaboxSubmission,
) -> Result<(), rusqlite::Error> {
    if kind == SaveKind::Autosave {
        log!("[EDITOR] Autosave of review {}, metadata untouched", id);
        return Ok(());
    }

    if let Some(sentiment) = &submission.sentiment {
        let sentiment = sanitize_text(sentiment);
        db.set_meta(id, SENTIMENT_META_KEY, &sentiment).await?;
    }

    if let Some(score) = &submission.sentiment_score {
        let score = float_val(score);
        db.set_meta(id, SENTIMENT_SCORE_META_KEY, &score.to_string())
            .await?;
    }

    Ok(())
}
