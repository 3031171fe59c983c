//! Admin pages for creating and editing product reviews.
//!
//! Saving a review runs the sentiment metabox save hook. The hidden
//! `sentiment_nonce` token is rendered but not verified, and none of these
//! routes check who is calling.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use leptos::logging::log;
use leptos::*;
use serde::Deserialize;
use uuid::Uuid;

use crate::components::review_editor::{EditReviewPage, NewReviewPage};
use crate::db::Database;
use crate::editor::{save_review_metabox, MetaboxSubmission, SaveKind};
use crate::error::ApiError;
use crate::models::review::{PRODUCT_REVIEW, SENTIMENT_META_KEY, SENTIMENT_SCORE_META_KEY};
use crate::render::html_document;

/// Form body posted by the review editor (and by background autosaves).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewForm {
    pub title: Option<String>,
    pub body: Option<String>,
    pub sentiment: Option<String>,
    #[serde(alias = "sentimentScore")]
    pub sentiment_score: Option<String>,
    pub sentiment_nonce: Option<String>,
    pub autosave: Option<String>,
}

impl ReviewForm {
    pub fn save_kind(&self) -> SaveKind {
        match self.autosave.as_deref().map(str::trim) {
            Some("1") | Some("true") => SaveKind::Autosave,
            _ => SaveKind::Explicit,
        }
    }

    pub fn metabox(&self) -> MetaboxSubmission {
        MetaboxSubmission {
            sentiment: self.sentiment.clone(),
            sentiment_score: self.sentiment_score.clone(),
            sentiment_nonce: self.sentiment_nonce.clone(),
        }
    }
}

fn new_nonce() -> String {
    Uuid::new_v4().simple().to_string()
}

fn html_page(title: &str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html_document(title, &body))
}

fn redirect_to_editor(id: i64) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/admin/reviews/{}/edit", id)))
        .finish()
}

// GET /admin/reviews/new
pub async fn new_review_form() -> HttpResponse {
    let nonce = new_nonce();
    let body = leptos::ssr::render_to_string(move || view! { <NewReviewPage nonce=nonce /> });
    html_page(PRODUCT_REVIEW.plural_label, body.to_string())
}

// POST /admin/reviews
pub async fn create_review(
    db: web::Data<Database>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, ApiError> {
    let form = form.into_inner();
    let title = form.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::EmptyTitle);
    }

    let id = db
        .create_review(title, form.body.as_deref().unwrap_or_default())
        .await?;
    log!("[ADMIN] Created review {}", id);

    save_review_metabox(&db, id, form.save_kind(), &form.metabox()).await?;
    Ok(redirect_to_editor(id))
}

// GET /admin/reviews/{id}/edit
pub async fn edit_review_form(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let review = db.get_review(id).await?.ok_or(ApiError::NotFound(id))?;

    // The editor shows what is stored, not the read defaults
    let sentiment = db
        .get_meta(id, SENTIMENT_META_KEY)
        .await?
        .unwrap_or_default();
    let score = db.get_meta(id, SENTIMENT_SCORE_META_KEY).await?;
    let nonce = new_nonce();

    let body = leptos::ssr::render_to_string(move || {
        view! { <EditReviewPage review=review sentiment=sentiment score=score nonce=nonce /> }
    });
    Ok(html_page(PRODUCT_REVIEW.singular_label, body.to_string()))
}

// POST /admin/reviews/{id}
pub async fn save_review(
    db: web::Data<Database>,
    path: web::Path<i64>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if db.get_review(id).await?.is_none() {
        return Err(ApiError::NotFound(id));
    }

    let form = form.into_inner();
    save_review_metabox(&db, id, form.save_kind(), &form.metabox()).await?;
    log!("[ADMIN] Saved review {} ({:?})", id, form.save_kind());

    Ok(redirect_to_editor(id))
}
