use actix_web::http::{header, Method};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use leptos::logging::log;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::db::Database;
use crate::error::ApiError;
use crate::models::review::{
    ReviewSummary, SentimentLabel, DEFAULT_SENTIMENT_SCORE, PRODUCT_REVIEW,
};
use crate::render::{html_document, RECENT_REVIEWS_LIMIT};
use crate::sanitize::{parse_numeric, sanitize_text};
use crate::sentiment::classify;
use crate::shortcode::{expand_shortcodes, PRODUCT_REVIEWS_TAG};

/// Parameters of the classify endpoint after coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRequest {
    pub text: String,
    pub review_score: f64,
}

impl SentimentRequest {
    pub fn from_params(params: &Map<String, Value>) -> Self {
        let text = match params.get("text") {
            Some(Value::String(s)) => sanitize_text(s),
            Some(Value::Number(n)) => sanitize_text(&n.to_string()),
            Some(Value::Bool(true)) => "1".to_string(),
            _ => String::new(),
        };

        // No clamping: any finite number is passed to the classifier as-is
        let review_score = match params.get("review_score") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => parse_numeric(s),
            _ => None,
        }
        .unwrap_or(DEFAULT_SENTIMENT_SCORE);

        SentimentRequest { text, review_score }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SentimentResponse {
    pub sentiment: SentimentLabel,
    pub score: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RenderedContent {
    pub raw: String,
    pub rendered: String,
}

/// REST representation of a single review.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewResponse {
    pub id: i64,
    pub title: String,
    pub content: RenderedContent,
    pub created_at: DateTime<Utc>,
    pub sentiment: String,
    pub score: f64,
}

// JSON object body, or an empty parameter set when the body is not JSON
fn json_params(req: &HttpRequest, body: &[u8]) -> Map<String, Value> {
    let is_json = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let essence = value.split(';').next().unwrap_or("").trim();
            essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
        })
        .unwrap_or(false);

    if !is_json {
        return Map::new();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(params)) => params,
        _ => Map::new(),
    }
}

// POST /mock-api/v1/sentiment/
pub async fn analyze_sentiment(req: HttpRequest, body: web::Bytes) -> Result<HttpResponse, ApiError> {
    if req.method() != Method::POST {
        return Err(ApiError::InvalidRequest);
    }

    let request = SentimentRequest::from_params(&json_params(&req, &body));
    if request.text.is_empty() {
        log!("[API] Sentiment request rejected: empty text");
        return Err(ApiError::EmptyText);
    }

    let sentiment = classify(request.review_score);
    log!(
        "[API] Classified score {} as {}",
        request.review_score,
        sentiment
    );

    Ok(HttpResponse::Ok().json(SentimentResponse {
        sentiment,
        score: request.review_score,
    }))
}

// GET /mock-api/v1/review-history/
pub async fn get_review_history(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let reviews = db.list_recent(RECENT_REVIEWS_LIMIT).await?;
    log!("[API] Returning {} reviews of history", reviews.len());

    let history: Vec<ReviewSummary> = reviews.into_iter().map(ReviewSummary::from).collect();
    Ok(HttpResponse::Ok().json(history))
}

// GET /api/product_review/{id}
pub async fn get_product_review(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let review = db.get_review(id).await?.ok_or(ApiError::NotFound(id))?;
    let rendered = expand_shortcodes(&db, &review.body).await?;

    Ok(HttpResponse::Ok().json(ReviewResponse {
        id: review.id,
        title: review.title,
        content: RenderedContent {
            raw: review.body,
            rendered,
        },
        created_at: review.created_at,
        sentiment: review.sentiment,
        score: review.sentiment_score,
    }))
}

// GET /reviews
pub async fn reviews_page(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let content = expand_shortcodes(&db, PRODUCT_REVIEWS_TAG).await?;
    let body = format!("<h1>{}</h1>{}", PRODUCT_REVIEW.plural_label, content);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html_document(PRODUCT_REVIEW.plural_label, &body)))
}
