use actix_web::error::{PathError, UrlencodedError};
use actix_web::{web, HttpRequest};

use crate::error::ApiError;
use crate::models::review::PRODUCT_REVIEW;
use crate::{admin, api};

/// Registers every route of the service. The `Database` is expected as app data.
///
/// None of these routes require authentication.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Extractor failures answer with the same JSON error body as the handlers
    cfg.app_data(web::FormConfig::default().error_handler(|err: UrlencodedError, _req: &HttpRequest| {
        ApiError::InvalidForm(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err: PathError, req: &HttpRequest| {
        ApiError::NoRoute(req.path().to_string()).into()
    }));

    // Both spellings are served: with and without the trailing slash
    cfg.service(
        web::scope("/mock-api/v1")
            .route("/sentiment", web::post().to(api::analyze_sentiment)) // POST /mock-api/v1/sentiment
            .route("/sentiment/", web::post().to(api::analyze_sentiment))
            .route("/review-history", web::get().to(api::get_review_history)) // GET /mock-api/v1/review-history
            .route("/review-history/", web::get().to(api::get_review_history)),
    );

    if PRODUCT_REVIEW.show_in_rest {
        cfg.route(
            "/api/product_review/{id}",
            web::get().to(api::get_product_review),
        );
    }

    cfg.route("/reviews", web::get().to(api::reviews_page))
        .service(
            web::scope("/admin/reviews")
                .route("/new", web::get().to(admin::new_review_form))
                .route("", web::post().to(admin::create_review))
                .route("/{id}/edit", web::get().to(admin::edit_review_form))
                .route("/{id}", web::post().to(admin::save_review)),
        );
}
