//! Product reviews with placeholder sentiment data.
//!
//! Reviews live in a SQLite-backed content store, the sentiment endpoints and
//! admin pages are served by actix-web, and markup is rendered server-side
//! with leptos components.

pub mod components {
    pub mod product_reviews;
    pub mod review_editor;
    pub mod sentiment_metabox;
}
pub mod models {
    pub mod review;
}
pub mod db;
pub mod sanitize;
pub mod sentiment;

#[cfg(feature = "ssr")]
pub mod admin;
#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod editor;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod render;
#[cfg(feature = "ssr")]
pub mod routes;
#[cfg(feature = "ssr")]
pub mod shortcode;
