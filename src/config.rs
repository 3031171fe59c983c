use leptos::get_configuration;
use leptos::logging::log;
use std::env;
use std::io;
use std::net::SocketAddr;

/// Environment variable naming the SQLite file backing the review store.
pub const DB_PATH_ENV: &str = "SIMPLE_REVIEWS_DB";
pub const DEFAULT_DB_PATH: &str = "simple_reviews.db";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub site_addr: SocketAddr,
    pub db_path: String,
}

impl AppConfig {
    /// Listen address from `[package.metadata.leptos]` (or `LEPTOS_SITE_ADDR`),
    /// database path from `SIMPLE_REVIEWS_DB`.
    pub async fn load() -> io::Result<Self> {
        let conf = get_configuration(Some("Cargo.toml"))
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let config = AppConfig {
            site_addr: conf.leptos_options.site_addr,
            db_path: db_path_from(env::var(DB_PATH_ENV).ok()),
        };
        log!("[CONFIG] {:?}", config);
        Ok(config)
    }
}

fn db_path_from(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_fallback() {
        assert_eq!(db_path_from(None), DEFAULT_DB_PATH);
        assert_eq!(db_path_from(Some("  ".into())), DEFAULT_DB_PATH);
        assert_eq!(db_path_from(Some("/var/lib/reviews.db".into())), "/var/lib/reviews.db");
    }
}
