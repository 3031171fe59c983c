#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::review::{
        Review, DEFAULT_SENTIMENT, DEFAULT_SENTIMENT_SCORE, PRODUCT_REVIEW, SENTIMENT_META_KEY,
        SENTIMENT_SCORE_META_KEY,
    };
    use chrono::{DateTime, Utc};
    use leptos::logging::log;
    use rusqlite::{params, Connection, Error, OptionalExtension, Row};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::Duration;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            db
        }

        #[tokio::test]
        async fn test_schema_creation() {
            let db = create_test_db().await;

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"posts".to_string()));
            assert!(tables.contains(&"post_meta".to_string()));
        }

        #[tokio::test]
        async fn test_create_and_get_review() {
            let db = create_test_db().await;
            let id = db.create_review("Kettle", "Boils fast").await.unwrap();

            let review = db.get_review(id).await.unwrap().expect("review exists");
            assert_eq!(review.id, id);
            assert_eq!(review.title, "Kettle");
            assert_eq!(review.body, "Boils fast");
            // Unset metadata falls back to the defaults
            assert_eq!(review.sentiment, DEFAULT_SENTIMENT);
            assert_eq!(review.sentiment_score, DEFAULT_SENTIMENT_SCORE);

            assert!(db.get_review(id + 100).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_meta_upsert_is_last_write_wins() {
            let db = create_test_db().await;
            let id = db.create_review("Toaster", "").await.unwrap();

            assert_eq!(db.get_meta(id, SENTIMENT_META_KEY).await.unwrap(), None);

            db.set_meta(id, SENTIMENT_META_KEY, "positive").await.unwrap();
            db.set_meta(id, SENTIMENT_META_KEY, "negative").await.unwrap();
            assert_eq!(
                db.get_meta(id, SENTIMENT_META_KEY).await.unwrap().as_deref(),
                Some("negative")
            );

            db.set_meta(id, SENTIMENT_SCORE_META_KEY, "0.2").await.unwrap();
            let review = db.get_review(id).await.unwrap().unwrap();
            assert_eq!(review.sentiment, "negative");
            assert_eq!(review.sentiment_score, 0.2);
        }

        #[tokio::test]
        async fn test_label_and_score_are_independent() {
            let db = create_test_db().await;
            let id = db.create_review("Mixer", "").await.unwrap();

            db.set_meta(id, SENTIMENT_SCORE_META_KEY, "0.9").await.unwrap();
            let review = db.get_review(id).await.unwrap().unwrap();
            assert_eq!(review.sentiment, DEFAULT_SENTIMENT);
            assert_eq!(review.sentiment_score, 0.9);

            db.set_meta(id, SENTIMENT_META_KEY, "negative").await.unwrap();
            let review = db.get_review(id).await.unwrap().unwrap();
            assert_eq!(review.sentiment, "negative");
            assert_eq!(review.sentiment_score, 0.9);
        }

        #[tokio::test]
        async fn test_unparsable_score_reads_as_default() {
            let db = create_test_db().await;
            let id = db.create_review("Grinder", "").await.unwrap();
            db.set_meta(id, SENTIMENT_SCORE_META_KEY, "garbage").await.unwrap();

            let review = db.get_review(id).await.unwrap().unwrap();
            assert_eq!(review.sentiment_score, DEFAULT_SENTIMENT_SCORE);
        }

        #[tokio::test]
        async fn test_list_recent_orders_newest_first() {
            let db = create_test_db().await;
            let base = Utc::now();
            let mut ids = Vec::new();
            for i in 0..7 {
                let id = db
                    .create_review_at(&format!("Review {}", i), "", base + Duration::seconds(i))
                    .await
                    .unwrap();
                ids.push(id);
            }

            let recent = db.list_recent(5).await.unwrap();
            assert_eq!(recent.len(), 5);
            let titles: Vec<&str> = recent.iter().map(|r| r.title.as_str()).collect();
            assert_eq!(
                titles,
                vec!["Review 6", "Review 5", "Review 4", "Review 3", "Review 2"]
            );
            assert_eq!(recent[0].id, ids[6]);
        }

        #[tokio::test]
        async fn test_list_recent_ties_keep_insertion_order() {
            let db = create_test_db().await;
            let at = Utc::now();
            let first = db.create_review_at("First", "", at).await.unwrap();
            let second = db.create_review_at("Second", "", at).await.unwrap();

            let recent = db.list_recent(5).await.unwrap();
            let ids: Vec<i64> = recent.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![first, second]);
        }

        #[tokio::test]
        async fn test_other_content_types_are_excluded() {
            let db = create_test_db().await;
            let page = db
                .create_item("page", "About us", "", Utc::now())
                .await
                .unwrap();
            let review = db.create_review("Juicer", "").await.unwrap();

            let recent = db.list_recent(5).await.unwrap();
            assert_eq!(recent.len(), 1);
            assert_eq!(recent[0].id, review);
            assert!(db.get_review(page).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_empty_store_lists_nothing() {
            let db = create_test_db().await;
            assert!(db.list_recent(5).await.unwrap().is_empty());
        }
    }

    // Define a struct to represent a database connection
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    const REVIEW_COLUMNS: &str = "p.id, p.title, p.body, p.created_at, s.meta_value, sc.meta_value
        FROM posts p
        LEFT JOIN post_meta s ON s.post_id = p.id AND s.meta_key = ?1
        LEFT JOIN post_meta sc ON sc.post_id = p.id AND sc.meta_key = ?2";

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            log!("[DB] Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS posts (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    post_type TEXT NOT NULL,
                    title TEXT NOT NULL,
                    body TEXT NOT NULL DEFAULT '',
                    created_at INTEGER NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_posts_type_created
                    ON posts (post_type, created_at);",
            )
            .map_err(|e| {
                log!("[DB] Failed creating posts table: {}", e);
                e
            })?;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS post_meta (
                    post_id INTEGER NOT NULL,
                    meta_key TEXT NOT NULL,
                    meta_value TEXT NOT NULL,
                    PRIMARY KEY (post_id, meta_key),
                    FOREIGN KEY (post_id) REFERENCES posts(id)
                );",
            )
            .map_err(|e| {
                log!("[DB] Failed creating post_meta table: {}", e);
                e
            })?;

            log!("[DB] Schema ready");
            Ok(())
        }

        /// Stores a content item of any type and returns its id.
        pub async fn create_item(
            &self,
            post_type: &str,
            title: &str,
            body: &str,
            created_at: DateTime<Utc>,
        ) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO posts (post_type, title, body, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![post_type, title, body, created_at.timestamp_micros()],
            )?;
            let id = conn.last_insert_rowid();
            log!("[DB] Created {} {}: '{}'", post_type, id, title);
            Ok(id)
        }

        pub async fn create_review(&self, title: &str, body: &str) -> Result<i64, Error> {
            self.create_review_at(title, body, Utc::now()).await
        }

        pub async fn create_review_at(
            &self,
            title: &str,
            body: &str,
            created_at: DateTime<Utc>,
        ) -> Result<i64, Error> {
            self.create_item(PRODUCT_REVIEW.name, title, body, created_at)
                .await
        }

        pub async fn get_review(&self, id: i64) -> Result<Option<Review>, Error> {
            let conn = self.conn.lock().await;
            let sql = format!(
                "SELECT {} WHERE p.id = ?3 AND p.post_type = ?4",
                REVIEW_COLUMNS
            );
            conn.query_row(
                &sql,
                params![SENTIMENT_META_KEY, SENTIMENT_SCORE_META_KEY, id, PRODUCT_REVIEW.name],
                review_from_row,
            )
            .optional()
        }

        /// Raw metadata value, `None` when the key was never set.
        pub async fn get_meta(&self, id: i64, key: &str) -> Result<Option<String>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT meta_value FROM post_meta WHERE post_id = ?1 AND meta_key = ?2",
                params![id, key],
                |row| row.get(0),
            )
            .optional()
        }

        pub async fn set_meta(&self, id: i64, key: &str, value: &str) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO post_meta (post_id, meta_key, meta_value)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(post_id, meta_key) DO UPDATE SET
                    meta_value = excluded.meta_value",
                params![id, key, value],
            )?;
            log!("[DB] Set meta {}.{} = '{}'", id, key, value);
            Ok(())
        }

        /// Up to `limit` reviews, newest first; equal timestamps keep insertion order.
        pub async fn list_recent(&self, limit: usize) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            let sql = format!(
                "SELECT {} WHERE p.post_type = ?3
                ORDER BY p.created_at DESC, p.id ASC
                LIMIT ?4",
                REVIEW_COLUMNS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(
                params![
                    SENTIMENT_META_KEY,
                    SENTIMENT_SCORE_META_KEY,
                    PRODUCT_REVIEW.name,
                    limit as i64
                ],
                review_from_row,
            )?;

            let mut reviews = Vec::new();
            for row in rows {
                reviews.push(row?);
            }
            Ok(reviews)
        }
    }

    // The single place where unset metadata turns into defaults
    fn review_from_row(row: &Row<'_>) -> Result<Review, Error> {
        let micros: i64 = row.get(3)?;
        let sentiment: Option<String> = row.get(4)?;
        let score: Option<String> = row.get(5)?;

        Ok(Review {
            id: row.get(0)?,
            title: row.get(1)?,
            body: row.get(2)?,
            created_at: DateTime::from_timestamp_micros(micros).unwrap_or_default(),
            sentiment: sentiment.unwrap_or_else(|| DEFAULT_SENTIMENT.to_string()),
            sentiment_score: score
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(DEFAULT_SENTIMENT_SCORE),
        })
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
