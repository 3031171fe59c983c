#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_web::{web, App, HttpServer};
    use leptos::logging::log;
    use simple_reviews::config::AppConfig;
    use simple_reviews::db::Database;
    use simple_reviews::routes;

    let config = AppConfig::load().await?;

    // Initialize the database
    let db = Database::new(&config.db_path)
        .map_err(std::io::Error::other)?;
    db.create_schema()
        .await
        .map_err(std::io::Error::other)?;
    log!("[SERVER] Schema created successfully!");

    let addr = config.site_addr;
    log!("[SERVER] listening on http://{}", &addr);

    // Start the Actix Web server
    HttpServer::new(move || {
        App::new()
            // Pass the database as shared state
            .app_data(web::Data::new(db.clone()))
            .configure(routes::configure)
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the server needs the `ssr` feature; without it only the models and components build
}
