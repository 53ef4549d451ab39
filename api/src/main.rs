use api::routes::routes;
use axum::Router;
use common::config::Config;
use migration::{Migrator, MigratorTrait};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[tokio::main]
async fn main() {
    let config = Config::init();
    let _log_guard = common::logger::init(&config.log_file, &config.log_level);

    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");

    let cors = CorsLayer::very_permissive();

    let app = Router::new()
        .nest("/api", routes(db))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!(
        "Starting {} on http://{}:{}",
        config.project_name,
        config.host,
        config.port
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Server crashed");
}
