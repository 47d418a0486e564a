// src/bin/fruits_server.rs

use fruits_app::config;
use fruits_app::transport;
use fruits_app::{FruitService, FruitStore, PostgresFruitStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env();

    // --- Store Initialization ---
    println!("> Connecting to the fruit store...");
    let store = Arc::new(PostgresFruitStore::connect().await?);
    let fruit_count = store.list_all().await?.len();
    println!("> Fruit store ready ({} fruits stored).", fruit_count);

    let app_state = transport::http::AppState::new(FruitService::new(store.clone()));

    // --- HTTP Server Initialization ---
    println!("> Starting HTTP server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let router = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let app = transport::http::with_method_override(router);
    let listener = tokio::net::TcpListener::bind(config::LISTEN_ADDR).await?;
    println!("> Listening on http://{}", config::LISTEN_ADDR);
    println!("> Swagger UI available at http://{}/swagger-ui", config::LISTEN_ADDR);
    println!("> Press Ctrl+C to shut down");

    axum::serve(listener, axum::ServiceExt::<axum::extract::Request>::into_make_service(app))
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                println!("\n> Shutdown signal received (Ctrl+C)...");
            }
        })
        .await?;

    println!("> Closing database connections...");
    store.close().await;
    println!("> Graceful shutdown complete.");
    Ok(())
}
