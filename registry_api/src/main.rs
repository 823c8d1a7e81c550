mod state;
mod storage;
mod v1;

use crate::state::{AppState, Db};
use crate::storage::ObjectStorage;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use shared::{initialize_db, load_config, shutdown_listener};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config()?;
    let pool = initialize_db(&config.postgres, true).await?;
    let storage = ObjectStorage::from_config(&config.object_storage).await;

    let state = AppState {
        db: Db { pool },
        storage,
    };

    let app = Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .route("/objects/{*name}", get(v1::download_object))
        .nest("/v1", v1::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    info!("starting server at {}", config.http.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.http.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_listener(None))
        .await?;

    Ok(())
}
