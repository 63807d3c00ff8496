//! Server crate for the movie catalog.
//!
//! Exposes the catalog queries over HTTP: JSON endpoints for search,
//! genre listing and the questionnaire, plus server-rendered HTML pages.

pub mod config;
pub mod error;
pub mod lenient;
pub mod routes;
pub mod templates;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use data_loader::MovieStore;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

pub use config::Config;

pub struct AppState {
    pub store: Arc<MovieStore>,
}

/// Build the application router around a loaded catalog.
pub fn router(store: Arc<MovieStore>, config: &Config) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .route("/", get(routes::index))
        .route("/recommendation", get(routes::recommendation))
        .route("/movies", get(routes::movies))
        .route("/recommend", post(routes::recommend))
        .route("/recommend_movies", post(routes::recommend_movies))
        .route("/movie/{id}", get(routes::movie_detail))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Bind `config.addr` and serve until the process is stopped.
pub async fn serve(store: Arc<MovieStore>, config: Config) -> anyhow::Result<()> {
    let app = router(store, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
