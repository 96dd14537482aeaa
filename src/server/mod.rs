use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::dataset::Dataset;
use crate::ui::Icons;

pub mod routes;

/// Server state. The dataset is shared read-only by every request.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Dashboard API routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/summary", get(routes::get_summary))
        .route("/quotes", get(routes::search_quotes))
        .route("/authors", get(routes::list_authors))
        .route("/authors/{name}", get(routes::get_author))
        .route("/analytics", get(routes::run_analytics))
        .route("/export/{format}", get(routes::export))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(port: u16, dataset: Dataset) -> anyhow::Result<()> {
    let app = router(AppState::new(dataset));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("{} Dashboard API running at http://{}", Icons::GLOBE, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
