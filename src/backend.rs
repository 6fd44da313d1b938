//! Demo backend: the HTTP collaborator the front-end calls. Serves
//! `GET /api/hello` and keeps a running count of requests served.

use crate::domain::model::Greeting;
use crate::utils::error::Result;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const HELLO_MESSAGE: &str = "Hello from the Rust backend!";

#[derive(Default)]
pub struct BackendState {
    hello_requests: AtomicU64,
}

impl BackendState {
    pub fn hello_requests(&self) -> u64 {
        self.hello_requests.load(Ordering::Relaxed)
    }
}

pub fn router() -> Router {
    router_with_state(Arc::new(BackendState::default()))
}

pub fn router_with_state(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/api/hello", get(hello))
        .with_state(state)
}

async fn hello(State(state): State<Arc<BackendState>>) -> Json<Greeting> {
    let served = state.hello_requests.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::debug!("Served /api/hello request #{}", served);

    Json(Greeting {
        message: HELLO_MESSAGE.to_string(),
    })
}

pub async fn serve(addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Backend listening on {}", listener.local_addr()?);

    axum::serve(listener, router()).await?;
    Ok(())
}
