//! HTTP surface - maps requests onto counter store operations.
//!
//! ## Routes
//!
//! - `GET /` - HTML index of every counter.
//! - `GET /counters/:name`, `GET /counters/:name/solo` - HTML counter page.
//! - `GET /api/v1/counters` - JSON array of names.
//! - `GET|DELETE /api/v1/counters/:name` - read or delete a counter.
//! - `POST /api/v1/counters/:name/reset` - zero all tallies.
//! - `GET|PUT|DELETE /api/v1/counters/:name/:field` - read, increment or
//!   decrement `win`, `loss` or `draw`. `GET` with `?numerics[&color=c]`
//!   answers with the widget payload.
//! - `GET /health` - `{ "ok": true }`.
//!
//! Every handled request answers 200 with the resulting record, even when the
//! backend failed. Backend failures are logged at `warn`; only an unknown
//! field or a name containing `/` (404) or a rendering failure (500) changes
//! the status.

mod api;
mod error;
mod pages;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::counter::{Counter, CounterStore, Namespace, StoreError};
use crate::kv::KvBackend;

pub use error::ApiError;

/// Build the axum `Router` over `store`.
pub fn router<B: KvBackend>(store: CounterStore<B>) -> Router {
    Router::new()
        .route("/", get(pages::index::<B>))
        .route("/health", get(health))
        .route("/counters/:name", get(pages::counter::<B>))
        .route("/counters/:name/solo", get(pages::solo::<B>))
        .route("/api/v1/counters", get(api::list_counters::<B>))
        .route(
            "/api/v1/counters/:name",
            get(api::show_counter::<B>).delete(api::delete_counter::<B>),
        )
        .route("/api/v1/counters/:name/reset", post(api::reset_counter::<B>))
        .route(
            "/api/v1/counters/:name/:field",
            get(api::show_field::<B>)
                .put(api::add_field::<B>)
                .delete(api::remove_field::<B>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(store))
}

/// Serve `store` at `addr` until Ctrl-C or SIGTERM.
pub async fn serve<B: KvBackend>(store: CounterStore<B>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(store);
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Build and load the counter for one request. A failed load is logged and
/// the counter keeps its defaults.
async fn open<B: KvBackend>(store: &CounterStore<B>, name: &str) -> Result<Counter, ApiError> {
    Namespace::check_name(name)?;
    let mut counter = store.create(name);
    if let Err(err) = store.load(&mut counter).await {
        warn!(counter = name, error = %err, "load failed, serving defaults");
    }
    Ok(counter)
}

async fn list_names<B: KvBackend>(store: &CounterStore<B>) -> Vec<String> {
    store.list().await.unwrap_or_else(|err| {
        warn!(error = %err, "listing counters failed");
        Vec::new()
    })
}

/// Log a failed write. The response still reports the in-memory record.
fn persisted(operation: &'static str, name: &str, result: Result<(), StoreError>) {
    if let Err(err) = result {
        warn!(operation, counter = name, error = %err, "counter not persisted");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                warn!(error = %err, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
