//! HTML page handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;

use super::error::ApiError;
use super::{list_names, open};
use crate::counter::CounterStore;
use crate::kv::KvBackend;
use crate::view::{render_counter, render_index, CounterPage, IndexPage};

/// `GET /`
pub(crate) async fn index<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
) -> Result<Html<String>, ApiError> {
    let page = IndexPage::from_names(list_names(&store).await);
    Ok(Html(render_index(&page)?))
}

/// `GET /counters/:name`
pub(crate) async fn counter<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
    Path(name): Path<String>,
) -> Result<Html<String>, ApiError> {
    let page = CounterPage::from_counter(&open(&store, &name).await?);
    Ok(Html(render_counter(&page, false)?))
}

/// `GET /counters/:name/solo`
pub(crate) async fn solo<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
    Path(name): Path<String>,
) -> Result<Html<String>, ApiError> {
    let page = CounterPage::from_counter(&open(&store, &name).await?);
    Ok(Html(render_counter(&page, true)?))
}
