//! JSON API handlers under `/api/v1/counters`.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::error::ApiError;
use super::{list_names, open, persisted};
use crate::counter::{Counter, CounterStore, Field, Mutation};
use crate::kv::KvBackend;
use crate::view::WidgetResponse;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FieldQuery {
    color: Option<String>,
    /// Present (with any value, including none) to ask for the widget payload.
    numerics: Option<String>,
}

/// `GET /api/v1/counters`
pub(crate) async fn list_counters<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
) -> Json<Vec<String>> {
    Json(list_names(&store).await)
}

/// `GET /api/v1/counters/:name`
pub(crate) async fn show_counter<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, ApiError> {
    Ok(Json(open(&store, &name).await?))
}

/// `DELETE /api/v1/counters/:name` - answers with the now-default record.
pub(crate) async fn delete_counter<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, ApiError> {
    let counter = open(&store, &name).await?;
    persisted("delete", &name, store.delete(&counter).await);
    Ok(Json(store.create(&name)))
}

/// `POST /api/v1/counters/:name/reset`
pub(crate) async fn reset_counter<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, ApiError> {
    Ok(Json(mutate(&store, &name, Mutation::Reset).await?))
}

/// `GET /api/v1/counters/:name/:field` - the widget payload with `?numerics`,
/// the full record otherwise.
pub(crate) async fn show_field<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
    Path((name, field)): Path<(String, String)>,
    Query(query): Query<FieldQuery>,
) -> Result<Response, ApiError> {
    let field: Field = field.parse()?;
    let counter = open(&store, &name).await?;
    if query.numerics.is_some() {
        let widget = WidgetResponse::for_field(&counter, field, query.color.as_deref());
        return Ok(Json(widget).into_response());
    }
    Ok(Json(counter).into_response())
}

/// `PUT /api/v1/counters/:name/:field`
pub(crate) async fn add_field<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
    Path((name, field)): Path<(String, String)>,
) -> Result<Json<Counter>, ApiError> {
    let field: Field = field.parse()?;
    Ok(Json(mutate(&store, &name, Mutation::Add(field)).await?))
}

/// `DELETE /api/v1/counters/:name/:field`
pub(crate) async fn remove_field<B: KvBackend>(
    State(store): State<Arc<CounterStore<B>>>,
    Path((name, field)): Path<(String, String)>,
) -> Result<Json<Counter>, ApiError> {
    let field: Field = field.parse()?;
    Ok(Json(mutate(&store, &name, Mutation::Remove(field)).await?))
}

async fn mutate<B: KvBackend>(
    store: &CounterStore<B>,
    name: &str,
    mutation: Mutation,
) -> Result<Counter, ApiError> {
    let mut counter = open(store, name).await?;
    let result = store.apply(&mut counter, mutation).await;
    persisted("save", name, result);
    Ok(counter)
}
