//! Generic CRUD handlers, instantiated once per record type.
//!
//! ## Routes (per resource `base`)
//!
//! - `GET  base/all`: every record.
//! - `GET  base?id=..`: one record, or 404.
//! - `POST base/post?..`: create from query parameters.
//! - `PUT  base?id=..`: overwrite every field from the JSON body, or 404.
//! - `DELETE base?id=..`: delete, or 404.
//!
//! The identifier parameter is `R::ID_PARAM` (`id` unless the record says
//! otherwise).

use std::collections::HashMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use super::error::ApiError;
use super::router::AppState;
use crate::record::{Record, RecordKey};
use crate::store::{RecordStore, RecordsExt};

/// Body of a delete confirmation.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// The five CRUD routes for `R` under `base`.
pub(crate) fn routes<S, R>(base: &str) -> Router<AppState<S>>
where
    S: RecordStore + 'static,
    R: Record,
{
    Router::new()
        .route(&format!("{base}/all"), get(list::<S, R>))
        .route(&format!("{base}/post"), post(create::<S, R>))
        .route(
            base,
            get(get_one::<S, R>)
                .put(update::<S, R>)
                .delete(delete::<S, R>),
        )
}

async fn list<S, R>(State(state): State<AppState<S>>) -> Result<Json<Vec<R>>, ApiError>
where
    S: RecordStore + 'static,
    R: Record,
{
    let records = blocking(&state, |store| Ok(store.records::<R>().find_all()?)).await?;
    Ok(Json(records))
}

async fn get_one<S, R>(
    State(state): State<AppState<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<R>, ApiError>
where
    S: RecordStore + 'static,
    R: Record,
{
    let id = key_param::<R>(&params)?;
    let record = blocking(&state, move |store| fetch::<S, R>(store, &id)).await?;
    Ok(Json(record))
}

async fn create<S, R>(
    State(state): State<AppState<S>>,
    params: Result<Query<R::Create>, QueryRejection>,
) -> Result<Json<R>, ApiError>
where
    S: RecordStore + 'static,
    R: Record,
{
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let record = R::from_create(params);
    let saved = blocking(&state, move |store| Ok(store.records::<R>().save(record)?)).await?;

    if let Some(id) = saved.key() {
        info!(collection = R::COLLECTION, id = %id, "record created");
    }
    Ok(Json(saved))
}

async fn update<S, R>(
    State(state): State<AppState<S>>,
    Query(params): Query<HashMap<String, String>>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, ApiError>
where
    S: RecordStore + 'static,
    R: Record,
{
    let id = key_param::<R>(&params)?;
    let Json(incoming) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let key = id.clone();
    let saved = blocking(&state, move |store| {
        let mut record = fetch::<S, R>(store, &key)?;
        record.overwrite_from(incoming);
        Ok(store.records::<R>().save(record)?)
    })
    .await?;

    info!(collection = R::COLLECTION, id = %id, "record updated");
    Ok(Json(saved))
}

async fn delete<S, R>(
    State(state): State<AppState<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Message>, ApiError>
where
    S: RecordStore + 'static,
    R: Record,
{
    let id = key_param::<R>(&params)?;
    let key = id.clone();
    blocking(&state, move |store| {
        let record = fetch::<S, R>(store, &key)?;
        Ok(store.records::<R>().delete(&record)?)
    })
    .await?;

    info!(collection = R::COLLECTION, id = %id, "record deleted");
    Ok(Json(Message {
        message: format!("{} with id {} deleted", R::LABEL, id),
    }))
}

/// Run a store call on the blocking pool.
async fn blocking<S, T, F>(state: &AppState<S>, call: F) -> Result<T, ApiError>
where
    S: RecordStore + 'static,
    T: Send + 'static,
    F: FnOnce(&S) -> Result<T, ApiError> + Send + 'static,
{
    let store = state.shared_store();
    tokio::task::spawn_blocking(move || call(store.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?
}

/// Look a record up by identifier, mapping absence to NotFound.
fn fetch<S: RecordStore, R: Record>(store: &S, id: &R::Key) -> Result<R, ApiError> {
    store
        .records::<R>()
        .find_by_id(id)?
        .ok_or_else(|| ApiError::not_found::<R>(id))
}

fn key_param<R: Record>(params: &HashMap<String, String>) -> Result<R::Key, ApiError> {
    let raw = params.get(R::ID_PARAM).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "Required request parameter '{}' is not present",
            R::ID_PARAM
        ))
    })?;

    R::Key::parse(raw).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "invalid value for parameter '{}': {}",
            R::ID_PARAM,
            raw
        ))
    })
}
