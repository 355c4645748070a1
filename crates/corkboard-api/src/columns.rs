//! Handlers for `/columns` endpoints.
//!
//! Same shape as [`crate::boards`]. Deleting a column unlinks it from every
//! board and takes every note out of it; the notes are kept.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  response::Response,
};
use corkboard_core::{
  column::{self, ColumnFields},
  store::Store,
};

use crate::{
  error::ApiError,
  html,
  respond::{Reply, ViewParams},
};

/// `GET /columns[?type=json]`
pub async fn list<S: Store>(
  State(store): State<Arc<S>>,
  Query(view): Query<ViewParams>,
) -> Result<Response, ApiError> {
  let listing = store.transact(column::list).await?;
  Ok(view.render(listing, |l| html::listing("Columns", l)))
}

/// `POST /columns`
pub async fn create<S: Store>(
  State(store): State<Arc<S>>,
  Json(fields): Json<ColumnFields>,
) -> Result<Reply, ApiError> {
  let outcome = store
    .transact(move |tx| column::create(tx, fields))
    .await?;
  Ok(Reply(outcome))
}

/// `GET /columns/{id}[?type=json]`
pub async fn get_one<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(view): Query<ViewParams>,
) -> Result<Response, ApiError> {
  let tree = store.transact(move |tx| column::get(tx, &id)).await?;
  Ok(view.render(tree, html::column))
}

/// `PATCH /columns/{id}`
pub async fn update<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Option<Json<ColumnFields>>,
) -> Result<Reply, ApiError> {
  let fields = body.map(|Json(fields)| fields).unwrap_or_default();
  let outcome = store
    .transact(move |tx| column::update(tx, &id, fields))
    .await?;
  Ok(Reply(outcome))
}

/// `DELETE /columns/{id}`
pub async fn delete<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Reply, ApiError> {
  let outcome = store.transact(move |tx| column::delete(tx, &id)).await?;
  Ok(Reply(outcome))
}
