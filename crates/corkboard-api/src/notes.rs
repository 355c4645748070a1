//! Handlers for `/notes` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  response::Response,
};
use corkboard_core::{
  note::{self, NoteFields},
  store::Store,
};

use crate::{
  error::ApiError,
  html,
  respond::{Reply, ViewParams},
};

/// `GET /notes[?type=json]`
pub async fn list<S: Store>(
  State(store): State<Arc<S>>,
  Query(view): Query<ViewParams>,
) -> Result<Response, ApiError> {
  let listing = store.transact(note::list).await?;
  Ok(view.render(listing, |l| html::listing("Notes", l)))
}

/// `POST /notes` with body `{"name":"...","text":"..."}`
pub async fn create<S: Store>(
  State(store): State<Arc<S>>,
  Json(fields): Json<NoteFields>,
) -> Result<Reply, ApiError> {
  let outcome = store
    .transact(move |tx| note::create(tx, fields))
    .await?;
  Ok(Reply(outcome))
}

/// `GET /notes/{id}[?type=json]`
pub async fn get_one<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(view): Query<ViewParams>,
) -> Result<Response, ApiError> {
  let note = store.transact(move |tx| note::get(tx, &id)).await?;
  Ok(view.render(note, html::note))
}

/// `PATCH /notes/{id}`. Empty fields are ignored.
pub async fn update<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Option<Json<NoteFields>>,
) -> Result<Reply, ApiError> {
  let fields = body.map(|Json(fields)| fields).unwrap_or_default();
  let outcome = store
    .transact(move |tx| note::update(tx, &id, fields))
    .await?;
  Ok(Reply(outcome))
}

/// `DELETE /notes/{id}`
pub async fn delete<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Reply, ApiError> {
  let outcome = store.transact(move |tx| note::delete(tx, &id)).await?;
  Ok(Reply(outcome))
}
