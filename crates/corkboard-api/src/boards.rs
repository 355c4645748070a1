//! Handlers for `/boards` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/boards` | Every board plus both join tables; HTML unless `?type=json` |
//! | `POST`   | `/boards` | Body: `{"name":"..."}` |
//! | `GET`    | `/boards/{id}` | The board with its columns and their notes |
//! | `PATCH`  | `/boards/{id}` | Optional body: `{"name":"..."}`; 304 if nothing to change |
//! | `DELETE` | `/boards/{id}` | Unlinks its columns, keeps them |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  response::Response,
};
use corkboard_core::{
  board::{self, BoardFields},
  store::Store,
};

use crate::{
  error::ApiError,
  html,
  respond::{Reply, ViewParams},
};

/// `GET /boards[?type=json]`
pub async fn list<S: Store>(
  State(store): State<Arc<S>>,
  Query(view): Query<ViewParams>,
) -> Result<Response, ApiError> {
  let listing = store.transact(board::list).await?;
  Ok(view.render(listing, |l| html::listing("Boards", l)))
}

/// `POST /boards`
pub async fn create<S: Store>(
  State(store): State<Arc<S>>,
  Json(fields): Json<BoardFields>,
) -> Result<Reply, ApiError> {
  let outcome = store
    .transact(move |tx| board::create(tx, fields))
    .await?;
  Ok(Reply(outcome))
}

/// `GET /boards/{id}[?type=json]`
pub async fn get_one<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(view): Query<ViewParams>,
) -> Result<Response, ApiError> {
  let tree = store.transact(move |tx| board::get(tx, &id)).await?;
  Ok(view.render(tree, html::board))
}

/// `PATCH /boards/{id}`
pub async fn update<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Option<Json<BoardFields>>,
) -> Result<Reply, ApiError> {
  let fields = body.map(|Json(fields)| fields).unwrap_or_default();
  let outcome = store
    .transact(move |tx| board::update(tx, &id, fields))
    .await?;
  Ok(Reply(outcome))
}

/// `DELETE /boards/{id}`
pub async fn delete<S: Store>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Reply, ApiError> {
  let outcome = store.transact(move |tx| board::delete(tx, &id)).await?;
  Ok(Reply(outcome))
}
