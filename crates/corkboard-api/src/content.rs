//! Handlers for the placement endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/boards-content` | Body: `{"board":"<id>","column":"<id>"}` |
//! | `DELETE` | `/boards-content` | Query: `?board=<id>&column=<id>` |
//! | `POST`   | `/columns-content` | Body: `{"column":"<id>","note":"<id>"}` |
//! | `DELETE` | `/columns-content` | Query: `?column=<id>&note=<id>` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use corkboard_core::{
  content::{self, BoardsContent, ColumnsContent},
  store::Store,
};
use serde::Deserialize;

use crate::{error::ApiError, respond::Reply};

// ─── Boards content ──────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BoardColumnPair {
  pub board:  Option<String>,
  pub column: Option<String>,
}

/// `POST /boards-content`
pub async fn place_column<S: Store>(
  State(store): State<Arc<S>>,
  Json(pair): Json<BoardColumnPair>,
) -> Result<Reply, ApiError> {
  let outcome = store
    .transact(move |tx| {
      content::link::<BoardsContent>(
        tx,
        pair.board.as_deref(),
        pair.column.as_deref(),
      )
    })
    .await?;
  Ok(Reply(outcome))
}

/// `DELETE /boards-content?board=<id>&column=<id>`
pub async fn remove_column<S: Store>(
  State(store): State<Arc<S>>,
  Query(pair): Query<BoardColumnPair>,
) -> Result<Reply, ApiError> {
  let outcome = store
    .transact(move |tx| {
      content::unlink::<BoardsContent>(
        tx,
        pair.board.as_deref(),
        pair.column.as_deref(),
      )
    })
    .await?;
  Ok(Reply(outcome))
}

// ─── Columns content ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ColumnNotePair {
  pub column: Option<String>,
  pub note:   Option<String>,
}

/// `POST /columns-content`
pub async fn place_note<S: Store>(
  State(store): State<Arc<S>>,
  Json(pair): Json<ColumnNotePair>,
) -> Result<Reply, ApiError> {
  let outcome = store
    .transact(move |tx| {
      content::link::<ColumnsContent>(
        tx,
        pair.column.as_deref(),
        pair.note.as_deref(),
      )
    })
    .await?;
  Ok(Reply(outcome))
}

/// `DELETE /columns-content?column=<id>&note=<id>`
pub async fn remove_note<S: Store>(
  State(store): State<Arc<S>>,
  Query(pair): Query<ColumnNotePair>,
) -> Result<Reply, ApiError> {
  let outcome = store
    .transact(move |tx| {
      content::unlink::<ColumnsContent>(
        tx,
        pair.column.as_deref(),
        pair.note.as_deref(),
      )
    })
    .await?;
  Ok(Reply(outcome))
}
