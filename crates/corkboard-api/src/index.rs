//! `GET /`: every table at once.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  response::Response,
};
use corkboard_core::{store::Store, view};

use crate::{error::ApiError, html, respond::ViewParams};

/// `GET /[?type=json]`
pub async fn handler<S: Store>(
  State(store): State<Arc<S>>,
  Query(params): Query<ViewParams>,
) -> Result<Response, ApiError> {
  let snapshot = store.transact(view::snapshot).await?;
  Ok(params.render(snapshot, html::index))
}
