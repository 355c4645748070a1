//! Success responses: write outcomes and format-selected reads.

use axum::{
  Json,
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use corkboard_core::Outcome;
use serde::{Deserialize, Serialize};
use serde_json::json;

// ─── Writes ──────────────────────────────────────────────────────────────────

/// A successful write. `Created` carries the new id in the body; updates and
/// deletes answer with an empty 204.
#[derive(Debug, Clone, Copy)]
pub struct Reply(pub Outcome);

impl IntoResponse for Reply {
  fn into_response(self) -> Response {
    let code = self.0.code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::OK);
    match self.0 {
      Outcome::Created(id) => (
        status,
        Json(json!({
          "code": code,
          "description": "created",
          "id": id,
        })),
      )
        .into_response(),
      Outcome::Updated(_) | Outcome::Deleted(_) => status.into_response(),
    }
  }
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Json,
  Html,
}

/// `?type=json` on read endpoints. Any other value, or none, renders HTML.
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
  #[serde(rename = "type", default)]
  pub kind: Option<String>,
}

impl ViewParams {
  pub fn format(&self) -> Format {
    match self.kind.as_deref() {
      Some("json") => Format::Json,
      _ => Format::Html,
    }
  }

  /// Serialise `value` as JSON when asked for, otherwise render it with
  /// `page`.
  pub fn render<T: Serialize>(
    &self,
    value: T,
    page: impl FnOnce(&T) -> String,
  ) -> Response {
    match self.format() {
      Format::Json => Json(value).into_response(),
      Format::Html => Html(page(&value)).into_response(),
    }
  }
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;

  fn params(kind: Option<&str>) -> ViewParams {
    ViewParams { kind: kind.map(str::to_owned) }
  }

  #[test]
  fn only_json_selects_json() {
    assert_eq!(params(Some("json")).format(), Format::Json);
    assert_eq!(params(Some("html")).format(), Format::Html);
    assert_eq!(params(Some("xml")).format(), Format::Html);
    assert_eq!(params(None).format(), Format::Html);
  }

  #[test]
  fn reply_status_follows_the_outcome() {
    let id = Uuid::new_v4();
    assert_eq!(Reply(Outcome::Created(id)).into_response().status(), StatusCode::CREATED);
    assert_eq!(
      Reply(Outcome::Updated(id)).into_response().status(),
      StatusCode::NO_CONTENT
    );
    assert_eq!(
      Reply(Outcome::Deleted(id)).into_response().status(),
      StatusCode::NO_CONTENT
    );
  }
}
