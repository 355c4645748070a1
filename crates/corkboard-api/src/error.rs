//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use corkboard_core::Error;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Rejections raised by core operations keep their structure on the wire.
/// Store failures are logged and reported with a generic message.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let code = self.0.code();
    let status =
      StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if !self.0.is_recoverable() {
      tracing::error!(error = %self.0, "store failure");
      let body = json!({
        "code": code,
        "description": "an internal error occurred",
      });
      return (status, Json(body)).into_response();
    }

    let mut body = json!({
      "code": code,
      "description": self.0.to_string(),
    });
    match &self.0 {
      Error::NotModified => return status.into_response(),
      Error::Validation { missing } => body["missing"] = json!(missing),
      Error::NotFound { asked, .. } => body["asked"] = json!(asked),
      _ => {}
    }
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use axum::body::to_bytes;

  use super::*;

  async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn validation_is_400_and_lists_fields() {
    let resp = ApiError(Error::missing(vec!["board", "column"])).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["missing"], json!(["board", "column"]));
  }

  #[tokio::test]
  async fn not_found_is_404_and_echoes_the_id() {
    let resp = ApiError(Error::not_found("note", "abc")).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["asked"], "abc");
    assert_eq!(body["description"], "note with id abc does not exist");
  }

  #[tokio::test]
  async fn conflict_is_400() {
    let resp = ApiError(Error::Conflict("taken".into())).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn not_modified_has_no_body() {
    let resp = ApiError(Error::NotModified).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
  }

  #[tokio::test]
  async fn store_failure_hides_details() {
    let io = std::io::Error::other("disk on fire");
    let resp = ApiError(Error::store(io)).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["description"], "an internal error occurred");
  }
}
