//! Error types for `corkboard-core`.
//!
//! The first four variants are rejections: they are detected inside an
//! operation, roll back its unit of work and are reported to the caller as a
//! structured result. The remaining variants are failures of the store or of
//! the row mapping and abort the request.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more required fields were absent or empty.
  #[error("missing required field(s): {}", .missing.join(", "))]
  Validation { missing: Vec<&'static str> },

  /// A referenced id (or id pair, for join rows) does not resolve to a row.
  #[error("{kind} with id {asked} does not exist")]
  NotFound { kind: &'static str, asked: String },

  /// A uniqueness rule or a duplicate relationship was violated.
  #[error("{0}")]
  Conflict(String),

  /// An update supplied no effective field change.
  #[error("nothing to update")]
  NotModified,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("malformed {table} row: {detail}")]
  MalformedRow { table: &'static str, detail: String },

  #[error("table {table} has no field {field}")]
  UnknownField { table: &'static str, field: &'static str },
}

impl Error {
  pub fn missing(fields: Vec<&'static str>) -> Self {
    Self::Validation { missing: fields }
  }

  pub fn not_found(kind: &'static str, asked: impl Into<String>) -> Self {
    Self::NotFound { kind, asked: asked.into() }
  }

  /// Wrap any backend error as a fatal store failure.
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }

  /// `true` for rejections that are reported as a structured result rather
  /// than aborting the request.
  pub fn is_recoverable(&self) -> bool {
    matches!(
      self,
      Self::Validation { .. }
        | Self::NotFound { .. }
        | Self::Conflict(_)
        | Self::NotModified
    )
  }

  /// The result code the transport layer reports for this error.
  pub fn code(&self) -> u16 {
    match self {
      Self::Validation { .. } | Self::Conflict(_) => 400,
      Self::NotFound { .. } => 404,
      Self::NotModified => 304,
      Self::Store(_) | Self::MalformedRow { .. } | Self::UnknownField { .. } => {
        500
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_found_message_names_kind_and_id() {
    let err = Error::not_found("column", "abc");
    assert_eq!(err.to_string(), "column with id abc does not exist");
    assert_eq!(err.code(), 404);
    assert!(err.is_recoverable());
  }

  #[test]
  fn validation_lists_every_missing_field() {
    let err = Error::missing(vec!["board", "column"]);
    assert_eq!(err.to_string(), "missing required field(s): board, column");
    assert_eq!(err.code(), 400);
  }

  #[test]
  fn store_failures_are_fatal() {
    let io = std::io::Error::other("disk gone");
    let err = Error::store(io);
    assert!(!err.is_recoverable());
    assert_eq!(err.code(), 500);
  }
}
