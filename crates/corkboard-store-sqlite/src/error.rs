//! Error type for `corkboard-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

/// Every backend failure reaches the core as a fatal store error.
impl From<Error> for corkboard_core::Error {
  fn from(e: Error) -> Self { corkboard_core::Error::store(e) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
