//! SQLite backend for the Corkboard store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Each unit of work handed to
//! [`corkboard_core::store::Store::transact`] runs inside one SQL transaction.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
