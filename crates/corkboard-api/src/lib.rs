//! JSON (and minimal HTML) HTTP API for Corkboard.
//!
//! Exposes an axum [`Router`] backed by any [`corkboard_core::store::Store`].
//! Every request runs as a single unit of work: it either commits in full or
//! leaves the store untouched.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = Router::new().merge(corkboard_api::api_router(store.clone()));
//! ```

pub mod boards;
pub mod columns;
pub mod content;
pub mod error;
pub mod html;
pub mod index;
pub mod notes;
pub mod respond;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use corkboard_core::store::Store;

pub use error::ApiError;
pub use respond::{Format, Reply, ViewParams};

/// Build a fully-materialised API router for `store`.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: Store + 'static,
{
  Router::new()
    .route("/", get(index::handler::<S>))
    // Boards
    .route("/boards", get(boards::list::<S>).post(boards::create::<S>))
    .route(
      "/boards/{id}",
      get(boards::get_one::<S>)
        .patch(boards::update::<S>)
        .delete(boards::delete::<S>),
    )
    // Columns
    .route("/columns", get(columns::list::<S>).post(columns::create::<S>))
    .route(
      "/columns/{id}",
      get(columns::get_one::<S>)
        .patch(columns::update::<S>)
        .delete(columns::delete::<S>),
    )
    // Notes
    .route("/notes", get(notes::list::<S>).post(notes::create::<S>))
    .route(
      "/notes/{id}",
      get(notes::get_one::<S>)
        .patch(notes::update::<S>)
        .delete(notes::delete::<S>),
    )
    // Placement
    .route(
      "/boards-content",
      post(content::place_column::<S>)
        .delete(content::remove_column::<S>),
    )
    .route(
      "/columns-content",
      post(content::place_note::<S>)
        .delete(content::remove_note::<S>),
    )
    .with_state(store)
}

#[cfg(test)]
mod tests;
