//! Core types, store traits and operations for the Corkboard note store.
//!
//! Boards hold columns and columns hold notes, but neither child embeds its
//! parent: membership lives in two join relations ([`content::BoardsContent`]
//! and [`content::ColumnsContent`]), so a column or note may be shared by
//! several parents. Every operation in this crate runs against an abstract
//! [`store::Transaction`]; this crate is free of HTTP and SQL.

pub mod board;
pub mod column;
pub mod content;
pub mod entity;
pub mod error;
pub mod note;
pub mod outcome;
pub mod record;
pub mod store;
pub mod view;

pub use error::{Error, Result};
pub use outcome::Outcome;
