//! The abstract relational store.
//!
//! [`Transaction`] is the row-level seam implemented by storage backends
//! (e.g. `corkboard-store-sqlite`). It is object safe so that every operation
//! in this crate can take a plain `&mut dyn Transaction`. [`TransactionExt`]
//! layers typed [`Record`] access on top of it.
//!
//! [`Store`] hands out one transaction per unit of work: the work commits
//! when it returns `Ok` and rolls back on every other exit.

use std::future::Future;

use uuid::Uuid;

use crate::{
  Result,
  record::{Record, Row, Table, Value},
};

// ─── Transaction ─────────────────────────────────────────────────────────────

/// Row-level access to the store inside one open transaction.
///
/// Backends report a missing row through `Option`/`bool` return values, never
/// through an error.
pub trait Transaction {
  fn insert(&mut self, table: &'static Table, row: Row) -> Result<()>;

  /// Fetch the row whose primary key is `id`.
  fn fetch(&mut self, table: &'static Table, id: Uuid) -> Result<Option<Row>>;

  /// All rows whose `field` equals `value`, in insertion order.
  fn filter(
    &mut self,
    table: &'static Table,
    field: &'static str,
    value: &Value,
  ) -> Result<Vec<Row>>;

  /// Every row of `table`, in insertion order.
  fn scan(&mut self, table: &'static Table) -> Result<Vec<Row>>;

  /// Overwrite all non-key fields of the row with the same primary key.
  fn update(&mut self, table: &'static Table, row: Row) -> Result<()>;

  /// Delete the row with primary key `id`. Returns `false` if there was none.
  fn remove(&mut self, table: &'static Table, id: Uuid) -> Result<bool>;
}

// ─── Typed access ────────────────────────────────────────────────────────────

/// Typed helpers over [`Transaction`] for any [`Record`].
pub trait TransactionExt: Transaction {
  fn insert_record<R: Record>(&mut self, record: &R) -> Result<()> {
    self.insert(R::TABLE, record.to_row())
  }

  fn get<R: Record>(&mut self, id: Uuid) -> Result<Option<R>> {
    self.fetch(R::TABLE, id)?.map(R::from_row).transpose()
  }

  fn find<R: Record>(
    &mut self,
    field: &'static str,
    value: impl Into<Value>,
  ) -> Result<Vec<R>> {
    R::TABLE.require(field)?;
    self
      .filter(R::TABLE, field, &value.into())?
      .into_iter()
      .map(R::from_row)
      .collect()
  }

  fn all<R: Record>(&mut self) -> Result<Vec<R>> {
    self.scan(R::TABLE)?.into_iter().map(R::from_row).collect()
  }

  fn update_record<R: Record>(&mut self, record: &R) -> Result<()> {
    self.update(R::TABLE, record.to_row())
  }

  fn remove_record<R: Record>(&mut self, id: Uuid) -> Result<bool> {
    self.remove(R::TABLE, id)
  }
}

impl<T: Transaction + ?Sized> TransactionExt for T {}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A handle to the backing store, shared across requests.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait Store: Send + Sync {
  /// Run `work` inside a single transaction.
  ///
  /// The transaction is committed if and only if `work` returns `Ok`; any
  /// error (including rejections such as [`crate::Error::Conflict`]) rolls
  /// back everything `work` wrote.
  fn transact<T, F>(&self, work: F) -> impl Future<Output = Result<T>> + Send + '_
  where
    T: Send + 'static,
    F: FnOnce(&mut dyn Transaction) -> Result<T> + Send + 'static;
}
