//! [`SqliteStore`]: the SQLite implementation of [`Store`].

use std::path::Path;

use corkboard_core::{
  Error as CoreError, Result as CoreResult,
  record::{Row, Table, Value},
  store::{Store, Transaction},
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawRow, encode_uuid, encode_value},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Corkboard store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

impl Store for SqliteStore {
  async fn transact<T, F>(&self, work: F) -> CoreResult<T>
  where
    T: Send + 'static,
    F: FnOnce(&mut dyn Transaction) -> CoreResult<T> + Send + 'static,
  {
    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut handle = SqliteTransaction { tx: &tx };
        let outcome = work(&mut handle as &mut dyn Transaction);
        // Dropping `tx` without committing rolls it back.
        if outcome.is_ok() {
          tx.commit()?;
        } else {
          tracing::debug!("unit of work failed; rolling back");
        }
        Ok(outcome)
      })
      .await
      .map_err(Error::from)?;
    outcome
  }
}

// ─── Transaction ─────────────────────────────────────────────────────────────

/// Row access inside one open SQLite transaction.
struct SqliteTransaction<'a> {
  tx: &'a rusqlite::Transaction<'a>,
}

fn sql<T>(result: rusqlite::Result<T>) -> CoreResult<T> {
  result.map_err(|e| Error::Sqlite(e).into())
}

fn field_list(table: &Table) -> String {
  table
    .fields
    .iter()
    .map(|f| f.name)
    .collect::<Vec<_>>()
    .join(", ")
}

impl SqliteTransaction<'_> {
  fn query(
    &self,
    table: &'static Table,
    sql_text: &str,
    params: &[String],
  ) -> CoreResult<Vec<Row>> {
    let mut stmt = sql(self.tx.prepare_cached(sql_text))?;
    let raws = sql(
      stmt
        .query_map(rusqlite::params_from_iter(params), |row| {
          RawRow::read(table, row)
        })
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>()),
    )?;
    raws
      .into_iter()
      .map(|raw| raw.into_row(table).map_err(CoreError::from))
      .collect()
  }
}

impl Transaction for SqliteTransaction<'_> {
  fn insert(&mut self, table: &'static Table, row: Row) -> CoreResult<()> {
    row.check(table)?;
    let placeholders = (1..=table.fields.len())
      .map(|i| format!("?{i}"))
      .collect::<Vec<_>>()
      .join(", ");
    let sql_text = format!(
      "INSERT INTO {} ({}) VALUES ({placeholders})",
      table.name,
      field_list(table)
    );
    let params: Vec<String> = row.values().iter().map(encode_value).collect();
    sql(self.tx.execute(&sql_text, rusqlite::params_from_iter(&params)))?;
    Ok(())
  }

  fn fetch(&mut self, table: &'static Table, id: Uuid) -> CoreResult<Option<Row>> {
    let sql_text = format!(
      "SELECT {} FROM {} WHERE id = ?1",
      field_list(table),
      table.name
    );
    let raw = sql(
      self
        .tx
        .query_row(&sql_text, rusqlite::params![encode_uuid(id)], |row| {
          RawRow::read(table, row)
        })
        .optional(),
    )?;
    raw
      .map(|raw| raw.into_row(table).map_err(CoreError::from))
      .transpose()
  }

  fn filter(
    &mut self,
    table: &'static Table,
    field: &'static str,
    value: &Value,
  ) -> CoreResult<Vec<Row>> {
    let field = table.require(field)?;
    if field.kind != value.kind() {
      return Err(CoreError::MalformedRow {
        table:  table.name,
        detail: format!("cannot compare {} with a {:?} value", field.name, value.kind()),
      });
    }
    let sql_text = format!(
      "SELECT {} FROM {} WHERE {} = ?1 ORDER BY rowid",
      field_list(table),
      table.name,
      field.name
    );
    self.query(table, &sql_text, &[encode_value(value)])
  }

  fn scan(&mut self, table: &'static Table) -> CoreResult<Vec<Row>> {
    let sql_text = format!(
      "SELECT {} FROM {} ORDER BY rowid",
      field_list(table),
      table.name
    );
    self.query(table, &sql_text, &[])
  }

  fn update(&mut self, table: &'static Table, row: Row) -> CoreResult<()> {
    row.check(table)?;
    let id = row
      .id()
      .ok_or_else(|| CoreError::MalformedRow {
        table:  table.name,
        detail: "row has no id".to_owned(),
      })?;
    let assignments = table
      .fields
      .iter()
      .enumerate()
      .skip(1)
      .map(|(i, f)| format!("{} = ?{}", f.name, i + 1))
      .collect::<Vec<_>>()
      .join(", ");
    let sql_text = format!("UPDATE {} SET {assignments} WHERE id = ?1", table.name);
    let params: Vec<String> = row.values().iter().map(encode_value).collect();
    let changed = sql(self.tx.execute(&sql_text, rusqlite::params_from_iter(&params)))?;
    if changed == 0 {
      return Err(CoreError::not_found(table.name, id.to_string()));
    }
    Ok(())
  }

  fn remove(&mut self, table: &'static Table, id: Uuid) -> CoreResult<bool> {
    let sql_text = format!("DELETE FROM {} WHERE id = ?1", table.name);
    let removed = sql(self.tx.execute(&sql_text, rusqlite::params![encode_uuid(id)]))?;
    Ok(removed > 0)
  }
}
