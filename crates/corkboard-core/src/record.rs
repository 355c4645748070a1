//! The row model shared by every table.
//!
//! A [`Table`] is a static descriptor (name plus typed fields, `id` first).
//! A [`Row`] holds one [`Value`] per field, in descriptor order. Domain types
//! convert to and from rows through the [`Record`] trait, which is all a
//! storage backend needs to know about them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Descriptors ─────────────────────────────────────────────────────────────

/// The storage type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
  Uuid,
  Text,
  Timestamp,
}

#[derive(Debug)]
pub struct Field {
  pub name: &'static str,
  pub kind: FieldKind,
}

impl Field {
  pub const fn uuid(name: &'static str) -> Self {
    Self { name, kind: FieldKind::Uuid }
  }

  pub const fn text(name: &'static str) -> Self {
    Self { name, kind: FieldKind::Text }
  }

  pub const fn timestamp(name: &'static str) -> Self {
    Self { name, kind: FieldKind::Timestamp }
  }
}

/// A table descriptor. The first field is always the `id` primary key.
#[derive(Debug)]
pub struct Table {
  pub name:   &'static str,
  pub fields: &'static [Field],
}

impl Table {
  pub fn field(&self, name: &str) -> Option<&Field> {
    self.fields.iter().find(|f| f.name == name)
  }

  /// Look up `name`, failing with [`Error::UnknownField`] when absent.
  pub fn require(&self, name: &'static str) -> Result<&Field> {
    self.field(name).ok_or(Error::UnknownField { table: self.name, field: name })
  }
}

// ─── Values ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
  Uuid(Uuid),
  Text(String),
  Timestamp(DateTime<Utc>),
}

impl Value {
  pub fn kind(&self) -> FieldKind {
    match self {
      Self::Uuid(_) => FieldKind::Uuid,
      Self::Text(_) => FieldKind::Text,
      Self::Timestamp(_) => FieldKind::Timestamp,
    }
  }
}

impl From<Uuid> for Value {
  fn from(id: Uuid) -> Self { Self::Uuid(id) }
}

impl From<String> for Value {
  fn from(s: String) -> Self { Self::Text(s) }
}

impl From<DateTime<Utc>> for Value {
  fn from(dt: DateTime<Utc>) -> Self { Self::Timestamp(dt) }
}

// ─── Rows ────────────────────────────────────────────────────────────────────

/// One stored row, values in the order of its table's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(Vec<Value>);

impl Row {
  pub fn new(values: Vec<Value>) -> Self { Self(values) }

  pub fn values(&self) -> &[Value] { &self.0 }

  pub fn into_values(self) -> Vec<Value> { self.0 }

  /// The primary key, which is always the first value.
  pub fn id(&self) -> Option<Uuid> {
    match self.0.first() {
      Some(Value::Uuid(id)) => Some(*id),
      _ => None,
    }
  }

  /// Check that the row has one value of the right kind per field of `table`.
  pub fn check(&self, table: &'static Table) -> Result<()> {
    if self.0.len() != table.fields.len() {
      return Err(Error::MalformedRow {
        table:  table.name,
        detail: format!(
          "expected {} values, got {}",
          table.fields.len(),
          self.0.len()
        ),
      });
    }
    for (field, value) in table.fields.iter().zip(&self.0) {
      if field.kind != value.kind() {
        return Err(Error::MalformedRow {
          table:  table.name,
          detail: format!("field {} holds a {:?} value", field.name, value.kind()),
        });
      }
    }
    Ok(())
  }

  /// Consume the row field by field; see [`RowReader`].
  pub fn reader(self, table: &'static Table) -> RowReader {
    RowReader { table, values: self.0.into_iter(), position: 0 }
  }
}

/// Sequential, typed access to the values of a [`Row`].
pub struct RowReader {
  table:    &'static Table,
  values:   std::vec::IntoIter<Value>,
  position: usize,
}

impl RowReader {
  fn field_name(&self) -> &'static str {
    self.table.fields.get(self.position).map_or("<extra>", |f| f.name)
  }

  fn next(&mut self) -> Result<Value> {
    let value = self.values.next().ok_or_else(|| Error::MalformedRow {
      table:  self.table.name,
      detail: format!("field {} is missing", self.field_name()),
    })?;
    self.position += 1;
    Ok(value)
  }

  fn mismatch(&self, expected: FieldKind, got: &Value) -> Error {
    let name = self
      .table
      .fields
      .get(self.position.saturating_sub(1))
      .map_or("<extra>", |f| f.name);
    Error::MalformedRow {
      table:  self.table.name,
      detail: format!("field {name}: expected {expected:?}, got {:?}", got.kind()),
    }
  }

  pub fn uuid(&mut self) -> Result<Uuid> {
    match self.next()? {
      Value::Uuid(id) => Ok(id),
      other => Err(self.mismatch(FieldKind::Uuid, &other)),
    }
  }

  pub fn text(&mut self) -> Result<String> {
    match self.next()? {
      Value::Text(s) => Ok(s),
      other => Err(self.mismatch(FieldKind::Text, &other)),
    }
  }

  pub fn timestamp(&mut self) -> Result<DateTime<Utc>> {
    match self.next()? {
      Value::Timestamp(dt) => Ok(dt),
      other => Err(self.mismatch(FieldKind::Timestamp, &other)),
    }
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A domain type stored as one row of [`Record::TABLE`].
pub trait Record: Sized {
  const TABLE: &'static Table;

  fn id(&self) -> Uuid;

  fn to_row(&self) -> Row;

  fn from_row(row: Row) -> Result<Self>;
}
