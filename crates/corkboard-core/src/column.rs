//! Columns: placed on boards through [`BoardsContent`], holding notes through
//! [`ColumnsContent`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Outcome, Result,
  content::{self, BoardsContent, ColumnsContent},
  entity::{self, Entity},
  record::{Field, Record, Row, Table},
  store::{Transaction, TransactionExt as _},
  view::{ColumnTree, Listing},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
  pub id:         Uuid,
  pub name:       String,
  pub created_at: DateTime<Utc>,
}

impl Record for Column {
  const TABLE: &'static Table = &Table {
    name:   "columns",
    fields: &[
      Field::uuid("id"),
      Field::text("name"),
      Field::timestamp("created_at"),
    ],
  };

  fn id(&self) -> Uuid { self.id }

  fn to_row(&self) -> Row {
    Row::new(vec![
      self.id.into(),
      self.name.clone().into(),
      self.created_at.into(),
    ])
  }

  fn from_row(row: Row) -> Result<Self> {
    let mut r = row.reader(Self::TABLE);
    Ok(Self {
      id:         r.uuid()?,
      name:       r.text()?,
      created_at: r.timestamp()?,
    })
  }
}

impl Entity for Column {
  const KIND: &'static str = "column";

  fn name(&self) -> &str { &self.name }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnFields {
  #[serde(default)]
  pub name: Option<String>,
}

pub fn create(tx: &mut dyn Transaction, fields: ColumnFields) -> Result<Outcome> {
  let name = entity::supplied(fields.name)
    .ok_or_else(|| Error::missing(vec!["name"]))?;
  entity::ensure_unique_name::<Column>(tx, &name, None)?;

  let column = Column { id: Uuid::new_v4(), name, created_at: Utc::now() };
  tx.insert_record(&column)?;
  tracing::info!(id = %column.id, name = %column.name, "column created");
  Ok(Outcome::Created(column.id))
}

pub fn update(
  tx: &mut dyn Transaction,
  id: &str,
  fields: ColumnFields,
) -> Result<Outcome> {
  let mut column = entity::resolve::<Column>(tx, entity::require_id(id, "id")?)?;

  let Some(name) = entity::supplied(fields.name) else {
    return Err(Error::NotModified);
  };
  entity::ensure_unique_name::<Column>(tx, &name, Some(column.id))?;
  column.name = name;

  tx.update_record(&column)?;
  Ok(Outcome::Updated(column.id))
}

/// Delete a column. It is first taken off every board it sits on, then every
/// note is taken out of it (the notes themselves are kept), then the column
/// row is removed.
pub fn delete(tx: &mut dyn Transaction, id: &str) -> Result<Outcome> {
  let column = entity::resolve::<Column>(tx, entity::require_id(id, "id")?)?;

  let off_boards = content::detach_child::<BoardsContent>(tx, column.id)?;
  let notes_out = content::detach_parent::<ColumnsContent>(tx, column.id)?;
  tx.remove_record::<Column>(column.id)?;

  tracing::info!(id = %column.id, off_boards, notes_out, "column deleted");
  Ok(Outcome::Deleted(column.id))
}

/// The column with its notes.
pub fn get(tx: &mut dyn Transaction, id: &str) -> Result<ColumnTree> {
  let column = entity::resolve::<Column>(tx, entity::require_id(id, "id")?)?;
  ColumnTree::build(tx, column)
}

pub fn list(tx: &mut dyn Transaction) -> Result<Listing<Column>> {
  Listing::build(tx)
}
