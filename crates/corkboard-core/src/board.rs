//! Boards: the roots of the hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Outcome, Result,
  content::{self, BoardsContent},
  entity::{self, Entity},
  record::{Field, Record, Row, Table},
  store::{Transaction, TransactionExt as _},
  view::{BoardTree, Listing},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
  pub id:         Uuid,
  pub name:       String,
  pub created_at: DateTime<Utc>,
}

impl Record for Board {
  const TABLE: &'static Table = &Table {
    name:   "boards",
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

impl Entity for Board {
  const KIND: &'static str = "board";

  fn name(&self) -> &str { &self.name }
}

/// Fields accepted by [`create`] and [`update`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardFields {
  #[serde(default)]
  pub name: Option<String>,
}

pub fn create(tx: &mut dyn Transaction, fields: BoardFields) -> Result<Outcome> {
  let name = entity::supplied(fields.name)
    .ok_or_else(|| Error::missing(vec!["name"]))?;
  entity::ensure_unique_name::<Board>(tx, &name, None)?;

  let board = Board { id: Uuid::new_v4(), name, created_at: Utc::now() };
  tx.insert_record(&board)?;
  tracing::info!(id = %board.id, name = %board.name, "board created");
  Ok(Outcome::Created(board.id))
}

pub fn update(
  tx: &mut dyn Transaction,
  id: &str,
  fields: BoardFields,
) -> Result<Outcome> {
  let mut board = entity::resolve::<Board>(tx, entity::require_id(id, "id")?)?;

  let Some(name) = entity::supplied(fields.name) else {
    return Err(Error::NotModified);
  };
  entity::ensure_unique_name::<Board>(tx, &name, Some(board.id))?;
  board.name = name;

  tx.update_record(&board)?;
  Ok(Outcome::Updated(board.id))
}

/// Delete a board after unlinking every column placed on it. The columns
/// themselves are kept: they may sit on other boards too.
pub fn delete(tx: &mut dyn Transaction, id: &str) -> Result<Outcome> {
  let board = entity::resolve::<Board>(tx, entity::require_id(id, "id")?)?;

  let unlinked = content::detach_parent::<BoardsContent>(tx, board.id)?;
  tx.remove_record::<Board>(board.id)?;

  tracing::info!(id = %board.id, unlinked, "board deleted");
  Ok(Outcome::Deleted(board.id))
}

/// The board with its columns and their notes.
pub fn get(tx: &mut dyn Transaction, id: &str) -> Result<BoardTree> {
  let board = entity::resolve::<Board>(tx, entity::require_id(id, "id")?)?;
  BoardTree::build(tx, board)
}

pub fn list(tx: &mut dyn Transaction) -> Result<Listing<Board>> {
  Listing::build(tx)
}
