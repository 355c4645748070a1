//! Content relations: the join rows that place columns on boards and notes
//! in columns.
//!
//! Neither a column nor a note stores its parent. A [`BoardsContent`] row
//! says "this column belongs to this board" and a [`ColumnsContent`] row says
//! "this note belongs to this column". Both relations are many-to-many, with
//! at most one row per (parent, child) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Outcome, Result,
  board::Board,
  column::Column,
  entity::{self, Entity},
  note::Note,
  record::{Field, Record, Row, Table},
  store::{Transaction, TransactionExt as _},
};

// ─── Relation ────────────────────────────────────────────────────────────────

/// A join relation between a parent entity kind and a child entity kind.
pub trait Relation: Record {
  type Parent: Entity;
  type Child: Entity;

  /// Field holding the parent id.
  const PARENT_FIELD: &'static str;
  /// Field holding the child id.
  const CHILD_FIELD: &'static str;

  fn new(parent: Uuid, child: Uuid) -> Self;

  fn parent(&self) -> Uuid;

  fn child(&self) -> Uuid;
}

// ─── BoardsContent ───────────────────────────────────────────────────────────

/// A column placed on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardsContent {
  pub id:         Uuid,
  pub board:      Uuid,
  pub column:     Uuid,
  pub created_at: DateTime<Utc>,
}

impl Record for BoardsContent {
  const TABLE: &'static Table = &Table {
    name:   "boards_content",
    fields: &[
      Field::uuid("id"),
      Field::uuid("board_id"),
      Field::uuid("column_id"),
      Field::timestamp("created_at"),
    ],
  };

  fn id(&self) -> Uuid { self.id }

  fn to_row(&self) -> Row {
    Row::new(vec![
      self.id.into(),
      self.board.into(),
      self.column.into(),
      self.created_at.into(),
    ])
  }

  fn from_row(row: Row) -> Result<Self> {
    let mut r = row.reader(Self::TABLE);
    Ok(Self {
      id:         r.uuid()?,
      board:      r.uuid()?,
      column:     r.uuid()?,
      created_at: r.timestamp()?,
    })
  }
}

impl Relation for BoardsContent {
  type Parent = Board;
  type Child = Column;

  const PARENT_FIELD: &'static str = "board_id";
  const CHILD_FIELD: &'static str = "column_id";

  fn new(board: Uuid, column: Uuid) -> Self {
    Self { id: Uuid::new_v4(), board, column, created_at: Utc::now() }
  }

  fn parent(&self) -> Uuid { self.board }

  fn child(&self) -> Uuid { self.column }
}

// ─── ColumnsContent ──────────────────────────────────────────────────────────

/// A note placed in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnsContent {
  pub id:         Uuid,
  pub column:     Uuid,
  pub note:       Uuid,
  pub created_at: DateTime<Utc>,
}

impl Record for ColumnsContent {
  const TABLE: &'static Table = &Table {
    name:   "columns_content",
    fields: &[
      Field::uuid("id"),
      Field::uuid("column_id"),
      Field::uuid("note_id"),
      Field::timestamp("created_at"),
    ],
  };

  fn id(&self) -> Uuid { self.id }

  fn to_row(&self) -> Row {
    Row::new(vec![
      self.id.into(),
      self.column.into(),
      self.note.into(),
      self.created_at.into(),
    ])
  }

  fn from_row(row: Row) -> Result<Self> {
    let mut r = row.reader(Self::TABLE);
    Ok(Self {
      id:         r.uuid()?,
      column:     r.uuid()?,
      note:       r.uuid()?,
      created_at: r.timestamp()?,
    })
  }
}

impl Relation for ColumnsContent {
  type Parent = Column;
  type Child = Note;

  const PARENT_FIELD: &'static str = "column_id";
  const CHILD_FIELD: &'static str = "note_id";

  fn new(column: Uuid, note: Uuid) -> Self {
    Self { id: Uuid::new_v4(), column, note, created_at: Utc::now() }
  }

  fn parent(&self) -> Uuid { self.column }

  fn child(&self) -> Uuid { self.note }
}

// ─── Operations ──────────────────────────────────────────────────────────────

/// Create the join row for `(parent, child)`.
///
/// Both ids are required. The parent must exist, then the child must exist,
/// and the pair must not already be joined.
pub fn link<R: Relation>(
  tx: &mut dyn Transaction,
  parent: Option<&str>,
  child: Option<&str>,
) -> Result<Outcome> {
  let (parent, child) = resolve_pair::<R>(tx, parent, child)?;

  if find_pair::<R>(tx, parent, child)?.is_some() {
    return Err(Error::Conflict(format!(
      "{} {child} already belongs to {} {parent}",
      <R::Child as Entity>::KIND,
      <R::Parent as Entity>::KIND,
    )));
  }

  let row = R::new(parent, child);
  tx.insert_record(&row)?;
  tracing::info!(
    relation = R::TABLE.name,
    %parent,
    %child,
    "linked"
  );
  Ok(Outcome::Created(row.id()))
}

/// Remove the join row for `(parent, child)`.
///
/// Validation and existence checks are the same as for [`link`]. A pair that
/// is not joined is reported as [`Error::NotFound`].
pub fn unlink<R: Relation>(
  tx: &mut dyn Transaction,
  parent: Option<&str>,
  child: Option<&str>,
) -> Result<Outcome> {
  let (parent, child) = resolve_pair::<R>(tx, parent, child)?;
  remove_pair::<R>(tx, parent, child)
}

/// [`unlink`] for ids already known to be well formed.
pub fn unlink_ids<R: Relation>(
  tx: &mut dyn Transaction,
  parent: Uuid,
  child: Uuid,
) -> Result<Outcome> {
  entity::require::<R::Parent>(tx, parent)?;
  entity::require::<R::Child>(tx, child)?;
  remove_pair::<R>(tx, parent, child)
}

/// Every join row of `R` whose parent is `parent`.
pub fn children_of<R: Relation>(
  tx: &mut dyn Transaction,
  parent: Uuid,
) -> Result<Vec<R>> {
  tx.find::<R>(R::PARENT_FIELD, parent)
}

/// Every join row of `R` whose child is `child`.
pub fn parents_of<R: Relation>(
  tx: &mut dyn Transaction,
  child: Uuid,
) -> Result<Vec<R>> {
  tx.find::<R>(R::CHILD_FIELD, child)
}

/// Unlink every row of `R` that has `parent` on its parent side.
/// Returns the number of rows removed.
pub(crate) fn detach_parent<R: Relation>(
  tx: &mut dyn Transaction,
  parent: Uuid,
) -> Result<usize> {
  let rows = children_of::<R>(tx, parent)?;
  for row in &rows {
    tracing::debug!(relation = R::TABLE.name, parent = %row.parent(), child = %row.child(), "cascade unlink");
    unlink_ids::<R>(tx, row.parent(), row.child())?;
  }
  Ok(rows.len())
}

/// Unlink every row of `R` that has `child` on its child side.
/// Returns the number of rows removed.
pub(crate) fn detach_child<R: Relation>(
  tx: &mut dyn Transaction,
  child: Uuid,
) -> Result<usize> {
  let rows = parents_of::<R>(tx, child)?;
  for row in &rows {
    tracing::debug!(relation = R::TABLE.name, parent = %row.parent(), child = %row.child(), "cascade unlink");
    unlink_ids::<R>(tx, row.parent(), row.child())?;
  }
  Ok(rows.len())
}

fn resolve_pair<R: Relation>(
  tx: &mut dyn Transaction,
  parent: Option<&str>,
  child: Option<&str>,
) -> Result<(Uuid, Uuid)> {
  let parent = parent.filter(|s| !s.is_empty());
  let child = child.filter(|s| !s.is_empty());

  let (parent, child) = match (parent, child) {
    (Some(p), Some(c)) => (p, c),
    (p, c) => {
      let mut missing = Vec::new();
      if p.is_none() {
        missing.push(<R::Parent as Entity>::KIND);
      }
      if c.is_none() {
        missing.push(<R::Child as Entity>::KIND);
      }
      return Err(Error::missing(missing));
    }
  };

  let parent = entity::resolve::<R::Parent>(tx, parent)?.id();
  let child = entity::resolve::<R::Child>(tx, child)?.id();
  Ok((parent, child))
}

fn find_pair<R: Relation>(
  tx: &mut dyn Transaction,
  parent: Uuid,
  child: Uuid,
) -> Result<Option<R>> {
  Ok(
    children_of::<R>(tx, parent)?
      .into_iter()
      .find(|row| row.child() == child),
  )
}

fn remove_pair<R: Relation>(
  tx: &mut dyn Transaction,
  parent: Uuid,
  child: Uuid,
) -> Result<Outcome> {
  let row = find_pair::<R>(tx, parent, child)?.ok_or_else(|| {
    Error::not_found(R::TABLE.name, format!("({parent}, {child})"))
  })?;
  tx.remove_record::<R>(row.id())?;
  Ok(Outcome::Deleted(row.id()))
}
