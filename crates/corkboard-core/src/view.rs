//! Read models assembled from the entity and join tables. None of these are
//! stored; they are computed on every read.

use serde::Serialize;

use crate::{
  Result,
  board::Board,
  column::Column,
  content::{self, BoardsContent, ColumnsContent, Relation as _},
  note::Note,
  record::Record,
  store::{Transaction, TransactionExt as _},
};

/// One entity collection plus a flat copy of both join tables.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<E> {
  pub items:           Vec<E>,
  pub boards_content:  Vec<BoardsContent>,
  pub columns_content: Vec<ColumnsContent>,
}

impl<E: Record> Listing<E> {
  pub(crate) fn build(tx: &mut dyn Transaction) -> Result<Self> {
    Ok(Self {
      items:           tx.all::<E>()?,
      boards_content:  tx.all::<BoardsContent>()?,
      columns_content: tx.all::<ColumnsContent>()?,
    })
  }
}

/// Every table at once.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
  pub boards:          Vec<Board>,
  pub columns:         Vec<Column>,
  pub notes:           Vec<Note>,
  pub boards_content:  Vec<BoardsContent>,
  pub columns_content: Vec<ColumnsContent>,
}

pub fn snapshot(tx: &mut dyn Transaction) -> Result<Snapshot> {
  Ok(Snapshot {
    boards:          tx.all::<Board>()?,
    columns:         tx.all::<Column>()?,
    notes:           tx.all::<Note>()?,
    boards_content:  tx.all::<BoardsContent>()?,
    columns_content: tx.all::<ColumnsContent>()?,
  })
}

/// A column with the notes placed in it, in placement order.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnTree {
  #[serde(flatten)]
  pub column: Column,
  pub notes:  Vec<Note>,
}

impl ColumnTree {
  pub(crate) fn build(tx: &mut dyn Transaction, column: Column) -> Result<Self> {
    let mut notes = Vec::new();
    for row in content::children_of::<ColumnsContent>(tx, column.id)? {
      if let Some(note) = tx.get::<Note>(row.child())? {
        notes.push(note);
      }
    }
    Ok(Self { column, notes })
  }
}

/// A board with its columns, each with its notes.
#[derive(Debug, Clone, Serialize)]
pub struct BoardTree {
  #[serde(flatten)]
  pub board:   Board,
  pub columns: Vec<ColumnTree>,
}

impl BoardTree {
  pub(crate) fn build(tx: &mut dyn Transaction, board: Board) -> Result<Self> {
    let mut columns = Vec::new();
    for row in content::children_of::<BoardsContent>(tx, board.id)? {
      if let Some(column) = tx.get::<Column>(row.child())? {
        columns.push(ColumnTree::build(tx, column)?);
      }
    }
    Ok(Self { board, columns })
  }
}
