//! Notes: the leaves, placed in columns through [`ColumnsContent`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Outcome, Result,
  content::{self, ColumnsContent},
  entity::{self, Entity},
  record::{Field, Record, Row, Table},
  store::{Transaction, TransactionExt as _},
  view::Listing,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  pub id:         Uuid,
  pub name:       String,
  pub text:       String,
  pub created_at: DateTime<Utc>,
}

impl Record for Note {
  const TABLE: &'static Table = &Table {
    name:   "notes",
    fields: &[
      Field::uuid("id"),
      Field::text("name"),
      Field::text("text"),
      Field::timestamp("created_at"),
    ],
  };

  fn id(&self) -> Uuid { self.id }

  fn to_row(&self) -> Row {
    Row::new(vec![
      self.id.into(),
      self.name.clone().into(),
      self.text.clone().into(),
      self.created_at.into(),
    ])
  }

  fn from_row(row: Row) -> Result<Self> {
    let mut r = row.reader(Self::TABLE);
    Ok(Self {
      id:         r.uuid()?,
      name:       r.text()?,
      text:       r.text()?,
      created_at: r.timestamp()?,
    })
  }
}

impl Entity for Note {
  const KIND: &'static str = "note";

  fn name(&self) -> &str { &self.name }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteFields {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub text: Option<String>,
}

pub fn create(tx: &mut dyn Transaction, fields: NoteFields) -> Result<Outcome> {
  let name = entity::supplied(fields.name)
    .ok_or_else(|| Error::missing(vec!["name"]))?;
  entity::ensure_unique_name::<Note>(tx, &name, None)?;

  let note = Note {
    id: Uuid::new_v4(),
    name,
    text: fields.text.unwrap_or_default(),
    created_at: Utc::now(),
  };
  tx.insert_record(&note)?;
  tracing::info!(id = %note.id, name = %note.name, "note created");
  Ok(Outcome::Created(note.id))
}

/// Patch a note. Only non-empty fields are applied; `text` cannot be cleared
/// through an update.
pub fn update(
  tx: &mut dyn Transaction,
  id: &str,
  fields: NoteFields,
) -> Result<Outcome> {
  let mut note = entity::resolve::<Note>(tx, entity::require_id(id, "id")?)?;

  let name = entity::supplied(fields.name);
  let text = entity::supplied(fields.text);
  if name.is_none() && text.is_none() {
    return Err(Error::NotModified);
  }

  if let Some(name) = name {
    entity::ensure_unique_name::<Note>(tx, &name, Some(note.id))?;
    note.name = name;
  }
  if let Some(text) = text {
    note.text = text;
  }

  tx.update_record(&note)?;
  Ok(Outcome::Updated(note.id))
}

/// Delete a note after taking it out of every column that holds it.
pub fn delete(tx: &mut dyn Transaction, id: &str) -> Result<Outcome> {
  let note = entity::resolve::<Note>(tx, entity::require_id(id, "id")?)?;

  let unlinked = content::detach_child::<ColumnsContent>(tx, note.id)?;
  tx.remove_record::<Note>(note.id)?;

  tracing::info!(id = %note.id, unlinked, "note deleted");
  Ok(Outcome::Deleted(note.id))
}

pub fn get(tx: &mut dyn Transaction, id: &str) -> Result<Note> {
  entity::resolve::<Note>(tx, entity::require_id(id, "id")?)
}

pub fn list(tx: &mut dyn Transaction) -> Result<Listing<Note>> {
  Listing::build(tx)
}
