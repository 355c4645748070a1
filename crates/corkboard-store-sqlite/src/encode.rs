//! Encoding and decoding helpers between [`Value`]s and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use corkboard_core::record::{FieldKind, Row, Table, Value};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Values ──────────────────────────────────────────────────────────────────

pub fn encode_value(value: &Value) -> String {
  match value {
    Value::Uuid(id) => encode_uuid(*id),
    Value::Text(s) => s.clone(),
    Value::Timestamp(dt) => encode_dt(*dt),
  }
}

pub fn decode_value(kind: FieldKind, raw: String) -> Result<Value> {
  Ok(match kind {
    FieldKind::Uuid => Value::Uuid(decode_uuid(&raw)?),
    FieldKind::Text => Value::Text(raw),
    FieldKind::Timestamp => Value::Timestamp(decode_dt(&raw)?),
  })
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a row, one per field of its table.
pub struct RawRow(pub Vec<String>);

impl RawRow {
  /// Read every field of `table` from a result row.
  pub fn read(table: &Table, row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    (0..table.fields.len())
      .map(|i| row.get::<_, String>(i))
      .collect::<rusqlite::Result<Vec<_>>>()
      .map(Self)
  }

  pub fn into_row(self, table: &Table) -> Result<Row> {
    table
      .fields
      .iter()
      .zip(self.0)
      .map(|(field, raw)| decode_value(field.kind, raw))
      .collect::<Result<Vec<_>>>()
      .map(Row::new)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn timestamps_survive_encoding() {
    let now = Utc::now();
    let back = decode_value(FieldKind::Timestamp, encode_dt(now)).unwrap();
    assert_eq!(back, Value::Timestamp(now));
  }

  #[test]
  fn bad_uuid_is_an_error() {
    assert!(decode_value(FieldKind::Uuid, "nope".into()).is_err());
  }
}
