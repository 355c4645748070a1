//! Behaviour shared by the three entity kinds (board, column, note).

use uuid::Uuid;

use crate::{
  Error, Result,
  record::Record,
  store::{Transaction, TransactionExt as _},
};

/// A named, independently stored entity.
pub trait Entity: Record {
  /// Lower-case kind label used in error messages and validation reports.
  const KIND: &'static str;

  fn name(&self) -> &str;
}

/// Keep a supplied field only if it is non-empty. Absent and empty fields
/// are treated alike: neither sets nor clears anything.
pub(crate) fn supplied(field: Option<String>) -> Option<String> {
  field.filter(|s| !s.is_empty())
}

/// Return the raw id, or a validation error naming `label` if it is empty.
pub(crate) fn require_id<'a>(raw: &'a str, label: &'static str) -> Result<&'a str> {
  if raw.is_empty() {
    Err(Error::missing(vec![label]))
  } else {
    Ok(raw)
  }
}

/// Parse `raw` as an id of `E`. A malformed id cannot resolve to any row and
/// is reported as not found.
pub(crate) fn parse<E: Entity>(raw: &str) -> Result<Uuid> {
  Uuid::parse_str(raw).map_err(|_| Error::not_found(E::KIND, raw))
}

/// Fetch the `E` with primary key `id`, or fail with [`Error::NotFound`].
pub(crate) fn require<E: Entity>(tx: &mut dyn Transaction, id: Uuid) -> Result<E> {
  tx.get::<E>(id)?
    .ok_or_else(|| Error::not_found(E::KIND, id.to_string()))
}

/// Parse then fetch.
pub(crate) fn resolve<E: Entity>(tx: &mut dyn Transaction, raw: &str) -> Result<E> {
  let id = parse::<E>(raw)?;
  require::<E>(tx, id)
}

/// Fail with [`Error::Conflict`] if an `E` other than `except` is already
/// called `name`.
pub(crate) fn ensure_unique_name<E: Entity>(
  tx: &mut dyn Transaction,
  name: &str,
  except: Option<Uuid>,
) -> Result<()> {
  let taken = tx
    .find::<E>("name", name.to_owned())?
    .into_iter()
    .any(|e| Some(e.id()) != except);
  if taken {
    return Err(Error::Conflict(format!(
      "a {} named {name:?} already exists",
      E::KIND
    )));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn supplied_drops_empty_strings() {
    assert_eq!(supplied(None), None);
    assert_eq!(supplied(Some(String::new())), None);
    assert_eq!(supplied(Some("x".into())), Some("x".into()));
  }

  #[test]
  fn require_id_reports_the_label() {
    let err = require_id("", "id").unwrap_err();
    assert!(matches!(err, Error::Validation { ref missing } if missing == &["id"]));
    assert_eq!(require_id("abc", "id").unwrap(), "abc");
  }
}
