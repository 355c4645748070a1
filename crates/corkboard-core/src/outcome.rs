//! The success side of every write operation.

use uuid::Uuid;

/// What a successful write did, and to which row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Created(Uuid),
  Updated(Uuid),
  Deleted(Uuid),
}

impl Outcome {
  pub fn id(&self) -> Uuid {
    match self {
      Self::Created(id) | Self::Updated(id) | Self::Deleted(id) => *id,
    }
  }

  /// The result code the transport layer reports for this outcome.
  pub fn code(&self) -> u16 {
    match self {
      Self::Created(_) => 201,
      Self::Updated(_) | Self::Deleted(_) => 204,
    }
  }
}
