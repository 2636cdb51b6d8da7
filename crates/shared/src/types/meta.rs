//! Identity and creation time shared by every persisted entity.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Identity plus creation timestamp, embedded in entities by composition.
///
/// Timestamps are wall-clock local time without an offset, matching how a
/// single-user ledger displays and filters its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta<Id> {
    /// Entity identifier.
    pub id: Id,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

impl<Id: Default> EntityMeta<Id> {
    /// Fresh metadata: a new ID stamped with the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Fresh ID with an explicit creation time.
    #[must_use]
    pub fn at(created_at: NaiveDateTime) -> Self {
        Self {
            id: Id::default(),
            created_at,
        }
    }
}

impl<Id> EntityMeta<Id> {
    /// Metadata for an existing ID.
    #[must_use]
    pub const fn with_id(id: Id, created_at: NaiveDateTime) -> Self {
        Self { id, created_at }
    }
}
