//! The conditional-insert contract.
//!
//! All idempotency in the referral engine reduces to one store primitive:
//! "insert; on uniqueness conflict, re-read the winning row and report it".
//! No in-process lock is taken anywhere; two racing writers both get a
//! usable row back and exactly one of them observes `Created`.

use serde::{Deserialize, Serialize};

/// Result of a conditional insert against a unique key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertOutcome<T> {
    /// This call won the insert; the row is new.
    Created(T),
    /// Another writer (or an earlier call) already inserted under the same
    /// key; the existing row is returned. Benign, not an error.
    Existing(T),
}

impl<T> InsertOutcome<T> {
    /// Whether this call created the row.
    pub fn created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// The row, regardless of who inserted it.
    pub fn row(&self) -> &T {
        match self {
            Self::Created(row) | Self::Existing(row) => row,
        }
    }

    /// Consume the outcome, keeping the row.
    pub fn into_row(self) -> T {
        match self {
            Self::Created(row) | Self::Existing(row) => row,
        }
    }
}
