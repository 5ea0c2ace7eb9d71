//! Record schemas for the five dashboard collections.
//!
//! # Responsibility
//! - Define the persisted shape of tasks, notes, bookmarks, reminders and
//!   journal entries, plus the auxiliary quote/theme values.
//! - Own draft validation so nothing invalid reaches a collection.
//!
//! # Invariants
//! - Every record carries a stable string id assigned at creation time.
//! - Records never reference each other by id.
//! - Serialized field names match the on-disk JSON layout (`createdAt`,
//!   `journalEntries`, ...), so collections written by older builds load.

pub mod bookmark;
pub mod collection;
pub mod journal;
pub mod note;
pub mod preference;
pub mod reminder;
pub mod task;

mod tag;

use uuid::Uuid;

/// Identifier shared by every record kind.
///
/// Kept as a plain string: legacy collections use millisecond-clock ids and
/// remote rows carry their own ids.
pub type RecordId = String;

/// Generates a fresh, time-ordered record id.
pub fn new_record_id() -> RecordId {
    Uuid::now_v7().to_string()
}
