//! Collection keys and the contract every stored record kind fulfils.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Slot holding the cached quote of the day (JSON object).
pub const DAILY_QUOTE_SLOT: &str = "dailyQuote";
/// Slot holding the calendar day the cached quote was fetched on.
pub const DAILY_QUOTE_DATE_SLOT: &str = "dailyQuoteDate";
/// Slot holding the theme preference (`light` or `dark`).
pub const THEME_SLOT: &str = "theme";

/// One logical collection per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKey {
    Tasks,
    Notes,
    Bookmarks,
    Reminders,
    JournalEntries,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 5] = [
        CollectionKey::Tasks,
        CollectionKey::Notes,
        CollectionKey::Bookmarks,
        CollectionKey::Reminders,
        CollectionKey::JournalEntries,
    ];

    /// Persistence slot name for this collection.
    pub fn slot_key(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Notes => "notes",
            Self::Bookmarks => "bookmarks",
            Self::Reminders => "reminders",
            Self::JournalEntries => "journalEntries",
        }
    }
}

impl Display for CollectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slot_key())
    }
}

/// A record kind stored as one JSON array in its own collection slot.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Collection owning every record of this kind.
    const COLLECTION: CollectionKey;

    /// Stable id, unique within the collection.
    fn id(&self) -> &str;
}
