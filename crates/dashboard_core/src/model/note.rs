//! Free-form note record.
//!
//! # Invariants
//! - `updated_at >= created_at`.
//! - `updated_at` is refreshed on every edit; `id` and `created_at` never change.

use crate::model::collection::{CollectionKey, Entity};
use crate::model::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a new note. Empty title and content are allowed.
    pub fn create(
        id: RecordId,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces title and content and refreshes `updated_at`.
    ///
    /// A clock reading earlier than `created_at` is clamped to it.
    pub fn edit(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        self.title = title.into();
        self.content = content.into();
        self.updated_at = now.max(self.created_at);
    }
}

impl Entity for Note {
    const COLLECTION: CollectionKey = CollectionKey::Notes;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::Note;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn edit_never_moves_updated_at_before_created_at() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let mut note = Note::create("n1".to_string(), "", "", created);
        note.edit("title", "body", created - Duration::hours(1));
        assert_eq!(note.updated_at, created);
        assert_eq!(note.content, "body");
    }

    #[test]
    fn serializes_with_camel_case_timestamps() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let note = Note::create("n1".to_string(), "t", "c", created);
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
