//! Journal entry record and mood tag.

use crate::model::collection::{CollectionKey, Entity};
use crate::model::tag::{self, Tag};
use crate::model::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const TITLE_PREFIX: &str = "Journal Entry \u{2014} ";
const TITLE_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Closed set of moods a journal entry can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Productive,
    Tired,
    Sad,
    Stressed,
    Excited,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Productive,
        Mood::Tired,
        Mood::Sad,
        Mood::Stressed,
        Mood::Excited,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Calm => "calm",
            Self::Productive => "productive",
            Self::Tired => "tired",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
            Self::Excited => "excited",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mood| mood.as_str() == value)
    }
}

impl Tag for Mood {
    fn as_tag(self) -> &'static str {
        self.as_str()
    }

    fn from_tag(value: &str) -> Option<Self> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    #[serde(default, with = "tag::or_empty")]
    pub mood: Option<Mood>,
    pub date: NaiveDate,
}

/// Caller input for creating or editing a journal entry.
///
/// Every field is optional: a blank title is replaced by the dated default
/// and a missing date by the current day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalDraft {
    pub title: Option<String>,
    pub content: String,
    pub mood: Option<Mood>,
    pub date: Option<NaiveDate>,
}

impl JournalEntry {
    /// Builds a new entry dated `draft.date` or `today`.
    pub fn create(id: RecordId, draft: &JournalDraft, today: NaiveDate) -> Self {
        let date = draft.date.unwrap_or(today);
        let title = draft
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map_or_else(|| default_title(date), str::to_string);
        Self {
            id,
            title,
            content: draft.content.clone(),
            mood: draft.mood,
            date,
        }
    }

    /// Applies an edit in place; the id never changes.
    pub fn apply(&mut self, draft: &JournalDraft) {
        if let Some(date) = draft.date {
            self.date = date;
        }
        self.title = draft
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map_or_else(|| default_title(self.date), str::to_string);
        self.content = draft.content.clone();
        self.mood = draft.mood;
    }
}

impl Entity for JournalEntry {
    const COLLECTION: CollectionKey = CollectionKey::JournalEntries;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Human-readable default title, e.g. `Journal Entry — Saturday, March 1, 2025`.
pub fn default_title(date: NaiveDate) -> String {
    format!("{TITLE_PREFIX}{}", date.format(TITLE_DATE_FORMAT))
}
