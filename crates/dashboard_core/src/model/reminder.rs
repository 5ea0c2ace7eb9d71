//! Reminder record and schedule ordering.
//!
//! # Invariants
//! - A reminder always has a title and a calendar date.
//! - Missing time is treated as `00:00` for ordering and upcoming checks.
//! - The reminders collection is kept sorted by [`Reminder::scheduled_at`].

use crate::model::collection::{CollectionKey, Entity};
use crate::model::tag::hhmm_or_empty;
use crate::model::RecordId;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, with = "hhmm_or_empty")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub completed: bool,
}

/// Caller input for a new reminder; date and time arrive as form strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderDraft {
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, or empty for an all-day reminder.
    pub time: String,
}

impl ReminderDraft {
    /// All-day draft; `date` is `YYYY-MM-DD`.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            time: String::new(),
        }
    }

    /// Sets the `HH:MM` time; an empty string keeps it all-day.
    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }
}

impl Reminder {
    /// Validates a draft and builds the stored record.
    ///
    /// Returns `None` for a blank title, a blank or unparsable date, or an
    /// unparsable time.
    pub fn create(id: RecordId, draft: &ReminderDraft) -> Option<Self> {
        let title = draft.title.trim();
        let date = draft.date.trim();
        if title.is_empty() || date.is_empty() {
            return None;
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
        let time = hhmm_or_empty::parse(&draft.time).ok()?;
        Some(Self {
            id,
            title: title.to_string(),
            date,
            time,
            completed: false,
        })
    }

    /// Date and time combined; an all-day reminder is scheduled at midnight.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Whether the reminder fires strictly after `now`.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.scheduled_at() > now
    }
}

impl Entity for Reminder {
    const COLLECTION: CollectionKey = CollectionKey::Reminders;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Stable ascending sort by scheduled instant.
pub fn sort_by_schedule(reminders: &mut [Reminder]) {
    reminders.sort_by_key(Reminder::scheduled_at);
}
