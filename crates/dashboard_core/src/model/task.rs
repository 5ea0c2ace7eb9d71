//! Task record and Eisenhower quadrant tag.
//!
//! # Invariants
//! - `quadrant` stays `None` in storage until a caller assigns one; the
//!   important-urgent default is applied only by the matrix read path.
//! - Unknown stored quadrant spellings read back as `None`.

use crate::model::collection::{CollectionKey, Entity};
use crate::model::tag::{self, Tag};
use crate::model::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Eisenhower-matrix classification (importance x urgency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    ImportantUrgent,
    ImportantNotUrgent,
    NotImportantUrgent,
    NotImportantNotUrgent,
}

impl Quadrant {
    /// Board order: top-left, top-right, bottom-left, bottom-right.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::ImportantUrgent,
        Quadrant::ImportantNotUrgent,
        Quadrant::NotImportantUrgent,
        Quadrant::NotImportantNotUrgent,
    ];

    /// Quadrant presented for tasks that were never classified.
    pub const DEFAULT: Quadrant = Quadrant::ImportantUrgent;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ImportantUrgent => "important-urgent",
            Self::ImportantNotUrgent => "important-not-urgent",
            Self::NotImportantUrgent => "not-important-urgent",
            Self::NotImportantNotUrgent => "not-important-not-urgent",
        }
    }

    /// Parses the on-disk spelling; returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|quadrant| quadrant.as_str() == value)
    }

    /// Board heading for this quadrant.
    pub fn label(self) -> &'static str {
        match self {
            Self::ImportantUrgent => "Important & Urgent",
            Self::ImportantNotUrgent => "Important & Not Urgent",
            Self::NotImportantUrgent => "Not Important & Urgent",
            Self::NotImportantNotUrgent => "Not Important & Not Urgent",
        }
    }

    /// Recommended action for tasks in this quadrant.
    pub fn action(self) -> &'static str {
        match self {
            Self::ImportantUrgent => "DO FIRST",
            Self::ImportantNotUrgent => "SCHEDULE",
            Self::NotImportantUrgent => "DELEGATE",
            Self::NotImportantNotUrgent => "ELIMINATE",
        }
    }
}

impl Tag for Quadrant {
    fn as_tag(self) -> &'static str {
        self.as_str()
    }

    fn from_tag(value: &str) -> Option<Self> {
        Self::parse(value)
    }
}

/// Actionable to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub completed: bool,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "tag::omitted"
    )]
    pub quadrant: Option<Quadrant>,
}

impl Task {
    /// Builds a new open task, or `None` when the title is blank.
    pub fn create(
        id: RecordId,
        title: &str,
        created_at: DateTime<Utc>,
        quadrant: Option<Quadrant>,
    ) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            id,
            title: title.to_string(),
            completed: false,
            date: created_at,
            quadrant,
        })
    }

    /// Quadrant as presented by the matrix: stored value or the default.
    pub fn effective_quadrant(&self) -> Quadrant {
        self.quadrant.unwrap_or(Quadrant::DEFAULT)
    }
}

impl Entity for Task {
    const COLLECTION: CollectionKey = CollectionKey::Tasks;

    fn id(&self) -> &str {
        &self.id
    }
}
