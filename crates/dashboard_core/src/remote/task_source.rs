//! Remote task rows and their mapping onto local task records.

use crate::model::task::{Quadrant, Task};
use crate::remote::identity::Session;
use crate::remote::RemoteResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row shape served by the remote task table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTaskRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_completed: Option<bool>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub quadrant: Option<String>,
}

/// Remote task collection readable with an authenticated session.
pub trait RemoteTaskSource {
    fn fetch_tasks(&self, session: &Session) -> RemoteResult<Vec<RemoteTaskRow>>;
}

/// Maps one remote row onto the local task schema.
///
/// `is_completed` becomes `completed` (missing = open), `created_at` becomes
/// `date`, and an absent or unrecognized quadrant stays unassigned so the
/// matrix default applies on read.
pub fn task_from_remote_row(row: RemoteTaskRow) -> Task {
    Task {
        id: row.id,
        title: row.title,
        completed: row.is_completed.unwrap_or(false),
        date: row.created_at,
        quadrant: row.quadrant.as_deref().and_then(Quadrant::parse),
    }
}
