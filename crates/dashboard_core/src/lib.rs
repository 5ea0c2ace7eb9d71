//! Core domain logic for the personal dashboard.
//! This crate is the single source of truth for the local entity store,
//! quadrant classification and cross-entity search.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod remote;
pub mod repo;
pub mod search;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{bootstrap, BootstrapError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::bookmark::{Bookmark, BookmarkDraft};
pub use model::collection::{CollectionKey, Entity};
pub use model::journal::{JournalDraft, JournalEntry, Mood};
pub use model::note::Note;
pub use model::preference::{Quote, Theme};
pub use model::reminder::{Reminder, ReminderDraft};
pub use model::task::{Quadrant, Task};
pub use model::{new_record_id, RecordId};
pub use remote::identity::{Anonymous, Credentials, IdentityProvider, Session, SignUpOutcome};
pub use remote::notice::Notice;
pub use remote::quote_source::QuoteSource;
pub use remote::task_source::{task_from_remote_row, RemoteTaskRow, RemoteTaskSource};
pub use remote::{RemoteError, RemoteResult};
pub use repo::entity_store::{EntityStore, SlotState};
pub use repo::slot_repo::{
    MemorySlotRepository, RepoError, RepoResult, SlotRepository, SqliteSlotRepository,
};
pub use search::cross_entity::{
    search_all, SearchCategory, SearchCorpus, SearchPreview, SearchResults, Searchable,
};
pub use service::bookmark_service::BookmarkService;
pub use service::dashboard_service::{DashboardService, DashboardSummary};
pub use service::journal_service::JournalService;
pub use service::matrix_service::{
    normalize_task, normalize_tasks, BoardLoad, BoardSource, MatrixService, MatrixTask,
};
pub use service::note_service::NoteService;
pub use service::preference_service::PreferenceService;
pub use service::quote_service::{DailyQuote, QuoteOrigin, QuoteService};
pub use service::reminder_service::ReminderService;
pub use service::task_service::TaskService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
