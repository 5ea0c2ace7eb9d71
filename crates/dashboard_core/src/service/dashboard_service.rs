//! Dashboard overview derived from all collections.

use crate::model::bookmark::Bookmark;
use crate::model::journal::JournalEntry;
use crate::model::note::Note;
use crate::model::reminder::Reminder;
use crate::model::task::Task;
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::SlotRepository;

const RECENT_TASKS: usize = 5;
const RECENT_JOURNALS: usize = 3;

/// Counts and short previews for the overview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub upcoming_reminders: usize,
    pub notes: usize,
    pub bookmarks: usize,
    pub journal_entries: usize,
    /// First tasks in collection order.
    pub recent_tasks: Vec<Task>,
    /// First journal entries in collection order.
    pub recent_journals: Vec<JournalEntry>,
}

impl DashboardSummary {
    /// Tasks still open.
    pub fn remaining_tasks(&self) -> usize {
        self.total_tasks - self.completed_tasks
    }

    /// True only when at least one task exists and all are completed.
    pub fn all_tasks_completed(&self) -> bool {
        self.total_tasks > 0 && self.completed_tasks == self.total_tasks
    }

    /// Tasks beyond the preview.
    pub fn more_tasks(&self) -> usize {
        self.total_tasks.saturating_sub(self.recent_tasks.len())
    }

    /// Journal entries beyond the preview.
    pub fn more_journals(&self) -> usize {
        self.journal_entries
            .saturating_sub(self.recent_journals.len())
    }
}

pub struct DashboardService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> DashboardService<R> {
    /// Creates a service over the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Reads every collection once and derives the overview.
    ///
    /// Reminders count as upcoming when open and scheduled after the local
    /// wall-clock time.
    pub fn summary(&self) -> DashboardSummary {
        let now = self.store.now_local();
        let tasks = self.store.list::<Task>();
        let reminders = self.store.list::<Reminder>();
        let journals = self.store.list::<JournalEntry>();

        DashboardSummary {
            total_tasks: tasks.len(),
            completed_tasks: tasks.iter().filter(|task| task.completed).count(),
            upcoming_reminders: reminders
                .iter()
                .filter(|reminder| !reminder.completed && reminder.is_upcoming(now))
                .count(),
            notes: self.store.list::<Note>().len(),
            bookmarks: self.store.list::<Bookmark>().len(),
            journal_entries: journals.len(),
            recent_tasks: tasks.into_iter().take(RECENT_TASKS).collect(),
            recent_journals: journals.into_iter().take(RECENT_JOURNALS).collect(),
        }
    }
}
