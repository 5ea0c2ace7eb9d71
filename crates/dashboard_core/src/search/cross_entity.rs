//! Substring search across all five collections.
//!
//! # Responsibility
//! - Filter each collection with its own matching rule.
//! - Shape one result set that serves both the capped composite view and the
//!   exhaustive per-category view.
//!
//! # Invariants
//! - Matching is case-insensitive substring containment; no ranking.
//! - Results keep collection order.
//! - A blank query is inactive: every result list is empty.

use crate::model::bookmark::Bookmark;
use crate::model::journal::JournalEntry;
use crate::model::note::Note;
use crate::model::reminder::Reminder;
use crate::model::task::Task;
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::SlotRepository;

/// Items per category in the composite preview.
pub const PREVIEW_LIMIT: usize = 3;

/// Per-kind matching rule. `needle` is already lowercased.
pub trait Searchable {
    fn matches(&self, needle: &str) -> bool;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for Task {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle)
    }
}

impl Searchable for Reminder {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle)
    }
}

impl Searchable for Note {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle) || contains_ci(&self.content, needle)
    }
}

impl Searchable for JournalEntry {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle) || contains_ci(&self.content, needle)
    }
}

impl Searchable for Bookmark {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle)
            || contains_ci(&self.url, needle)
            || self.tags.iter().any(|tag| contains_ci(tag, needle))
    }
}

/// Result tab selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    All,
    Tasks,
    Notes,
    Bookmarks,
    Reminders,
    Journal,
}

impl SearchCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tasks => "tasks",
            Self::Notes => "notes",
            Self::Bookmarks => "bookmarks",
            Self::Reminders => "reminders",
            Self::Journal => "journal",
        }
    }
}

/// Snapshot of every collection, loaded once per search session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCorpus {
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub bookmarks: Vec<Bookmark>,
    pub reminders: Vec<Reminder>,
    pub journals: Vec<JournalEntry>,
}

impl SearchCorpus {
    /// Loads all collections; unreadable ones contribute nothing.
    pub fn load<R: SlotRepository>(store: &EntityStore<R>) -> Self {
        Self {
            tasks: store.list(),
            notes: store.list(),
            bookmarks: store.list(),
            reminders: store.list(),
            journals: store.list(),
        }
    }

    pub fn search(&self, query: &str) -> SearchResults {
        if query.trim().is_empty() {
            return SearchResults {
                query: query.to_string(),
                ..SearchResults::default()
            };
        }

        let needle = query.to_lowercase();
        SearchResults {
            query: query.to_string(),
            tasks: filter(&self.tasks, &needle),
            notes: filter(&self.notes, &needle),
            bookmarks: filter(&self.bookmarks, &needle),
            reminders: filter(&self.reminders, &needle),
            journals: filter(&self.journals, &needle),
        }
    }
}

fn filter<T: Searchable + Clone>(items: &[T], needle: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches(needle))
        .cloned()
        .collect()
}

/// Full filtered lists per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub bookmarks: Vec<Bookmark>,
    pub reminders: Vec<Reminder>,
    pub journals: Vec<JournalEntry>,
}

/// Composite "all categories" view: at most [`PREVIEW_LIMIT`] per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPreview<'a> {
    pub tasks: &'a [Task],
    pub notes: &'a [Note],
    pub bookmarks: &'a [Bookmark],
    pub reminders: &'a [Reminder],
    pub journals: &'a [JournalEntry],
}

impl SearchResults {
    /// Sum of all per-kind result counts.
    pub fn total(&self) -> usize {
        self.tasks.len()
            + self.notes.len()
            + self.bookmarks.len()
            + self.reminders.len()
            + self.journals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn count(&self, category: SearchCategory) -> usize {
        match category {
            SearchCategory::All => self.total(),
            SearchCategory::Tasks => self.tasks.len(),
            SearchCategory::Notes => self.notes.len(),
            SearchCategory::Bookmarks => self.bookmarks.len(),
            SearchCategory::Reminders => self.reminders.len(),
            SearchCategory::Journal => self.journals.len(),
        }
    }

    /// Capped view over the same filtered lists.
    pub fn preview(&self) -> SearchPreview<'_> {
        SearchPreview {
            tasks: capped(&self.tasks),
            notes: capped(&self.notes),
            bookmarks: capped(&self.bookmarks),
            reminders: capped(&self.reminders),
            journals: capped(&self.journals),
        }
    }
}

fn capped<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(PREVIEW_LIMIT)]
}

/// Loads every collection from `store` and runs one search.
pub fn search_all<R: SlotRepository>(store: &EntityStore<R>, query: &str) -> SearchResults {
    SearchCorpus::load(store).search(query)
}

#[cfg(test)]
mod tests {
    use super::{capped, contains_ci};

    #[test]
    fn containment_ignores_case() {
        assert!(contains_ci("Go Docs", "go d"));
        assert!(!contains_ci("Go Docs", "python"));
    }

    #[test]
    fn preview_is_capped_at_three() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(capped(&items), &[1, 2, 3]);
        assert_eq!(capped(&items[..2]), &[1, 2]);
    }
}
