//! Journal use-case service.

use crate::model::journal::{JournalDraft, JournalEntry};
use crate::model::new_record_id;
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use log::debug;

pub struct JournalService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> JournalService<R> {
    /// Creates a service over the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Creates an entry at the front of the collection.
    ///
    /// A missing date defaults to the store clock's current day and a blank
    /// title to the dated default title.
    pub fn create_entry(&self, draft: &JournalDraft) -> RepoResult<JournalEntry> {
        let entry = JournalEntry::create(new_record_id(), draft, self.store.today());
        self.store.insert_front(entry.clone())?;
        debug!("event=journal_create module=service status=ok id={}", entry.id);
        Ok(entry)
    }

    /// Applies an edit; returns `Ok(None)` when `id` is unknown.
    pub fn update_entry(&self, id: &str, draft: &JournalDraft) -> RepoResult<Option<JournalEntry>> {
        self.store
            .modify::<JournalEntry>(id, |entry| entry.apply(draft))
    }

    /// Entries in stored order, newest first.
    pub fn list_entries(&self) -> Vec<JournalEntry> {
        self.store.list()
    }

    /// Returns whether an entry was removed.
    pub fn delete_entry(&self, id: &str) -> RepoResult<bool> {
        self.store.remove::<JournalEntry>(id)
    }
}
