//! Reminder use-case service.
//!
//! # Invariants
//! - After every insertion the collection is sorted ascending by scheduled
//!   instant (missing time = midnight); ties keep the newest first.

use crate::model::new_record_id;
use crate::model::reminder::{sort_by_schedule, Reminder, ReminderDraft};
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use log::debug;

pub struct ReminderService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> ReminderService<R> {
    /// Creates a service over the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Validates and inserts a reminder, re-sorting the collection.
    ///
    /// Returns `Ok(None)` when the draft lacks a title or a valid date.
    pub fn add_reminder(&self, draft: &ReminderDraft) -> RepoResult<Option<Reminder>> {
        let Some(reminder) = Reminder::create(new_record_id(), draft) else {
            debug!("event=reminder_add module=service status=rejected reason=invalid_draft");
            return Ok(None);
        };
        let inserted = reminder.clone();
        self.store.update::<Reminder>(move |mut reminders| {
            reminders.insert(0, inserted);
            sort_by_schedule(&mut reminders);
            reminders
        })?;
        debug!("event=reminder_add module=service status=ok id={}", reminder.id);
        Ok(Some(reminder))
    }

    /// Reminders in schedule order.
    pub fn list_reminders(&self) -> Vec<Reminder> {
        self.store.list()
    }

    /// Incomplete reminders scheduled after the user's local wall-clock time.
    pub fn upcoming(&self) -> Vec<Reminder> {
        let now = self.store.now_local();
        self.list_reminders()
            .into_iter()
            .filter(|reminder| !reminder.completed && reminder.is_upcoming(now))
            .collect()
    }

    /// Flips `completed` on one reminder; unknown ids are no-ops.
    pub fn toggle_reminder(&self, id: &str) -> RepoResult<Option<Reminder>> {
        self.store
            .modify::<Reminder>(id, |reminder| reminder.completed = !reminder.completed)
    }

    /// Returns whether a reminder was removed.
    pub fn delete_reminder(&self, id: &str) -> RepoResult<bool> {
        self.store.remove::<Reminder>(id)
    }
}
