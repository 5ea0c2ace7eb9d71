//! Note use-case service.
//!
//! # Invariants
//! - Notes have no required fields; create never rejects.
//! - Edits keep `id` and `created_at` and refresh `updated_at`.

use crate::model::new_record_id;
use crate::model::note::Note;
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use log::debug;

pub struct NoteService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> NoteService<R> {
    /// Creates a service over the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Creates a note at the front of the collection.
    pub fn create_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> RepoResult<Note> {
        let note = Note::create(new_record_id(), title, content, self.store.now());
        self.store.insert_front(note.clone())?;
        debug!("event=note_create module=service status=ok id={}", note.id);
        Ok(note)
    }

    /// Replaces title and content of an existing note.
    ///
    /// Returns `Ok(None)` when `id` is unknown.
    pub fn update_note(
        &self,
        id: &str,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> RepoResult<Option<Note>> {
        let now = self.store.now();
        let (title, content) = (title.into(), content.into());
        self.store
            .modify::<Note>(id, move |note| note.edit(title, content, now))
    }

    /// Looks up one note by id.
    pub fn get_note(&self, id: &str) -> Option<Note> {
        self.list_notes().into_iter().find(|note| note.id == id)
    }

    /// Notes in stored order, newest first.
    pub fn list_notes(&self) -> Vec<Note> {
        self.store.list()
    }

    /// Returns whether a note was removed.
    pub fn delete_note(&self, id: &str) -> RepoResult<bool> {
        self.store.remove::<Note>(id)
    }
}
