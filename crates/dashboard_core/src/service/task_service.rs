//! Task use-case service.
//!
//! # Invariants
//! - New tasks are prepended; existing order is otherwise preserved.
//! - A blank title rejects the add without touching storage.
//! - Toggle and delete on an unknown id are no-ops.

use crate::model::new_record_id;
use crate::model::task::{Quadrant, Task};
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use log::debug;

pub struct TaskService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> TaskService<R> {
    /// Creates a service using the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Underlying collection store.
    pub fn store(&self) -> &EntityStore<R> {
        &self.store
    }

    /// Adds an open task stamped with the current time.
    ///
    /// `quadrant` is stored only when given; unclassified tasks stay
    /// unclassified on disk.
    ///
    /// Returns `Ok(None)` when the title is blank.
    pub fn add_task(&self, title: &str, quadrant: Option<Quadrant>) -> RepoResult<Option<Task>> {
        let Some(task) = Task::create(new_record_id(), title, self.store.now(), quadrant) else {
            debug!("event=task_add module=service status=rejected reason=blank_title");
            return Ok(None);
        };
        self.store.insert_front(task.clone())?;
        debug!("event=task_add module=service status=ok id={}", task.id);
        Ok(Some(task))
    }

    /// Tasks in stored order, quadrants exactly as persisted.
    pub fn list_tasks(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Flips `completed` on one task.
    pub fn toggle_task(&self, id: &str) -> RepoResult<Option<Task>> {
        self.store
            .modify::<Task>(id, |task| task.completed = !task.completed)
    }

    /// Returns whether a task was removed.
    pub fn delete_task(&self, id: &str) -> RepoResult<bool> {
        self.store.remove::<Task>(id)
    }
}
