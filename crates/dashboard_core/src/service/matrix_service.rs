//! Priority-matrix classification of tasks.
//!
//! # Responsibility
//! - Present every task with a quadrant, defaulting unclassified tasks to
//!   important-urgent at read time only.
//! - Re-tag tasks on explicit moves.
//! - Bootstrap the local task collection from the remote task source once,
//!   when no local collection exists and a session is active.
//!
//! # Invariants
//! - Reading the board never writes to storage, except for the one-time
//!   remote bootstrap.
//! - The remote bootstrap stores rows exactly as mapped; a missing remote
//!   quadrant is not materialized on disk.
//! - Collaborator failures yield an empty board and a notice, never an error.

use crate::model::collection::Entity;
use crate::model::task::{Quadrant, Task};
use crate::remote::identity::IdentityProvider;
use crate::remote::notice::Notice;
use crate::remote::task_source::{task_from_remote_row, RemoteTaskSource};
use crate::repo::entity_store::{EntityStore, SlotState};
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use log::{info, warn};

/// A task as presented on the board: the stored record plus its effective
/// quadrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixTask {
    pub task: Task,
    pub quadrant: Quadrant,
}

/// Where the tasks of a board load came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSource {
    /// The local collection existed.
    Local,
    /// The local collection was absent and was seeded from the remote source.
    Remote,
    /// Nothing local and no remote data available.
    Empty,
}

/// Result of loading the matrix view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLoad {
    pub tasks: Vec<MatrixTask>,
    pub source: BoardSource,
    pub notice: Option<Notice>,
}

impl BoardLoad {
    /// Tasks in one quadrant, in collection order.
    pub fn quadrant(&self, quadrant: Quadrant) -> Vec<&MatrixTask> {
        self.tasks
            .iter()
            .filter(|item| item.quadrant == quadrant)
            .collect()
    }

    /// All four quadrants in board order.
    pub fn grouped(&self) -> Vec<(Quadrant, Vec<&MatrixTask>)> {
        Quadrant::ALL
            .into_iter()
            .map(|quadrant| (quadrant, self.quadrant(quadrant)))
            .collect()
    }
}

/// Read-boundary normalization: stored quadrant or the default.
pub fn normalize_task(task: Task) -> MatrixTask {
    let quadrant = task.effective_quadrant();
    MatrixTask { task, quadrant }
}

pub fn normalize_tasks(tasks: Vec<Task>) -> Vec<MatrixTask> {
    tasks.into_iter().map(normalize_task).collect()
}

pub struct MatrixService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> MatrixService<R> {
    /// Creates a service over the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Normalized view of the local collection; never consults collaborators.
    pub fn board(&self) -> Vec<MatrixTask> {
        normalize_tasks(self.store.list())
    }

    /// Loads the board, seeding from the remote source when allowed.
    ///
    /// The remote source is consulted only when the local collection is
    /// absent (or malformed) and `identity` reports an active session.
    ///
    /// # Errors
    /// - Substrate failures while reading or seeding the local collection.
    pub fn load_board(
        &self,
        identity: &dyn IdentityProvider,
        remote: &dyn RemoteTaskSource,
    ) -> RepoResult<BoardLoad> {
        if let SlotState::Present(tasks) = self.store.load_state::<Task>(Task::COLLECTION)? {
            return Ok(BoardLoad {
                tasks: normalize_tasks(tasks),
                source: BoardSource::Local,
                notice: None,
            });
        }

        let session = match identity.current_session() {
            Ok(Some(session)) => session,
            Ok(None) => return Ok(empty_board(None)),
            Err(err) => {
                warn!(
                    "event=matrix_bootstrap module=matrix status=error stage=session error={}",
                    err
                );
                return Ok(empty_board(Some(Notice::task_load_failed())));
            }
        };

        let rows = match remote.fetch_tasks(&session) {
            Ok(rows) => rows,
            Err(err) => {
                warn!(
                    "event=matrix_bootstrap module=matrix status=error stage=fetch error={}",
                    err
                );
                return Ok(empty_board(Some(Notice::task_load_failed())));
            }
        };

        let tasks: Vec<Task> = rows.into_iter().map(task_from_remote_row).collect();
        self.store.save(Task::COLLECTION, &tasks)?;
        info!(
            "event=matrix_bootstrap module=matrix status=ok count={}",
            tasks.len()
        );

        Ok(BoardLoad {
            tasks: normalize_tasks(tasks),
            source: BoardSource::Remote,
            notice: None,
        })
    }

    /// Re-tags one task. An unknown id is a no-op.
    pub fn move_task_to_quadrant(
        &self,
        id: &str,
        quadrant: Quadrant,
    ) -> RepoResult<Option<MatrixTask>> {
        Ok(self
            .store
            .modify::<Task>(id, |task| task.quadrant = Some(quadrant))?
            .map(normalize_task))
    }

    /// Flips `completed` on one task and returns it normalized.
    pub fn toggle_task(&self, id: &str) -> RepoResult<Option<MatrixTask>> {
        Ok(self
            .store
            .modify::<Task>(id, |task| task.completed = !task.completed)?
            .map(normalize_task))
    }

    /// Returns whether a task was removed.
    pub fn delete_task(&self, id: &str) -> RepoResult<bool> {
        self.store.remove::<Task>(id)
    }
}

fn empty_board(notice: Option<Notice>) -> BoardLoad {
    BoardLoad {
        tasks: Vec::new(),
        source: BoardSource::Empty,
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_task;
    use crate::model::task::{Quadrant, Task};
    use chrono::{TimeZone, Utc};

    #[test]
    fn normalization_keeps_stored_record_untouched() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let task = Task::create("t1".to_string(), "plan", at, None).unwrap();
        let item = normalize_task(task.clone());
        assert_eq!(item.quadrant, Quadrant::ImportantUrgent);
        assert_eq!(item.task, task);
        assert_eq!(item.task.quadrant, None);
    }
}
