//! Bookmark use-case service.

use crate::model::bookmark::{Bookmark, BookmarkDraft};
use crate::model::new_record_id;
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use log::debug;

pub struct BookmarkService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> BookmarkService<R> {
    /// Creates a service over the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Validates and stores a bookmark at the front of the collection.
    ///
    /// Returns `Ok(None)` when the title is blank or the URL is invalid; the
    /// collection is left untouched.
    pub fn add_bookmark(&self, draft: &BookmarkDraft) -> RepoResult<Option<Bookmark>> {
        let Some(bookmark) = Bookmark::create(new_record_id(), draft, self.store.now()) else {
            debug!("event=bookmark_add module=service status=rejected reason=invalid_draft");
            return Ok(None);
        };
        self.store.insert_front(bookmark.clone())?;
        debug!(
            "event=bookmark_add module=service status=ok id={} tags={}",
            bookmark.id,
            bookmark.tags.len()
        );
        Ok(Some(bookmark))
    }

    /// Bookmarks in stored order, newest first.
    pub fn list_bookmarks(&self) -> Vec<Bookmark> {
        self.store.list()
    }

    /// Returns whether a bookmark was removed; unknown ids are no-ops.
    pub fn delete_bookmark(&self, id: &str) -> RepoResult<bool> {
        self.store.remove::<Bookmark>(id)
    }
}
