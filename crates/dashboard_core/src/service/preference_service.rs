//! Theme preference stored in the `theme` slot as a bare string.

use crate::model::collection::THEME_SLOT;
use crate::model::preference::Theme;
use crate::repo::entity_store::EntityStore;
use crate::repo::slot_repo::{RepoResult, SlotRepository};

pub struct PreferenceService<R: SlotRepository> {
    store: EntityStore<R>,
}

impl<R: SlotRepository> PreferenceService<R> {
    /// Creates a service over the provided store.
    pub fn new(store: EntityStore<R>) -> Self {
        Self { store }
    }

    /// Stored theme, or `os_default` when unset or unrecognized.
    pub fn theme(&self, os_default: Theme) -> Theme {
        self.stored_theme().unwrap_or(os_default)
    }

    /// Explicitly stored theme, if any.
    pub fn stored_theme(&self) -> Option<Theme> {
        self.store
            .read_text(THEME_SLOT)
            .as_deref()
            .and_then(Theme::parse)
    }

    /// Persists `theme` as a bare string.
    pub fn set_theme(&self, theme: Theme) -> RepoResult<()> {
        self.store.write_text(THEME_SLOT, theme.as_str())
    }

    /// Switches to the other theme and persists the choice.
    pub fn toggle_theme(&self, os_default: Theme) -> RepoResult<Theme> {
        let next = self.theme(os_default).toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
