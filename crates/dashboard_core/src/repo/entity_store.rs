//! Generic collection store over a slot repository.
//!
//! # Responsibility
//! - Load and save whole collections as JSON arrays, one slot per kind.
//! - Express every mutation as read full collection -> transform -> write
//!   full collection back.
//!
//! # Invariants
//! - Reads fail soft: an absent or malformed slot reads as an empty
//!   collection and never surfaces an error to the caller.
//! - Mutations propagate substrate read failures instead of overwriting a
//!   collection they could not read.
//! - A mutation that changes nothing does not write.
//! - Concurrent writers are last-writer-wins; there is no merge.

use crate::clock::{Clock, SystemClock};
use crate::model::collection::{CollectionKey, Entity};
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decoded state of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState<T> {
    /// The slot was never written.
    Absent,
    /// The slot holds text that does not decode as `T`.
    Malformed,
    Present(T),
}

impl<T> SlotState<T> {
    /// Present value, or `None` for absent and malformed slots.
    pub fn into_present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Malformed => None,
        }
    }
}

/// Collection store with an injected substrate and clock.
pub struct EntityStore<R: SlotRepository> {
    slots: R,
    clock: Box<dyn Clock>,
}

impl<R: SlotRepository> EntityStore<R> {
    /// Creates a store reading the wall clock.
    pub fn new(slots: R) -> Self {
        Self::with_clock(slots, SystemClock)
    }

    /// Creates a store reading time from `clock`.
    pub fn with_clock(slots: R, clock: impl Clock + 'static) -> Self {
        Self {
            slots,
            clock: Box::new(clock),
        }
    }

    /// Current instant, used for creation and update stamps.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// UTC calendar day of [`EntityStore::now`].
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// User's local wall-clock time, for comparisons against reminder
    /// schedules.
    pub fn now_local(&self) -> NaiveDateTime {
        self.clock.now_local()
    }

    /// User's local calendar day.
    pub fn local_today(&self) -> NaiveDate {
        self.clock.local_today()
    }

    /// Loads one collection; absent, malformed or unreadable slots read empty.
    pub fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> Vec<T> {
        match self.read_state(key.slot_key()) {
            Ok(state) => state.into_present().unwrap_or_default(),
            Err(err) => {
                warn!(
                    "event=collection_load module=store status=error collection={} error={}",
                    key, err
                );
                Vec::new()
            }
        }
    }

    /// Loads one collection and reports whether the slot existed.
    pub fn load_state<T: DeserializeOwned>(
        &self,
        key: CollectionKey,
    ) -> RepoResult<SlotState<Vec<T>>> {
        self.read_state(key.slot_key())
    }

    /// Overwrites one collection with `records`.
    pub fn save<T: Serialize>(&self, key: CollectionKey, records: &[T]) -> RepoResult<()> {
        self.write_json(key.slot_key(), records)?;
        debug!(
            "event=collection_save module=store status=ok collection={} count={}",
            key,
            records.len()
        );
        Ok(())
    }

    /// Every record of kind `E`, in stored order.
    pub fn list<E: Entity>(&self) -> Vec<E> {
        self.load(E::COLLECTION)
    }

    /// Read-modify-write over the whole collection of `E`.
    ///
    /// Returns the collection as written.
    pub fn update<E: Entity>(
        &self,
        transform: impl FnOnce(Vec<E>) -> Vec<E>,
    ) -> RepoResult<Vec<E>> {
        let current = self.read_for_write::<E>()?;
        let next = transform(current);
        self.save(E::COLLECTION, &next)?;
        Ok(next)
    }

    /// Inserts `record` at the front of its collection (newest first).
    pub fn insert_front<E: Entity>(&self, record: E) -> RepoResult<()> {
        self.update::<E>(|mut records| {
            records.insert(0, record);
            records
        })?;
        Ok(())
    }

    /// Applies `edit` to the record with `id` and persists the collection.
    ///
    /// Returns the edited record, or `None` without writing when `id` is
    /// unknown.
    pub fn modify<E: Entity>(&self, id: &str, edit: impl FnOnce(&mut E)) -> RepoResult<Option<E>> {
        let mut records = self.read_for_write::<E>()?;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            debug!(
                "event=record_modify module=store status=not_found collection={}",
                E::COLLECTION
            );
            return Ok(None);
        };
        edit(record);
        let edited = record.clone();
        self.save(E::COLLECTION, &records)?;
        Ok(Some(edited))
    }

    /// Removes the record with `id`.
    ///
    /// Returns `false` without writing when no record carries `id`, which
    /// makes repeated deletes no-ops.
    pub fn remove<E: Entity>(&self, id: &str) -> RepoResult<bool> {
        let mut records = self.read_for_write::<E>()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(E::COLLECTION, &records)?;
        Ok(true)
    }

    /// Raw text of an auxiliary slot; unreadable slots read as `None`.
    pub fn read_text(&self, slot_key: &str) -> Option<String> {
        self.slots.read_slot(slot_key).unwrap_or_else(|err| {
            warn!(
                "event=slot_read module=store status=error slot={} error={}",
                slot_key, err
            );
            None
        })
    }

    /// Replaces an auxiliary slot with raw text.
    pub fn write_text(&self, slot_key: &str, value: &str) -> RepoResult<()> {
        self.slots.write_slot(slot_key, value)
    }

    /// Decodes an auxiliary JSON slot; unreadable slots read as absent.
    pub fn read_json<T: DeserializeOwned>(&self, slot_key: &str) -> SlotState<T> {
        self.read_state(slot_key).unwrap_or_else(|err| {
            warn!(
                "event=slot_read module=store status=error slot={} error={}",
                slot_key, err
            );
            SlotState::Absent
        })
    }

    /// Replaces an auxiliary slot with the JSON encoding of `value`.
    pub fn write_json<T: Serialize + ?Sized>(&self, slot_key: &str, value: &T) -> RepoResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.slots.write_slot(slot_key, &encoded)
    }

    fn read_for_write<E: Entity>(&self) -> RepoResult<Vec<E>> {
        Ok(self
            .load_state::<E>(E::COLLECTION)?
            .into_present()
            .unwrap_or_default())
    }

    fn read_state<T: DeserializeOwned>(&self, slot_key: &str) -> RepoResult<SlotState<T>> {
        let Some(raw) = self.slots.read_slot(slot_key)? else {
            return Ok(SlotState::Absent);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(SlotState::Present(value)),
            Err(err) => {
                warn!(
                    "event=slot_decode module=store status=malformed slot={} error={}",
                    slot_key, err
                );
                Ok(SlotState::Malformed)
            }
        }
    }
}
