//! Persistence layer: key-value slots and the collection store built on them.
//!
//! # Responsibility
//! - Define the substrate contract (`SlotRepository`) and its SQLite and
//!   in-memory implementations.
//! - Provide generic load/save/mutate over whole collections.
//!
//! # Invariants
//! - Services never touch slot text directly for the five collections; they
//!   go through `EntityStore`.

pub mod entity_store;
pub mod slot_repo;
