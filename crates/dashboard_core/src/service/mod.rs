//! Use-case services, one per collection plus the cross-cutting views.
//!
//! # Responsibility
//! - Validate drafts and turn user actions into store mutations.
//! - Keep view adapters decoupled from slot and JSON details.
//!
//! # Invariants
//! - Validation failures are silent no-ops reported as `Ok(None)`.
//! - Services never bypass `EntityStore` for the five collections.

pub mod bookmark_service;
pub mod dashboard_service;
pub mod journal_service;
pub mod matrix_service;
pub mod note_service;
pub mod preference_service;
pub mod quote_service;
pub mod reminder_service;
pub mod task_service;
