//! Cross-entity search entry points.
//!
//! # Responsibility
//! - Answer free-text queries over every collection.
//! - Keep result shaping (counts, previews, categories) inside core.

pub mod cross_entity;
