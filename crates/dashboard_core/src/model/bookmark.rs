//! Bookmark record, URL normalization and tag normalization.
//!
//! # Invariants
//! - Stored `url` always starts with `http://` or `https://`.
//! - `tags` are trimmed, non-empty and unique within one bookmark; order of
//!   first occurrence is kept.

use crate::model::collection::{CollectionKey, Entity};
use crate::model::RecordId;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const DEFAULT_SCHEME: &str = "https://";

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)/?$")
        .expect("valid bookmark url regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller input for a new bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
}

impl BookmarkDraft {
    /// Draft without tags.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl Bookmark {
    /// Validates a draft and builds the stored record.
    ///
    /// Returns `None` when the title is blank or the URL is not acceptable.
    pub fn create(id: RecordId, draft: &BookmarkDraft, now: DateTime<Utc>) -> Option<Self> {
        let title = draft.title.trim();
        if title.is_empty() {
            return None;
        }
        let url = normalize_url(&draft.url)?;
        Some(Self {
            id,
            title: title.to_string(),
            url,
            tags: normalize_tags(&draft.tags),
            created_at: now,
        })
    }
}

impl Entity for Bookmark {
    const COLLECTION: CollectionKey = CollectionKey::Bookmarks;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Prefixes `https://` when the input has no http(s) scheme, then validates.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_ascii_lowercase();
    let url = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    };
    URL_RE.is_match(&url).then_some(url)
}

/// Trims, drops empty values and de-duplicates keeping first occurrence.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let value = tag.trim();
        if !value.is_empty() && !unique.iter().any(|existing| existing == value) {
            unique.push(value.to_string());
        }
    }
    unique
}
