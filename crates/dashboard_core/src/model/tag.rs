//! Serde adapters for closed string enums stored as optional tags.
//!
//! Unknown tag values read as `None` instead of failing the whole collection.

use serde::{Deserialize, Deserializer};

/// Closed enum with a stable on-disk spelling.
pub(crate) trait Tag: Sized + Copy {
    fn as_tag(self) -> &'static str;
    fn from_tag(value: &str) -> Option<Self>;
}

fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Tag,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(str::trim).and_then(T::from_tag))
}

/// Optional tag written as `""` when unset (journal mood).
pub(crate) mod or_empty {
    use super::Tag;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Tag,
    {
        serializer.serialize_str(value.map_or("", T::as_tag))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Tag,
    {
        super::deserialize_lenient(deserializer)
    }
}

/// Optional tag omitted when unset (task quadrant).
pub(crate) mod omitted {
    use super::Tag;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Tag,
    {
        match value {
            Some(tag) => serializer.serialize_str(tag.as_tag()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Tag,
    {
        super::deserialize_lenient(deserializer)
    }
}

/// Optional `HH:MM` time written as `""` when unset (reminder time).
pub(crate) mod hhmm_or_empty {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        parse(&raw).map_err(serde::de::Error::custom)
    }

    /// Parses `HH:MM` (seconds tolerated); blank input means no time.
    pub fn parse(raw: &str) -> Result<Option<NaiveTime>, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        NaiveTime::parse_from_str(trimmed, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Some)
            .map_err(|err| format!("invalid time `{trimmed}`: {err}"))
    }
}
