//! Data types for the squirrel module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stored squirrel.
///
/// Field order is the serialized key order: `id`, `name`, `size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squirrel {
    pub id: u64,
    pub name: String,
    pub size: String,
}

/// Writable fields of a squirrel, as sent in a form body.
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquirrelForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: String,
}

impl SquirrelForm {
    pub fn new(name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
        }
    }
}

/// How the repository picks the id of a new record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// `count + 1`. Can collide with a surviving id once a record has been deleted.
    Count,
    /// `max(existing ids) + 1`, or 1 on an empty collection.
    ///
    /// Never collides with a surviving id. Deleting the highest id and then
    /// creating hands that id out again.
    #[default]
    MaxPlusOne,
}

impl IdPolicy {
    /// Compute the id for a record appended to `existing`.
    ///
    /// Returns `None` when the next id does not fit in a `u64`.
    pub fn next_id(self, existing: &[Squirrel]) -> Option<u64> {
        let base = match self {
            IdPolicy::Count => u64::try_from(existing.len()).ok()?,
            IdPolicy::MaxPlusOne => existing.iter().map(|s| s.id).max().unwrap_or(0),
        };
        base.checked_add(1)
    }

    fn as_str(self) -> &'static str {
        match self {
            IdPolicy::Count => "count",
            IdPolicy::MaxPlusOne => "max-plus-one",
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown id policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdPolicyError(pub String);

impl fmt::Display for ParseIdPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown id policy '{}' (expected 'count' or 'max-plus-one')",
            self.0
        )
    }
}

impl std::error::Error for ParseIdPolicyError {}

impl FromStr for IdPolicy {
    type Err = ParseIdPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" => Ok(IdPolicy::Count),
            "max-plus-one" => Ok(IdPolicy::MaxPlusOne),
            other => Err(ParseIdPolicyError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squirrel(id: u64) -> Squirrel {
        Squirrel {
            id,
            name: format!("s{}", id),
            size: "small".into(),
        }
    }

    #[test]
    fn test_serialized_key_order() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Squirrel {
            id: 2,
            name: "Joe".into(),
            size: "medium".into(),
        })?;
        assert_eq!(json, r#"{"id":2,"name":"Joe","size":"medium"}"#);
        Ok(())
    }

    #[test]
    fn test_next_id_on_empty_collection() {
        assert_eq!(IdPolicy::Count.next_id(&[]), Some(1));
        assert_eq!(IdPolicy::MaxPlusOne.next_id(&[]), Some(1));
    }

    #[test]
    fn test_next_id_after_gap() {
        // ids 1 and 3 survive after deleting 2
        let existing = [squirrel(1), squirrel(3)];
        assert_eq!(IdPolicy::Count.next_id(&existing), Some(3));
        assert_eq!(IdPolicy::MaxPlusOne.next_id(&existing), Some(4));
    }

    #[test]
    fn test_next_id_at_u64_max() {
        let existing = [squirrel(1), squirrel(u64::MAX)];
        assert_eq!(IdPolicy::MaxPlusOne.next_id(&existing), None);
        assert_eq!(IdPolicy::Count.next_id(&existing), Some(3));
    }

    #[test]
    fn test_parse_id_policy() {
        assert_eq!("count".parse::<IdPolicy>(), Ok(IdPolicy::Count));
        assert_eq!("max-plus-one".parse::<IdPolicy>(), Ok(IdPolicy::MaxPlusOne));
        assert!("newest".parse::<IdPolicy>().is_err());
        assert_eq!(IdPolicy::MaxPlusOne.to_string(), "max-plus-one");
    }
}
