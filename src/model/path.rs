//! The [`Path`] value type: a cleaned URL path segment.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Errors raised when a string can't be turned into a [`Path`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PathError {
    /// Nothing was left after trimming whitespace and slashes.
    #[error("Path must not be empty")]
    Empty,

    /// The segment contains a character that isn't allowed in a single segment.
    #[error("Illegal character {ch:?} in path segment {path:?}")]
    IllegalCharacter { path: String, ch: char },
}

/// A single URL path segment under which a resource is exposed.
///
/// Construction trims surrounding whitespace and slashes, so `"  /orders/ "`
/// and `"orders"` produce the same value. The segment itself must not contain
/// `/`, whitespace, `?` or `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segment: String,
}

impl Path {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PathError> {
        let segment = clean_up(raw.as_ref());

        if segment.is_empty() {
            return Err(PathError::Empty);
        }

        if let Some(ch) = segment
            .chars()
            .find(|c| *c == '/' || *c == '?' || *c == '#' || c.is_whitespace())
        {
            return Err(PathError::IllegalCharacter {
                path: segment.to_string(),
                ch,
            });
        }

        Ok(Self {
            segment: segment.to_string(),
        })
    }

    /// The bare segment, without the leading slash.
    pub fn as_str(&self) -> &str {
        &self.segment
    }

    /// Returns whether the given raw path refers to this segment.
    pub fn matches(&self, raw: &str) -> bool {
        clean_up(raw) == self.segment
    }
}

fn clean_up(raw: &str) -> &str {
    raw.trim().trim_matches('/').trim()
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segment)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.segment
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace_and_slashes() {
        let path = Path::new("  /orders/ ").unwrap();
        assert_eq!(path.as_str(), "orders");
        assert_eq!(path.to_string(), "/orders");
    }

    #[test]
    fn test_rejects_blank() {
        assert_eq!(Path::new("   "), Err(PathError::Empty));
        assert_eq!(Path::new("//"), Err(PathError::Empty));
    }

    #[test]
    fn test_rejects_embedded_separators() {
        assert_eq!(
            Path::new("orders/items"),
            Err(PathError::IllegalCharacter {
                path: "orders/items".to_string(),
                ch: '/'
            })
        );
        assert!(Path::new("my orders").is_err());
        assert!(Path::new("orders?page=1").is_err());
    }

    #[test]
    fn test_matches_raw_paths() {
        let path = Path::new("bookOrder").unwrap();
        assert!(path.matches("/bookOrder"));
        assert!(path.matches("bookOrder/"));
        assert!(!path.matches("/bookorder"));
        assert!(!path.matches("/bookOrder/1"));
    }

    #[test]
    fn test_serializes_with_leading_slash() {
        let path = Path::new("custom-path").unwrap();
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"/custom-path\"");
    }
}
