//! Principals
//!
//! A principal is an opaque, totally ordered name. The label algebra never
//! looks inside it; equality and ordering are all that clauses need.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters that carry meaning in the canonical text form of a label.
pub(crate) const RESERVED_CHARS: &[char] = &['[', ']', '{', '}', '\\', '/', '|', '<', '>', ','];

/// An atomic identity that can be required to read or endorse data
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Principal(String);

impl Principal {
    /// Create a principal from any string-like name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The principal's name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this name survives a render/parse cycle of the text form.
    ///
    /// Empty names and names containing whitespace or reserved punctuation
    /// render fine but cannot be read back.
    pub fn is_renderable(&self) -> bool {
        !self.0.is_empty()
            && !self
                .0
                .chars()
                .any(|c| c.is_whitespace() || RESERVED_CHARS.contains(&c))
    }
}

impl From<&str> for Principal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Principal {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
