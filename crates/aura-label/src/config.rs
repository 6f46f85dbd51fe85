//! Parser configuration.
//!
//! Implication and reduction are quadratic in the number of clauses, so text
//! from untrusted sources is bounded before it becomes a label.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum label text length in bytes
pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Default maximum clauses per component
pub const DEFAULT_MAX_CLAUSES: usize = 256;

/// Default maximum principals per clause
pub const DEFAULT_MAX_PRINCIPALS_PER_CLAUSE: usize = 64;

/// Limits applied when parsing label text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Maximum label text length in bytes
    pub max_input_len: usize,
    /// Maximum clauses in one component
    pub max_clauses: usize,
    /// Maximum principals in one clause
    pub max_principals_per_clause: usize,
}

impl ParserConfig {
    /// Set the text length limit
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    /// Set the clause count limit
    pub fn with_max_clauses(mut self, max: usize) -> Self {
        self.max_clauses = max;
        self
    }

    /// Set the clause width limit
    pub fn with_max_principals_per_clause(mut self, max: usize) -> Self {
        self.max_principals_per_clause = max;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_clauses: DEFAULT_MAX_CLAUSES,
            max_principals_per_clause: DEFAULT_MAX_PRINCIPALS_PER_CLAUSE,
        }
    }
}
