//! Label parsing errors
//!
//! The algebra itself is total and never fails. Errors only arise when
//! reading the canonical text form back into values.

/// Result type for label parsing
pub type LabelResult<T> = Result<T, LabelError>;

/// Errors produced while parsing label text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// Input ended in the middle of a term
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for
        expected: &'static str,
    },

    /// A token did not fit the grammar
    #[error("Unexpected token at byte {position}: expected {expected}, found {found:?}")]
    UnexpectedToken {
        /// Byte offset of the offending token
        position: usize,
        /// What the parser was looking for
        expected: &'static str,
        /// The text found instead
        found: String,
    },

    /// A principal name was empty or used reserved characters
    #[error("Invalid principal at byte {position}")]
    InvalidPrincipal {
        /// Byte offset where the principal should start
        position: usize,
    },

    /// Text remained after a complete term
    #[error("Trailing input at byte {position}")]
    TrailingInput {
        /// Byte offset of the first unconsumed character
        position: usize,
    },

    /// Input exceeds the configured length limit
    #[error("Label text too long: {length} bytes (max {max})")]
    InputTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual input length
        length: usize,
    },

    /// A component lists more clauses than allowed
    #[error("Too many clauses: {attempted} (max {max})")]
    TooManyClauses {
        /// Maximum allowed clauses per component
        max: usize,
        /// Number of clauses attempted
        attempted: usize,
    },

    /// A clause lists more principals than allowed
    #[error("Clause too wide: {attempted} principals (max {max})")]
    ClauseTooWide {
        /// Maximum allowed principals per clause
        max: usize,
        /// Number of principals attempted
        attempted: usize,
    },
}

impl LabelError {
    pub(crate) fn unexpected(position: usize, expected: &'static str, found: &str) -> Self {
        match found.chars().next() {
            None => Self::UnexpectedEnd { expected },
            Some(c) => Self::UnexpectedToken {
                position,
                expected,
                found: c.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_at_end_of_input() {
        assert_eq!(
            LabelError::unexpected(7, "']'", ""),
            LabelError::UnexpectedEnd { expected: "']'" }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = LabelError::unexpected(3, "'['", "x]");
        assert_eq!(
            err.to_string(),
            "Unexpected token at byte 3: expected '[', found \"x\""
        );

        let err = LabelError::TooManyClauses {
            max: 2,
            attempted: 3,
        };
        assert_eq!(err.to_string(), "Too many clauses: 3 (max 2)");
    }
}
