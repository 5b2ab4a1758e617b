use crate::{MAX_VALUE, MIN_VALUE};

/// Result type shared by every conversion operation.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that a conversion can raise.
pub enum ConvertError {
    /// An argument had the wrong dynamic type.
    TypeMismatch {
        /// The type the operation requires.
        expected: &'static str,
        /// The type that was actually supplied.
        found:    &'static str,
    },
    /// An Arabic value was outside the convertible range.
    OutOfRange {
        /// The rejected value.
        value: i64,
    },
    /// A Roman numeral string failed grammar validation.
    InvalidNumeral {
        /// The rejected input, as supplied by the caller.
        text: String,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {expected}, found {found}.")
            },

            Self::OutOfRange { .. } => {
                write!(f, "value shall be between {MIN_VALUE} and {MAX_VALUE}")
            },

            Self::InvalidNumeral { text } => write!(f,
                                                    "{text:?} shall be a roman numeral composed by the following characters: I,V,X,L,C,D,M"),
        }
    }
}

impl std::error::Error for ConvertError {}
