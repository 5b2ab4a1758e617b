use crate::error::{ConvertError, ConvertResult};

/// Represents a dynamically typed conversion argument.
///
/// This enum models the types an untyped input word can carry. Conversions
/// through `Value` check the dynamic type first, before any range or grammar
/// validation runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An Arabic value (64 bit integer).
    Integer(i64),
    /// A real number. Kept distinct from `Integer` so that a fractional
    /// argument fails the type check instead of being truncated.
    Real(f64),
    /// Roman numeral text.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Classifies a raw input word into a `Value`.
    ///
    /// A word that parses as an integer is `Integer`, one that parses as a
    /// real number is `Real`, and anything else is `Text`.
    ///
    /// # Example
    /// ```
    /// use romana::numeral::value::Value;
    ///
    /// assert_eq!(Value::classify("2019"), Value::Integer(2019));
    /// assert_eq!(Value::classify("MMXIX"), Value::from("MMXIX"));
    /// assert_eq!(Value::classify("3.5"), Value::Real(3.5));
    /// ```
    pub fn classify(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return Self::Integer(n);
        }
        if let Ok(r) = raw.parse::<f64>() {
            return Self::Real(r);
        }

        Self::Text(raw.to_string())
    }

    /// Returns the name of the value's dynamic type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
        }
    }

    /// Returns the contained integer, or a type mismatch error.
    ///
    /// # Errors
    /// Returns `ConvertError::TypeMismatch` unless the value is `Integer`.
    pub fn as_integer(&self) -> ConvertResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(ConvertError::TypeMismatch { expected: "integer",
                                                  found:    self.type_name(), }),
        }
    }

    /// Returns the contained text, or a type mismatch error.
    ///
    /// # Errors
    /// Returns `ConvertError::TypeMismatch` unless the value is `Text`.
    pub fn as_text(&self) -> ConvertResult<&str> {
        match self {
            Self::Text(t) => Ok(t),
            _ => Err(ConvertError::TypeMismatch { expected: "text",
                                                  found:    self.type_name(), }),
        }
    }

    /// Converts this value to a Roman numeral.
    ///
    /// The type check runs before range validation: a non-integer argument
    /// fails with a type mismatch even if its text form would be in range.
    ///
    /// # Errors
    /// Returns `ConvertError::TypeMismatch` for a non-integer value, or any
    /// error raised by [`crate::to_roman`].
    pub fn to_roman(&self) -> ConvertResult<String> {
        crate::to_roman(self.as_integer()?)
    }

    /// Converts this value from Roman numeral text to its Arabic value.
    ///
    /// The type check runs before grammar validation: a non-text argument
    /// fails with a type mismatch before the grammar ever sees it.
    ///
    /// # Errors
    /// Returns `ConvertError::TypeMismatch` for a non-text value, or any
    /// error raised by [`crate::to_arabic`].
    pub fn to_arabic(&self) -> ConvertResult<i64> {
        crate::to_arabic(self.as_text()?)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}
