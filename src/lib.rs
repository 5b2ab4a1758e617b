//! # romana
//!
//! romana converts integer values between Arabic (base 10) representation
//! and Roman numeral strings, in both directions, for the range 1 through
//! 3999 — the values canonical subtractive notation can express. The crate
//! is a pure library: two conversion operations, the constants describing
//! their domain, and the errors they can raise.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::{ConvertError, ConvertResult},
            numeral::{encode, grammar, lexer, value::Value}};

/// Provides the unified error type for all conversions.
///
/// This module defines every error a conversion can raise — a wrongly typed
/// argument, an Arabic value outside the convertible range, or Roman text
/// that fails grammar validation. Exactly one error kind describes any
/// failure, and no conversion ever returns a partial result.
///
/// # Responsibilities
/// - Defines the `ConvertError` enum covering all failure modes.
/// - Carries the offending value or text for caller-side reporting.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the conversion engine.
///
/// This module ties together the phases of both conversion directions:
/// table-driven encoding for Arabic to Roman, and grammar validation
/// followed by glyph summation for Roman to Arabic. It also defines the
/// dynamically typed argument surface used where input arrives untyped.
///
/// # Responsibilities
/// - Encodes in-range Arabic values as canonical numerals.
/// - Validates and sums Roman text in two independent, sequential phases.
/// - Classifies untyped input and enforces dynamic type checks.
pub mod numeral;

/// The minimum convertible value to/from Roman.
pub const MIN_VALUE: i64 = 1;
/// The maximum convertible value to/from Roman.
pub const MAX_VALUE: i64 = 3999;

/// Converts an Arabic value to its canonical Roman numeral.
///
/// The result is always uppercase and unique: each decimal place of the
/// value contributes one precomputed fragment, so there is exactly one
/// encoding per value and no alternate forms.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if `value` lies outside
/// `MIN_VALUE..=MAX_VALUE`.
///
/// # Examples
/// ```
/// use romana::to_roman;
///
/// assert_eq!(to_roman(2019).unwrap(), "MMXIX");
/// assert_eq!(to_roman(42).unwrap(), "XLII");
///
/// // Zero was never a Roman numeral.
/// assert!(to_roman(0).is_err());
/// ```
pub fn to_roman(value: i64) -> ConvertResult<String> {
    encode::roman(value)
}

/// Converts a Roman numeral to its Arabic value.
///
/// The input is uppercased first, so lowercase and mixed-case numerals are
/// accepted. The normalized text must then match the canonical numeral
/// grammar; only after validation does the glyph summation run, trusting
/// the grammar completely.
///
/// # Errors
/// Returns `ConvertError::InvalidNumeral` if the text is not a well-formed
/// canonical numeral — an invalid subtractive pair, a stray character, or
/// the empty string.
///
/// # Examples
/// ```
/// use romana::to_arabic;
///
/// assert_eq!(to_arabic("MMXIX").unwrap(), 2019);
/// assert_eq!(to_arabic("mmxix").unwrap(), 2019);
///
/// // "IL" is not a permitted subtractive pair.
/// assert!(to_arabic("IL").is_err());
/// ```
pub fn to_arabic(text: &str) -> ConvertResult<i64> {
    let normalized = text.to_uppercase();

    if !grammar::is_canonical(&normalized) {
        return Err(ConvertError::InvalidNumeral { text: text.to_string() });
    }

    lexer::sum(&normalized)
}

/// Converts a dynamically typed value in whichever direction its type
/// implies.
///
/// An `Integer` converts to Roman `Text`, `Text` converts to an Arabic
/// `Integer`, and a `Real` is convertible in neither direction. This is the
/// entry point for callers holding classified, untyped input.
///
/// # Errors
/// Returns `ConvertError::TypeMismatch` for a `Real` value, or any error
/// raised by the selected conversion.
///
/// # Examples
/// ```
/// use romana::{convert, numeral::value::Value};
///
/// let roman = convert(&Value::classify("2019")).unwrap();
/// assert_eq!(roman.to_string(), "MMXIX");
///
/// let arabic = convert(&Value::classify("MMXIX")).unwrap();
/// assert_eq!(arabic, Value::Integer(2019));
///
/// assert!(convert(&Value::classify("3.5")).is_err());
/// ```
pub fn convert(value: &Value) -> ConvertResult<Value> {
    match value {
        Value::Integer(_) => Ok(Value::Text(value.to_roman()?)),
        Value::Text(_) => Ok(Value::Integer(value.to_arabic()?)),
        Value::Real(_) => Err(ConvertError::TypeMismatch { expected: "an integer or roman text",
                                                           found:    value.type_name(), }),
    }
}
