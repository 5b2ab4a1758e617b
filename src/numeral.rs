/// The encode module renders Arabic values as Roman numerals.
///
/// Encoding is table-driven: every decimal digit of the value selects a
/// precomputed fragment for its place, so the subtractive forms for 4 and 9
/// are data rather than branch logic.
///
/// # Responsibilities
/// - Validates that the value lies inside the convertible range.
/// - Looks up one fragment per decimal place and concatenates them in
///   thousands-to-units order.
pub mod encode;
/// The grammar module validates the structure of Roman numeral text.
///
/// A single anchored pattern describes the whole language of canonical
/// numerals for 1 through 3999. It is the sole gate of validity: any text it
/// accepts has exactly one value, and the later summation pass relies on
/// that.
///
/// # Responsibilities
/// - Compiles the canonical numeral pattern once per process.
/// - Decides membership for normalized (uppercase) candidate text.
pub mod grammar;
/// The lexer module tokenizes validated Roman text into glyphs.
///
/// A glyph is either a single symbol (`I`, `V`, `X`, `L`, `C`, `D`, `M`) or
/// one of the six subtractive pairs (`IV`, `IX`, `XL`, `XC`, `CD`, `CM`).
/// Longest-match lexing consumes a pair wherever one starts, which is what
/// makes the plain left-to-right sum of glyph values correct.
pub mod lexer;
/// The value module defines the dynamically typed argument surface.
///
/// Where input arrives untyped, such as a command-line word, it is first
/// classified into a `Value` (integer, real, or text). Conversions through
/// `Value` check the dynamic type before any range or grammar validation.
pub mod value;
