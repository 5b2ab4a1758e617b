use once_cell::sync::Lazy;
use regex::Regex;

/// The language of canonical Roman numerals for 1 through 3999: up to three
/// thousands, then the hundreds, tens, and units groups, each either a
/// subtractive pair or an additive run, anchored at both ends.
static NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("canonical numeral pattern compiles")
});

/// Decides whether `text` is a well-formed canonical Roman numeral.
///
/// Expects already-normalized (uppercase) text. This check is the sole gate
/// of validity: everything the pattern accepts denotes exactly one value in
/// range, so the summation pass never re-validates.
///
/// # Parameters
/// - `text`: Normalized candidate text.
///
/// # Returns
/// `true` if `text` belongs to the canonical numeral language.
pub fn is_canonical(text: &str) -> bool {
    // Every group in the pattern is optional, so it also matches the empty
    // string; a numeral needs at least one glyph.
    !text.is_empty() && NUMERAL.is_match(text)
}
