use crate::{MAX_VALUE, MIN_VALUE,
            error::{ConvertError, ConvertResult}};

/// Fragments for the units place, indexed by digit.
const UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
/// Fragments for the tens place, indexed by digit.
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
/// Fragments for the hundreds place, indexed by digit.
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
/// Fragments for the thousands place; a digit above 3 is out of range.
const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];

/// Renders an Arabic value as its canonical Roman numeral.
///
/// Each decimal place of the value selects one fragment from the place's
/// table; the four fragments concatenated in thousands-to-units order form
/// the numeral. The result is always uppercase and unique for the value.
///
/// # Parameters
/// - `value`: The Arabic value to render.
///
/// # Returns
/// The canonical Roman numeral for `value`.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if `value` is below `MIN_VALUE` or
/// above `MAX_VALUE`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn roman(value: i64) -> ConvertResult<String> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(ConvertError::OutOfRange { value });
    }

    let v = value as usize;

    Ok(format!("{}{}{}{}",
               THOUSANDS[v / 1000],
               HUNDREDS[v / 100 % 10],
               TENS[v / 10 % 10],
               UNITS[v % 10]))
}
