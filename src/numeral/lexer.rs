use logos::Logos;

use crate::error::{ConvertError, ConvertResult};

/// Represents one lexical glyph of a Roman numeral.
/// A glyph is either a single symbol or one of the six subtractive pairs.
/// Lexing prefers the longest match, so a pair is always consumed whole
/// where one starts.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Glyph {
    /// `M` (1000)
    #[token("M")]
    M,
    /// `CM` (900)
    #[token("CM")]
    Cm,
    /// `D` (500)
    #[token("D")]
    D,
    /// `CD` (400)
    #[token("CD")]
    Cd,
    /// `C` (100)
    #[token("C")]
    C,
    /// `XC` (90)
    #[token("XC")]
    Xc,
    /// `L` (50)
    #[token("L")]
    L,
    /// `XL` (40)
    #[token("XL")]
    Xl,
    /// `X` (10)
    #[token("X")]
    X,
    /// `IX` (9)
    #[token("IX")]
    Ix,
    /// `V` (5)
    #[token("V")]
    V,
    /// `IV` (4)
    #[token("IV")]
    Iv,
    /// `I` (1)
    #[token("I")]
    I,
}

impl Glyph {
    /// Returns the Arabic value this glyph contributes to the total.
    pub const fn value(self) -> i64 {
        match self {
            Self::M => 1000,
            Self::Cm => 900,
            Self::D => 500,
            Self::Cd => 400,
            Self::C => 100,
            Self::Xc => 90,
            Self::L => 50,
            Self::Xl => 40,
            Self::X => 10,
            Self::Ix => 9,
            Self::V => 5,
            Self::Iv => 4,
            Self::I => 1,
        }
    }
}

/// Accumulates the Arabic value of grammar-validated Roman text.
///
/// Scans left to right, consuming one glyph at a time and summing glyph
/// values. The caller must have validated `text` against the numeral
/// grammar; this pass performs no validity checks of its own.
///
/// # Parameters
/// - `text`: Normalized, grammar-validated Roman text.
///
/// # Returns
/// The Arabic value of `text`.
///
/// # Errors
/// Returns `ConvertError::InvalidNumeral` if a character outside the glyph
/// alphabet is encountered. Grammar-validated text never triggers this.
pub fn sum(text: &str) -> ConvertResult<i64> {
    let mut total = 0;
    let mut lexer = Glyph::lexer(text);

    while let Some(glyph) = lexer.next() {
        if let Ok(glyph) = glyph {
            total += glyph.value();
        } else {
            return Err(ConvertError::InvalidNumeral { text: text.to_string() });
        }
    }

    Ok(total)
}
