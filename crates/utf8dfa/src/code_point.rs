//! The Unicode code point value type.
//!
//! A [`CodePoint`] is a `u32` that is known to be a Unicode scalar value:
//! within `0..=0x10FFFF` and outside the surrogate block `0xD800..=0xDFFF`.
//! The invariant is established once, when the value is constructed, and is
//! never re-checked. Everything downstream (the encoder in particular) relies
//! on it.

use core::{fmt, str::FromStr};

use crate::error::{CodePointError, ParseCodePointError};

const SURROGATE_FIRST: u32 = 0xD800;
const SURROGATE_LAST: u32 = 0xDFFF;
const MAX_VALUE: u32 = 0x10_FFFF;

/// A Unicode scalar value.
///
/// ```rust
/// use utf8dfa::CodePoint;
///
/// let euro = CodePoint::new(0x20AC).unwrap();
/// assert_eq!(euro.to_string(), "U+20AC");
/// assert_eq!(euro.len_utf8(), 3);
/// assert!(CodePoint::new(0xD800).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct CodePoint(u32);

impl CodePoint {
    /// U+0000.
    pub const MIN: CodePoint = CodePoint(0);
    /// U+10FFFF.
    pub const MAX: CodePoint = CodePoint(MAX_VALUE);
    /// U+FFFD REPLACEMENT CHARACTER, the default substitute for invalid input.
    pub const REPLACEMENT_CHARACTER: CodePoint = CodePoint(0xFFFD);

    /// Creates a code point, rejecting surrogates and values above U+10FFFF.
    ///
    /// # Errors
    ///
    /// Returns [`CodePointError::Surrogate`] or [`CodePointError::OutOfRange`].
    pub const fn new(value: u32) -> Result<Self, CodePointError> {
        if Self::is_surrogate(value) {
            Err(CodePointError::Surrogate(value))
        } else if Self::is_out_of_range(value) {
            Err(CodePointError::OutOfRange(value))
        } else {
            Ok(CodePoint(value))
        }
    }

    /// Creates a code point, substituting `fallback` when `value` is invalid.
    #[must_use]
    pub const fn new_or(value: u32, fallback: CodePoint) -> Self {
        if Self::is_valid(value) {
            CodePoint(value)
        } else {
            fallback
        }
    }

    /// Creates a code point without validating `value`.
    ///
    /// # Safety
    ///
    /// `value` must satisfy [`CodePoint::is_valid`]. Encoding or converting an
    /// invalid value to `char` is undefined behavior.
    #[must_use]
    pub const unsafe fn new_unchecked(value: u32) -> Self {
        debug_assert!(Self::is_valid(value), "not a Unicode scalar value");
        CodePoint(value)
    }

    /// Returns `true` if `value` is a Unicode scalar value.
    #[must_use]
    pub const fn is_valid(value: u32) -> bool {
        !Self::is_out_of_range(value) && !Self::is_surrogate(value)
    }

    /// Returns `true` if `value` is in the surrogate block.
    #[must_use]
    pub const fn is_surrogate(value: u32) -> bool {
        value >= SURROGATE_FIRST && value <= SURROGATE_LAST
    }

    /// Returns `true` if `value` is larger than U+10FFFF.
    #[must_use]
    pub const fn is_out_of_range(value: u32) -> bool {
        value > MAX_VALUE
    }

    /// The numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts to `char`. Never fails, every code point is a `char`.
    #[must_use]
    pub const fn to_char(self) -> char {
        // SAFETY: construction rules out surrogates and values above U+10FFFF,
        // which is exactly the domain of `char`.
        unsafe { char::from_u32_unchecked(self.0) }
    }

    /// Number of bytes in the UTF-8 encoding (1 to 4).
    #[must_use]
    pub const fn len_utf8(self) -> usize {
        match self.0 {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }

    /// Number of code units in the UTF-16 encoding (1 or 2).
    #[must_use]
    pub const fn len_utf16(self) -> usize {
        if self.0 <= 0xFFFF { 1 } else { 2 }
    }

    /// Encodes this code point as UTF-16 into `dst` and returns the written
    /// prefix.
    ///
    /// ```rust
    /// use utf8dfa::CodePoint;
    ///
    /// let hwair = CodePoint::new(0x10348).unwrap();
    /// let mut buf = [0u16; 2];
    /// assert_eq!(hwair.encode_utf16(&mut buf), &[0xD800, 0xDF48]);
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode_utf16(self, dst: &mut [u16; 2]) -> &[u16] {
        if self.0 <= 0xFFFF {
            dst[0] = self.0 as u16;
            &dst[..1]
        } else {
            let offset = self.0 - 0x1_0000;
            dst[0] = 0xD800 | (offset >> 10) as u16;
            dst[1] = 0xDC00 | (offset & 0x3FF) as u16;
            &dst[..]
        }
    }
}

impl From<char> for CodePoint {
    fn from(ch: char) -> Self {
        CodePoint(ch as u32)
    }
}

impl From<CodePoint> for char {
    fn from(cp: CodePoint) -> Self {
        cp.to_char()
    }
}

impl From<CodePoint> for u32 {
    fn from(cp: CodePoint) -> Self {
        cp.0
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = CodePointError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        CodePoint::new(value)
    }
}

impl PartialEq<u32> for CodePoint {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<char> for CodePoint {
    fn eq(&self, other: &char) -> bool {
        self.0 == *other as u32
    }
}

/// Parses `U+20AC`, `u+20ac`, `0x20AC` or bare hexadecimal `20AC`.
impl FromStr for CodePoint {
    type Err = ParseCodePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = ["U+", "u+", "0x", "0X"]
            .iter()
            .find_map(|prefix| s.strip_prefix(prefix))
            .unwrap_or(s);
        if digits.starts_with(['+', '-']) {
            return Err(ParseCodePointError::Sign);
        }
        let value = u32::from_str_radix(digits, 16)?;
        Ok(CodePoint::new(value)?)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x0000)]
    #[case(0x007F)]
    #[case(0xD7FF)]
    #[case(0xE000)]
    #[case(0xFFFD)]
    #[case(0x10_FFFE)]
    #[case(0x10_FFFF)]
    fn accepts_scalar_values(#[case] value: u32) {
        assert!(CodePoint::is_valid(value));
        assert_eq!(CodePoint::new(value).map(CodePoint::value), Ok(value));
    }

    #[rstest]
    #[case(0xD800, CodePointError::Surrogate(0xD800))]
    #[case(0xDBFF, CodePointError::Surrogate(0xDBFF))]
    #[case(0xDFFF, CodePointError::Surrogate(0xDFFF))]
    #[case(0x11_0000, CodePointError::OutOfRange(0x11_0000))]
    #[case(u32::MAX, CodePointError::OutOfRange(u32::MAX))]
    fn rejects_non_scalar_values(#[case] value: u32, #[case] expected: CodePointError) {
        assert!(!CodePoint::is_valid(value));
        assert_eq!(CodePoint::new(value), Err(expected));
        assert_eq!(expected.value(), value);
    }

    #[test]
    fn new_or_falls_back() {
        let fallback = CodePoint::REPLACEMENT_CHARACTER;
        assert_eq!(CodePoint::new_or(0xD800, fallback), fallback);
        assert_eq!(CodePoint::new_or(0x41, fallback), 'A');
    }

    #[test]
    fn default_is_min() {
        assert_eq!(CodePoint::default(), CodePoint::MIN);
        assert_eq!(CodePoint::MIN.value(), 0);
        assert_eq!(CodePoint::MAX.value(), 0x10_FFFF);
    }

    #[rstest]
    #[case('$', 1, 1)]
    #[case('£', 2, 1)]
    #[case('€', 3, 1)]
    #[case('\u{10348}', 4, 2)]
    fn lengths_match_char(#[case] ch: char, #[case] utf8: usize, #[case] utf16: usize) {
        let cp = CodePoint::from(ch);
        assert_eq!(cp.len_utf8(), utf8);
        assert_eq!(cp.len_utf8(), ch.len_utf8());
        assert_eq!(cp.len_utf16(), utf16);
        assert_eq!(cp.to_char(), ch);
    }

    #[test]
    fn utf16_matches_char() {
        for ch in ['A', 'é', '\u{FFFF}', '\u{10000}', '\u{10348}', '\u{10FFFF}'] {
            let mut ours = [0u16; 2];
            let mut theirs = [0u16; 2];
            assert_eq!(
                CodePoint::from(ch).encode_utf16(&mut ours),
                ch.encode_utf16(&mut theirs)
            );
        }
    }

    #[test]
    fn formatting() {
        let cp = CodePoint::from('$');
        assert_eq!(cp.to_string(), "U+0024");
        assert_eq!(format!("{cp:?}"), "U+0024");
        assert_eq!(format!("{cp:x}"), "24");
        assert_eq!(format!("{:#06X}", CodePoint::MAX), "0x10FFFF");
        assert_eq!(CodePoint::MAX.to_string(), "U+10FFFF");
    }

    #[rstest]
    #[case("U+20AC", 0x20AC)]
    #[case("u+20ac", 0x20AC)]
    #[case("0x10348", 0x10348)]
    #[case("24", 0x24)]
    fn parses_hex_notations(#[case] text: &str, #[case] value: u32) {
        assert_eq!(text.parse::<CodePoint>().map(CodePoint::value), Ok(value));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "U+zz".parse::<CodePoint>(),
            Err(ParseCodePointError::Digits(_))
        ));
        assert_eq!(
            "U+D800".parse::<CodePoint>(),
            Err(ParseCodePointError::Value(CodePointError::Surrogate(0xD800)))
        );
    }

    #[rstest]
    #[case("+41")]
    #[case("U++41")]
    #[case("0x+41")]
    #[case("-41")]
    fn rejects_signed_digits(#[case] text: &str) {
        assert_eq!(text.parse::<CodePoint>(), Err(ParseCodePointError::Sign));
    }
}
