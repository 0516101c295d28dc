use thiserror::Error;

/// Why a byte sequence is not a valid UTF-8 character.
///
/// The variants are mutually exclusive and together cover every way a DFA walk
/// can end without accepting. None of them carries a byte offset; callers that
/// need a position track it through the cursor they passed in (see
/// [`find_invalid`](crate::find_invalid) and [`iter`](crate::iter)).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The byte where a character should start is not a leading byte, or is a
    /// leading byte that can never start a valid character (`0xF5..=0xFF`).
    #[error("expected a leading byte")]
    LeadingByte,
    /// The character is representable in fewer bytes.
    #[error("detected overlong encoding")]
    OverlongEncoded,
    /// A byte of the form `10xxxxxx` was expected but something else was found.
    #[error("expected a continuation byte")]
    ContinuationByte,
    /// The input ended in the middle of a character.
    #[error("expected more bytes")]
    MissingByte,
}

impl Error {
    /// All error variants, in declaration order.
    pub const ALL: [Error; 4] = [
        Error::LeadingByte,
        Error::OverlongEncoded,
        Error::ContinuationByte,
        Error::MissingByte,
    ];

    /// Returns the human-readable description of this error.
    ///
    /// This is the same text the [`Display`](core::fmt::Display)
    /// implementation writes.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Error::LeadingByte => "expected a leading byte",
            Error::OverlongEncoded => "detected overlong encoding",
            Error::ContinuationByte => "expected a continuation byte",
            Error::MissingByte => "expected more bytes",
        }
    }
}

/// Error returned by [`decode`](crate::decode), which expects its input to be
/// exactly one character.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The leading character is not valid UTF-8.
    #[error(transparent)]
    Invalid(#[from] Error),
    /// A valid character was decoded but more bytes follow it.
    #[error("the range is too long for a single UTF-8 character")]
    TrailingBytes,
}

/// Error returned when constructing a [`CodePoint`](crate::CodePoint) from an
/// integer that is not a Unicode scalar value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePointError {
    /// The value lies in `0xD800..=0xDFFF`.
    #[error("U+{0:04X} is a surrogate")]
    Surrogate(u32),
    /// The value is larger than `0x10FFFF`.
    #[error("{0:#X} is larger than the maximum code point U+10FFFF")]
    OutOfRange(u32),
}

impl CodePointError {
    /// The rejected value.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            CodePointError::Surrogate(v) | CodePointError::OutOfRange(v) => v,
        }
    }
}

/// Error returned by the [`FromStr`](core::str::FromStr) implementation of
/// [`CodePoint`](crate::CodePoint).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCodePointError {
    /// The text is not a hexadecimal number.
    #[error("invalid hexadecimal code point: {0}")]
    Digits(#[from] core::num::ParseIntError),
    /// The digits carry a sign, which no notation allows.
    #[error("unexpected sign in code point")]
    Sign,
    /// The number is not a Unicode scalar value.
    #[error(transparent)]
    Value(#[from] CodePointError),
}
