//! Whole-range operations: validation, counting, decoding, encoding and
//! sanitizing.
//!
//! Everything here walks the input once, front to back, one DFA step per
//! character. Output goes to any [`Extend`] sink, so callers choose the
//! container and nothing is allocated unless a `*_to_vec` or `sanitize`
//! helper is used.

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{fmt, iter};

use bstr::BStr;

use crate::{
    code_point::CodePoint,
    code_unit::is_leading_byte,
    dfa,
    error::{DecodeError, Error},
};

/// Returns `true` if `bytes` is entirely valid UTF-8.
///
/// ```rust
/// assert!(utf8dfa::is_valid("€ and £".as_bytes()));
/// assert!(!utf8dfa::is_valid(b"\xED\xA0\x80"));
/// ```
#[must_use]
pub fn is_valid(bytes: &[u8]) -> bool {
    find_invalid(bytes) == bytes.len()
}

/// Returns the start of the first invalid character, or `bytes.len()` when
/// everything is valid.
///
/// ```rust
/// // the euro sign is cut short, so the error is where it starts
/// assert_eq!(utf8dfa::find_invalid(b"ok \xE2\x82"), 3);
/// assert_eq!(utf8dfa::find_invalid(b"ok"), 2);
/// ```
#[must_use]
pub fn find_invalid(bytes: &[u8]) -> usize {
    let mut pos = 0;
    while pos < bytes.len() {
        let step = dfa::advance_forward_once(&bytes[pos..]);
        if !step.is_accept() {
            break;
        }
        pos += step.len;
    }
    pos
}

/// Returns the index of the first byte that could start a valid character
/// (ASCII or `C2..=F4`), or `bytes.len()`.
///
/// Nothing is validated; this only looks at single bytes.
#[must_use]
pub fn find_leading_byte(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|&b| is_leading_byte(b))
        .unwrap_or(bytes.len())
}

/// Counts the characters before the first NUL byte or the end of `bytes`.
///
/// # Errors
///
/// The error of the first invalid character before the terminator.
///
/// ```rust
/// assert_eq!(utf8dfa::str_len(b"\xED\x95\x9C\xF0\x90\x8D\x88"), Ok(2));
/// assert_eq!(utf8dfa::str_len(b"ab\0cd"), Ok(2));
/// ```
pub fn str_len(bytes: &[u8]) -> Result<usize, Error> {
    match str_len_partial(bytes) {
        (count, None) => Ok(count),
        (_, Some(err)) => Err(err),
    }
}

/// Like [`str_len`], but on failure also reports how many valid characters
/// came before the invalid one.
#[must_use]
pub fn str_len_partial(bytes: &[u8]) -> (usize, Option<Error>) {
    let mut pos = 0;
    let mut count = 0;
    while let Some(&byte) = bytes.get(pos) {
        if byte == 0 {
            break;
        }
        match dfa::advance_forward_once(&bytes[pos..]).into_result() {
            Ok(len) => pos += len,
            Err(err) => {
                trace!(offset = pos, count, %err, "length stopped at invalid character");
                return (count, Some(err));
            }
        }
        count += 1;
    }
    (count, None)
}

/// Decodes `bytes`, which must hold exactly one character.
///
/// # Errors
///
/// [`DecodeError::Invalid`] when the character is malformed (including empty
/// input, reported as [`Error::MissingByte`]), [`DecodeError::TrailingBytes`]
/// when anything follows it.
///
/// ```rust
/// use utf8dfa::{CodePoint, DecodeError, Error};
///
/// assert_eq!(utf8dfa::decode(b"\xE2\x82\xAC"), Ok(CodePoint::from('€')));
/// assert_eq!(utf8dfa::decode(b"ab"), Err(DecodeError::TrailingBytes));
/// assert_eq!(utf8dfa::decode(b""), Err(DecodeError::Invalid(Error::MissingByte)));
/// ```
pub fn decode(bytes: &[u8]) -> Result<CodePoint, DecodeError> {
    let (cp, len) = decode_first(bytes)?;
    if len == bytes.len() {
        Ok(cp)
    } else {
        Err(DecodeError::TrailingBytes)
    }
}

/// Decodes the first character of `bytes` and returns it with its length.
///
/// # Errors
///
/// The error of the first character.
#[inline]
pub fn decode_first(bytes: &[u8]) -> Result<(CodePoint, usize), Error> {
    dfa::decode_and_advance_forward_once(bytes).into_result()
}

/// Decodes the last character of `bytes` and returns it with its length.
///
/// # Errors
///
/// The error of the last character.
#[inline]
pub fn decode_last(bytes: &[u8]) -> Result<(CodePoint, usize), Error> {
    dfa::decode_and_advance_backward_once(bytes).into_result()
}

/// Outcome of [`decode_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<'a> {
    /// Input left over, starting at the invalid character. Empty on success.
    pub rest: &'a [u8],
    /// Code points pushed into the sink.
    pub written: usize,
    /// Why decoding stopped early, if it did.
    pub error: Option<Error>,
}

impl Decoded<'_> {
    /// Returns `true` if the whole input was decoded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.rest.is_empty()
    }
}

/// Decodes `bytes` into `out`, stopping at the first invalid character.
///
/// Everything decoded before the invalid character stays in `out`.
///
/// ```rust
/// use utf8dfa::{CodePoint, Error};
///
/// let mut out = Vec::new();
/// let decoded = utf8dfa::decode_into(b"a\xC2\xA3\xC0\x80b", &mut out);
/// assert_eq!(out, [CodePoint::from('a'), CodePoint::from('£')]);
/// assert_eq!(decoded.rest, b"\xC0\x80b");
/// assert_eq!(decoded.error, Some(Error::OverlongEncoded));
/// ```
pub fn decode_into<'a, E>(bytes: &'a [u8], out: &mut E) -> Decoded<'a>
where
    E: Extend<CodePoint>,
{
    let mut rest = bytes;
    let mut written = 0;
    let mut error = None;
    out.extend(iter::from_fn(|| {
        if rest.is_empty() {
            return None;
        }
        match dfa::decode_and_advance_forward_once(rest).into_result() {
            Ok((cp, len)) => {
                rest = &rest[len..];
                written += 1;
                Some(cp)
            }
            Err(err) => {
                error = Some(err);
                None
            }
        }
    }));
    #[cfg(feature = "tracing")]
    if let Some(err) = error {
        debug!(
            offset = bytes.len() - rest.len(),
            written,
            %err,
            "decoding stopped at invalid character"
        );
    }
    Decoded {
        rest,
        written,
        error,
    }
}

/// Decodes all of `bytes` into a new vector.
///
/// # Errors
///
/// The error of the first invalid character.
pub fn decode_to_vec(bytes: &[u8]) -> Result<Vec<CodePoint>, Error> {
    let mut out = Vec::new();
    match decode_into(bytes, &mut out).error {
        None => Ok(out),
        Some(err) => Err(err),
    }
}

/// The UTF-8 encoding of one code point.
///
/// Iterating yields the encoded bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoded {
    bytes: [u8; 4],
    len: u8,
}

impl Encoded {
    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The encoding as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `encode` only produces well-formed sequences for scalar
        // values.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Number of bytes, 1 to 4.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; every code point encodes to at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl IntoIterator for Encoded {
    type Item = u8;
    type IntoIter = iter::Take<core::array::IntoIter<u8, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter().take(self.len())
    }
}

/// Encodes a code point as UTF-8 (RFC 3629 section 3).
///
/// ```rust
/// use utf8dfa::CodePoint;
///
/// assert_eq!(utf8dfa::encode(CodePoint::from('$')).as_bytes(), b"\x24");
/// assert_eq!(utf8dfa::encode(CodePoint::from('£')).as_bytes(), b"\xC2\xA3");
/// assert_eq!(utf8dfa::encode(CodePoint::from('€')).as_bytes(), b"\xE2\x82\xAC");
/// assert_eq!(utf8dfa::encode(CodePoint::from('\u{10348}')).as_bytes(), b"\xF0\x90\x8D\x88");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn encode(cp: CodePoint) -> Encoded {
    let v = cp.value();
    let mut bytes = [0; 4];
    let len = match v {
        0..=0x7F => {
            bytes[0] = v as u8;
            1
        }
        0x80..=0x7FF => {
            bytes[0] = 0xC0 | (v >> 6) as u8;
            bytes[1] = 0x80 | (v & 0x3F) as u8;
            2
        }
        0x800..=0xFFFF => {
            bytes[0] = 0xE0 | (v >> 12) as u8;
            bytes[1] = 0x80 | ((v >> 6) & 0x3F) as u8;
            bytes[2] = 0x80 | (v & 0x3F) as u8;
            3
        }
        _ => {
            bytes[0] = 0xF0 | (v >> 18) as u8;
            bytes[1] = 0x80 | ((v >> 12) & 0x3F) as u8;
            bytes[2] = 0x80 | ((v >> 6) & 0x3F) as u8;
            bytes[3] = 0x80 | (v & 0x3F) as u8;
            4
        }
    };
    Encoded { bytes, len }
}

/// Appends the encoding of `cp` to `out` and returns the number of bytes
/// written.
pub fn encode_into<E>(cp: CodePoint, out: &mut E) -> usize
where
    E: Extend<u8>,
{
    let encoded = encode(cp);
    out.extend(encoded);
    encoded.len()
}

/// Appends the encoding of every code point to `out` and returns the number of
/// bytes written.
pub fn encode_all_into<I, E>(code_points: I, out: &mut E) -> usize
where
    I: IntoIterator<Item = CodePoint>,
    E: Extend<u8>,
{
    let mut written = 0;
    out.extend(code_points.into_iter().flat_map(|cp| {
        let encoded = encode(cp);
        written += encoded.len();
        encoded
    }));
    written
}

/// Encodes every code point into a new string.
///
/// ```rust
/// use utf8dfa::CodePoint;
///
/// let text = utf8dfa::encode_to_vec("h€llo".chars().map(CodePoint::from));
/// assert_eq!(text, "h€llo".as_bytes());
/// ```
pub fn encode_to_vec<I>(code_points: I) -> Vec<u8>
where
    I: IntoIterator<Item = CodePoint>,
{
    let mut out = Vec::new();
    encode_all_into(code_points, &mut out);
    out
}

/// Outcome of [`sanitize_into`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sanitized {
    /// Bytes pushed into the sink, replacements included.
    pub written: usize,
    /// Number of invalid runs that were replaced.
    pub replacements: usize,
}

/// Copies `bytes` to `out`, replacing each invalid run with U+FFFD.
///
/// See [`sanitize_into_with`].
pub fn sanitize_into<E>(bytes: &[u8], out: &mut E) -> Sanitized
where
    E: Extend<u8>,
{
    sanitize_into_with(bytes, out, CodePoint::REPLACEMENT_CHARACTER)
}

/// Copies `bytes` to `out`, replacing each invalid run with `replacement`.
///
/// Valid characters are copied unchanged. When a character is rejected, the
/// encoding of `replacement` is written and copying resumes at the next byte
/// that could start a character (ASCII or `C2..=F4`). A run of garbage
/// therefore becomes a single replacement, and a valid character right after
/// a truncated one is kept.
///
/// ```rust
/// use utf8dfa::{CodePoint, Sanitized};
///
/// let mut out = Vec::new();
/// let report = utf8dfa::sanitize_into_with(b"a\xE2\x82b\x80\x80c", &mut out, CodePoint::from('?'));
/// assert_eq!(out, b"a?b?c");
/// assert_eq!(report, Sanitized { written: 5, replacements: 2 });
/// ```
pub fn sanitize_into_with<E>(bytes: &[u8], out: &mut E, replacement: CodePoint) -> Sanitized
where
    E: Extend<u8>,
{
    let replacement = encode(replacement);
    let mut report = Sanitized::default();
    let mut pos = 0;
    while pos < bytes.len() {
        let step = dfa::copy_and_advance_forward_once(&bytes[pos..], out);
        if step.is_accept() {
            report.written += step.len;
            pos += step.len;
            continue;
        }

        let skipped = 1 + find_leading_byte(&bytes[pos + 1..]);
        debug!(
            offset = pos,
            skipped,
            state = ?step.state,
            "replaced invalid UTF-8"
        );
        out.extend(replacement);
        report.written += replacement.len();
        report.replacements += 1;
        pos += skipped;
    }
    report
}

/// Returns `bytes` as a string, replacing each invalid run with U+FFFD.
///
/// Valid input is borrowed.
///
/// ```rust
/// use std::borrow::Cow;
///
/// assert!(matches!(utf8dfa::sanitize(b"fine"), Cow::Borrowed("fine")));
/// assert_eq!(utf8dfa::sanitize(b"bad \xFF\xFE end"), "bad \u{FFFD} end");
/// ```
#[must_use]
pub fn sanitize(bytes: &[u8]) -> Cow<'_, str> {
    sanitize_with(bytes, CodePoint::REPLACEMENT_CHARACTER)
}

/// Like [`sanitize`], with a custom replacement.
#[must_use]
pub fn sanitize_with(bytes: &[u8], replacement: CodePoint) -> Cow<'_, str> {
    let valid = find_invalid(bytes);
    if valid == bytes.len() {
        // SAFETY: `find_invalid` accepted every character.
        return Cow::Borrowed(unsafe { core::str::from_utf8_unchecked(bytes) });
    }

    let mut out = Vec::with_capacity(bytes.len() + replacement.len_utf8());
    out.extend_from_slice(&bytes[..valid]);
    sanitize_into_with(&bytes[valid..], &mut out, replacement);
    // SAFETY: the prefix was accepted by `find_invalid`, and `sanitize_into_with`
    // only writes accepted characters and the encoding of a code point.
    Cow::Owned(unsafe { String::from_utf8_unchecked(out) })
}
