//! Validating cursor movement over UTF-8 bytes.
//!
//! A cursor is a byte slice plus an index into it. The slice end bounds forward
//! movement and index `0` bounds backward movement; functions that take a
//! `bound` narrow that range further. Every step runs the DFA, so a cursor only
//! moves across complete, valid characters. When a step fails the cursor is
//! left where it was and the [`Error`] says why.
//!
//! The functions keep no state between calls. For iteration over decoded
//! characters see [`Chars`] and [`CharIndices`].

use core::{fmt, iter::FusedIterator};

use bstr::BStr;

use crate::{code_point::CodePoint, dfa, error::Error};

/// Result of moving a cursor by a number of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Advance {
    /// Where the cursor ended up.
    pub pos: usize,
    /// Steps not taken because the bound was reached first.
    pub remaining: usize,
}

/// Moves `pos` past the character that starts there.
///
/// # Errors
///
/// [`Error::MissingByte`] when `pos` is at (or past) the end, otherwise the
/// error of the character at `pos`.
///
/// ```rust
/// use utf8dfa::{Error, iter};
///
/// let text = "a€".as_bytes();
/// assert_eq!(iter::next(text, 0), Ok(1));
/// assert_eq!(iter::next(text, 1), Ok(4));
/// assert_eq!(iter::next(text, 4), Err(Error::MissingByte));
/// assert_eq!(iter::next(text, 2), Err(Error::LeadingByte));
/// ```
#[inline]
pub fn next(bytes: &[u8], pos: usize) -> Result<usize, Error> {
    let rest = bytes.get(pos..).unwrap_or_default();
    Ok(pos + dfa::advance_forward_once(rest).into_result()?)
}

/// Moves `pos` back to the start of the character that ends there.
///
/// A `pos` past the end of the slice is treated as the end.
///
/// # Errors
///
/// [`Error::MissingByte`] when `pos` is `0`, otherwise the error of the
/// character that ends at `pos`.
#[inline]
pub fn prev(bytes: &[u8], pos: usize) -> Result<usize, Error> {
    let pos = pos.min(bytes.len());
    let len = dfa::advance_backward_once(&bytes[..pos]).into_result()?;
    Ok(pos - len)
}

/// Moves `pos` forward until it reaches `bound`.
///
/// Only `bytes[..bound]` is read, so `bound` must fall on a character boundary
/// for the walk to succeed.
///
/// # Errors
///
/// The error of the first invalid character, or [`Error::MissingByte`] when
/// the last character is cut by `bound`.
pub fn advance_to(bytes: &[u8], mut pos: usize, bound: usize) -> Result<usize, Error> {
    let head = &bytes[..bound.min(bytes.len())];
    while pos < head.len() {
        pos = next(head, pos)?;
    }
    Ok(pos)
}

/// Moves `pos` by `n` characters, forward for positive `n` and backward for
/// negative `n`, without crossing `bound`.
///
/// A forward move stops once `pos >= bound` and a backward move once
/// `pos <= bound`. Steps that could not be taken are reported in
/// [`Advance::remaining`].
///
/// # Errors
///
/// The error of the first invalid character met on the way. Bytes beyond
/// `bound` are never read.
///
/// ```rust
/// use utf8dfa::iter::{self, Advance};
///
/// let text = "h€llo".as_bytes();
/// assert_eq!(iter::advance(text, 0, 3, text.len()), Ok(Advance { pos: 5, remaining: 0 }));
/// assert_eq!(iter::advance(text, 5, -5, 0), Ok(Advance { pos: 0, remaining: 2 }));
/// ```
pub fn advance(bytes: &[u8], mut pos: usize, n: isize, bound: usize) -> Result<Advance, Error> {
    let mut remaining = n.unsigned_abs();
    if n >= 0 {
        let head = &bytes[..bound.min(bytes.len())];
        while remaining > 0 && pos < head.len() {
            pos = next(head, pos)?;
            remaining -= 1;
        }
    } else {
        pos = pos.min(bytes.len());
        while remaining > 0 && pos > bound {
            pos = bound + prev(&bytes[bound..], pos - bound)?;
            remaining -= 1;
        }
    }
    Ok(Advance { pos, remaining })
}

/// Iterator over the characters of a byte slice, from either end.
///
/// Yields `Err` for the first invalid character met from the end being
/// consumed and then nothing more.
///
/// ```rust
/// use utf8dfa::{CodePoint, Error};
///
/// let mut chars = utf8dfa::chars(b"a\xE2\x82\xAC\xFFz");
/// assert_eq!(chars.next(), Some(Ok(CodePoint::from('a'))));
/// assert_eq!(chars.next_back(), Some(Ok(CodePoint::from('z'))));
/// assert_eq!(chars.next(), Some(Ok(CodePoint::from('€'))));
/// assert_eq!(chars.next(), Some(Err(Error::LeadingByte)));
/// assert_eq!(chars.next(), None);
/// ```
#[derive(Clone)]
pub struct Chars<'a> {
    bytes: &'a [u8],
}

impl<'a> Chars<'a> {
    /// The bytes not yet visited from either end.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Returns an iterator over the characters of `bytes`.
#[must_use]
pub fn chars(bytes: &[u8]) -> Chars<'_> {
    Chars { bytes }
}

impl fmt::Debug for Chars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chars")
            .field("remaining", &BStr::new(self.bytes))
            .finish()
    }
}

impl Iterator for Chars<'_> {
    type Item = Result<CodePoint, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            return None;
        }
        match dfa::decode_and_advance_forward_once(self.bytes).into_result() {
            Ok((cp, len)) => {
                self.bytes = &self.bytes[len..];
                Some(Ok(cp))
            }
            Err(err) => {
                self.bytes = &[];
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // An error ends iteration, so only non-emptiness guarantees an item.
        (usize::from(!self.bytes.is_empty()), Some(self.bytes.len()))
    }
}

impl DoubleEndedIterator for Chars<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            return None;
        }
        match dfa::decode_and_advance_backward_once(self.bytes).into_result() {
            Ok((cp, len)) => {
                self.bytes = &self.bytes[..self.bytes.len() - len];
                Some(Ok(cp))
            }
            Err(err) => {
                self.bytes = &[];
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Chars<'_> {}

/// Like [`Chars`], also yielding the byte offset where each character starts.
#[derive(Clone, Debug)]
pub struct CharIndices<'a> {
    front: usize,
    chars: Chars<'a>,
}

impl<'a> CharIndices<'a> {
    /// The bytes not yet visited from either end.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.chars.as_bytes()
    }

    /// Byte offset of the next character from the front.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.front
    }
}

/// Returns an iterator over the characters of `bytes` and their offsets.
///
/// ```rust
/// let offsets: Vec<usize> = utf8dfa::char_indices("£€$".as_bytes())
///     .map(|item| item.map(|(at, _)| at))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(offsets, [0, 2, 5]);
/// ```
#[must_use]
pub fn char_indices(bytes: &[u8]) -> CharIndices<'_> {
    CharIndices {
        front: 0,
        chars: chars(bytes),
    }
}

impl Iterator for CharIndices<'_> {
    type Item = Result<(usize, CodePoint), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let before = self.chars.bytes.len();
        let item = self.chars.next()?;
        let at = self.front;
        self.front += before - self.chars.bytes.len();
        Some(item.map(|cp| (at, cp)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl DoubleEndedIterator for CharIndices<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.chars.next_back()?;
        Some(item.map(|cp| (self.front + self.chars.bytes.len(), cp)))
    }
}

impl FusedIterator for CharIndices<'_> {}
