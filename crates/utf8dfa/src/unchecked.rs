//! Cursor movement that trusts its input.
//!
//! These functions never run the DFA. Forward steps take their size from the
//! leading byte and backward steps skip continuation bytes, so they are only
//! correct on valid UTF-8. They exist for callers that validated once (with
//! [`is_valid`](crate::is_valid) or by holding a `&str`) and then move around
//! the same bytes many times.
//!
//! # Safety
//!
//! Every function requires that the bytes it visits are valid UTF-8 and that
//! cursors fall on character boundaries inside the slice. Out-of-range cursors
//! read out of bounds. Debug builds assert the cursor preconditions.

use crate::{
    code_unit::{char_size_from_leading_byte, is_continuation_byte},
    iter::Advance,
};

/// Moves `pos` past the character that starts there.
///
/// # Safety
///
/// `pos < bytes.len()` and `bytes[pos..]` starts with a complete, valid
/// character.
///
/// ```rust
/// let text = "a€".as_bytes();
/// // SAFETY: `text` is a `str` and 1 is a boundary.
/// assert_eq!(unsafe { utf8dfa::unchecked::next(text, 1) }, 4);
/// ```
#[inline]
#[must_use]
pub unsafe fn next(bytes: &[u8], pos: usize) -> usize {
    debug_assert!(pos < bytes.len(), "cursor at or past the end");
    // SAFETY: the caller guarantees `pos` is in bounds.
    let lead = unsafe { *bytes.get_unchecked(pos) };
    pos + char_size_from_leading_byte(lead)
}

/// Moves `pos` back to the start of the character that ends there.
///
/// # Safety
///
/// `0 < pos <= bytes.len()` and `bytes[..pos]` ends with a complete, valid
/// character.
#[inline]
#[must_use]
pub unsafe fn prev(bytes: &[u8], pos: usize) -> usize {
    debug_assert!(pos > 0 && pos <= bytes.len(), "cursor out of range");
    let mut pos = pos - 1;
    // SAFETY: `pos` stays below the caller's in-bounds cursor.
    while pos > 0 && is_continuation_byte(unsafe { *bytes.get_unchecked(pos) }) {
        pos -= 1;
    }
    pos
}

/// Moves `pos` by `n` characters, forward for positive `n`, backward for
/// negative `n`.
///
/// # Safety
///
/// All `|n|` characters exist in the given direction and are valid.
#[must_use]
pub unsafe fn advance(bytes: &[u8], mut pos: usize, n: isize) -> usize {
    if n >= 0 {
        for _ in 0..n {
            // SAFETY: forwarded to the caller.
            pos = unsafe { next(bytes, pos) };
        }
    } else {
        for _ in 0..n.unsigned_abs() {
            // SAFETY: forwarded to the caller.
            pos = unsafe { prev(bytes, pos) };
        }
    }
    pos
}

/// Moves `pos` forward until it reaches `bound`.
///
/// # Safety
///
/// `bound <= bytes.len()`, and `bytes[pos..bound]` is valid UTF-8 starting and
/// ending on character boundaries.
#[must_use]
pub unsafe fn advance_to(bytes: &[u8], mut pos: usize, bound: usize) -> usize {
    debug_assert!(bound <= bytes.len(), "bound past the end");
    while pos < bound {
        // SAFETY: `pos < bound <= bytes.len()` and lies on a boundary.
        pos = unsafe { next(bytes, pos) };
    }
    pos
}

/// Moves `pos` by up to `n` characters without crossing `bound`.
///
/// Forward moves stop once `pos >= bound`, backward moves once `pos <= bound`.
///
/// # Safety
///
/// `bound <= bytes.len()`, and the bytes between `pos` and `bound` are valid
/// UTF-8 starting and ending on character boundaries.
///
/// ```rust
/// use utf8dfa::iter::Advance;
///
/// let text = "h€llo".as_bytes();
/// // SAFETY: `text` is a `str`, 0 and its length are boundaries.
/// let moved = unsafe { utf8dfa::unchecked::advance_bounded(text, 0, 9, text.len()) };
/// assert_eq!(moved, Advance { pos: 7, remaining: 4 });
/// ```
#[must_use]
pub unsafe fn advance_bounded(bytes: &[u8], mut pos: usize, n: isize, bound: usize) -> Advance {
    debug_assert!(bound <= bytes.len(), "bound past the end");
    let mut remaining = n.unsigned_abs();
    if n >= 0 {
        while remaining > 0 && pos < bound {
            // SAFETY: `pos < bound <= bytes.len()` and lies on a boundary.
            pos = unsafe { next(bytes, pos) };
            remaining -= 1;
        }
    } else {
        while remaining > 0 && pos > bound {
            // SAFETY: `0 <= bound < pos` and `pos` lies on a boundary.
            pos = unsafe { prev(bytes, pos) };
            remaining -= 1;
        }
    }
    Advance { pos, remaining }
}

/// Counts the characters before the first NUL byte or the end of `bytes`.
///
/// # Safety
///
/// `bytes` up to the first NUL (or entirely) is valid UTF-8.
#[must_use]
pub unsafe fn str_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    let mut count = 0;
    // SAFETY: the loop condition keeps `pos` in bounds.
    while pos < bytes.len() && unsafe { *bytes.get_unchecked(pos) } != 0 {
        // SAFETY: `pos` is in bounds and on a boundary.
        pos = unsafe { next(bytes, pos) };
        count += 1;
    }
    count
}
