//! The UTF-8 recognizer.
//!
//! Every function here consumes at most one character from one end of a slice
//! and reports where the walk stopped. None of them fail: malformed input is
//! reported through the returned [`State`], and the checked layers above turn
//! non-accepting states into [`Error`](crate::Error)s.
//!
//! ```rust
//! use utf8dfa::dfa::{self, State};
//!
//! let step = dfa::advance_forward_once(b"\xE2\x82\xAC!");
//! assert_eq!((step.len, step.state), (3, State::Accept));
//!
//! let step = dfa::advance_backward_once(b"!\xE2\x82\xAC");
//! assert_eq!((step.len, step.state), (3, State::Accept));
//!
//! let step = dfa::advance_forward_once(b"\xF0\x82\x82\xAC");
//! assert_eq!(step.state, State::ErrOverlong);
//! ```

pub mod tables;

pub use tables::{CharClass, LeadingByteInfo, State, classify, leading_byte_info};

use crate::{
    code_point::CodePoint,
    code_unit::{is_ascii, is_continuation_byte},
    error::Error,
};

/// Outcome of a single-character walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Bytes consumed from the end the walk started at. For an accepted
    /// character this is its encoded length.
    pub len: usize,
    /// Terminal state the walk reported.
    pub state: State,
}

impl Step {
    const MISSING: Step = Step {
        len: 0,
        state: State::ErrMissingBytes,
    };

    /// Returns `true` if a character was recognized.
    #[inline]
    #[must_use]
    pub fn is_accept(self) -> bool {
        self.state == State::Accept
    }

    /// The character length, or the reason the walk failed.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] matching the reported state.
    #[inline]
    pub fn into_result(self) -> Result<usize, Error> {
        match self.state.to_error() {
            None => Ok(self.len),
            Some(err) => Err(err),
        }
    }
}

/// Outcome of a single-character walk that also decodes the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStep {
    /// Bytes consumed, as in [`Step::len`].
    pub len: usize,
    /// Terminal state the walk reported.
    pub state: State,
    /// Bits accumulated so far. Only a code point when `state` is `Accept`.
    pub value: u32,
}

impl DecodeStep {
    /// The decoded code point, if the walk accepted.
    #[inline]
    #[must_use]
    pub fn code_point(self) -> Option<CodePoint> {
        if self.state == State::Accept {
            // SAFETY: the tables reject overlong forms, surrogates (ED A0..BF)
            // and anything above F4 8F BF BF, so an accepted walk always
            // decodes to a Unicode scalar value.
            Some(unsafe { CodePoint::new_unchecked(self.value) })
        } else {
            None
        }
    }

    /// The code point and its encoded length, or the reason the walk failed.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] matching the reported state.
    #[inline]
    pub fn into_result(self) -> Result<(CodePoint, usize), Error> {
        match self.code_point() {
            Some(cp) => Ok((cp, self.len)),
            None => Err(self.state.to_error().unwrap_or(Error::MissingByte)),
        }
    }

    const fn missing() -> DecodeStep {
        DecodeStep {
            len: 0,
            state: State::ErrMissingBytes,
            value: 0,
        }
    }
}

/// Recognizes the character at the front of `bytes`.
///
/// Empty input reports `ErrMissingBytes` with `len == 0`.
#[inline]
#[must_use]
pub fn advance_forward_once(bytes: &[u8]) -> Step {
    let Some(&lead) = bytes.first() else {
        return Step::MISSING;
    };
    if is_ascii(lead) {
        return Step {
            len: 1,
            state: State::Accept,
        };
    }

    let mut state = leading_byte_info(lead).next_state;
    let mut len = 1;
    while len < bytes.len() && state.is_in_progress() {
        state = tables::step_forward(state, bytes[len]);
        len += 1;
    }

    Step {
        len,
        state: tables::ending_state(state),
    }
}

/// Recognizes the character at the back of `bytes`.
///
/// On `Accept` the character starts at `bytes.len() - step.len`. A last byte
/// that is neither ASCII nor a continuation byte cannot end a character and
/// reports `ErrContinuation`.
#[inline]
#[must_use]
pub fn advance_backward_once(bytes: &[u8]) -> Step {
    let Some(&last) = bytes.last() else {
        return Step::MISSING;
    };
    if is_ascii(last) {
        return Step {
            len: 1,
            state: State::Accept,
        };
    }
    if !is_continuation_byte(last) {
        return Step {
            len: 1,
            state: State::ErrContinuation,
        };
    }

    let end = bytes.len() - 1;
    let mut state = State::S1;
    let mut len = 1;
    while len < bytes.len() && state.is_in_progress() {
        state = tables::step_backward(state, bytes[end - len]);
        len += 1;
    }

    Step {
        len,
        state: tables::ending_state(state),
    }
}

/// [`advance_forward_once`], also decoding the character.
#[must_use]
pub fn decode_and_advance_forward_once(bytes: &[u8]) -> DecodeStep {
    let Some(&lead) = bytes.first() else {
        return DecodeStep::missing();
    };
    if is_ascii(lead) {
        return DecodeStep {
            len: 1,
            state: State::Accept,
            value: u32::from(lead),
        };
    }

    let info = leading_byte_info(lead);
    let mut state = info.next_state;
    let mut value = u32::from(info.data);
    let mut len = 1;
    while len < bytes.len() && state.is_in_progress() {
        let byte = bytes[len];
        value = (value << 6) | u32::from(byte & 0x3F);
        state = tables::step_forward(state, byte);
        len += 1;
    }

    DecodeStep {
        len,
        state: tables::ending_state(state),
        value,
    }
}

/// [`advance_backward_once`], also decoding the character.
#[must_use]
pub fn decode_and_advance_backward_once(bytes: &[u8]) -> DecodeStep {
    let Some(&last) = bytes.last() else {
        return DecodeStep::missing();
    };
    if is_ascii(last) {
        return DecodeStep {
            len: 1,
            state: State::Accept,
            value: u32::from(last),
        };
    }
    if !is_continuation_byte(last) {
        return DecodeStep {
            len: 1,
            state: State::ErrContinuation,
            value: 0,
        };
    }

    let end = bytes.len() - 1;
    let mut state = State::S1;
    let mut value = u32::from(last & 0x3F);
    let mut shift = 6;
    let mut len = 1;
    while len < bytes.len() && state.is_in_progress() {
        let byte = bytes[end - len];
        state = tables::step_backward(state, byte);
        if is_continuation_byte(byte) {
            value |= u32::from(byte & 0x3F) << shift;
            shift += 6;
        } else if state == State::Accept {
            value |= u32::from(leading_byte_info(byte).data) << shift;
        }
        len += 1;
    }

    DecodeStep {
        len,
        state: tables::ending_state(state),
        value,
    }
}

/// [`advance_forward_once`], appending the character's bytes to `out` when it
/// is accepted.
///
/// Nothing is written for a rejected character.
#[inline]
pub fn copy_and_advance_forward_once<E>(bytes: &[u8], out: &mut E) -> Step
where
    E: Extend<u8>,
{
    let step = advance_forward_once(bytes);
    if step.is_accept() {
        out.extend(bytes[..step.len].iter().copied());
    }
    step
}

#[cfg(test)]
mod tests;
