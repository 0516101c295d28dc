//! Lookup tables for the UTF-8 recognizer.
//!
//! The classes and states follow RFC 3629 section 4. Byte values are first
//! folded into one of twelve classes, and the transition tables are indexed by
//! `(state, class)`. Everything here is `const` data built at compile time.

use crate::error::Error;

/// Byte class used as the column index of the transition tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    /// `00..=7F`
    Ascii = 0,
    /// `80..=8F`
    C1,
    /// `90..=9F`
    C2,
    /// `A0..=BF`
    C3,
    /// `C2..=DF`
    C4,
    /// `E0`
    C5,
    /// `E1..=EC`, `EE..=EF`
    C6,
    /// `ED`
    C7,
    /// `F0`
    C8,
    /// `F1..=F3`
    C9,
    /// `F4`
    C10,
    /// `C0..=C1`, `F5..=FF`
    Illegal,
}

/// Number of classes, i.e. the row width of the transition tables.
pub const CLASS_COUNT: usize = 12;

/// State of the recognizer.
///
/// `S1` to `S7` are in progress: more bytes are needed. The remaining states
/// are terminal. `ErrMissingBytes` is never produced by a transition; it only
/// appears once the input ends while a walk is still in progress (see
/// [`ending_state`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    /// Forward: one continuation byte left.
    /// Backward: one continuation byte seen.
    S1 = 0,
    /// Forward: after `E0`, the next byte must be `A0..=BF`.
    /// Backward: two continuation bytes seen, the earlier one in `80..=9F`.
    S2,
    /// Forward: after `ED`, the next byte must be `80..=9F`.
    /// Backward: two continuation bytes seen, the earlier one in `A0..=BF`.
    S3,
    /// Forward: two continuation bytes left.
    /// Backward: three continuation bytes seen, the earliest in `80..=8F`.
    S4,
    /// Forward: after `F0`, the next byte must be `90..=BF`.
    /// Backward: three continuation bytes seen, the earliest in `90..=BF`.
    S5,
    /// Forward: after `F1..=F3`, three continuation bytes left.
    S6,
    /// Forward: after `F4`, the next byte must be `80..=8F`.
    S7,
    /// A complete, valid character was recognized.
    Accept,
    /// A leading byte was expected.
    ErrLeadingByte,
    /// The character is overlong.
    ErrOverlong,
    /// A continuation byte was expected.
    ErrContinuation,
    /// The input ended mid-character.
    ErrMissingBytes,
}

impl State {
    /// Returns `true` while the walk still needs bytes.
    #[inline]
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        (self as u8) < (State::Accept as u8)
    }

    /// Maps a terminal error state to its [`Error`].
    ///
    /// Returns `None` for `Accept` and for in-progress states.
    #[must_use]
    pub const fn to_error(self) -> Option<Error> {
        match self {
            State::ErrLeadingByte => Some(Error::LeadingByte),
            State::ErrOverlong => Some(Error::OverlongEncoded),
            State::ErrContinuation => Some(Error::ContinuationByte),
            State::ErrMissingBytes => Some(Error::MissingByte),
            _ => None,
        }
    }
}

/// What a non-ASCII leading byte contributes to a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingByteInfo {
    /// State entered after consuming the byte.
    pub next_state: State,
    /// Code point bits carried by the byte, not yet shifted into place.
    pub data: u8,
}

const fn class_of(byte: u8) -> CharClass {
    match byte {
        0x00..=0x7F => CharClass::Ascii,
        0x80..=0x8F => CharClass::C1,
        0x90..=0x9F => CharClass::C2,
        0xA0..=0xBF => CharClass::C3,
        0xC2..=0xDF => CharClass::C4,
        0xE0 => CharClass::C5,
        0xE1..=0xEC | 0xEE..=0xEF => CharClass::C6,
        0xED => CharClass::C7,
        0xF0 => CharClass::C8,
        0xF1..=0xF3 => CharClass::C9,
        0xF4 => CharClass::C10,
        0xC0..=0xC1 | 0xF5..=0xFF => CharClass::Illegal,
    }
}

const fn build_classes() -> [CharClass; 256] {
    let mut table = [CharClass::Ascii; 256];
    let mut i = 0;
    while i < 256 {
        #[allow(clippy::cast_possible_truncation)]
        {
            table[i] = class_of(i as u8);
        }
        i += 1;
    }
    table
}

const fn leading_info_of(byte: u8) -> LeadingByteInfo {
    let (next_state, data) = match byte {
        0xC0..=0xC1 => (State::ErrOverlong, byte),
        0xC2..=0xDF => (State::S1, byte & 0x1F),
        0xE0 => (State::S2, 0x00),
        0xED => (State::S3, 0x0D),
        0xE1..=0xEF => (State::S4, byte & 0x0F),
        0xF0 => (State::S5, 0x00),
        0xF1..=0xF3 => (State::S6, byte & 0x07),
        0xF4 => (State::S7, 0x04),
        _ => (State::ErrLeadingByte, byte),
    };
    LeadingByteInfo { next_state, data }
}

const fn build_leading_bytes() -> [LeadingByteInfo; 128] {
    let mut table = [LeadingByteInfo {
        next_state: State::ErrLeadingByte,
        data: 0,
    }; 128];
    let mut i = 0;
    while i < 128 {
        #[allow(clippy::cast_possible_truncation)]
        {
            table[i] = leading_info_of(0x80 + i as u8);
        }
        i += 1;
    }
    table
}

/// Class of every byte value.
pub static CHAR_CLASSES: [CharClass; 256] = build_classes();

/// Leading-byte info for `0x80..=0xFF`, indexed by `byte - 0x80`.
pub static LEADING_BYTES: [LeadingByteInfo; 128] = build_leading_bytes();

use State::{
    Accept as ACC, ErrContinuation as CNT, ErrLeadingByte as LDB, ErrMissingBytes as MIS,
    ErrOverlong as OVL, S1, S2, S3, S4, S5,
};

/// Forward transitions, rows `S1..=S7`.
#[rustfmt::skip]
pub static FORWARD: [[State; CLASS_COUNT]; 7] = [
    //  ASC   C1   C2   C3   C4   C5   C6   C7   C8   C9  C10  ILL
    [   CNT, ACC, ACC, ACC, CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT ], // S1
    [   CNT, OVL, OVL, S1,  CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT ], // S2
    [   CNT, S1,  S1,  CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT ], // S3
    [   CNT, S1,  S1,  S1,  CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT ], // S4
    [   CNT, OVL, S4,  S4,  CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT ], // S5
    [   CNT, S4,  S4,  S4,  CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT ], // S6
    [   CNT, S4,  CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT, CNT ], // S7
];

/// Backward transitions, rows `S1..=S5`.
///
/// A backward walk starts in `S1` after the last continuation byte and moves
/// towards the leading byte, so the rows count continuation bytes already seen
/// and remember the range of the one nearest the leading byte.
#[rustfmt::skip]
pub static BACKWARD: [[State; CLASS_COUNT]; 5] = [
    //  ASC   C1   C2   C3   C4   C5   C6   C7   C8   C9  C10  ILL
    [   CNT, S2,  S2,  S3,  ACC, CNT, CNT, CNT, CNT, CNT, CNT, CNT ], // S1
    [   CNT, S4,  S5,  S5,  CNT, OVL, ACC, ACC, MIS, MIS, MIS, CNT ], // S2
    [   CNT, S4,  S5,  S5,  CNT, ACC, ACC, CNT, MIS, MIS, MIS, CNT ], // S3
    [   LDB, LDB, LDB, LDB, LDB, LDB, LDB, LDB, OVL, ACC, ACC, LDB ], // S4
    [   LDB, LDB, LDB, LDB, LDB, LDB, LDB, LDB, ACC, ACC, LDB, LDB ], // S5
];

/// Maps the state a walk stopped in to the state it reports.
///
/// In-progress states become `ErrMissingBytes`; terminal states are kept.
#[rustfmt::skip]
pub static ENDING: [State; 12] = [
    // S1  S2   S3   S4   S5   S6   S7
    MIS, MIS, MIS, MIS, MIS, MIS, MIS,
    // Accept ErrLeadingByte ErrOverlong ErrContinuation ErrMissingBytes
    ACC, LDB, OVL, CNT, MIS,
];

/// Classifies a byte.
#[inline]
#[must_use]
pub fn classify(byte: u8) -> CharClass {
    CHAR_CLASSES[usize::from(byte)]
}

/// Looks up a non-ASCII leading byte.
///
/// ASCII bytes are handled before any table lookup; passing one is a logic
/// error and is caught in debug builds.
#[inline]
#[must_use]
pub fn leading_byte_info(byte: u8) -> LeadingByteInfo {
    debug_assert!(byte >= 0x80, "ASCII has no leading-byte entry");
    LEADING_BYTES[usize::from(byte & 0x7F)]
}

/// One forward transition from an in-progress state.
#[inline]
#[must_use]
pub fn step_forward(state: State, byte: u8) -> State {
    debug_assert!(state.is_in_progress());
    FORWARD[state as usize][classify(byte) as usize]
}

/// One backward transition from an in-progress state.
///
/// Only `S1..=S5` have backward rows; a backward walk never reaches `S6` or
/// `S7`.
#[inline]
#[must_use]
pub fn step_backward(state: State, byte: u8) -> State {
    debug_assert!((state as usize) < BACKWARD.len());
    BACKWARD[state as usize][classify(byte) as usize]
}

/// The state reported for a walk that stopped in `state`.
#[inline]
#[must_use]
pub fn ending_state(state: State) -> State {
    ENDING[state as usize]
}
