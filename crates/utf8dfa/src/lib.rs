//! Table-driven UTF-8 validation, decoding, encoding and sanitizing.
//!
//! At the bottom sits a DFA ([`dfa`]) that recognizes exactly the byte
//! sequences RFC 3629 allows, walking either forward from the start of a
//! character or backward from its end. On top of it:
//!
//! - [`iter`] moves a `(bytes, index)` cursor across characters, validating
//!   every step, and provides the [`Chars`] and [`CharIndices`] iterators;
//! - [`unchecked`] moves the same cursors without validating, for input that
//!   is already known to be valid;
//! - the crate root holds whole-range algorithms: [`is_valid`],
//!   [`find_invalid`], [`str_len`], [`decode`], [`encode`] and [`sanitize`].
//!
//! ```rust
//! use utf8dfa::{CodePoint, Error};
//!
//! let bytes = b"\xED\x95\x9C\xF0\x90\x8D\x88";
//! assert!(utf8dfa::is_valid(bytes));
//! assert_eq!(utf8dfa::str_len(bytes), Ok(2));
//!
//! let broken = b"caf\xC3";
//! assert_eq!(utf8dfa::find_invalid(broken), 3);
//! assert_eq!(utf8dfa::str_len(broken), Err(Error::MissingByte));
//! assert_eq!(utf8dfa::sanitize(broken), "caf\u{FFFD}");
//!
//! let euro = CodePoint::new(0x20AC).unwrap();
//! assert_eq!(utf8dfa::encode(euro).as_bytes(), b"\xE2\x82\xAC");
//! ```
//!
//! The crate is `no_std` and needs `alloc` only for the owned helpers.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod trace;

mod algorithm;
mod code_point;
pub mod code_unit;
pub mod dfa;
mod error;
pub mod iter;
pub mod unchecked;

#[cfg(test)]
mod tests;

pub use algorithm::{
    Decoded, Encoded, Sanitized, decode, decode_first, decode_into, decode_last, decode_to_vec,
    encode, encode_all_into, encode_into, encode_to_vec, find_invalid, find_leading_byte, is_valid,
    sanitize, sanitize_into, sanitize_into_with, sanitize_with, str_len, str_len_partial,
};
pub use code_point::CodePoint;
pub use error::{CodePointError, DecodeError, Error, ParseCodePointError};
pub use iter::{Advance, CharIndices, Chars, char_indices, chars};
