//! Predicates on a single UTF-8 code unit.
//!
//! None of these validate a whole character; they only look at the bit
//! pattern of one byte.

/// `0xxxxxxx`
#[inline]
#[must_use]
pub const fn is_ascii(byte: u8) -> bool {
    byte < 0x80
}

/// `10xxxxxx`
#[inline]
#[must_use]
pub const fn is_continuation_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// A byte that can start a valid multi-byte character: `C2..=F4`.
///
/// `C0` and `C1` only ever start overlong encodings and `F5..=FF` would encode
/// values above U+10FFFF, so neither counts.
#[inline]
#[must_use]
pub const fn is_mb_leading_byte(byte: u8) -> bool {
    byte >= 0xC2 && byte <= 0xF4
}

/// A byte that can start a valid character: ASCII or `C2..=F4`.
#[inline]
#[must_use]
pub const fn is_leading_byte(byte: u8) -> bool {
    is_ascii(byte) || is_mb_leading_byte(byte)
}

/// The size, in bytes, of the character that `byte` claims to start.
///
/// Looks at the bit pattern only: `0xxxxxxx` is 1, `110xxxxx` is 2,
/// `1110xxxx` is 3, `11110xxx` is 4. Continuation bytes and `F8..=FF` return
/// `None`. Overlong and out-of-range leading bytes such as `C0` or `F5` still
/// report a size; the DFA rejects them.
#[must_use]
pub const fn leading_byte_size(byte: u8) -> Option<usize> {
    match byte.leading_ones() {
        0 => Some(1),
        n @ 2..=4 => Some(n as usize),
        _ => None,
    }
}

/// Step size used by the unchecked iterators: `1` for ASCII, otherwise the
/// number of leading one bits.
///
/// The result is only meaningful for leading bytes of valid UTF-8.
#[inline]
#[must_use]
pub const fn char_size_from_leading_byte(byte: u8) -> usize {
    is_ascii(byte) as usize + byte.leading_ones() as usize
}

/// The six payload bits of a continuation byte.
#[inline]
#[must_use]
pub const fn decode_continuation_byte(byte: u8) -> u8 {
    debug_assert!(is_continuation_byte(byte));
    byte & 0x3F
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_all_bytes() {
        for byte in 0..=u8::MAX {
            let kinds = [
                is_ascii(byte),
                is_continuation_byte(byte),
                is_mb_leading_byte(byte),
                matches!(byte, 0xC0 | 0xC1 | 0xF5..=0xFF),
            ];
            assert_eq!(
                kinds.iter().filter(|k| **k).count(),
                1,
                "byte {byte:#04x} must fall in exactly one group"
            );
        }
    }

    #[test]
    fn leading_sizes() {
        assert_eq!(leading_byte_size(b'$'), Some(1));
        assert_eq!(leading_byte_size(0xC2), Some(2));
        assert_eq!(leading_byte_size(0xC0), Some(2));
        assert_eq!(leading_byte_size(0xE2), Some(3));
        assert_eq!(leading_byte_size(0xF0), Some(4));
        assert_eq!(leading_byte_size(0xF7), Some(4));
        assert_eq!(leading_byte_size(0x80), None);
        assert_eq!(leading_byte_size(0xF8), None);
        assert_eq!(leading_byte_size(0xFF), None);
    }

    #[test]
    fn unchecked_sizes_agree_on_leading_bytes() {
        for byte in (0..=u8::MAX).filter(|b| is_leading_byte(*b)) {
            assert_eq!(Some(char_size_from_leading_byte(byte)), leading_byte_size(byte));
        }
    }

    #[test]
    fn continuation_payload() {
        assert_eq!(decode_continuation_byte(0x80), 0);
        assert_eq!(decode_continuation_byte(0xBF), 0x3F);
        assert_eq!(decode_continuation_byte(0xAC), 0x2C);
    }
}
