//! Validation and normalization of textual hash representations.
//!
//! A hash of `N` bytes has two accepted textual forms: the plain `2N`-char
//! hex string, and the grouped form with a `-` after every 4 hex characters.
//! Anything else is rejected. Nibble packing is delegated to the `hex`
//! crate and only ever runs on input that passed placement checks here.

use crate::error::HashValueError;

/// Hex characters per separator group in the grouped ("D") form.
pub const GROUP: usize = 4;

/// Length of the grouped form for a plain hex length, counting separators.
pub const fn grouped_len(hex_len: usize) -> usize {
    if hex_len == 0 {
        0
    } else {
        hex_len + (hex_len - 1) / GROUP
    }
}

/// Validates `s` as an `N`-byte hash representation and decodes it.
///
/// Accepts the plain and the grouped form, upper or lower case. Once a
/// separator appears it is mandatory at every group boundary; this falls out
/// of the length check, which admits only the fully separated length, plus
/// the positional check below.
pub(crate) fn parse<const N: usize>(s: &str) -> Result<[u8; N], HashValueError> {
    let hex_len = N * 2;
    let err = || HashValueError::InvalidFormat { expected: N };
    let raw = s.as_bytes();

    let separated = if raw.len() == hex_len {
        false
    } else if raw.len() == grouped_len(hex_len) {
        true
    } else {
        return Err(err());
    };

    let mut stripped = Vec::new();
    let digits: &[u8] = if separated {
        stripped.reserve_exact(hex_len);
        for (i, &b) in raw.iter().enumerate() {
            if i % (GROUP + 1) == GROUP {
                // separator slot
                if b != b'-' {
                    return Err(err());
                }
            } else {
                stripped.push(b);
            }
        }
        &stripped
    } else {
        raw
    };

    // rejects any character outside [0-9a-fA-F], including a stray `-`
    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out).map_err(|_| err())?;
    Ok(out)
}

/// Canonical ("H") form: `2N` lowercase hex characters.
pub(crate) fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Grouped ("D") form: a `-` after every [`GROUP`] characters, none trailing.
pub(crate) fn encode_grouped(bytes: &[u8]) -> String {
    let plain = hex::encode(bytes);
    let mut out = String::with_capacity(grouped_len(plain.len()));
    for (i, c) in plain.chars().enumerate() {
        if i > 0 && i % GROUP == 0 {
            out.push('-');
        }
        out.push(c);
    }
    out
}
