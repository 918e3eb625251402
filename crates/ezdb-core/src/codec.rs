//! Integer value codec
//!
//! Integers are stored as their base-10 ASCII representation so that the
//! values stay readable with any other LevelDB tooling.

use crate::error::{Error, Result};
use std::num::ParseIntError;

/// Encode an i64 as a base-10 string
pub fn encode_i64(value: i64) -> String {
    value.to_string()
}

/// Encode a u64 as a base-10 string
pub fn encode_u64(value: u64) -> String {
    value.to_string()
}

/// Decode a base-10 string written by [`encode_i64`]
pub fn decode_i64(s: &str) -> Result<i64> {
    s.parse().map_err(|source| invalid(s, source))
}

/// Decode a base-10 string written by [`encode_u64`]
///
/// Unsigned values carry no sign, so a leading `+` is rejected.
pub fn decode_u64(s: &str) -> Result<u64> {
    if s.starts_with('+') {
        // The bare sign fails with the same InvalidDigit kind as any other stray byte
        return "+".parse::<u64>().map_err(|source| invalid(s, source));
    }
    s.parse().map_err(|source| invalid(s, source))
}

fn invalid(s: &str, source: ParseIntError) -> Error {
    Error::InvalidInteger {
        value: s.to_string(),
        source,
    }
}
