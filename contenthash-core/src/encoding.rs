//! Hex helpers.

use crate::error::Result;

/// Decodes a hex string, with or without a leading `0x`.
///
/// Odd-length and non-hex input is rejected.
pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    Ok(hex::decode(digits)?)
}

/// Encodes bytes as lowercase hex without a prefix.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
