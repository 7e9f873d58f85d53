//! The binary content hash frame: `varint(tag) || payload`.

use std::fmt;
use std::str::FromStr;

use unsigned_varint::{decode as varint_decode, encode as varint_encode};

use super::Codec;
use crate::constants::{MAX_TAG, MAX_TAG_VARINT_LEN};
use crate::encoding::{decode_hex, encode_hex};
use crate::error::{ContentHashError, Result};

/// A decoded content hash: the namespace tag and the namespace-specific payload.
///
/// This is the value stored in an ENS `contenthash` record. The tag is kept as
/// a raw integer so that records written with unknown namespaces still parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentHash {
    tag: u64,
    payload: Vec<u8>,
}

impl ContentHash {
    /// Creates a content hash from a tag and payload.
    ///
    /// Tags above [`MAX_TAG`] are rejected, since their varint could not be
    /// read back by [`ContentHash::from_bytes`].
    pub fn new(tag: u64, payload: Vec<u8>) -> Result<Self> {
        if tag > MAX_TAG {
            return Err(ContentHashError::InvalidVarint(format!(
                "tag {tag:#x} needs more than {MAX_TAG_VARINT_LEN} bytes"
            )));
        }
        Ok(Self { tag, payload })
    }

    /// Creates a content hash for a known codec.
    pub fn with_codec(codec: Codec, payload: Vec<u8>) -> Self {
        Self {
            tag: codec.tag(),
            payload,
        }
    }

    /// Splits raw bytes into the leading varint tag and the payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (tag, payload) = varint_decode::u64(bytes)
            .map_err(|e| ContentHashError::InvalidVarint(e.to_string()))?;

        let tag_len = bytes.len() - payload.len();
        if tag_len > MAX_TAG_VARINT_LEN {
            return Err(ContentHashError::InvalidVarint(format!(
                "tag uses {tag_len} bytes, at most {MAX_TAG_VARINT_LEN} allowed"
            )));
        }

        Self::new(tag, payload.to_vec())
    }

    /// Parses a hex string, with or without a leading `0x`.
    pub fn from_hex(value: &str) -> Result<Self> {
        Self::from_bytes(&decode_hex(value)?)
    }

    /// Serializes to `varint(tag) || payload`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = varint_encode::u64_buffer();
        let tag = varint_encode::u64(self.tag, &mut buf);

        let mut bytes = Vec::with_capacity(tag.len() + self.payload.len());
        bytes.extend_from_slice(tag);
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Serializes to lowercase hex without a prefix.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.to_bytes())
    }

    /// Returns the raw namespace tag.
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// Returns the namespace, or `None` for an unrecognized tag.
    pub fn codec(&self) -> Option<Codec> {
        Codec::from_tag(self.tag)
    }

    /// Returns the namespace-specific payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consumes the frame, returning the payload.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ContentHash {
    type Err = ContentHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
