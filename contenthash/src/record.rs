//! Hex-encoded content hash records.

use tracing::{debug, instrument};

use contenthash_core::error::Result;
use contenthash_core::{Codec, ContentHash};

use crate::profile::Profile;

/// Encodes a value as a hex content hash (lowercase, no `0x`).
///
/// # Errors
///
/// Propagates the namespace's failure: bad hex for `swarm`, an unparseable
/// CID for `ipfs`, a non-cryptographic name for `ipns`, bad base64url for
/// `skynet` and `arweave`.
#[instrument(skip(value))]
pub fn encode(codec: Codec, value: &str) -> Result<String> {
    let payload = Profile::for_codec(codec).encode(value)?;
    let content_hash = ContentHash::with_codec(codec, payload);

    debug!(%codec, len = content_hash.payload().len(), "Encoded content hash");
    Ok(content_hash.to_hex())
}

/// Encodes a value under a codec given by name.
///
/// Unknown names fail with `UnrecognizedCodec`.
pub fn encode_named(name: &str, value: &str) -> Result<String> {
    encode(name.parse()?, value)
}

/// Decodes a hex content hash (with or without `0x`) to its text form.
///
/// Unknown tags decode their payload as UTF-8.
#[instrument]
pub fn decode(content_hash: &str) -> Result<String> {
    let content_hash = ContentHash::from_hex(content_hash)?;

    let profile = match content_hash.codec() {
        Some(codec) => Profile::for_codec(codec),
        None => {
            debug!(tag = content_hash.tag(), "Unrecognized codec tag, decoding as UTF-8");
            Profile::Utf8
        }
    };

    profile.decode(content_hash.payload())
}

/// Returns the codec of a hex content hash, or `None` if the tag is unknown.
///
/// Only the tag is read; the payload is never inspected.
pub fn get_codec(content_hash: &str) -> Result<Option<Codec>> {
    Ok(ContentHash::from_hex(content_hash)?.codec())
}
