//! CID parsing and normalization.
//!
//! Thin wrappers over the `cid` crate that map its errors into
//! [`ContentHashError`] and always hand back CIDv1 where asked.

pub use cid::multibase::Base;

use contenthash_core::constants::MAX_DIGEST_SIZE;
use contenthash_core::error::{ContentHashError, Result};

/// CID with room for inlined identity digests up to [`MAX_DIGEST_SIZE`].
pub type Cid = cid::CidGeneric<MAX_DIGEST_SIZE>;

/// Multihash matching the [`Cid`] digest capacity.
pub type Multihash = multihash::Multihash<MAX_DIGEST_SIZE>;

/// Parses a CID from its string form.
///
/// Accepts base58btc CIDv0 (`Qm...`) and any multibase-prefixed CIDv1.
pub fn parse_cid(value: &str) -> Result<Cid> {
    Cid::try_from(value).map_err(|e| ContentHashError::InvalidCid(e.to_string()))
}

/// Parses a CID from its binary form.
///
/// A bare sha2-256 multihash (`0x12 0x20 ...`) is read as CIDv0.
pub fn parse_cid_bytes(bytes: &[u8]) -> Result<Cid> {
    Cid::try_from(bytes).map_err(|e| ContentHashError::InvalidCid(e.to_string()))
}

/// Upgrades a CIDv0 to CIDv1 (`dag-pb` codec). CIDv1 is returned unchanged.
pub fn to_v1(cid: Cid) -> Result<Cid> {
    cid.into_v1()
        .map_err(|e| ContentHashError::InvalidCid(e.to_string()))
}

/// Stringifies a CID in the given multibase.
///
/// CIDv0 can only be written in base58btc; upgrade it first.
pub fn to_base_string(cid: &Cid, base: Base) -> Result<String> {
    cid.to_string_of_base(base)
        .map_err(|e| ContentHashError::InvalidCid(e.to_string()))
}
