//! IPFS content (`ipfs-ns`).
//!
//! Stored as binary CIDv1 whatever version the caller supplied.

use contenthash_cid::{parse_cid, parse_cid_bytes, to_base_string, to_v1, Base};
use contenthash_core::constants::LIBP2P_KEY;
use contenthash_core::error::Result;

pub(crate) fn encode(value: &str) -> Result<Vec<u8>> {
    let cid = to_v1(parse_cid(value)?)?;
    Ok(cid.to_bytes())
}

pub(crate) fn decode(bytes: &[u8]) -> Result<String> {
    let cid = to_v1(parse_cid_bytes(bytes)?)?;
    let base = if cid.codec() == LIBP2P_KEY {
        Base::Base36Lower
    } else {
        Base::Base32Lower
    };
    to_base_string(&cid, base)
}
