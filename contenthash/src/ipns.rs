//! IPNS names (`ipns-ns`).
//!
//! Names are stored as CIDv1 with the `libp2p-key` codec. Only cryptographic
//! identifiers are accepted on encode; short inlined values written by older
//! tooling (DNSLink names, mostly) still decode, with a deprecation warning.

use tracing::{debug, warn};

use contenthash_cid::{parse_cid, parse_cid_bytes, to_base_string, to_v1, Base, Cid, Multihash};
use contenthash_core::constants::{
    BASE36_PREFIX, IDENTITY, LIBP2P_KEY, MIN_INLINED_KEY_DIGEST_SIZE,
    MIN_INLINED_KEY_MULTIHASH_SIZE,
};
use contenthash_core::error::{ContentHashError, Result};

/// Returns true if a multihash can be a libp2p public key identifier.
///
/// Identity multihashes shorter than an inlined ED25519 key are rejected, as
/// is anything that does not decode as a multihash.
pub fn is_cryptographic_identifier(multihash: &[u8]) -> bool {
    if multihash.len() >= MIN_INLINED_KEY_MULTIHASH_SIZE {
        return true;
    }

    match Multihash::from_bytes(multihash) {
        Ok(mh) => {
            !(mh.code() == IDENTITY && usize::from(mh.size()) < MIN_INLINED_KEY_DIGEST_SIZE)
        }
        Err(_) => false,
    }
}

pub(crate) fn encode(value: &str) -> Result<Vec<u8>> {
    let multihash = match parse_name(value) {
        Ok(cid) => *cid.hash(),
        Err(err) => {
            debug!(%err, "IPNS name is not a CID, reading as base58 peer ID");
            parse_legacy_peer_id(value)?
        }
    };

    if !is_cryptographic_identifier(&multihash.to_bytes()) {
        return Err(ContentHashError::UnsupportedIdentifier);
    }

    Ok(Cid::new_v1(LIBP2P_KEY, multihash).to_bytes())
}

pub(crate) fn decode(bytes: &[u8]) -> Result<String> {
    let cid = to_v1(parse_cid_bytes(bytes)?)?;

    if !is_cryptographic_identifier(&cid.hash().to_bytes()) {
        warn!(
            "use of non-cryptographic identifiers in ipns-ns is deprecated and will be removed, \
             migrate to ED25519 libp2p-key"
        );
        // each digest byte is one code point
        return Ok(cid.hash().digest().iter().copied().map(char::from).collect());
    }

    to_base_string(&cid, Base::Base36Lower)
}

/// Parses a CID, reading `k`-prefixed names as base36.
fn parse_name(value: &str) -> Result<Cid> {
    match value.strip_prefix(BASE36_PREFIX) {
        Some(digits) => {
            let bytes = Base::Base36Lower
                .decode(digits)
                .map_err(|e| ContentHashError::InvalidCid(e.to_string()))?;
            parse_cid_bytes(&bytes)
        }
        None => parse_cid(value),
    }
}

/// Reads a bare base58btc peer ID (`12D3KooW...`) as an inlined key.
///
/// The two multihash header bytes are dropped and the rest is wrapped as an
/// identity digest, whatever hash function the header named.
fn parse_legacy_peer_id(value: &str) -> Result<Multihash> {
    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|e| ContentHashError::InvalidBase58(e.to_string()))?;
    let digest = bytes.get(2..).unwrap_or_default();

    Multihash::wrap(IDENTITY, digest).map_err(|e| ContentHashError::InvalidMultihash(e.to_string()))
}
