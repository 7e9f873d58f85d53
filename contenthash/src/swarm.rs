//! Swarm manifests (`swarm-ns`).
//!
//! The hex hash is framed as a `keccak-256` multihash without rehashing and
//! wrapped in a `swarm-manifest` CIDv1.

use contenthash_cid::{parse_cid_bytes, Cid, Multihash};
use contenthash_core::constants::{KECCAK_256, SWARM_MANIFEST};
use contenthash_core::encoding::{decode_hex, encode_hex};
use contenthash_core::error::{ContentHashError, Result};

pub(crate) fn encode(value: &str) -> Result<Vec<u8>> {
    let digest = decode_hex(value)?;
    let multihash = Multihash::wrap(KECCAK_256, &digest)
        .map_err(|e| ContentHashError::InvalidMultihash(e.to_string()))?;

    Ok(Cid::new_v1(SWARM_MANIFEST, multihash).to_bytes())
}

pub(crate) fn decode(bytes: &[u8]) -> Result<String> {
    let cid = parse_cid_bytes(bytes)?;
    Ok(encode_hex(cid.hash().digest()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWARM: &str = "d1de9994b4d039f6548d191eb26786769f580809256b4685ef316805265ea162";

    #[test]
    fn test_digest_is_not_rehashed() {
        let bytes = encode(SWARM).unwrap();
        assert_eq!(&bytes[..5], &[0x01, 0xfa, 0x01, 0x1b, 0x20]);
        assert_eq!(encode_hex(&bytes[5..]), SWARM);
    }

    #[test]
    fn test_accepts_prefixed_hex() {
        assert_eq!(encode(&format!("0x{SWARM}")).unwrap(), encode(SWARM).unwrap());
    }

    #[test]
    fn test_rejects_bad_hex() {
        assert!(matches!(encode("d1d"), Err(ContentHashError::InvalidHex(_))));
    }

    #[test]
    fn test_long_digest_round_trips() {
        let long = "ab".repeat(100);
        let bytes = encode(&long).unwrap();
        assert_eq!(decode(&bytes).unwrap(), long);
    }

    #[test]
    fn test_rejects_digest_over_capacity() {
        let oversized = "ab".repeat(contenthash_core::constants::MAX_DIGEST_SIZE + 1);
        assert!(matches!(
            encode(&oversized),
            Err(ContentHashError::InvalidMultihash(_))
        ));
    }
}
