//! Known content hash vectors for every namespace.

use contenthash::helpers::{cid_for_web, cid_v0_to_v1_base32};
use contenthash::{decode, encode, get_codec, Codec, ContentHashError};
use test_case::test_case;

const IPFS_CID_V0: &str = "QmRAQB6YaCyidP37UdDnjFY5vQuiBrcqdyoW1CuDgwxkD4";
const IPFS_CID_V1: &str = "bafybeibj6lixxzqtsb45ysdjnupvqkufgdvzqbnvmhw2kf7cfkesy7r7d4";
const IPFS_CONTENT_HASH: &str =
    "e3010170122029f2d17be6139079dc48696d1f582a8530eb9805b561eda517e22a892c7e3f1f";

const IPNS_CID_V1: &str = "k2k4r8kgnix5x0snul9112xdpqgiwc5xmvi8ja0szfhntep2d7qv8zz3";
const IPNS_PEER_ID_B58_CONTENT_HASH: &str =
    "e5010172122029f2d17be6139079dc48696d1f582a8530eb9805b561eda517e22a892c7e3f1f";
const IPNS_PEER_ID_B58: &str = "12D3KooWG4NvqQVczTrWY1H2tvsJmbQf5bbA3xGYXC4FM3wWCfE4";
const IPNS_LIBP2P_KEY_CID_V1: &str = "k51qzi5uqu5dihst24f3rp2ej4co9berxohfkxaenbq1wjty7nrd5e9xp4afx1";
const IPNS_ED25519_CONTENT_HASH: &str =
    "e50101720024080112205cbd1cc86ac20d6640795809c2a185bb2504538a2de8076da5a6971b8acb4715";

const SWARM: &str = "d1de9994b4d039f6548d191eb26786769f580809256b4685ef316805265ea162";
const SWARM_CONTENT_HASH: &str =
    "e40101fa011b20d1de9994b4d039f6548d191eb26786769f580809256b4685ef316805265ea162";

const ONION: &str = "zqktlwi4fecvo6ri";
const ONION_CONTENT_HASH: &str = "bc037a716b746c776934666563766f367269";
const ONION3: &str = "p53lf57qovyuvwsc6xnrppyply3vtqm7l6pcobkmyqsiofyeznfu5uqd";
const ONION3_CONTENT_HASH: &str = "bd037035336c663537716f7679757677736336786e72707079706c79337674716d376c3670636f626b6d797173696f6679657a6e667535757164";

const SKYLINK: &str = "CABAB_1Dt0FJsxqsu_J4TodNCbCGvtFf1Uys_3EgzOlTcg";
const SKYLINK_CONTENT_HASH: &str =
    "90b2c60508004007fd43b74149b31aacbbf2784e874d09b086bed15fd54cacff7120cce95372";

const ARWEAVE: &str = "ys32Pt8uC7TrVxHdOLByOspfPEq2LO63wREHQIM9SJQ";
const ARWEAVE_CONTENT_HASH: &str =
    "90b2ca05cacdf63edf2e0bb4eb5711dd38b0723aca5f3c4ab62ceeb7c1110740833d4894";

// ═══════════════════════════════════════════════════════════════════════════════
// ENCODE
// ═══════════════════════════════════════════════════════════════════════════════

#[test_case(Codec::Ipfs, IPFS_CID_V0, IPFS_CONTENT_HASH ; "ipfs cidv0")]
#[test_case(Codec::Ipfs, IPFS_CID_V1, IPFS_CONTENT_HASH ; "ipfs cidv1")]
#[test_case(Codec::Ipns, IPFS_CID_V0, IPNS_PEER_ID_B58_CONTENT_HASH ; "ipns legacy rsa peer id")]
#[test_case(Codec::Ipns, IPNS_PEER_ID_B58, IPNS_ED25519_CONTENT_HASH ; "ipns ed25519 base58")]
#[test_case(Codec::Ipns, IPNS_LIBP2P_KEY_CID_V1, IPNS_ED25519_CONTENT_HASH ; "ipns libp2p key cidv1")]
#[test_case(Codec::Swarm, SWARM, SWARM_CONTENT_HASH ; "swarm")]
#[test_case(Codec::Onion, ONION, ONION_CONTENT_HASH ; "onion")]
#[test_case(Codec::Onion3, ONION3, ONION3_CONTENT_HASH ; "onion3")]
#[test_case(Codec::Skynet, SKYLINK, SKYLINK_CONTENT_HASH ; "skynet")]
#[test_case(Codec::Arweave, ARWEAVE, ARWEAVE_CONTENT_HASH ; "arweave")]
fn test_encode(codec: Codec, value: &str, expected: &str) {
    assert_eq!(encode(codec, value).unwrap(), expected);
}

#[test]
fn test_encode_ipns_rejects_non_libp2p_key() {
    let err = encode(Codec::Ipns, "12uA8M8Ku8mHUumxHcu7uee").unwrap_err();
    assert!(matches!(err, ContentHashError::UnsupportedIdentifier));
    assert_eq!(
        err.to_string(),
        "ipns-ns allows only valid cryptographic libp2p-key identifiers, try using ED25519 pubkey instead"
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// DECODE
// ═══════════════════════════════════════════════════════════════════════════════

#[test_case(IPFS_CONTENT_HASH, IPFS_CID_V1 ; "ipfs")]
#[test_case(IPNS_PEER_ID_B58_CONTENT_HASH, IPNS_CID_V1 ; "ipns legacy peer id")]
#[test_case(IPNS_ED25519_CONTENT_HASH, IPNS_LIBP2P_KEY_CID_V1 ; "ipns ed25519")]
#[test_case(SWARM_CONTENT_HASH, SWARM ; "swarm")]
#[test_case(ONION_CONTENT_HASH, ONION ; "onion")]
#[test_case(ONION3_CONTENT_HASH, ONION3 ; "onion3")]
#[test_case(SKYLINK_CONTENT_HASH, SKYLINK ; "skynet")]
#[test_case(ARWEAVE_CONTENT_HASH, ARWEAVE ; "arweave")]
fn test_decode(content_hash: &str, expected: &str) {
    assert_eq!(decode(content_hash).unwrap(), expected);
    assert_eq!(decode(&format!("0x{content_hash}")).unwrap(), expected);
}

#[test]
fn test_decode_deprecated_dnslink() {
    // plain strings inlined as identity multihashes predate the libp2p-key rule
    let deprecated_dnslink_content_hash = "e5010170000f6170702e756e69737761702e6f7267";
    assert_eq!(decode(deprecated_dnslink_content_hash).unwrap(), "app.uniswap.org");
}

#[test]
fn test_ipfs_v1_is_stable() {
    let once = decode(&encode(Codec::Ipfs, IPFS_CID_V0).unwrap()).unwrap();
    let twice = decode(&encode(Codec::Ipfs, &once).unwrap()).unwrap();
    assert_eq!(once, IPFS_CID_V1);
    assert_eq!(twice, IPFS_CID_V1);
}

// ═══════════════════════════════════════════════════════════════════════════════
// GET CODEC
// ═══════════════════════════════════════════════════════════════════════════════

#[test_case(IPFS_CONTENT_HASH, Codec::Ipfs ; "ipfs")]
#[test_case(IPNS_ED25519_CONTENT_HASH, Codec::Ipns ; "ipns")]
#[test_case(SWARM_CONTENT_HASH, Codec::Swarm ; "swarm")]
#[test_case(ONION_CONTENT_HASH, Codec::Onion ; "onion")]
#[test_case(ONION3_CONTENT_HASH, Codec::Onion3 ; "onion3")]
#[test_case(SKYLINK_CONTENT_HASH, Codec::Skynet ; "skynet")]
#[test_case(ARWEAVE_CONTENT_HASH, Codec::Arweave ; "arweave")]
fn test_get_codec(content_hash: &str, expected: Codec) {
    assert_eq!(get_codec(content_hash).unwrap(), Some(expected));
}

// ═══════════════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_helpers_are_reexported() {
    assert_eq!(cid_v0_to_v1_base32(IPFS_CID_V0).unwrap(), IPFS_CID_V1);
    assert_eq!(cid_for_web(IPFS_CID_V0).unwrap(), IPFS_CID_V1);
}
