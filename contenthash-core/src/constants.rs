//! Protocol constants for content hash encoding.
//!
//! Codec tags come from the multicodec table; the namespace codes
//! (`ipfs-ns`, `ipns-ns`, `swarm-ns`, ...) are the ones EIP-1577 records use.

// ═══════════════════════════════════════════════════════════════════════════════
// CONTENT HASH NAMESPACE TAGS
// ═══════════════════════════════════════════════════════════════════════════════

/// `ipfs-ns` namespace tag.
pub const IPFS_NS: u64 = 0xe3;

/// `swarm-ns` namespace tag.
pub const SWARM_NS: u64 = 0xe4;

/// `ipns-ns` namespace tag.
pub const IPNS_NS: u64 = 0xe5;

/// `onion` namespace tag (Tor v2 addresses).
pub const ONION_NS: u64 = 0x01bc;

/// `onion3` namespace tag (Tor v3 addresses).
pub const ONION3_NS: u64 = 0x01bd;

/// `skynet-ns` namespace tag.
pub const SKYNET_NS: u64 = 0xb19910;

/// `arweave-ns` namespace tag.
pub const ARWEAVE_NS: u64 = 0xb29910;

// ═══════════════════════════════════════════════════════════════════════════════
// MULTICODEC CONTENT TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// `dag-pb` content codec, the implicit codec of every CIDv0.
pub const DAG_PB: u64 = 0x70;

/// `raw` content codec.
pub const RAW: u64 = 0x55;

/// `libp2p-key` content codec used for IPNS names.
pub const LIBP2P_KEY: u64 = 0x72;

/// `swarm-manifest` content codec.
pub const SWARM_MANIFEST: u64 = 0xfa;

// ═══════════════════════════════════════════════════════════════════════════════
// MULTIHASH FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Identity multihash (digest is the input itself).
pub const IDENTITY: u64 = 0x00;

/// `sha2-256` multihash.
pub const SHA2_256: u64 = 0x12;

/// `keccak-256` multihash, used to frame Swarm hashes without rehashing.
pub const KECCAK_256: u64 = 0x1b;

/// Largest multihash digest accepted anywhere, in bytes.
/// Identity digests inline arbitrary data, so this is well above any hash output.
pub const MAX_DIGEST_SIZE: usize = 256;

// ═══════════════════════════════════════════════════════════════════════════════
// IPNS IDENTIFIER LIMITS
// ═══════════════════════════════════════════════════════════════════════════════

/// Multihashes at least this long are never inspected further.
/// An inlined ED25519 key is `0x00 0x24` + 36 bytes = 38 bytes.
pub const MIN_INLINED_KEY_MULTIHASH_SIZE: usize = 38;

/// Minimum digest length of an identity-hashed libp2p public key.
/// Protobuf-wrapped ED25519 keys are 4 header bytes + 32 key bytes.
pub const MIN_INLINED_KEY_DIGEST_SIZE: usize = 36;

// ═══════════════════════════════════════════════════════════════════════════════
// DNS CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum length of a single DNS label (RFC 1034, section 3.1).
pub const DNS_LABEL_MAX_LENGTH: usize = 63;

/// Multibase prefix of lowercase base36 strings.
pub const BASE36_PREFIX: char = 'k';

/// Longest varint accepted for a codec tag (63-bit unsigned varint).
pub const MAX_TAG_VARINT_LEN: usize = 9;

/// Largest tag that fits in [`MAX_TAG_VARINT_LEN`] varint bytes.
pub const MAX_TAG: u64 = (1 << 63) - 1;
