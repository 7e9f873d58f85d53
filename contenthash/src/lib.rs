//! # contenthash
//!
//! Encoding and decoding of EIP-1577 `contenthash` records.
//!
//! A content hash is a varint codec tag followed by a namespace-specific
//! payload. This crate turns human-facing identifiers (IPFS CIDs, IPNS names,
//! Swarm hashes, onion addresses, skylinks, Arweave ids) into that binary form
//! and back, normalizing CIDs to version 1 on the way.
//!
//! ## Example
//!
//! ```rust
//! use contenthash::{decode, encode, get_codec, Codec};
//!
//! let hash = encode(Codec::Ipfs, "QmRAQB6YaCyidP37UdDnjFY5vQuiBrcqdyoW1CuDgwxkD4").unwrap();
//! assert_eq!(get_codec(&hash).unwrap(), Some(Codec::Ipfs));
//! assert_eq!(
//!     decode(&hash).unwrap(),
//!     "bafybeibj6lixxzqtsb45ysdjnupvqkufgdvzqbnvmhw2kf7cfkesy7r7d4"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod ipfs;
pub mod ipns;
mod profile;
mod record;
mod swarm;

pub use contenthash_core::{Codec, ContentHash, ContentHashError, Result};
pub use profile::Profile;
pub use record::{decode, encode, encode_named, get_codec};

/// DNS-safe CID helpers.
pub mod helpers {
    pub use contenthash_cid::{cid_for_web, cid_v0_to_v1_base32};
}
