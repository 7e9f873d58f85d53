//! CID helpers for content hashes.
//!
//! Parses CIDs from text and binary, normalizes CIDv0 to CIDv1, and picks
//! the shortest DNS-safe string form for gateway subdomains.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod normalize;
mod dns;

pub use normalize::{parse_cid, parse_cid_bytes, to_base_string, to_v1, Base, Cid, Multihash};
pub use dns::{cid_for_web, cid_v0_to_v1_base32};
