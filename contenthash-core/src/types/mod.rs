//! Domain types for content hash encoding.
//!
//! - [`Codec`]: the closed set of content hash namespaces and their tags
//! - [`ContentHash`]: a varint-tagged payload, as stored on chain

mod codec;
mod content_hash;

pub use codec::*;
pub use content_hash::*;
