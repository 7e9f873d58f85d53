//! # contenthash core
//!
//! Core types, errors, and constants for EIP-1577 content hash encoding.
//!
//! This crate provides the building blocks used by the other contenthash crates:
//!
//! - **Types**: the [`Codec`] table and the varint-tagged [`ContentHash`] frame
//! - **Errors**: a single error enum covering every failure mode
//! - **Constants**: codec tags, multicodec codes, and size limits
//! - **Encoding**: hex helpers accepting an optional `0x` prefix
//!
//! ## Example
//!
//! ```rust
//! use contenthash_core::{Codec, ContentHash};
//!
//! let hash = ContentHash::from_hex("0xbc037a716b746c776934666563766f367269").unwrap();
//! assert_eq!(hash.codec(), Some(Codec::Onion));
//! assert_eq!(hash.payload(), b"zqktlwi4fecvo6ri");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod encoding;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use encoding::{decode_hex, encode_hex};
pub use error::{ContentHashError, Result};
pub use types::*;
