//! Error types for content hash encoding.
//!
//! This module provides the error hierarchy using `thiserror`.
//! Every operation is pure, so no error is ever worth retrying.

use thiserror::Error;

use crate::constants::DNS_LABEL_MAX_LENGTH;

/// Result type alias using `ContentHashError`.
pub type Result<T> = std::result::Result<T, ContentHashError>;

/// Main error type for all content hash operations.
#[derive(Debug, Error)]
pub enum ContentHashError {
    // ═══════════════════════════════════════════════════════════════════════════
    // MALFORMED INPUT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Invalid hex encoding (odd length or non-hex characters).
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Codec tag prefix is missing, truncated, or overlong.
    #[error("Invalid codec varint: {0}")]
    InvalidVarint(String),

    /// CID text or bytes could not be parsed.
    #[error("Invalid CID: {0}")]
    InvalidCid(String),

    /// Multihash could not be built or decoded.
    #[error("Invalid multihash: {0}")]
    InvalidMultihash(String),

    /// Legacy peer ID is not valid base58btc.
    #[error("Invalid base58btc value: {0}")]
    InvalidBase58(String),

    /// Value is not valid unpadded URL-safe base64.
    #[error("Invalid base64url value: {0}")]
    InvalidBase64(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // POLICY ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// IPNS name is not a cryptographic libp2p-key identifier.
    #[error("ipns-ns allows only valid cryptographic libp2p-key identifiers, try using ED25519 pubkey instead")]
    UnsupportedIdentifier,

    /// CID does not fit in a DNS label in any supported base.
    #[error("CID is longer than DNS limit of {limit} characters and is not compatible with public gateways")]
    LengthExceeded {
        /// The DNS label limit that was exceeded.
        limit: usize,
    },

    /// Codec name is not part of the codec table.
    #[error("Unrecognized codec: {0}")]
    UnrecognizedCodec(String),
}

impl ContentHashError {
    /// Builds a `LengthExceeded` error for the DNS label limit.
    pub fn dns_limit() -> Self {
        ContentHashError::LengthExceeded {
            limit: DNS_LABEL_MAX_LENGTH,
        }
    }

    /// Returns true if this error is recoverable (can retry).
    ///
    /// All operations are deterministic, so this is always false.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Returns true if the input itself was malformed.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ContentHashError::InvalidHex(_)
                | ContentHashError::InvalidVarint(_)
                | ContentHashError::InvalidCid(_)
                | ContentHashError::InvalidMultihash(_)
                | ContentHashError::InvalidBase58(_)
                | ContentHashError::InvalidBase64(_)
        )
    }
}
