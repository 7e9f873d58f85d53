//! Per-namespace encode/decode profiles.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use contenthash_core::error::{ContentHashError, Result};
use contenthash_core::Codec;

use crate::{ipfs, ipns, swarm};

/// How a namespace turns its text form into payload bytes and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// CIDv1 binary, printed as base32 (base36 for `libp2p-key`).
    Ipfs,
    /// `libp2p-key` CIDv1 binary, printed as base36.
    Ipns,
    /// Hex hash framed in a `swarm-manifest` CID.
    Swarm,
    /// Unpadded base64url skylink.
    Skynet,
    /// Unpadded base64url transaction id.
    Arweave,
    /// Unpadded base64url blob id. Has no codec tag.
    Walrus,
    /// Raw UTF-8 text. Used for onion addresses and unknown tags.
    Utf8,
}

impl Profile {
    /// Returns the profile for a codec.
    pub fn for_codec(codec: Codec) -> Self {
        match codec {
            Codec::Ipfs => Profile::Ipfs,
            Codec::Ipns => Profile::Ipns,
            Codec::Swarm => Profile::Swarm,
            Codec::Skynet => Profile::Skynet,
            Codec::Arweave => Profile::Arweave,
            Codec::Onion | Codec::Onion3 => Profile::Utf8,
        }
    }

    /// Returns the profile for a raw tag, falling back to UTF-8.
    pub fn for_tag(tag: u64) -> Self {
        Codec::from_tag(tag).map_or(Profile::Utf8, Self::for_codec)
    }

    /// Converts the text form into payload bytes.
    pub fn encode(&self, value: &str) -> Result<Vec<u8>> {
        match self {
            Profile::Ipfs => ipfs::encode(value),
            Profile::Ipns => ipns::encode(value),
            Profile::Swarm => swarm::encode(value),
            Profile::Skynet | Profile::Arweave | Profile::Walrus => URL_SAFE_NO_PAD
                .decode(value)
                .map_err(|e| ContentHashError::InvalidBase64(e.to_string())),
            Profile::Utf8 => Ok(value.as_bytes().to_vec()),
        }
    }

    /// Converts payload bytes back into the text form.
    ///
    /// UTF-8 payloads decode lossily and never fail.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Profile::Ipfs => ipfs::decode(bytes),
            Profile::Ipns => ipns::decode(bytes),
            Profile::Swarm => swarm::decode(bytes),
            Profile::Skynet | Profile::Arweave | Profile::Walrus => Ok(URL_SAFE_NO_PAD.encode(bytes)),
            Profile::Utf8 => Ok(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}
