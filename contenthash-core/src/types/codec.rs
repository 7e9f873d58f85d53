//! The codec table: content hash namespace names and their multicodec tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARWEAVE_NS, IPFS_NS, IPNS_NS, ONION3_NS, ONION_NS, SKYNET_NS, SWARM_NS,
};
use crate::error::{ContentHashError, Result};

/// A content hash namespace.
///
/// Each variant maps to exactly one tag and one name, in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    /// IPFS content (CIDv1).
    Ipfs,
    /// IPNS name (libp2p-key CID).
    Ipns,
    /// Swarm manifest hash.
    Swarm,
    /// Tor v2 onion address.
    Onion,
    /// Tor v3 onion address.
    Onion3,
    /// Skynet skylink.
    Skynet,
    /// Arweave transaction id.
    Arweave,
}

/// Tag column of the codec table, in [`Codec::ALL`] order.
const TAGS: [u64; 7] = [
    IPFS_NS, IPNS_NS, SWARM_NS, ONION_NS, ONION3_NS, SKYNET_NS, ARWEAVE_NS,
];

const fn tags_are_distinct(tags: &[u64]) -> bool {
    let mut i = 0;
    while i < tags.len() {
        let mut j = i + 1;
        while j < tags.len() {
            if tags[i] == tags[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(tags_are_distinct(&TAGS), "codec tags must be distinct");

impl Codec {
    /// Every codec, in table order.
    pub const ALL: [Codec; 7] = [
        Codec::Ipfs,
        Codec::Ipns,
        Codec::Swarm,
        Codec::Onion,
        Codec::Onion3,
        Codec::Skynet,
        Codec::Arweave,
    ];

    /// Returns the multicodec tag for this namespace.
    pub const fn tag(self) -> u64 {
        match self {
            Codec::Ipfs => IPFS_NS,
            Codec::Ipns => IPNS_NS,
            Codec::Swarm => SWARM_NS,
            Codec::Onion => ONION_NS,
            Codec::Onion3 => ONION3_NS,
            Codec::Skynet => SKYNET_NS,
            Codec::Arweave => ARWEAVE_NS,
        }
    }

    /// Looks up the namespace for a tag. `None` means no mapping.
    pub const fn from_tag(tag: u64) -> Option<Self> {
        match tag {
            IPFS_NS => Some(Codec::Ipfs),
            IPNS_NS => Some(Codec::Ipns),
            SWARM_NS => Some(Codec::Swarm),
            ONION_NS => Some(Codec::Onion),
            ONION3_NS => Some(Codec::Onion3),
            SKYNET_NS => Some(Codec::Skynet),
            ARWEAVE_NS => Some(Codec::Arweave),
            _ => None,
        }
    }

    /// Returns the human-facing name.
    pub const fn name(self) -> &'static str {
        match self {
            Codec::Ipfs => "ipfs",
            Codec::Ipns => "ipns",
            Codec::Swarm => "swarm",
            Codec::Onion => "onion",
            Codec::Onion3 => "onion3",
            Codec::Skynet => "skynet",
            Codec::Arweave => "arweave",
        }
    }

    /// Looks up the namespace for a name. `None` means no mapping.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|codec| codec.name() == name)
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codec {
    type Err = ContentHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ContentHashError::UnrecognizedCodec(s.to_string()))
    }
}
