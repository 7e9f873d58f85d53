//! DNS-safe CID strings.
//!
//! Gateways serve content at `<cid>.ipfs.<gateway>`, so the CID must be a
//! case-insensitive string no longer than one DNS label.

use tracing::debug;

use contenthash_core::constants::DNS_LABEL_MAX_LENGTH;
use contenthash_core::error::{ContentHashError, Result};

use crate::normalize::{parse_cid, to_base_string, to_v1, Base};

/// Converts any CID string to CIDv1 in lowercase base32.
///
/// CIDv1 input keeps its bytes; only the string base may change.
pub fn cid_v0_to_v1_base32(value: &str) -> Result<String> {
    let cid = to_v1(parse_cid(value)?)?;
    to_base_string(&cid, Base::Base32Lower)
}

/// Converts any CID string to the form used in gateway subdomains.
///
/// Prefers base32. Falls back to base36 when base32 does not fit a DNS
/// label, and fails when neither does.
pub fn cid_for_web(value: &str) -> Result<String> {
    let cid = to_v1(parse_cid(value)?)?;

    let label = to_base_string(&cid, Base::Base32Lower)?;
    if label.len() <= DNS_LABEL_MAX_LENGTH {
        return Ok(label);
    }

    let label = to_base_string(&cid, Base::Base36Lower)?;
    if label.len() <= DNS_LABEL_MAX_LENGTH {
        debug!(cid = %label, "base32 CID exceeds DNS label, using base36");
        return Ok(label);
    }

    Err(ContentHashError::dns_limit())
}
