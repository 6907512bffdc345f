//! Content hashing for change detection.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of card HTML, stored alongside the content so
/// re-pushes of identical cards are detectable.
#[must_use]
pub fn content_hash(html: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(html.as_bytes());
    hex::encode(hasher.finalize())
}
