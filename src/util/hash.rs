//! Content hashing for change detection and synthetic item identifiers.

use md5::{Digest, Md5};

/// djb2-style rolling hash over raw bytes. Empty input hashes to `0`.
pub fn calc_hash(data: &[u8]) -> u32 {
    if data.is_empty() {
        return 0;
    }
    let mut hash: u32 = 5381;
    for &byte in data {
        hash = hash.wrapping_mul(33).wrapping_add(u32::from(byte));
    }
    hash
}

/// Lowercase hex MD5 digest of a string, used to fabricate stable item
/// identifiers when a feed carries none.
pub fn calc_md5_sum(data: &str) -> String {
    hex::encode(Md5::digest(data.as_bytes()))
}
