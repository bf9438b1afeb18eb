use sha1::{Digest, Sha1};

/// Alphabetic fingerprint of an item: the letters of the lowercase hex SHA-1
/// digest of its decimal representation.
///
/// Only `a`-`f` survive the filter, so the result is between 0 and 40 chars long.
pub fn trace(n: i64) -> String {
    let digest = Sha1::digest(n.to_string().as_bytes());
    hex::encode(digest)
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect()
}
