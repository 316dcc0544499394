use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a file's content.
///
/// Gives status lines and tests a stable content identity without holding on
/// to full file bodies.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Shortened digest for compact display.
pub fn short_digest(content: &str) -> String {
    let mut digest = content_digest(content);
    digest.truncate(8);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let a = content_digest("const cfg = { a: 1 };");
        let b = content_digest("const cfg = { a: 1 };");
        assert_eq!(a, b);

        // Content modifications must produce different digests
        let c = content_digest("const cfg = { a: 2 };");
        assert_ne!(a, c);
    }

    #[test]
    fn short_digest_is_a_prefix() {
        let full = content_digest("body");
        assert_eq!(short_digest("body"), full[..8].to_string());
    }
}
