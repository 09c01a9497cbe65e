//! Random correlation-id generation.

use rand::Rng;

/// Generates a fresh correlation id: 16 lowercase hexadecimal characters
/// rendered from a uniformly random `u64`.
///
/// 64 bits is enough for log correlation; collisions are a tolerated
/// low-probability condition, not actively prevented. The thread-local
/// generator is not cryptographic and does not need to be.
pub(crate) fn random_hex16() -> String {
    let mut rng = rand::rng();
    format!("{:016x}", rng.random::<u64>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_sixteen_lowercase_hex_characters() {
        let id = random_hex16();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn successive_ids_differ() {
        // Collides with probability 2^-64; a failure here means the
        // generator is broken, not unlucky.
        assert_ne!(random_hex16(), random_hex16());
    }
}
