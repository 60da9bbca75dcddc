use crate::Generator;
use pinhole_core::ShortId;

/// Length of every generated id, in characters.
pub const ID_LENGTH: usize = 8;

/// A random short id generator.
///
/// Each id is derived from a fresh random 128-bit value: the bytes are
/// base58-encoded and the first [`ID_LENGTH`] characters are kept, giving a
/// fixed-length, URL-safe token.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortId {
        let value: u128 = rand::random();
        // 16 bytes never encode to fewer than 16 base58 characters (leading
        // zero bytes each contribute a '1'), so the truncation is total.
        let encoded = bs58::encode(value.to_be_bytes()).into_string();
        ShortId::new(&encoded[..ID_LENGTH])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_have_fixed_length() {
        let generator = RandomGenerator::new();
        for _ in 0..1000 {
            assert_eq!(generator.generate().as_str().len(), ID_LENGTH);
        }
    }

    #[test]
    fn ids_are_url_safe() {
        let generator = RandomGenerator::new();
        for _ in 0..1000 {
            let id = generator.generate();
            assert!(
                id.as_str().chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected character in id: {}",
                id
            );
        }
    }

    #[test]
    fn successive_ids_differ() {
        let generator = RandomGenerator::new();
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first, second);
    }

    #[test]
    fn large_sample_has_no_duplicates() {
        let generator = RandomGenerator::new();
        let ids: HashSet<String> = (0..1000)
            .map(|_| generator.generate().as_str().to_owned())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
