//! Ad hoc multiplicative hashes used to pick a bucket.
//!
//! Both functions accumulate in a wrapping `u32` and reduce modulo the
//! bucket count at the end. The rehash after growth must call the same
//! function the lookup used, otherwise records land in unreachable chains.

use crate::primes::PRIME_CYCLE;

/// Bucket for a fixed-width tuple, mixing its little-endian bytes.
#[inline]
pub fn hash_bytes(words: &[i32], buckets: usize) -> usize {
    debug_assert!(buckets > 0);
    let mut key = 0u32;
    let bytes = words.iter().flat_map(|w| w.to_le_bytes());
    for (c, byte) in bytes.enumerate() {
        key = key.wrapping_add((byte as u32).wrapping_mul(PRIME_CYCLE[c % 7]));
    }
    (key as usize) % buckets
}

/// Bucket for a variable-length vector, mixing its words directly.
#[inline]
pub fn hash_words(words: &[i32], buckets: usize) -> usize {
    debug_assert!(buckets > 0);
    let mut key = 0u32;
    for (i, &w) in words.iter().enumerate() {
        key = key.wrapping_add((w as u32).wrapping_mul(PRIME_CYCLE[i % 7]));
    }
    (key as usize) % buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_lands_in_bucket_zero() {
        assert_eq!(hash_bytes(&[], 11), 0);
        assert_eq!(hash_words(&[], 11), 0);
    }

    #[test]
    fn test_byte_hash_matches_hand_computation() {
        // 12 = [0x0c, 0, 0, 0], 17 = [0x11, 0, 0, 0]
        let key = 12 * 4177 + 17 * 7103;
        assert_eq!(hash_bytes(&[12, 17], 1_000_003), key);
        assert_eq!(hash_bytes(&[12, 17], 7), key % 7);
    }

    #[test]
    fn test_word_hash_matches_hand_computation() {
        let key = 3 * 4177 + 5 * 5147 + 7 * 5647;
        assert_eq!(hash_words(&[3, 5, 7], 1_000_003), key);
    }

    #[test]
    fn test_word_hash_cycles_after_seven() {
        let mut words = vec![0; 8];
        words[7] = 1;
        assert_eq!(hash_words(&words, 100_003), 4177);
    }

    #[test]
    fn test_negative_words_wrap() {
        let expected = (u32::MAX.wrapping_mul(4177) as usize) % 101;
        assert_eq!(hash_words(&[-1], 101), expected);
        // -1 is four 0xff bytes
        let bytes = 255u32 * (4177 + 5147 + 5647 + 6343);
        assert_eq!(hash_bytes(&[-1], 101), bytes as usize % 101);
    }

    #[test]
    fn test_result_is_within_table() {
        for buckets in [1, 3, 7, 101] {
            assert!(hash_bytes(&[i32::MAX, i32::MIN, 42], buckets) < buckets);
            assert!(hash_words(&[i32::MAX, i32::MIN, 42], buckets) < buckets);
        }
    }
}
