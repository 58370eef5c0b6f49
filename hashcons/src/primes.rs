//! Bucket-count sizing and the multiplier cycle shared by both hashes.

/// Multipliers applied cyclically to successive bytes or words of a key.
pub const PRIME_CYCLE: [u32; 7] = [4177, 5147, 5647, 6343, 7103, 7873, 8147];

/// Smallest odd prime that is `>= n`.
///
/// Even candidates are always skipped, so `2` rounds up to `3`. Inputs of
/// `0` and `1` yield `1`, which keeps a degenerate one-bucket table valid.
pub fn next_prime(n: usize) -> usize {
    let mut p = n.max(1);
    loop {
        if p & 1 == 1 && is_odd_prime(p) {
            return p;
        }
        p += 1;
    }
}

fn is_odd_prime(p: usize) -> bool {
    let mut i = 3usize;
    while i.saturating_mul(i) <= p {
        if p % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
