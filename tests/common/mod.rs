#![allow(dead_code)]
extern crate rand;
use rand::random;
use tidbits::{Set, Slice};

pub fn rand(a: u64, b: u64) -> u64 {
    a + (random::<u64>() % (b - a))
}

/// Slice of `n` random values in `0..max`.
pub fn random_slice(n: usize, max: u64) -> Slice<u64> {
    (0..n).map(|_| rand(0, max)).collect()
}

/// Set of up to `n` random values in `0..max`.
pub fn random_set(n: usize, max: u64) -> Set<u64> {
    (0..n).map(|_| rand(0, max)).collect()
}
