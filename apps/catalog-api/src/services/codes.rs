//! # Product Code Sources
//!
//! Where candidate codes for new products come from. The service asks for a
//! candidate, checks it against the store, and asks again on collision.
//!
//! [`RandomCodes`] draws uniformly from `[1000, 999999]`. It is seedable so
//! tests get a reproducible sequence.

use std::ops::RangeInclusive;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use catalog_core::{MAX_GENERATED_CODE, MIN_GENERATED_CODE};

/// Supplies candidate product codes.
pub trait CodeSource: Send + Sync {
    /// Next candidate code. Uniqueness is checked by the caller.
    fn next_code(&self) -> i32;
}

/// Uniform random codes in `[MIN_GENERATED_CODE, MAX_GENERATED_CODE]`.
#[derive(Debug)]
pub struct RandomCodes {
    rng: Mutex<StdRng>,
    range: RangeInclusive<i32>,
}

impl RandomCodes {
    /// Random source seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic source for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        RandomCodes {
            rng: Mutex::new(rng),
            range: MIN_GENERATED_CODE..=MAX_GENERATED_CODE,
        }
    }
}

impl Default for RandomCodes {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeSource for RandomCodes {
    fn next_code(&self) -> i32 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(self.range.clone())
    }
}

/// Replays a fixed list of codes, then repeats the last one.
#[cfg(test)]
#[derive(Debug)]
pub struct ScriptedCodes {
    codes: Mutex<std::collections::VecDeque<i32>>,
    last: Mutex<i32>,
    draws: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl ScriptedCodes {
    pub fn new(codes: impl IntoIterator<Item = i32>) -> Self {
        ScriptedCodes {
            codes: Mutex::new(codes.into_iter().collect()),
            last: Mutex::new(MIN_GENERATED_CODE),
            draws: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// How many codes were handed out.
    pub fn draws(&self) -> usize {
        self.draws.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl CodeSource for ScriptedCodes {
    fn next_code(&self) -> i32 {
        self.draws.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let mut last = self.last.lock().unwrap();
        if let Some(code) = self.codes.lock().unwrap().pop_front() {
            *last = code;
        }
        *last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_codes_stay_in_range() {
        let codes = RandomCodes::seeded(7);
        for _ in 0..10_000 {
            let code = codes.next_code();
            assert!((MIN_GENERATED_CODE..=MAX_GENERATED_CODE).contains(&code));
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let a = RandomCodes::seeded(42);
        let b = RandomCodes::seeded(42);
        let first: Vec<i32> = (0..5).map(|_| a.next_code()).collect();
        let second: Vec<i32> = (0..5).map(|_| b.next_code()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scripted_codes_repeat_last() {
        let codes = ScriptedCodes::new([5000, 6000]);
        assert_eq!(codes.next_code(), 5000);
        assert_eq!(codes.next_code(), 6000);
        assert_eq!(codes.next_code(), 6000);
        assert_eq!(codes.draws(), 3);
    }
}
