use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Draws from the thread-local RNG provided by `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RngCore for ThreadRandom {
    fn next_u32(&mut self) -> u32 {
        rand::rng().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        rand::rng().next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rng().fill_bytes(dst)
    }
}

/// Deterministic ChaCha20 stream. Same seed, same permutation.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

/// Returns a uniformly random permutation of `cards` using the thread RNG.
pub fn shuffle<T: Clone>(cards: &[T]) -> Vec<T> {
    shuffle_with(cards, &mut ThreadRandom)
}

/// Shuffles a fresh copy of `cards` with the given generator. The input slice
/// is left untouched.
pub fn shuffle_with<T: Clone, R: RngCore + ?Sized>(cards: &[T], rng: &mut R) -> Vec<T> {
    let mut out = cards.to_vec();
    out.shuffle(rng);
    tracing::debug!(cards = out.len(), "shuffled");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts how many words the shuffle pulls from the wrapped stream.
    struct Counting {
        inner: SeededRandom,
        words: usize,
    }

    impl RngCore for Counting {
        fn next_u32(&mut self) -> u32 {
            self.words += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.words += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.words += 1;
            self.inner.fill_bytes(dst)
        }
    }

    #[test]
    fn draws_from_the_injected_generator() {
        let mut rng = Counting {
            inner: SeededRandom::new(5),
            words: 0,
        };
        let out = shuffle_with(&[1, 2, 3, 4, 5], &mut rng);
        assert!(rng.words > 0);

        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn short_inputs_do_not_consume_randomness() {
        let mut rng = Counting {
            inner: SeededRandom::new(5),
            words: 0,
        };
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle_with(&empty, &mut rng).is_empty());
        assert_eq!(shuffle_with(&[7], &mut rng), vec![7]);
        assert_eq!(rng.words, 0);
    }

    #[test]
    fn empty_and_single_inputs_are_returned_as_is() {
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[7]), vec![7]);
    }

    #[test]
    fn seeded_source_matches_a_fresh_chacha_stream() {
        let mut ours = SeededRandom::new(9);
        let mut raw = ChaCha20Rng::seed_from_u64(9);
        for _ in 0..8 {
            assert_eq!(ours.next_u64(), raw.next_u64());
        }
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut seeded = SeededRandom::new(3);
        let rng: &mut dyn RngCore = &mut seeded;
        let out = shuffle_with(&['a', 'b', 'c'], rng);
        assert_eq!(out.len(), 3);
    }
}
