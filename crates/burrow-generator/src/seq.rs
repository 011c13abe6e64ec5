use crate::Generator;
use burrow_core::shortcode::{ALPHABET, CODE_LENGTH, KEYSPACE};
use burrow_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic short code generator using a sequential counter.
///
/// The counter is rendered as six base62 digits over the short code alphabet,
/// so it produces "AAAAAA", "AAAAAB", ... and wraps around after 62^6 codes.
/// Two generators with the same offset produce the same sequence, which makes
/// it easy to arrange collisions on purpose.
#[derive(Debug, Default)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SeqGenerator {
    /// Creates a generator starting from the first code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }

    /// Renders the code the generator emits for counter value `n`.
    pub fn code_at(n: u64) -> ShortCode {
        let base = ALPHABET.len() as u64;
        let mut value = n % KEYSPACE;
        let mut digits = [ALPHABET[0]; CODE_LENGTH];
        for slot in digits.iter_mut().rev() {
            *slot = ALPHABET[(value % base) as usize];
            value /= base;
        }
        ShortCode::new_unchecked(String::from_utf8_lossy(&digits))
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Self::code_at(count)
    }
}
