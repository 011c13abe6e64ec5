use crate::Generator;
use burrow_core::shortcode::{ALPHABET, CODE_LENGTH};
use burrow_core::ShortCode;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random short code generator.
///
/// Every character is drawn independently and uniformly from the 62-character
/// alphabet, with replacement. By default the thread-local RNG is used; a
/// seeded generator replays the same sequence of codes, which is handy for
/// predicting the next candidate in tests.
///
/// The RNG is assumed to always be available. If the OS entropy source
/// fails, `rand` panics and the process goes down with it.
#[derive(Debug, Default)]
pub struct RandomGenerator {
    seeded: Option<Mutex<StdRng>>,
}

impl RandomGenerator {
    /// Creates a generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with a deterministic, seeded RNG.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn sample<R: Rng + ?Sized>(rng: &mut R) -> ShortCode {
        let code: String = (0..CODE_LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect();
        ShortCode::new_unchecked(code)
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        match &self.seeded {
            Some(rng) => Self::sample(&mut *rng.lock()),
            None => Self::sample(&mut rand::rng()),
        }
    }
}
