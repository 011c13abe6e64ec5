use std::num::NonZeroU32;
use typed_builder::TypedBuilder;

/// Default bound on candidate codes drawn per shorten call.
///
/// Even with the store holding half of the 62^6 keyspace, 32 consecutive
/// collisions happen with probability 2^-32.
pub const DEFAULT_MAX_ATTEMPTS: NonZeroU32 = match NonZeroU32::new(32) {
    Some(n) => n,
    None => panic!("default max attempts must be non-zero"),
};

/// Configures a [`ShortenerService`](crate::ShortenerService).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct ShortenerSettings {
    /// Maximum number of candidate codes tried before giving up with
    /// [`ShortenerError::Exhausted`](burrow_core::ShortenerError::Exhausted).
    ///
    /// `None` retries until an unused code turns up.
    #[builder(default = Some(DEFAULT_MAX_ATTEMPTS))]
    pub max_attempts: Option<NonZeroU32>,
}

impl ShortenerSettings {
    /// Settings with no retry bound.
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Builds settings from a plain attempt limit, where `0` means unbounded.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            max_attempts: NonZeroU32::new(limit),
        }
    }
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
