pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use burrow_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// They make no uniqueness promise; the shortener service detects
/// collisions against the store and asks for another candidate.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Generates one candidate short code.
    fn generate(&self) -> Self::Output;
}
