use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores `original_url` under a freshly generated, previously unused
    /// short code and returns that code.
    ///
    /// The URL is treated as an opaque string.
    async fn shorten(&self, original_url: &str) -> Result<ShortCode>;
}
