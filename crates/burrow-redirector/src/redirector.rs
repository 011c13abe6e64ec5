use crate::Result;
use async_trait::async_trait;
use burrow_core::{ShortCode, UrlRecord};

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to its stored URL record.
    /// Returns `None` if the code was never issued.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Resolves a raw code string, as taken from a request path, to the
    /// original URL.
    ///
    /// A string that is not a well-formed short code can never have been
    /// issued, so it resolves to `None`.
    async fn redirect(&self, code: &str) -> Result<Option<String>> {
        let Ok(code) = ShortCode::new(code) else {
            return Ok(None);
        };
        Ok(self.resolve(&code).await?.map(|record| record.original_url))
    }
}
