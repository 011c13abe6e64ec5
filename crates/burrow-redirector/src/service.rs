use std::sync::Arc;

use crate::redirector::Redirector;
use async_trait::async_trait;
use burrow_core::{ReadRepository, ShortCode, UrlRecord};
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Uses a read-only repository to fetch URL records.
#[derive(Debug)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R> Clone for RedirectorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ReadRepository> RedirectorService<R> {
    /// Creates a new RedirectorService with the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Resolves a short code to its stored record.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(record))` - The stored record if the code was issued
    /// * `Ok(None)` - If the code doesn't exist
    /// * `Err(e)` - If there was an error accessing the repository
    pub async fn resolve(&self, code: &ShortCode) -> crate::Result<Option<UrlRecord>> {
        Redirector::resolve(self, code).await
    }

    /// Resolves a raw code string to the original URL.
    pub async fn redirect(&self, code: &str) -> crate::Result<Option<String>> {
        Redirector::redirect(self, code).await
    }
}

#[async_trait]
impl<R: ReadRepository> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &ShortCode) -> crate::Result<Option<UrlRecord>> {
        trace!(code = %code, "resolving short code");

        match self.repository.get(code).await? {
            Some(record) => {
                debug!(code = %code, url = %record.original_url, "Resolved short code");
                Ok(Some(record))
            }
            None => {
                trace!(code = %code, "Short code not found");
                Ok(None)
            }
        }
    }
}
