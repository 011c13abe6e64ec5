use crate::settings::ShortenerSettings;
use async_trait::async_trait;
use burrow_core::{Repository, ShortCode, Shortener, ShortenerError, StorageError, UrlRecord};
use burrow_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator`. Each shorten call
/// draws candidates from the generator until one is unused in the
/// repository, then inserts the mapping under it. The repository's insert
/// is insert-if-absent, so a candidate claimed by a concurrent call between
/// the existence check and the insert surfaces as a conflict and is retried
/// like any other collision.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            settings: self.settings,
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_settings(repository, generator, ShortenerSettings::default())
    }

    /// Creates a new `ShortenerService` with explicit settings.
    pub fn with_settings(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    fn generate_code(&self) -> ShortCode {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        let mut attempts: u32 = 0;

        loop {
            if let Some(max) = self.settings.max_attempts {
                if attempts >= max.get() {
                    warn!(attempts, "gave up looking for an unused short code");
                    return Err(ShortenerError::Exhausted { attempts });
                }
            }
            attempts = attempts.saturating_add(1);

            let code = self.generate_code();

            if self.repository.exists(&code).await? {
                debug!(code = %code, attempts, "short code collision, retrying");
                continue;
            }

            match self
                .repository
                .insert(&code, UrlRecord::new(original_url))
                .await
            {
                Ok(()) => {
                    info!(code = %code, url = %original_url, attempts, "created short link");
                    return Ok(code);
                }
                Err(StorageError::Conflict(_)) => {
                    debug!(code = %code, attempts, "short code claimed concurrently, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_core::repository::{ReadRepository, Result as StorageResult};
    use burrow_generator::{RandomGenerator, SeqGenerator};
    use burrow_storage::InMemoryRepository;
    use std::collections::HashSet;
    use std::num::NonZeroU32;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    async fn seed(repo: &InMemoryRepository, codes: impl IntoIterator<Item = ShortCode>) {
        for c in codes {
            repo.insert(&c, UrlRecord::new("https://taken.example"))
                .await
                .unwrap();
        }
    }

    #[test]
    fn settings_are_kept() {
        let default = ShortenerService::new(InMemoryRepository::new(), SeqGenerator::new());
        assert_eq!(default.settings(), &ShortenerSettings::default());

        let unbounded = ShortenerService::with_settings(
            InMemoryRepository::new(),
            SeqGenerator::new(),
            ShortenerSettings::unbounded(),
        );
        assert_eq!(unbounded.settings().max_attempts, None);
        assert_eq!(unbounded.clone().settings(), unbounded.settings());
    }

    #[tokio::test]
    async fn shorten_then_lookup_round_trips() {
        let repo = InMemoryRepository::new();
        let service = ShortenerService::new(repo.clone(), RandomGenerator::new());

        let c1 = service.shorten("https://example.com/a").await.unwrap();

        assert_eq!(c1.as_str().len(), 6);
        assert!(c1.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        let record = repo.get(&c1).await.unwrap().unwrap();
        assert_eq!(record.original_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn same_url_twice_gets_two_codes() {
        let repo = InMemoryRepository::new();
        let service = ShortenerService::new(repo.clone(), RandomGenerator::new());

        let first = service.shorten("https://example.com").await.unwrap();
        let second = service.shorten("https://example.com").await.unwrap();

        assert_ne!(first, second);
        for c in [&first, &second] {
            let record = repo.get(c).await.unwrap().unwrap();
            assert_eq!(record.original_url, "https://example.com");
        }
    }

    #[tokio::test]
    async fn urls_are_accepted_as_opaque_strings() {
        let repo = InMemoryRepository::new();
        let service = ShortenerService::new(repo.clone(), SeqGenerator::new());

        for url in ["", "not-a-valid-url", "mailto:someone@example.com"] {
            let c = service.shorten(url).await.unwrap();
            assert_eq!(repo.get(&c).await.unwrap().unwrap().original_url, url);
        }
    }

    #[tokio::test]
    async fn sequential_calls_return_distinct_codes() {
        let repo = InMemoryRepository::new();
        let service = ShortenerService::new(repo.clone(), RandomGenerator::new());
        let mut seen = HashSet::new();

        for i in 0..500 {
            let c = service
                .shorten(&format!("https://example.com/{i}"))
                .await
                .unwrap();
            assert!(seen.insert(c));
        }

        assert_eq!(repo.len(), 500);
    }

    #[tokio::test]
    async fn collision_retries_with_next_candidate() {
        let repo = InMemoryRepository::new();
        seed(&repo, [code("AAAAAA")]).await;
        let service = ShortenerService::new(repo.clone(), SeqGenerator::new());

        let c = service.shorten("https://example.com/new").await.unwrap();

        assert_eq!(c.as_str(), "AAAAAB");
        let taken = repo.get(&code("AAAAAA")).await.unwrap().unwrap();
        assert_eq!(taken.original_url, "https://taken.example");
    }

    #[tokio::test]
    async fn collision_with_predicted_random_code() {
        let predictor = RandomGenerator::seeded(2024);
        let predicted = predictor.generate();
        let after = predictor.generate();

        let repo = InMemoryRepository::new();
        seed(&repo, [predicted.clone()]).await;
        let service = ShortenerService::new(repo.clone(), RandomGenerator::seeded(2024));

        let c = service.shorten("https://example.com").await.unwrap();

        assert_ne!(c, predicted);
        assert_eq!(c, after);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn bounded_retries_exhaust() {
        let repo = InMemoryRepository::new();
        seed(&repo, (0..3).map(SeqGenerator::code_at)).await;
        let settings = ShortenerSettings::builder()
            .max_attempts(NonZeroU32::new(3))
            .build();
        let service = ShortenerService::with_settings(repo.clone(), SeqGenerator::new(), settings);

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert_eq!(err, ShortenerError::Exhausted { attempts: 3 });
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn unbounded_retries_keep_going() {
        let repo = InMemoryRepository::new();
        seed(&repo, (0..100).map(SeqGenerator::code_at)).await;
        let service = ShortenerService::with_settings(
            repo.clone(),
            SeqGenerator::new(),
            ShortenerSettings::unbounded(),
        );

        let c = service.shorten("https://example.com").await.unwrap();

        assert_eq!(c, SeqGenerator::code_at(100));
    }

    /// Reports every code as free but rejects the first insert, the way a
    /// concurrent shorten winning the race would look.
    #[derive(Debug, Default)]
    struct LosesFirstRace {
        inner: InMemoryRepository,
        lost: AtomicBool,
    }

    #[async_trait]
    impl ReadRepository for LosesFirstRace {
        async fn get(&self, code: &ShortCode) -> StorageResult<Option<UrlRecord>> {
            self.inner.get(code).await
        }

        async fn exists(&self, _code: &ShortCode) -> StorageResult<bool> {
            Ok(false)
        }
    }

    #[async_trait]
    impl Repository for LosesFirstRace {
        async fn insert(&self, code: &ShortCode, record: UrlRecord) -> StorageResult<()> {
            if !self.lost.swap(true, Ordering::SeqCst) {
                return Err(StorageError::Conflict(code.to_string()));
            }
            self.inner.insert(code, record).await
        }
    }

    #[tokio::test]
    async fn insert_conflict_is_retried() {
        let repo = LosesFirstRace::default();
        let inner = repo.inner.clone();
        let service = ShortenerService::new(repo, SeqGenerator::new());

        let c = service.shorten("https://example.com").await.unwrap();

        assert_eq!(c.as_str(), "AAAAAB");
        assert_eq!(inner.len(), 1);
    }

    #[derive(Debug)]
    struct BrokenRepository;

    #[async_trait]
    impl ReadRepository for BrokenRepository {
        async fn get(&self, _code: &ShortCode) -> StorageResult<Option<UrlRecord>> {
            Err(StorageError::Operation("offline".to_string()))
        }

        async fn exists(&self, _code: &ShortCode) -> StorageResult<bool> {
            Err(StorageError::Operation("offline".to_string()))
        }
    }

    #[async_trait]
    impl Repository for BrokenRepository {
        async fn insert(&self, _code: &ShortCode, _record: UrlRecord) -> StorageResult<()> {
            Err(StorageError::Operation("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let service = ShortenerService::new(BrokenRepository, RandomGenerator::new());

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(err, ShortenerError::Storage(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_shortens_lose_no_updates() {
        let repo = InMemoryRepository::new();
        let service = ShortenerService::new(repo.clone(), RandomGenerator::new());
        let mut handles = vec![];

        for i in 0..200 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .shorten(&format!("https://example.com/{i}"))
                    .await
                    .unwrap()
            }));
        }

        let mut codes = HashSet::new();
        for handle in handles {
            codes.insert(handle.await.unwrap());
        }

        assert_eq!(codes.len(), 200);
        assert_eq!(repo.len(), 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn contending_generators_never_overwrite() {
        // Every service walks the same code sequence, so nearly every
        // candidate is contested by the other workers.
        let repo = InMemoryRepository::new();
        let mut handles = vec![];

        for worker in 0..8 {
            let service = ShortenerService::with_settings(
                repo.clone(),
                SeqGenerator::new(),
                ShortenerSettings::unbounded(),
            );
            handles.push(tokio::spawn(async move {
                let mut issued = vec![];
                for i in 0..25 {
                    let url = format!("https://example.com/{worker}/{i}");
                    let c = service.shorten(&url).await.unwrap();
                    issued.push((c, url));
                }
                issued
            }));
        }

        let mut codes = HashSet::new();
        for handle in handles {
            for (c, url) in handle.await.unwrap() {
                let record = repo.get(&c).await.unwrap().unwrap();
                assert_eq!(record.original_url, url);
                codes.insert(c);
            }
        }

        assert_eq!(codes.len(), 200);
        assert_eq!(repo.len(), 200);
    }
}
