//! Dataset memoization using moka.
//!
//! Populate-once, read-many. Concurrent misses on the same key are coalesced
//! into a single load; the other callers wait for its result.

use std::sync::Arc;

use moka::sync::Cache;

use juror_core::config::BatchConfig;
use juror_core::errors::{DatasetError, JurorError, JurorResult};
use juror_core::traits::{DatasetKey, IDatasetSource};
use juror_core::AnswerCorpus;
use juror_observability::dataset_load_span;

/// Shared cache of indexed corpora keyed by dataset identity.
#[derive(Clone)]
pub struct DatasetCache {
    cache: Cache<DatasetKey, Arc<AnswerCorpus>>,
}

impl DatasetCache {
    /// Create a cache holding at most `max_entries` datasets.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn from_config(config: &BatchConfig) -> Self {
        Self::new(config.cache_capacity)
    }

    /// Cached corpus for `key`.
    pub fn get(&self, key: &DatasetKey) -> Option<Arc<AnswerCorpus>> {
        self.cache.get(key)
    }

    /// Cached corpus for `key`, loading it from `source` on a miss.
    ///
    /// A failed load is returned to every waiting caller and leaves the cache
    /// untouched. An empty dataset is a load failure.
    pub fn get_or_load(
        &self,
        key: &DatasetKey,
        source: &dyn IDatasetSource,
    ) -> JurorResult<Arc<AnswerCorpus>> {
        if let Some(corpus) = self.cache.get(key) {
            tracing::trace!(dataset = %key, "dataset cache hit");
            return Ok(corpus);
        }

        self.cache
            .try_get_with(key.clone(), || -> JurorResult<Arc<AnswerCorpus>> {
                let span = dataset_load_span!(key);
                let _guard = span.enter();
                let answers = source.load(key)?;
                if answers.is_empty() {
                    return Err(DatasetError::LoadFailed {
                        key: key.to_string(),
                        reason: "dataset is empty".to_string(),
                    }
                    .into());
                }
                let corpus = AnswerCorpus::new(answers);
                tracing::debug!(
                    dataset = %key,
                    fingerprint = %corpus.fingerprint(),
                    "dataset loaded"
                );
                Ok(Arc::new(corpus))
            })
            .map_err(|shared| unshare(key, shared))
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

/// Recovers an owned error from the one moka hands to every waiting caller.
fn unshare(key: &DatasetKey, shared: Arc<JurorError>) -> JurorError {
    match Arc::try_unwrap(shared) {
        Ok(error) => error,
        Err(shared) => match shared.as_ref() {
            JurorError::Dataset(error) => error.clone().into(),
            other => DatasetError::LoadFailed {
                key: key.to_string(),
                reason: other.to_string(),
            }
            .into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juror_core::Answer;

    struct Fixed;

    impl IDatasetSource for Fixed {
        fn load(&self, _key: &DatasetKey) -> JurorResult<Vec<Answer>> {
            Ok(vec![Answer::single("p1", "q1", "A")])
        }
    }

    #[test]
    fn miss_then_hit_returns_same_corpus() {
        let cache = DatasetCache::new(8);
        let key = DatasetKey::from("ws2017");
        assert!(cache.get(&key).is_none());

        let first = cache.get_or_load(&key, &Fixed).unwrap();
        let second = cache.get_or_load(&key, &Fixed).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    struct Empty;

    impl IDatasetSource for Empty {
        fn load(&self, _key: &DatasetKey) -> JurorResult<Vec<Answer>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn empty_dataset_fails_to_load() {
        let cache = DatasetCache::new(8);
        let key = DatasetKey::from("ws2018");
        let err = cache.get_or_load(&key, &Empty).unwrap_err();
        assert!(matches!(
            err,
            JurorError::Dataset(DatasetError::LoadFailed { ref key, .. }) if key == "ws2018"
        ));
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn shared_errors_keep_their_kind() {
        let key = DatasetKey::from("ws2018");
        let not_found = Arc::new(JurorError::from(DatasetError::NotFound {
            key: key.to_string(),
        }));
        let _other_waiter = Arc::clone(&not_found);
        assert!(matches!(
            unshare(&key, not_found),
            JurorError::Dataset(DatasetError::NotFound { .. })
        ));

        let invalid = Arc::new(JurorError::from(juror_core::errors::InputError::EmptyCorpus));
        let _other_waiter = Arc::clone(&invalid);
        assert!(matches!(
            unshare(&key, invalid),
            JurorError::Dataset(DatasetError::LoadFailed { .. })
        ));
    }

    #[test]
    fn clear_drops_entries() {
        let cache = DatasetCache::new(8);
        let key = DatasetKey::from("ws2017");
        cache.get_or_load(&key, &Fixed).unwrap();
        cache.clear();
        assert!(cache.get(&key).is_none());
    }
}
