use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use yatra_common::{AppConfig, Result, YatraError};

use crate::engine::RecommendationEngine;

type Slot = Arc<OnceCell<Arc<RecommendationEngine>>>;

/// Build-once memo of recommendation engines, keyed by dataset path
///
/// The map lock is only held while looking up a key's slot. The build itself
/// runs inside the slot's `OnceCell`, so concurrent first requests for the
/// same key wait for a single build. Failed builds are not cached.
#[derive(Default)]
pub struct EngineCache {
    slots: Mutex<HashMap<PathBuf, Slot>>,
}

impl EngineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine for the configured dataset, loading it on first use
    ///
    /// Keyed by dataset path; limits come from the config that built it.
    pub fn get_or_load(&self, config: &AppConfig) -> Result<Arc<RecommendationEngine>> {
        self.get_or_build(&config.dataset_path, || RecommendationEngine::from_config(config))
    }

    /// Engine for `key`, running `build` only if no engine is cached yet
    pub fn get_or_build<F>(&self, key: impl AsRef<Path>, build: F) -> Result<Arc<RecommendationEngine>>
    where
        F: FnOnce() -> Result<RecommendationEngine>,
    {
        let key = key.as_ref();
        let slot = self.slot(key)?;

        if let Some(engine) = slot.get() {
            debug!("Engine cache hit: {}", key.display());
            return Ok(Arc::clone(engine));
        }

        let engine = slot.get_or_try_init(|| {
            info!("Building recommendation engine for {}", key.display());
            build().map(Arc::new)
        })?;

        Ok(Arc::clone(engine))
    }

    /// Number of keys with a built engine
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .map(|slots| slots.values().filter(|s| s.get().is_some()).count())
            .unwrap_or(0)
    }

    fn slot(&self, key: &Path) -> Result<Slot> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| YatraError::internal("Engine cache lock poisoned"))?;
        Ok(Arc::clone(slots.entry(key.to_path_buf()).or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Destination, RecordStore};
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn engine() -> Result<RecommendationEngine> {
        RecommendationEngine::build(RecordStore::new(vec![
            Destination {
                name: "Baga Beach".to_string(),
                city: "Goa".to_string(),
                place_type: "Beach".to_string(),
                ..Destination::default()
            },
            Destination {
                name: "Amber Fort".to_string(),
                city: "Jaipur".to_string(),
                place_type: "Fort".to_string(),
                ..Destination::default()
            },
        ]))
    }

    #[test]
    fn test_builds_once_per_key() {
        let cache = EngineCache::new();
        let builds = AtomicUsize::new(0);

        let first = cache
            .get_or_build("goa.csv", || {
                builds.fetch_add(1, Ordering::SeqCst);
                engine()
            })
            .unwrap();
        let second = cache
            .get_or_build("goa.csv", || {
                builds.fetch_add(1, Ordering::SeqCst);
                engine()
            })
            .unwrap();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        let cache = Arc::new(EngineCache::new());
        let builds = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let builds = Arc::clone(&builds);
                thread::spawn(move || {
                    cache
                        .get_or_build("shared.csv", || {
                            builds.fetch_add(1, Ordering::SeqCst);
                            engine()
                        })
                        .unwrap()
                })
            })
            .collect();

        let engines: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(engines.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_failed_build_is_not_cached() {
        let cache = EngineCache::new();
        let err = cache
            .get_or_build("broken.csv", || RecommendationEngine::build(RecordStore::default()))
            .unwrap_err();
        assert!(matches!(err, YatraError::Config(_)));
        assert_eq!(cache.len(), 0);

        cache.get_or_build("broken.csv", engine).unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_or_load_reads_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Name,City,State,Type,Significance,Google review rating,Best Time to visit\n\
             Hawa Mahal,Jaipur,Rajasthan,Palace,Historical,4.4,Morning\n\
             Amber Fort,Jaipur,Rajasthan,Fort,Historical,4.6,Morning\n"
        )
        .unwrap();

        let config = AppConfig {
            dataset_path: file.path().to_path_buf(),
            keyword_limit: 1,
            ..AppConfig::default()
        };

        let cache = EngineCache::new();
        let engine = cache.get_or_load(&config).unwrap();
        assert_eq!(engine.store().len(), 2);
        assert_eq!(engine.limits().keyword, 1);
        assert!(Arc::ptr_eq(&engine, &cache.get_or_load(&config).unwrap()));
    }
}
