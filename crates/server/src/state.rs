use std::sync::Arc;
use tracing::info;
use yatra_common::{AppConfig, Result};
use yatra_recommend::{EngineCache, RecommendationEngine};

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Read-only recommendation engine
    pub engine: Arc<RecommendationEngine>,
}

impl AppState {
    /// Create application state, building the engine through `cache`
    pub fn new(config: AppConfig, cache: &EngineCache) -> Result<Self> {
        let engine = cache.get_or_load(&config)?;
        info!("Engine cache holds {} dataset(s)", cache.len());

        Ok(Self { config, engine })
    }

    /// Wrap an already-built engine
    pub fn with_engine(config: AppConfig, engine: Arc<RecommendationEngine>) -> Self {
        Self { config, engine }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_states_share_cached_engine() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Name,City,State,Type,Significance,Google review rating,Best Time to visit\n\
             Baga Beach,Goa,Goa,Beach,Recreational,4.4,Evening\n"
        )
        .unwrap();

        let config = AppConfig {
            dataset_path: file.path().to_path_buf(),
            ..AppConfig::default()
        };

        let cache = EngineCache::new();
        let first = AppState::new(config.clone(), &cache).unwrap();
        let second = AppState::new(config, &cache).unwrap();

        assert!(Arc::ptr_eq(&first.engine, &second.engine));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_engine_cache_is_process_wide() {
        assert!(std::ptr::eq(crate::engine_cache(), crate::engine_cache()));
    }
}
