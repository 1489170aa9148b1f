use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};
use yatra_common::{AppConfig, Result, YatraError};
use yatra_vector::{rank_against_document, rank_against_query, VectorSpace};

use crate::features::build_corpus;
use crate::filter::FilterSet;
use crate::loader::load_dataset;
use crate::record::{FilterOptions, RecordStore};

/// Maximum number of results per query kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimits {
    pub place: usize,
    pub keyword: usize,
}

impl Default for ResultLimits {
    fn default() -> Self {
        Self {
            place: 5,
            keyword: 10,
        }
    }
}

impl From<&AppConfig> for ResultLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            place: config.place_limit,
            keyword: config.keyword_limit,
        }
    }
}

/// A recommended destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub state: String,
    pub score: f64,
    pub review_rating: f64,
}

impl Recommendation {
    /// "name (state)" form used for keyword results
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.state)
    }
}

/// Result of a similar-to-place query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlaceOutcome {
    Ranked { recommendations: Vec<Recommendation> },
    NoMatches,
    NotFound { place: String },
}

/// Result of a keyword query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeywordOutcome {
    Ranked { recommendations: Vec<Recommendation> },
    NoMatches,
    EmptyQuery,
}

impl PlaceOutcome {
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Self::Ranked { recommendations } => recommendations,
            _ => &[],
        }
    }

    /// Error behind an unsuccessful query, if any
    pub fn error(&self) -> Option<YatraError> {
        match self {
            Self::NotFound { place } => Some(YatraError::not_found(format!("Unknown place '{}'", place))),
            _ => None,
        }
    }

    /// HTTP status for this outcome
    pub fn status_code(&self) -> u16 {
        self.error().map_or(200, |e| e.status_code())
    }
}

impl KeywordOutcome {
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Self::Ranked { recommendations } => recommendations,
            _ => &[],
        }
    }

    /// Error behind an unsuccessful query, if any
    pub fn error(&self) -> Option<YatraError> {
        match self {
            Self::EmptyQuery => Some(YatraError::invalid_input("Keyword cannot be empty")),
            _ => None,
        }
    }

    /// HTTP status for this outcome
    pub fn status_code(&self) -> u16 {
        self.error().map_or(200, |e| e.status_code())
    }
}

/// Destination records and their fitted vector space
///
/// Built once, then shared read-only by every query.
#[derive(Debug)]
pub struct RecommendationEngine {
    store: RecordStore,
    space: VectorSpace,
    limits: ResultLimits,
}

impl RecommendationEngine {
    /// Build feature texts for every record and fit the vector space
    pub fn build(store: RecordStore) -> Result<Self> {
        let corpus = build_corpus(&store);
        let space = VectorSpace::fit(&corpus)?;

        info!(
            "Recommendation engine ready - {} destinations, {} terms",
            store.len(),
            space.vocabulary_size()
        );

        Ok(Self {
            store,
            space,
            limits: ResultLimits::default(),
        })
    }

    /// Load a CSV dataset and build the engine from it
    pub fn from_dataset(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(load_dataset(path)?)
    }

    /// Load the configured dataset with the configured limits
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::from_dataset(&config.dataset_path)?.with_limits(ResultLimits::from(config)))
    }

    pub fn with_limits(mut self, limits: ResultLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Destinations most similar to `place`, filtered and capped
    pub fn recommend_similar_to_place(&self, place: &str, filters: &FilterSet) -> PlaceOutcome {
        match self.rank_similar_to_place(place, filters) {
            Ok(recommendations) if recommendations.is_empty() => PlaceOutcome::NoMatches,
            Ok(recommendations) => PlaceOutcome::Ranked { recommendations },
            Err(e) => {
                warn!("Place recommendation failed: {}", e);
                PlaceOutcome::NotFound {
                    place: place.to_string(),
                }
            }
        }
    }

    fn rank_similar_to_place(&self, place: &str, filters: &FilterSet) -> Result<Vec<Recommendation>> {
        let source = self
            .store
            .position(place)
            .ok_or_else(|| YatraError::not_found(format!("Unknown place '{}'", place)))?;

        let records = self.store.records();
        let ranked = rank_against_document(&self.space, source, |i| records[i].review_rating)?;

        let recommendations = filters.apply(
            ranked.into_iter().map(|scored| {
                let record = &records[scored.index];
                (
                    Recommendation {
                        name: record.name.clone(),
                        state: record.state.clone(),
                        score: scored.score,
                        review_rating: record.review_rating,
                    },
                    record,
                )
            }),
            self.limits.place,
        );

        debug!(
            "Similar to '{}' (row {}) - {} results, filters active: {}",
            place,
            source,
            recommendations.len(),
            !filters.is_empty()
        );

        Ok(recommendations)
    }

    /// Destinations whose feature text best matches `keyword`
    pub fn recommend_by_keyword(&self, keyword: &str) -> KeywordOutcome {
        match self.rank_by_keyword(keyword) {
            Ok(recommendations) if recommendations.is_empty() => KeywordOutcome::NoMatches,
            Ok(recommendations) => KeywordOutcome::Ranked { recommendations },
            Err(e) => {
                debug!("Keyword recommendation rejected: {}", e);
                KeywordOutcome::EmptyQuery
            }
        }
    }

    fn rank_by_keyword(&self, keyword: &str) -> Result<Vec<Recommendation>> {
        if keyword.trim().is_empty() {
            return Err(YatraError::invalid_input("Keyword cannot be empty"));
        }

        let query = self.space.transform(keyword);
        let records = self.store.records();

        let recommendations: Vec<Recommendation> = rank_against_query(&self.space, &query)
            .into_iter()
            .take(self.limits.keyword)
            .filter(|scored| scored.score > 0.0)
            .map(|scored| {
                let record = &records[scored.index];
                Recommendation {
                    name: record.name.clone(),
                    state: record.state.clone(),
                    score: scored.score,
                    review_rating: record.review_rating,
                }
            })
            .collect();

        debug!("Keyword '{}' - {} results", keyword, recommendations.len());
        Ok(recommendations)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    pub fn limits(&self) -> ResultLimits {
        self.limits
    }

    pub fn filter_options(&self) -> FilterOptions {
        self.store.filter_options()
    }
}
