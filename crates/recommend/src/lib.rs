//! Yatra Recommendation Engine
//!
//! 여행지 데이터셋 로딩, 특징 텍스트 생성, 필터링 및 추천 질의

pub mod cache;
pub mod engine;
pub mod features;
pub mod filter;
pub mod loader;
pub mod record;

pub use cache::EngineCache;
pub use engine::{KeywordOutcome, PlaceOutcome, Recommendation, RecommendationEngine, ResultLimits};
pub use filter::FilterSet;
pub use loader::{load_dataset, load_from_reader};
pub use record::{Destination, FilterOptions, RecordStore};
