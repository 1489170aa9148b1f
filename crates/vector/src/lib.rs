//! Yatra Vector Space
//!
//! TF-IDF 기반 텍스트 벡터화 및 코사인 유사도 랭킹

pub mod similarity;
pub mod space;
pub mod stop_words;
pub mod tokenize;

pub use similarity::{rank_against_document, rank_against_query, ScoredIndex};
pub use space::VectorSpace;
pub use tokenize::Tokenizer;
