use ndarray::Array1;
use std::cmp::Ordering;
use yatra_common::{Result, YatraError};

use crate::space::VectorSpace;

/// Corpus row paired with its similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndex {
    /// Row in the corpus (record store position)
    pub index: usize,

    /// Cosine similarity
    pub score: f64,
}

/// Rank every other document by similarity to the document at `source`
///
/// Sorted by score descending, then by `tie_break(index)` descending. The
/// sort is stable, so rows equal on both keys keep corpus order. The source
/// row itself is never part of the result.
pub fn rank_against_document<F>(
    space: &VectorSpace,
    source: usize,
    tie_break: F,
) -> Result<Vec<ScoredIndex>>
where
    F: Fn(usize) -> f64,
{
    let source_vector = space.document(source).ok_or_else(|| {
        YatraError::not_found(format!(
            "Row {} is outside the corpus ({} documents)",
            source,
            space.len()
        ))
    })?;

    // Rows are unit length, so the dot product is the cosine
    let scores = space.documents().dot(&source_vector);

    let mut ranked: Vec<ScoredIndex> = scores
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != source)
        .map(|(index, &score)| ScoredIndex { index, score })
        .collect();

    ranked.sort_by(|a, b| {
        descending(a.score, b.score).then_with(|| descending(tie_break(a.index), tie_break(b.index)))
    });

    Ok(ranked)
}

/// Rank all documents by similarity to a query vector
///
/// Sorted by score descending only; zero scores are kept. Equal scores keep
/// ascending corpus order.
pub fn rank_against_query(space: &VectorSpace, query: &Array1<f64>) -> Vec<ScoredIndex> {
    let scores = space.documents().dot(query);

    let mut ranked: Vec<ScoredIndex> = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| ScoredIndex { index, score })
        .collect();

    ranked.sort_by(|a, b| descending(a.score, b.score));
    ranked
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
