use ndarray::{Array1, Array2, ArrayView1, Axis};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};
use yatra_common::{Result, YatraError};

use crate::tokenize::Tokenizer;

/// TF-IDF vector space fitted once over a corpus
///
/// Owns the vocabulary, the smoothed inverse document frequencies and the
/// L2-normalized document matrix (one row per corpus text, same order).
/// Nothing mutates after [`VectorSpace::fit`], so a shared reference can be
/// used from any number of threads.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    idf: Array1<f64>,
    documents: Array2<f64>,
}

impl VectorSpace {
    /// Build the vocabulary and document matrix from `corpus`
    ///
    /// Fails with a configuration error when the corpus is empty or when no
    /// text yields a single term after stop-word removal.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Result<Self> {
        if corpus.is_empty() {
            return Err(YatraError::config("Cannot fit vector space on an empty corpus"));
        }

        let tokenizer = Tokenizer::new();
        let tokenized: Vec<Vec<String>> = corpus
            .iter()
            .map(|text| tokenizer.tokenize(text.as_ref()))
            .collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();

        if terms.is_empty() {
            return Err(YatraError::config(
                "Empty vocabulary: corpus texts only contain stop words",
            ));
        }

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let n_docs = corpus.len();
        let vocab_size = vocabulary.len();

        let mut document_frequency = vec![0usize; vocab_size];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            for idx in unique {
                document_frequency[idx] += 1;
            }
        }

        // idf(t) = ln((1 + n) / (1 + df(t))) + 1
        let idf = Array1::from_iter(
            document_frequency
                .iter()
                .map(|&df| ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0),
        );

        let mut space = Self {
            tokenizer,
            vocabulary,
            idf,
            documents: Array2::zeros((n_docs, vocab_size)),
        };

        for (row, tokens) in tokenized.iter().enumerate() {
            let weights = space.weigh(tokens);
            space.documents.row_mut(row).assign(&weights);
        }

        info!(
            "Vector space fitted - {} documents, {} terms",
            n_docs, vocab_size
        );

        Ok(space)
    }

    /// Project arbitrary text into the fitted space
    ///
    /// Terms outside the vocabulary are ignored; a text with no known terms
    /// yields the zero vector.
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let tokens = self.tokenizer.tokenize(text);
        let vector = self.weigh(&tokens);
        debug!(
            "Transformed text into vector ({} tokens, norm {:.4})",
            tokens.len(),
            vector.dot(&vector).sqrt()
        );
        vector
    }

    /// Term counts scaled by idf, then L2-normalized
    fn weigh(&self, tokens: &[String]) -> Array1<f64> {
        let mut vector = Array1::<f64>::zeros(self.vocabulary.len());
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                vector[idx] += self.idf[idx];
            }
        }

        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector.mapv_inplace(|w| w / norm);
        }
        vector
    }

    /// Document vector for a corpus row
    pub fn document(&self, row: usize) -> Option<ArrayView1<'_, f64>> {
        (row < self.len()).then(|| self.documents.row(row))
    }

    /// Full document matrix (rows x vocabulary)
    pub fn documents(&self) -> &Array2<f64> {
        &self.documents
    }

    /// Number of fitted documents
    pub fn len(&self) -> usize {
        self.documents.len_of(Axis(0))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vocabulary index of a term, if known
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec![
            "Goa beach scenic",
            "Goa beach nightlife",
            "Madurai temple historic",
        ]
    }

    #[test]
    fn test_fit_builds_sorted_vocabulary() {
        let space = VectorSpace::fit(&corpus()).unwrap();
        assert_eq!(space.len(), 3);
        assert_eq!(space.vocabulary_size(), 7);
        assert_eq!(space.term_index("beach"), Some(0));
        assert_eq!(space.term_index("temple"), Some(6));
        assert_eq!(space.term_index("the"), None);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let space = VectorSpace::fit(&corpus()).unwrap();
        for row in space.documents().rows() {
            assert!((row.dot(&row) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_smoothed_idf_rewards_rare_terms() {
        let space = VectorSpace::fit(&corpus()).unwrap();
        let doc = space.document(0).unwrap();
        let beach = doc[space.term_index("beach").unwrap()];
        let scenic = doc[space.term_index("scenic").unwrap()];
        assert!(scenic > beach);
    }

    #[test]
    fn test_term_shared_by_every_document_keeps_weight() {
        let space = VectorSpace::fit(&["fort palace", "fort lake"]).unwrap();
        let doc = space.document(0).unwrap();
        assert!(doc[space.term_index("fort").unwrap()] > 0.0);
    }

    #[test]
    fn test_fit_rejects_empty_corpus() {
        let empty: Vec<String> = Vec::new();
        let err = VectorSpace::fit(&empty).unwrap_err();
        assert!(matches!(err, YatraError::Config(_)));
    }

    #[test]
    fn test_fit_rejects_stop_word_only_corpus() {
        let err = VectorSpace::fit(&["the of and", "", "a"]).unwrap_err();
        assert!(matches!(err, YatraError::Config(_)));
    }

    #[test]
    fn test_transform_matches_fitted_row() {
        let space = VectorSpace::fit(&corpus()).unwrap();
        let projected = space.transform("Goa beach scenic");
        assert_eq!(projected, space.document(0).unwrap().to_owned());
    }

    #[test]
    fn test_transform_partial_overlap_is_unit_length() {
        let space = VectorSpace::fit(&corpus()).unwrap();
        let projected = space.transform("beach holidays in Goa");
        assert!((projected.dot(&projected) - 1.0).abs() < 1e-9);
        assert!(projected[space.term_index("beach").unwrap()] > 0.0);
        assert_eq!(projected[space.term_index("temple").unwrap()], 0.0);
    }

    #[test]
    fn test_transform_unknown_terms_is_zero_vector() {
        let space = VectorSpace::fit(&corpus()).unwrap();
        let projected = space.transform("skiing glacier");
        assert_eq!(projected.len(), space.vocabulary_size());
        assert!(projected.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_document_out_of_range() {
        let space = VectorSpace::fit(&corpus()).unwrap();
        assert!(space.document(3).is_none());
    }
}
