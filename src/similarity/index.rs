use std::collections::{HashMap, HashSet};

use super::tokenizer::tokenize;

/// TF-IDF vector space over a fixed corpus.
///
/// Built once from the catalog's composite texts and never mutated. Row `i`
/// of the weight matrix is the L2-normalized TF-IDF vector of document `i`,
/// so cosine similarity against a normalized query vector is a plain dot
/// product. Construction is pure: no I/O, no shared state.
pub struct SimilarityIndex {
    /// Term -> column position in the weight matrix.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per column position.
    idf: Vec<f64>,
    /// One normalized row per document, document count x vocabulary size.
    weights: Vec<Vec<f64>>,
}

impl SimilarityIndex {
    /// Build the vocabulary, IDF weights, and weight matrix from a corpus.
    ///
    /// Terms are assigned column positions in sorted order, which keeps the
    /// matrix layout deterministic across runs. An empty corpus yields an
    /// empty index (zero rows); ranking against it returns no results.
    pub fn build<S: AsRef<str>>(corpus: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        let mut terms: Vec<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        terms.sort_unstable();
        terms.dedup();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(position, term)| (term.to_string(), position))
            .collect();

        // Document frequency counts each term once per document.
        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                if let Some(&position) = vocabulary.get(term) {
                    document_frequency[position] += 1;
                }
            }
        }

        // Smoothed IDF: ln((1 + N) / (1 + df)) + 1. The +1 terms keep the
        // weight finite and positive even for terms present in every document.
        let total_documents = tokenized.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + total_documents) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let weights = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for term in tokens {
                    if let Some(&position) = vocabulary.get(term.as_str()) {
                        row[position] += 1.0;
                    }
                }
                for (position, weight) in row.iter_mut().enumerate() {
                    *weight *= idf[position];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self {
            vocabulary,
            idf,
            weights,
        }
    }

    pub fn document_count(&self) -> usize {
        self.weights.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// IDF weight for a term, if it is in the vocabulary.
    pub fn idf_weight(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&position| self.idf[position])
    }

    /// Project a query into the index's vector space.
    ///
    /// Only terms already in the vocabulary contribute; everything else is
    /// dropped without error. The result is L2-normalized unless it is the
    /// zero vector, which is returned as-is so that a query with no known
    /// terms scores 0.0 against every document instead of producing NaN.
    pub fn query_vector(&self, query: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for term in tokenize(query) {
            if let Some(&position) = self.vocabulary.get(term.as_str()) {
                vector[position] += 1.0;
            }
        }
        for (position, weight) in vector.iter_mut().enumerate() {
            *weight *= self.idf[position];
        }
        l2_normalize(&mut vector);
        vector
    }

    /// Cosine similarity of a normalized query vector against every document.
    ///
    /// Returns one score per document, in document order. Both sides are
    /// already normalized, so the cosine reduces to a dot product and every
    /// score lands in [0, 1].
    pub fn scores(&self, query_vector: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .map(|row| {
                row.iter()
                    .zip(query_vector.iter())
                    .map(|(doc_weight, query_weight)| doc_weight * query_weight)
                    .sum()
            })
            .collect()
    }
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|weight| weight * weight).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.iter_mut() {
            *weight /= norm;
        }
    }
}
