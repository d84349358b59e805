use std::cmp::Ordering;

use super::index::SimilarityIndex;

/// One ranked catalog position with its cosine similarity score.
///
/// `index` is the document's position in the catalog the index was built
/// from; callers look the record up by position, never by re-deriving it
/// from text.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    pub index: usize,
    pub score: f64,
}

/// Rank every document against a query, best first.
///
/// Returns at most `top_k` matches ordered by descending score; equal scores
/// are broken by ascending document index so the ordering is deterministic.
/// A query that tokenizes to nothing (empty, all stop words, all unknown
/// terms) is not an error: every score is 0.0 and the first `top_k`
/// documents come back in catalog order. An empty index returns no matches.
pub fn rank(index: &SimilarityIndex, query: &str, top_k: usize) -> Vec<RankedMatch> {
    let query_vector = index.query_vector(query);

    let mut matches: Vec<RankedMatch> = index
        .scores(&query_vector)
        .into_iter()
        .enumerate()
        .map(|(index, score)| RankedMatch { index, score })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    matches.truncate(top_k);
    matches
}
