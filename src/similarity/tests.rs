//! Similarity Module Tests
//!
//! Validates the ranking pipeline: tokenization, index construction, and
//! top-k selection.
//!
//! ## Test Scopes
//! - **Tokenizer**: Lowercasing, word extraction, stop-word removal.
//! - **Index**: Vocabulary, IDF weighting, normalization, degenerate inputs.
//! - **Ranker**: Ordering, tie-breaking, bounds, and query edge cases.

#[cfg(test)]
mod tests {
    use crate::similarity::index::SimilarityIndex;
    use crate::similarity::ranker::rank;
    use crate::similarity::tokenizer::tokenize;

    const EPSILON: f64 = 1e-9;

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_tokenize_lowercases() {
        let tokens = tokenize("Cognitive APTITUDE Screening");

        assert_eq!(tokens, vec!["cognitive", "aptitude", "screening"]);
    }

    #[test]
    fn test_tokenize_removes_stop_words() {
        let tokens = tokenize("the test of verbal reasoning and numeracy");

        assert!(tokens.contains(&"test".to_string()));
        assert!(tokens.contains(&"verbal".to_string()));
        assert!(tokens.contains(&"reasoning".to_string()));
        assert!(tokens.contains(&"numeracy".to_string()));

        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"of".to_string()));
        assert!(!tokens.contains(&"and".to_string()));
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        // Word pattern requires two or more word characters
        let tokens = tokenize("a b c java");

        assert_eq!(tokens, vec!["java"]);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = tokenize("https://example.com/catalog/verify-g2");

        assert!(tokens.contains(&"https".to_string()));
        assert!(tokens.contains(&"example".to_string()));
        assert!(tokens.contains(&"com".to_string()));
        assert!(tokens.contains(&"catalog".to_string()));
        assert!(tokens.contains(&"verify".to_string()));
        assert!(tokens.contains(&"g2".to_string()));
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        // Term frequency needs raw counts, so duplicates survive
        let tokens = tokenize("sales sales sales manager");

        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_tokenize_keeps_numeric_tokens() {
        let tokens = tokenize("excel 365 assessment");

        assert!(tokens.contains(&"365".to_string()));
    }

    #[test]
    fn test_tokenize_empty_string() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_only_stop_words() {
        assert!(tokenize("the and of a to").is_empty());
    }

    // ============================================================
    // INDEX TESTS
    // ============================================================

    #[test]
    fn test_build_vocabulary() {
        let index = SimilarityIndex::build(&["math test", "math quiz"]);

        assert_eq!(index.document_count(), 2);
        assert_eq!(index.vocabulary_size(), 3);
        assert!(index.idf_weight("math").is_some());
        assert!(index.idf_weight("test").is_some());
        assert!(index.idf_weight("quiz").is_some());
        assert!(index.idf_weight("science").is_none());
    }

    #[test]
    fn test_idf_is_one_for_ubiquitous_terms() {
        // ln((1 + N) / (1 + N)) + 1 = 1.0 when every document has the term
        let index = SimilarityIndex::build(&["math test", "math quiz"]);

        let idf = index.idf_weight("math").unwrap();
        assert!((idf - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_idf_smoothed_formula() {
        // "quiz" appears in 1 of 3 documents: ln(4 / 2) + 1
        let index = SimilarityIndex::build(&["math test", "math quiz", "math drill"]);

        let idf = index.idf_weight("quiz").unwrap();
        let expected = (4.0f64 / 2.0).ln() + 1.0;
        assert!((idf - expected).abs() < EPSILON);
    }

    #[test]
    fn test_rare_terms_outweigh_common_terms() {
        let index = SimilarityIndex::build(&["math test", "math quiz", "math drill"]);

        let common = index.idf_weight("math").unwrap();
        let rare = index.idf_weight("quiz").unwrap();
        assert!(rare > common);
    }

    #[test]
    fn test_empty_corpus_builds_empty_index() {
        let index = SimilarityIndex::build::<&str>(&[]);

        assert!(index.is_empty());
        assert_eq!(index.document_count(), 0);
        assert_eq!(index.vocabulary_size(), 0);
    }

    #[test]
    fn test_query_vector_is_normalized() {
        let index = SimilarityIndex::build(&["math test", "science lab"]);

        let vector = index.query_vector("math test science");
        let norm: f64 = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_query_vector_unknown_terms_are_zero_vector() {
        let index = SimilarityIndex::build(&["math test", "science lab"]);

        let vector = index.query_vector("geography quiz");
        assert!(vector.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_scores_are_zero_for_disjoint_documents() {
        let index = SimilarityIndex::build(&["math test", "science lab"]);

        let vector = index.query_vector("math");
        let scores = index.scores(&vector);
        assert!(scores[0] > 0.0);
        assert_eq!(scores[1], 0.0);
    }

    // ============================================================
    // RANKER TESTS
    // ============================================================

    fn example_catalog_index() -> SimilarityIndex {
        SimilarityIndex::build(&[
            "Math Test http://a",
            "Math Quiz http://b",
            "Science Lab http://c",
        ])
    }

    #[test]
    fn test_rank_orders_by_similarity() {
        let index = example_catalog_index();

        let matches = rank(&index, "math test", 3);

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 1);
        assert_eq!(matches[2].index, 2);
        assert!(matches[0].score > matches[1].score);
        assert!(matches[1].score > matches[2].score);
    }

    #[test]
    fn test_rank_self_similarity_is_one() {
        let index = example_catalog_index();

        // Query identical to a document's composite text
        let matches = rank(&index, "Math Test http://a", 1);

        assert_eq!(matches[0].index, 0);
        assert!((matches[0].score - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rank_respects_top_k() {
        let index = example_catalog_index();

        assert_eq!(rank(&index, "math", 2).len(), 2);
        assert_eq!(rank(&index, "math", 1).len(), 1);
    }

    #[test]
    fn test_rank_top_k_above_catalog_size_returns_all() {
        let index = example_catalog_index();

        let matches = rank(&index, "math", 50);
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_rank_breaks_ties_by_ascending_index() {
        // Identical documents produce identical scores; order must be stable
        let index = SimilarityIndex::build(&[
            "numerical reasoning",
            "numerical reasoning",
            "numerical reasoning",
        ]);

        let matches = rank(&index, "numerical reasoning", 3);

        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 1);
        assert_eq!(matches[2].index, 2);
        assert!((matches[0].score - matches[2].score).abs() < EPSILON);
    }

    #[test]
    fn test_rank_unknown_query_scores_all_zero() {
        let index = example_catalog_index();

        let matches = rank(&index, "zymurgy photosynthesis", 3);

        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.score == 0.0));
        // Catalog order when every score ties at zero
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 1);
        assert_eq!(matches[2].index, 2);
    }

    #[test]
    fn test_rank_empty_query_is_safe() {
        let index = example_catalog_index();

        let matches = rank(&index, "", 5);

        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.score == 0.0));
    }

    #[test]
    fn test_rank_stop_word_query_is_safe() {
        let index = example_catalog_index();

        let matches = rank(&index, "the of and", 5);

        assert!(matches.iter().all(|m| m.score == 0.0));
    }

    #[test]
    fn test_rank_empty_index_returns_nothing() {
        let index = SimilarityIndex::build::<&str>(&[]);

        assert!(rank(&index, "math", 5).is_empty());
    }

    #[test]
    fn test_rank_is_deterministic() {
        let index = example_catalog_index();

        let first = rank(&index, "math test", 3);
        let second = rank(&index, "math test", 3);

        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_scores_stay_in_unit_interval() {
        let index = example_catalog_index();

        for m in rank(&index, "math science lab test quiz", 3) {
            assert!(m.score >= 0.0 && m.score <= 1.0 + EPSILON);
        }
    }
}
