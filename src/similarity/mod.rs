//! Similarity Engine Module
//!
//! The core component: ranks catalog records against a free-text query using
//! TF-IDF vector similarity.
//!
//! ## Overview
//! At startup the catalog's composite texts are turned into a vocabulary and
//! an L2-normalized TF-IDF weight matrix. Per request, a query is projected
//! into that fixed vector space and scored against every row by dot product
//! (cosine similarity over pre-normalized vectors). The index is immutable
//! after construction, so any number of rankings may run concurrently
//! against it without locking.
//!
//! ## Responsibilities
//! - **Tokenization**: One shared pipeline for documents and queries
//!   (lowercasing, word extraction, stop-word removal).
//! - **Indexing**: Vocabulary construction and TF-IDF weighting with the
//!   smoothed IDF formula.
//! - **Ranking**: Cosine scoring and deterministic top-k selection.
//!
//! ## Submodules
//! - **`index`**: The vector space builder and scorer.
//! - **`ranker`**: Top-k selection over index scores.
//! - **`stopwords`**: The fixed English stop-word set.
//! - **`tokenizer`**: Text-to-token pipeline shared by both sides.

pub mod index;
pub mod ranker;
pub mod stopwords;
pub mod tokenizer;

mod tests;
