//! Assessment Recommender Library
//!
//! This library crate defines the core modules of the recommendation service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`catalog`**: The data intake layer. Loads the assessment catalog from
//!   two CSV sources merged by row position, normalizes Yes/No metadata
//!   flags, and derives the composite text each record is indexed under.
//! - **`similarity`**: The core ranking engine. Builds a TF-IDF vector space
//!   over the catalog once at startup and ranks records against free-text
//!   queries by cosine similarity.
//! - **`web`**: The presentation layer. An Axum HTTP surface serving the
//!   search form, the rendered recommendations, and a JSON API over the
//!   same ranking.
//!
//! The catalog and index are built once before the server accepts traffic
//! and are read-only for the rest of the process lifetime.

pub mod catalog;
pub mod similarity;
pub mod web;
