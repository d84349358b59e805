//! Web Presentation Module
//!
//! The HTTP surface in front of the similarity engine.
//!
//! ## Overview
//! One page, two representations: `GET /` renders the search form, `POST /`
//! re-renders it with up to five recommendations for the submitted query,
//! and `GET /api/recommend` exposes the same ranking as JSON. The page
//! template is embedded in the binary; rendering is plain string
//! substitution with HTML escaping for every user- or catalog-supplied
//! value.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers and the shared `Recommender`
//!   state.
//! - **`render`**: HTML assembly for the form page and results table.
//! - **`types`**: Request/response DTOs.

pub mod handlers;
pub mod render;
pub mod types;
