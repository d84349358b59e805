//! Catalog Module
//!
//! Loads and holds the assessment catalog the similarity engine ranks over.
//!
//! ## Workflow
//! 1. **Read**: Parse the two CSV sources (assessments and metadata) with
//!    trimmed headers.
//! 2. **Merge**: Pair rows strictly by position; legacy metadata headers are
//!    renamed to their canonical forms first.
//! 3. **Normalize**: Canonicalize the Yes/No flag columns and fill absent
//!    text with empty strings.
//! 4. **Derive**: Build each record's composite text (name + URL) for the
//!    similarity index.
//!
//! The catalog is built once at startup and is immutable afterwards; a load
//! failure is fatal before the server accepts any traffic.

pub mod loader;
pub mod types;
