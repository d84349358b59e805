//! Web Layer Data Types
//!
//! Request and response shapes for the HTML form and the JSON API. These are
//! display types: every field already carries its final text, including the
//! `N/A` and `#` placeholders for data the underlying record lacks.

use serde::{Deserialize, Serialize};

/// Form body of the recommendation page submission.
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    pub query: String,
}

/// Query string of the JSON endpoint.
#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub q: String,
    pub limit: Option<usize>,
}

/// One recommended assessment, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub assessment: String,
    pub url: String,
    pub remote_testing: String,
    pub adaptive_support: String,
    pub duration: String,
    pub test_type: String,
    pub score: f64,
}

/// JSON response of the recommendation endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<RecommendationItem>,
}
