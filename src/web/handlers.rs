use axum::extract::Query;
use axum::response::Html;
use axum::{Extension, Form, Json};
use std::sync::Arc;

use crate::catalog::types::{
    Catalog, CatalogRecord, ADAPTIVE_SUPPORT_COLUMN, DURATION_COLUMN, REMOTE_TESTING_COLUMN,
    TEST_TYPE_COLUMN,
};
use crate::similarity::index::SimilarityIndex;
use crate::similarity::ranker::rank;

use super::render;
use super::types::{QueryForm, RecommendParams, RecommendResponse, RecommendationItem};

/// Number of recommendations the form page shows.
pub const DEFAULT_TOP_K: usize = 5;

const MISSING_FIELD: &str = "N/A";
const MISSING_URL: &str = "#";

/// The shared read-only state behind every handler: the catalog and the
/// similarity index built over it. Constructed once at startup, then only
/// ever read, so concurrent requests need no locking.
pub struct Recommender {
    catalog: Catalog,
    index: SimilarityIndex,
}

impl Recommender {
    /// Build the similarity index over the catalog's composite texts.
    pub fn new(catalog: Catalog) -> Self {
        let index = SimilarityIndex::build(&catalog.composite_texts());
        Self { catalog, index }
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.index.vocabulary_size()
    }

    /// Rank the catalog against a query and hydrate the top matches with
    /// their display fields.
    ///
    /// A blank (empty or whitespace-only) query returns no results rather
    /// than failing. Records are looked up by the ranked position, never
    /// re-derived from text.
    pub fn recommend(&self, query: &str, top_k: usize) -> Vec<RecommendationItem> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        rank(&self.index, query, top_k)
            .into_iter()
            .filter_map(|ranked| {
                self.catalog
                    .get(ranked.index)
                    .map(|record| display_item(record, ranked.score))
            })
            .collect()
    }
}

fn display_item(record: &CatalogRecord, score: f64) -> RecommendationItem {
    let url = if record.url.is_empty() {
        MISSING_URL.to_string()
    } else {
        record.url.clone()
    };

    RecommendationItem {
        assessment: record.name.clone(),
        url,
        remote_testing: metadata_or_placeholder(record, REMOTE_TESTING_COLUMN),
        adaptive_support: metadata_or_placeholder(record, ADAPTIVE_SUPPORT_COLUMN),
        duration: metadata_or_placeholder(record, DURATION_COLUMN),
        test_type: metadata_or_placeholder(record, TEST_TYPE_COLUMN),
        score,
    }
}

fn metadata_or_placeholder(record: &CatalogRecord, column: &str) -> String {
    record
        .metadata_field(column)
        .unwrap_or(MISSING_FIELD)
        .to_string()
}

/// GET / renders the empty form.
pub async fn handle_index() -> Html<String> {
    Html(render::page("", &[]))
}

/// POST / runs the query from the form and renders the page with up to
/// [`DEFAULT_TOP_K`] recommendations.
pub async fn handle_recommend_form(
    Extension(recommender): Extension<Arc<Recommender>>,
    Form(form): Form<QueryForm>,
) -> Html<String> {
    let query = form.query.trim().to_string();
    let items = recommender.recommend(&query, DEFAULT_TOP_K);
    tracing::debug!(
        "form query {:?} produced {} recommendations",
        query,
        items.len()
    );

    Html(render::page(&query, &items))
}

/// GET /api/recommend returns the same ranking as JSON.
pub async fn handle_recommend_api(
    Extension(recommender): Extension<Arc<Recommender>>,
    Query(params): Query<RecommendParams>,
) -> Json<RecommendResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_K);
    let results = recommender.recommend(&params.q, limit);
    tracing::debug!(
        "api query {:?} produced {} recommendations",
        params.q,
        results.len()
    );

    Json(RecommendResponse {
        query: params.q,
        count: results.len(),
        results,
    })
}
