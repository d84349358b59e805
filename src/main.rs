use assessment_recommender::catalog::loader;
use assessment_recommender::web::handlers::{
    handle_index, handle_recommend_api, handle_recommend_form, Recommender,
};
use axum::{routing::get, Extension, Router};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8080".parse()?;
    let mut assessments_path = "assessments.csv".to_string();
    let mut metadata_path = "metadata.csv".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--assessments" => {
                assessments_path = args[i + 1].clone();
                i += 2;
            }
            "--metadata" => {
                metadata_path = args[i + 1].clone();
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--assessments <path>] [--metadata <path>]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Catalog: a failed load is fatal, the server must not start without it.
    let catalog = loader::load(&assessments_path, &metadata_path)?;
    tracing::info!("Loaded catalog: {} records", catalog.len());

    // 2. Similarity index, built once and read-only from here on:
    let recommender = Arc::new(Recommender::new(catalog));
    tracing::info!(
        "Built similarity index: {} documents, {} vocabulary terms",
        recommender.catalog_size(),
        recommender.vocabulary_size()
    );

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_index).post(handle_recommend_form))
        .route("/api/recommend", get(handle_recommend_api))
        .layer(Extension(recommender));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
