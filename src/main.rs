use std::env;

use dotenvy::dotenv;
use expense_api::{
    api::{self, config::ApiConfig},
    utils::app_config::AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let api_config = ApiConfig::from_env();
    tracing::info!("API configuration loaded successfully");

    // Fresh in-memory store per process instance; contents are discarded
    // whenever the instance is recycled.
    let app_config = AppConfig::with_seed_data();

    let router = api::router(app_config);

    let addr = format!("0.0.0.0:{}", api_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting expense API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
