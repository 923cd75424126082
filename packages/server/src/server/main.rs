// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use studio_core::kernel::{OpenAIContentGenerator, ServerDeps};
use studio_core::server::{build_app, AppOptions};
use studio_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,studio_core=debug,wordpress_client=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting WordPress content studio API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.openai_model,
        allowed_origins = config.allowed_origins.len(),
        "Configuration loaded"
    );

    let generator = OpenAIContentGenerator::new(config.openai_api_key, config.openai_model)
        .with_base_url(config.openai_base_url);
    let server_deps = ServerDeps::new(Arc::new(generator));

    // Build application
    let app = build_app(
        server_deps,
        AppOptions {
            allowed_origins: config.allowed_origins,
            max_body_bytes: config.max_upload_bytes,
        },
    );

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
