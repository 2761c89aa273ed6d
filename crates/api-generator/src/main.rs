//! Standalone draft generator server binary.
//!
//! ## Purpose
//! Runs the generator service on its own.
//!
//! ## Intended use
//! Deploy when only markdown generation is needed. The workspace's `drafts-run` binary runs the
//! generator and writer services together.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::config::{listen_addr_from_env_value, DEFAULT_GENERATOR_ADDR, GENERATOR_ADDR_ENV};

/// Main entry point for the draft generator server
///
/// # Environment Variables
/// - `DRAFT_GENERATOR_ADDR`: Server address (default: "0.0.0.0:8080")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the listen address is malformed or cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_generator=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = listen_addr_from_env_value(
        std::env::var(GENERATOR_ADDR_ENV).ok(),
        DEFAULT_GENERATOR_ADDR,
    )?;

    tracing::info!("Draft server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, api_generator::app()).await?;

    Ok(())
}
