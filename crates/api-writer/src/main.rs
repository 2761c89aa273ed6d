//! Standalone draft writer server binary.
//!
//! ## Purpose
//! Runs the writer service on its own.
//!
//! ## Intended use
//! Deploy next to the site repository the drafts are written into. The workspace's `drafts-run`
//! binary runs the generator and writer services together.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::config::{listen_addr_from_env_value, DEFAULT_WRITER_ADDR, WRITER_ADDR_ENV};
use drafts_core::DraftService;

/// Main entry point for the draft writer server
///
/// # Environment Variables
/// - `DRAFT_WRITER_ADDR`: Server address (default: "0.0.0.0:8081")
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
                .add_directive("api_writer=info".parse()?)
                .add_directive("drafts_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = listen_addr_from_env_value(
        std::env::var(WRITER_ADDR_ENV).ok(),
        DEFAULT_WRITER_ADDR,
    )?;

    tracing::info!("Repo writer server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, api_writer::app(DraftService::new())).await?;

    Ok(())
}
