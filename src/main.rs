use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::config::{
    DEFAULT_GENERATOR_ADDR, DEFAULT_WRITER_ADDR, GENERATOR_ADDR_ENV, WRITER_ADDR_ENV,
    listen_addr_from_env_value,
};
use drafts_core::DraftService;

/// Main entry point for the drafts application
///
/// Starts both JSON-RPC services concurrently:
/// - generator on port 8080 (configurable via DRAFT_GENERATOR_ADDR)
/// - writer on port 8081 (configurable via DRAFT_WRITER_ADDR)
///
/// The two services share no state; running them in one process is a deployment convenience.
///
/// # Environment Variables
/// - `DRAFT_GENERATOR_ADDR`: generator address (default: "0.0.0.0:8080")
/// - `DRAFT_WRITER_ADDR`: writer address (default: "0.0.0.0:8081")
///
/// # Returns
/// * `Ok(())` - If servers start and run successfully
/// * `Err(anyhow::Error)` - If an address is invalid, cannot be bound, or a server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drafts_run=info".parse()?)
                .add_directive("api_generator=info".parse()?)
                .add_directive("api_writer=info".parse()?)
                .add_directive("drafts_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let generator_addr = listen_addr_from_env_value(
        std::env::var(GENERATOR_ADDR_ENV).ok(),
        DEFAULT_GENERATOR_ADDR,
    )?;
    let writer_addr =
        listen_addr_from_env_value(std::env::var(WRITER_ADDR_ENV).ok(), DEFAULT_WRITER_ADDR)?;

    tracing::info!("++ Starting draft generator on {}", generator_addr);
    tracing::info!("++ Starting draft writer on {}", writer_addr);

    let generator_listener = tokio::net::TcpListener::bind(generator_addr).await?;
    let writer_listener = tokio::net::TcpListener::bind(writer_addr).await?;

    let generator_server = async { axum::serve(generator_listener, api_generator::app()).await };
    let writer_server = async {
        axum::serve(writer_listener, api_writer::app(DraftService::new())).await
    };

    // Run both
    let (generator_result, writer_result) = tokio::join!(generator_server, writer_server);
    generator_result?;
    writer_result?;

    Ok(())
}
