mod cli;
mod telemetry;

use crate::cli::CLI;
use burrow_gateway::{App, AppState};
use burrow_generator::RandomGenerator;
use burrow_redirector::RedirectorService;
use burrow_shortener::{ShortenerService, ShortenerSettings};
use burrow_storage::InMemoryRepository;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    telemetry::init(config.log_format);

    let settings = ShortenerSettings::with_limit(config.max_attempts);

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        max_attempts = ?settings.max_attempts,
        "starting gateway server"
    );

    // One store for the lifetime of the process, shared by both services.
    let repository = InMemoryRepository::new();
    let shortener =
        ShortenerService::with_settings(repository.clone(), RandomGenerator::new(), settings);
    let redirector = RedirectorService::new(repository);

    let state = AppState::new(
        Arc::new(shortener),
        Arc::new(redirector),
        config.public_base_url,
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
