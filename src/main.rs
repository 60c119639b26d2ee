use smart_canteen::config::Config;
use smart_canteen::http::{self, AppState};
use smart_canteen::lifecycle::{setup_tracing, CanteenSystem};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::from_env()?;
    info!(port = config.port, "Starting smart canteen");

    let system = CanteenSystem::start(&config).await?;
    let router = http::router(AppState::from_system(&system));

    // returns once a shutdown signal arrives and in-flight requests finish
    http::serve(config.port, router).await?;

    system.shutdown().await?;
    info!("Server shut down");
    Ok(())
}
