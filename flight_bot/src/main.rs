use anyhow::Result;
use clap::Parser;
use flight_bot::config::{Args, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::try_from(Args::parse())?;
    tracing::info!("Starting flight bot with {:?}", config);

    flight_bot::telegram::run(config).await
}
