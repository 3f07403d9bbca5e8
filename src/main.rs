pub mod api;
pub mod config;
pub mod store;
pub mod telemetry;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::setup_tracing();

    let config = config::Config::parse();
    tracing::info!(bind = %config.bind, id_strategy = ?config.id_strategy, "starting user api");

    api::server::start_server(&config).await
}
