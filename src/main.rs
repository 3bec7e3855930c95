use anyhow::Result;
use recipe_retrieval::config;
use recipe_retrieval::server;
use recipe_retrieval::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    telemetry::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}
