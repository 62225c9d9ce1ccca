use icebreaker_server::{AppConfig, run_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.is_mock() {
        tracing::info!("no SCRAPIN_API_KEY set, serving the mock profile");
    }

    run_server(config).await
}
