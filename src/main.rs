use anyhow::Context;
use fatsecret_proxy::infrastructure::config::{Config, LogFormat};
use fatsecret_proxy::infrastructure::http::{build_app, start_http_server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration; missing FatSecret credentials abort startup
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting FatSecret proxy on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        api_url = %config.api_url,
        oauth_url = %config.oauth_url,
        scope = %config.scope,
        safety_margin_secs = config.token_safety_margin_secs,
        "FatSecret upstream configured"
    );

    let app = build_app(&config).context("Failed to build HTTP client")?;

    start_http_server(&config, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fatsecret_proxy=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
