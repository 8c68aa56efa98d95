use tracing_subscriber::EnvFilter;

use rescue_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Princess Rescue server starting");

    let config = ServerConfig::load();
    if let Err(e) = rescue_server::run(config).await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
