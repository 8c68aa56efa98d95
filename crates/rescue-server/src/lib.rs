pub mod config;
pub mod error;
pub mod health;
pub mod state;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use config::ServerConfig;
use error::ServerError;
use state::AppState;

/// Build the Axum router and application state from a config.
///
/// `/hello` and `/health` are served directly; everything else falls through
/// to the static web root (host page, wasm bundle, sprite).
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let web_root = config.web_root.clone();
    let state = AppState::new(config);

    let app = Router::new()
        .route("/hello", axum::routing::get(health::hello))
        .route("/health", axum::routing::get(health::health_check))
        .fallback_service(ServeDir::new(&web_root))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(CompressionLayer::new())
        .with_state(state.clone());

    (app, state)
}

/// Validate config, bind, and serve until the process is stopped.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.validate()?;
    let port = config.port;
    let (app, _state) = build_app(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    tracing::info!("Princess Rescue server: http://localhost:{port}");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
