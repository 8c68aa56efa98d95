use std::net::SocketAddr;
use std::time::Duration;

use rescue_server::build_app;
use rescue_server::config::ServerConfig;

/// Web root shipped with the workspace.
pub const WEB_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../web");

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server serving the workspace web root.
    pub async fn new() -> Self {
        Self::from_config(ServerConfig {
            web_root: WEB_ROOT.to_string(),
            ..ServerConfig::default()
        })
        .await
    }

    pub async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
