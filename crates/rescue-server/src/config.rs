use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::ServerError;

/// Server configuration, loaded from `rescue.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub web_root: String,
    /// Body returned by the `/hello` liveness route.
    pub hello_message: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            web_root: "web".to_string(),
            hello_message: "Princess Rescue backend is running!".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check that the listen address parses and warn about an empty web root.
    pub fn validate(&self) -> Result<SocketAddr, ServerError> {
        let addr = self.listen_addr();
        let parsed = addr
            .parse::<SocketAddr>()
            .map_err(|_| ServerError::InvalidAddr(addr))?;

        if !std::path::Path::new(&self.web_root).is_dir() {
            tracing::warn!(
                web_root = %self.web_root,
                "web_root is not a directory, every static request will 404"
            );
        }
        Ok(parsed)
    }

    /// Load config from `rescue.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("rescue.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from rescue.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse rescue.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No rescue.toml found, using defaults");
                ServerConfig::default()
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply `PORT`, `RESCUE_LISTEN_HOST` and `RESCUE_WEB_ROOT`. Unparseable
    /// or empty values are ignored.
    pub fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(port) = var("PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid PORT"),
            }
        }
        if let Some(host) = var("RESCUE_LISTEN_HOST")
            && !host.is_empty()
        {
            self.host = host;
        }
        if let Some(root) = var("RESCUE_WEB_ROOT")
            && !root.is_empty()
        {
            self.web_root = root;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
        assert_eq!(cfg.web_root, "web");
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
port = 8080
web_root = "/var/www/rescue"
"#;
        let cfg: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.web_root, "/var/www/rescue");
    }

    #[test]
    fn env_overrides_take_precedence() {
        let mut cfg = ServerConfig::default();
        cfg.apply_env_overrides(env(&[
            ("PORT", "4000"),
            ("RESCUE_LISTEN_HOST", "127.0.0.1"),
            ("RESCUE_WEB_ROOT", "public"),
        ]));
        assert_eq!(cfg.listen_addr(), "127.0.0.1:4000");
        assert_eq!(cfg.web_root, "public");
    }

    #[test]
    fn invalid_or_empty_env_values_ignored() {
        let mut cfg = ServerConfig::default();
        cfg.apply_env_overrides(env(&[("PORT", "not-a-port"), ("RESCUE_WEB_ROOT", "")]));
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.web_root, "web");
    }

    #[test]
    fn validate_accepts_default_addr() {
        let addr = ServerConfig::default().validate().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn validate_rejects_invalid_host() {
        let cfg = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ServerError::InvalidAddr(_))));
    }
}
