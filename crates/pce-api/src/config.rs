//! API server configuration, loadable from TOML and the environment.

use anyhow::Context;
use serde::Deserialize;

use pce_engine::RegexParserEngine;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// File holding the rules schema. None serves the regex engine's schema.
    #[serde(default)]
    pub schema_path: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing config {path}"))?;
        Ok(config)
    }

    /// Override fields from `PCE_HOST`, `PCE_PORT` and `PCE_SCHEMA_PATH`.
    pub fn apply_env(self) -> anyhow::Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(host) = lookup("PCE_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PCE_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("invalid PCE_PORT '{port}'"))?;
        }
        if let Some(path) = lookup("PCE_SCHEMA_PATH") {
            self.schema_path = Some(path);
        }
        Ok(self)
    }

    /// Rules schema served by `GET /schema`.
    pub fn load_schema(&self) -> anyhow::Result<String> {
        match &self.schema_path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading rules schema {path}")),
            None => Ok(RegexParserEngine::config_schema()),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            schema_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.schema_path.is_none());
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn deserialize_minimal_config() {
        let config: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.schema_path.is_none());
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
host = "127.0.0.1"
port = 8080
schema_path = "/etc/pce/parsers.schema.json"
"#;
        let config: ApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.schema_path.as_deref(),
            Some("/etc/pce/parsers.schema.json")
        );
    }

    #[test]
    fn env_overrides() {
        let env: HashMap<&str, &str> = [("PCE_PORT", "9000"), ("PCE_SCHEMA_PATH", "/tmp/s.json")]
            .into_iter()
            .collect();
        let config = ApiConfig::default()
            .apply_env_from(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.schema_path.as_deref(), Some("/tmp/s.json"));
    }

    #[test]
    fn env_invalid_port() {
        let result = ApiConfig::default().apply_env_from(|k| {
            (k == "PCE_PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn builtin_schema_without_path() {
        let schema = ApiConfig::default().load_schema().unwrap();
        assert_eq!(schema, RegexParserEngine::config_schema());
    }

    #[test]
    fn missing_schema_file_is_error() {
        let config = ApiConfig {
            schema_path: Some("/nonexistent/schema.json".into()),
            ..ApiConfig::default()
        };
        assert!(config.load_schema().is_err());
    }
}
