use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served for everything that is not an API route
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_client")]
    pub client: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    ".".to_string()
}

fn default_base_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_client() -> String {
    "gtx".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client: default_client(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load a YAML or JSON config file, substituting `${VAR}` references.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }
        let content = substitute_env(&fs::read_to_string(path)?);

        let path_lower = path.to_lowercase();
        let config: Config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Resolve the process configuration: `CONFIG_PATH`, then `conf.yaml`,
    /// then built-in defaults. `PORT` always wins over the file.
    pub fn from_env() -> Result<Self> {
        let explicit = std::env::var("CONFIG_PATH").ok();
        let mut config = match explicit.as_deref() {
            Some(path) => Self::load(path)?,
            None if Path::new("conf.yaml").exists() => Self::load("conf.yaml")?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        if let Ok(port) = std::env::var("PORT") {
            config.apply_port_override(&port)?;
        }
        Ok(config)
    }

    pub fn apply_port_override(&mut self, port: &str) -> Result<()> {
        self.server.port = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", port, e))?;
        Ok(())
    }
}

static ENV_VAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{(\w+)\}").unwrap());

/// Replace `${VAR_NAME}` with the variable's value; unknown variables are left as-is.
pub fn substitute_env(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.static_dir, ".");
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.upstream.client, "gtx");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.upstream.base_url,
            "https://translate.googleapis.com/translate_a/single"
        );
    }

    #[test]
    fn port_override_replaces_file_value() {
        let mut config = Config::default();
        config.apply_port_override("7070").unwrap();
        assert_eq!(config.server.port, 7070);
        assert!(config.apply_port_override("not-a-port").is_err());
    }

    #[test]
    fn substitutes_known_variables_only() {
        std::env::set_var("KANA_RELAY_TEST_DIR", "/srv/www");
        let out = substitute_env("static_dir: ${KANA_RELAY_TEST_DIR}\nother: ${KANA_RELAY_UNSET_VAR}");
        assert_eq!(out, "static_dir: /srv/www\nother: ${KANA_RELAY_UNSET_VAR}");
        // Second call reuses the compiled pattern
        assert_eq!(substitute_env("${KANA_RELAY_TEST_DIR}/a"), "/srv/www/a");
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(Config::load("definitely/not/here.yaml").is_err());
    }
}
