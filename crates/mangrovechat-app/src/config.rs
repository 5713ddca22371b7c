use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::cli::Cli;
use mangrovechat_api::GEMINI_API_URL;

/// Resolved runtime configuration for the remote model and storage.
///
/// Built once at startup and injected into the web layer; there is no
/// process-wide mutable state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Resolve configuration from parsed CLI arguments (clap already merged
    /// in the GEMINI_API_KEY environment variable).
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_key = match cli.api_key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => bail!(
                "GEMINI_API_KEY is not set. Add it to your environment or .env file, \
                 or pass --api-key."
            ),
        };

        Ok(Self {
            api_key,
            model: cli.model.clone(),
            api_url: cli
                .api_url
                .clone()
                .unwrap_or_else(|| GEMINI_API_URL.to_string()),
            data_dir: cli.data_dir.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cli(api_key: Option<&str>) -> Cli {
        Cli {
            bind: "127.0.0.1:3000".parse().unwrap(),
            data_dir: PathBuf::from("data"),
            model: "gemini-2.5-flash".to_string(),
            api_url: None,
            api_key: api_key.map(str::to_string),
        }
    }

    #[test]
    fn from_cli_requires_api_key() {
        assert!(ClientConfig::from_cli(&test_cli(None)).is_err());
        assert!(ClientConfig::from_cli(&test_cli(Some(""))).is_err());
    }

    #[test]
    fn from_cli_defaults_api_url_to_official_endpoint() {
        let config = ClientConfig::from_cli(&test_cli(Some("test-key"))).unwrap();
        assert_eq!(config.api_url, GEMINI_API_URL);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key, "test-key");
    }

    #[test]
    fn from_cli_honors_api_url_override() {
        let mut cli = test_cli(Some("test-key"));
        cli.api_url = Some("http://localhost:8080".to_string());

        let config = ClientConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080");
    }
}
