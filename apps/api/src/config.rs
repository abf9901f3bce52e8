use anyhow::{Context, Result};

use crate::layout::FontFamily;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// CORS origins allowed to call the API.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    /// `*`: any origin (GPT Actions call from several OpenAI hosts).
    Any,
    List(Vec<String>),
}

/// Application configuration loaded once at startup from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub allowed_origins: AllowedOrigins,
    /// Public base URL advertised in the OpenAPI document.
    pub public_url: Option<String>,
    pub document_font: FontFamily,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let document_font = match non_empty(lookup("DOCUMENT_FONT")) {
            Some(raw) => raw
                .parse::<FontFamily>()
                .context("DOCUMENT_FONT is not a supported font")?,
            None => FontFamily::Calibri,
        };

        Ok(Config {
            host: non_empty(lookup("HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            rust_log: non_empty(lookup("RUST_LOG")).unwrap_or_else(|| "info".to_string()),
            allowed_origins: parse_allowed_origins(lookup("ALLOWED_ORIGINS").as_deref()),
            public_url: non_empty(lookup("PUBLIC_URL"))
                .map(|url| url.trim_end_matches('/').to_string()),
            document_font,
        })
    }

    /// URL clients should use to reach this server.
    pub fn server_url(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            allowed_origins: AllowedOrigins::Any,
            public_url: None,
            document_font: FontFamily::Calibri,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Comma-separated origins; unset, empty, or any `*` entry means any origin.
fn parse_allowed_origins(raw: Option<&str>) -> AllowedOrigins {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.allowed_origins, AllowedOrigins::Any);
        assert_eq!(config.document_font, FontFamily::Calibri);
        assert_eq!(config.server_url(), "http://localhost:8000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("PUBLIC_URL", "https://docs.example.com/"),
            ("DOCUMENT_FONT", "Arial"),
            ("ALLOWED_ORIGINS", "https://chat.openai.com, https://chatgpt.com"),
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.server_url(), "https://docs.example.com");
        assert_eq!(config.document_font, FontFamily::Arial);
        assert_eq!(
            config.allowed_origins,
            AllowedOrigins::List(vec![
                "https://chat.openai.com".to_string(),
                "https://chatgpt.com".to_string()
            ])
        );
    }

    #[test]
    fn test_wildcard_origin_wins() {
        assert_eq!(
            parse_allowed_origins(Some("https://chatgpt.com,*")),
            AllowedOrigins::Any
        );
        assert_eq!(parse_allowed_origins(Some(" , ")), AllowedOrigins::Any);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_font_rejected() {
        assert!(config_from(&[("DOCUMENT_FONT", "Papyrus")]).is_err());
    }
}
