use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_HEROES_PATH: &str = "api/heroes";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the heroes backend lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_heroes_path")]
    pub heroes_path: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            heroes_path: default_heroes_path(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_heroes_path() -> String { DEFAULT_HEROES_PATH.to_string() }
fn default_connect_timeout() -> u64 { 5 }
fn default_request_timeout() -> u64 { 30 }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `path` (defaults when it is missing), then apply overrides and
    /// validate. A file that exists and fails to parse is still an error.
    ///
    /// `base_url` wins over `HEROES_API_URL`, which wins over the file.
    pub fn load_or_default(path: &str, base_url: Option<String>) -> Result<Self> {
        let mut cfg = Self::read_or_default(path)?;
        cfg.api.normalize_from_env();
        cfg.api.override_base_url(base_url);
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Raw file contents (or defaults), before env overrides and validation.
    pub fn read_or_default(path: &str) -> Result<Self> {
        if std::path::Path::new(path).exists() {
            load_from_file(path)
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.api.normalize();
        self.api.validate()?;
        Ok(())
    }
}

impl ApiConfig {
    pub fn normalize_from_env(&mut self) {
        self.override_base_url(std::env::var("HEROES_API_URL").ok());
    }

    /// Replace `base_url` when a non-blank override is given.
    pub fn override_base_url(&mut self, url: Option<String>) {
        if let Some(url) = url {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }

    fn normalize(&mut self) {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if self.base_url.is_empty() {
            self.base_url = default_base_url();
        }
        self.heroes_path = self.heroes_path.trim().trim_matches('/').to_string();
        if self.heroes_path.is_empty() {
            self.heroes_path = default_heroes_path();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("api.base_url must start with http:// or https://, got {}", self.base_url));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(anyhow!("api timeouts must be positive seconds"));
        }
        Ok(())
    }

    /// Collection resource URL, e.g. `http://127.0.0.1:3000/api/heroes`.
    pub fn heroes_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.heroes_path.trim_matches('/')
        )
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
