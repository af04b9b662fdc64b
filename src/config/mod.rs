mod credentials;

pub use credentials::Credentials;

use crate::error::{Result, SemPararError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default root of the Sem Parar customer API
pub const DEFAULT_BASE_URL: &str = "https://minhaconta.semparar.com.br/minhaconta/api";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub service: ServiceSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Load the credentials file (TOML with `cpf` and `password`)
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(SemPararError::ConfigFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| SemPararError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Template content for a credentials file
pub const CONFIG_TEMPLATE: &str = r#"cpf = "00000000000"
password = "your-password"

# [service]
# base_url = "https://minhaconta.semparar.com.br/minhaconta/api"
# timeout_secs = 30
"#;
