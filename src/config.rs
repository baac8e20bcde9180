use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting
    pub rate_per_min: u32,

    pub log_dir: String,

    /// JSON roster; the built-in roster is used when unset
    pub roster_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let rate_per_min: u32 = var("RATE_PER_MIN")
            .unwrap_or_else(|| "1000".to_string())
            .parse()
            .context("RATE_PER_MIN must be a positive integer")?;
        if rate_per_min == 0 {
            bail!("RATE_PER_MIN must be at least 1");
        }

        Ok(Self {
            server_addr: var("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            api_prefix: var("API_PREFIX").unwrap_or_else(|| "/api".to_string()),
            rate_per_min,
            log_dir: var("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            roster_path: var("ROSTER_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }
}
