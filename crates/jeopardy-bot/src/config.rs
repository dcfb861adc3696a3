//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telegram configuration
    pub telegram: TelegramConfig,

    /// Trivia source configuration
    pub trivia: TriviaConfig,

    /// Score store configuration
    #[serde(default)]
    pub scores: ScoresConfig,

    /// Bot configuration
    pub bot: BotConfig,

    /// Issue tracker configuration
    pub github: GithubConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token
    pub api_key: String,

    /// Public base URL this process's webhook is reachable at
    pub webhook_base_url: String,

    /// Bot API endpoint
    #[serde(default = "default_telegram_api")]
    pub api_base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriviaConfig {
    /// Question source endpoint
    pub source_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoresConfig {
    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Score key prefix
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Addressable name for `/cmd@botname` targeting in group chats
    pub name: String,

    /// Path to the changelog file
    #[serde(default = "default_changelog_path")]
    pub changelog_path: PathBuf,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// API token used to file issues
    pub token: String,

    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// API endpoint
    #[serde(default = "default_github_api")]
    pub api_base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            redis_url: default_redis_url(),
            namespace: default_namespace(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

// Default value functions
fn default_telegram_api() -> String {
    "https://api.telegram.org".into()
}

fn default_github_api() -> String {
    "https://api.github.com".into()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1/".into()
}

fn default_namespace() -> String {
    "jeopardy".into()
}

fn default_changelog_path() -> PathBuf {
    "changelog".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Keep strings as strings; chat ids and tokens must not
                    // be reinterpreted as numbers.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
