//! Configuration and settings management
//!
//! Loads the bot token and username from config files and environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Errors that prevent the bot from starting
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Config sources could not be read or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A required value is absent or empty
    #[error("{0} must be set (environment variable or config file)")]
    Missing(&'static str),
}

/// Settings as they come out of the config sources, before validation
#[derive(Debug, Deserialize, Default)]
struct RawSettings {
    bot_token: Option<String>,
    telegram_token: Option<String>,
    bot_username: Option<String>,
    inline_cache_time: Option<u32>,
}

/// Validated application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Telegram Bot API token
    pub bot_token: String,
    /// Bot username without the leading `@`
    pub bot_username: String,
    /// Seconds Telegram may cache inline answers
    pub inline_cache_time: u32,
}

/// Layered config sources: optional files, then `APP__*` and bare environment variables.
///
/// # Errors
///
/// Returns a `ConfigError` if a present source cannot be parsed.
pub fn build_config() -> Result<Config, ConfigError> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        // Not checked into git
        .add_source(File::with_name("config/local").required(false))
        // Eg.. `APP__BOT_USERNAME=quip_bot` sets `bot_username`
        .add_source(Environment::with_prefix("APP").separator("__"))
        // UPPER_SNAKE_CASE env vars map to snake_case keys; empty ones count as unset
        .add_source(Environment::default().ignore_empty(true))
        .build()
}

impl Settings {
    /// Load settings from files and environment
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quipbot::config::Settings;
    ///
    /// let settings = Settings::new().expect("BOT_TOKEN and BOT_USERNAME must be set");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError` if loading fails or the token or username is missing.
    pub fn new() -> Result<Self, SettingsError> {
        Self::from_config(build_config()?)
    }

    /// Validate settings from an already built `Config`.
    ///
    /// `telegram_token` is accepted when `bot_token` is absent.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError` if deserialization fails or a required value is missing.
    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let raw: RawSettings = config.try_deserialize()?;

        let bot_token = non_empty(raw.bot_token)
            .or_else(|| non_empty(raw.telegram_token))
            .ok_or(SettingsError::Missing("BOT_TOKEN"))?;
        let bot_username = non_empty(raw.bot_username.map(|name| {
            name.trim().trim_start_matches('@').to_string()
        }))
        .ok_or(SettingsError::Missing("BOT_USERNAME"))?;

        Ok(Self {
            bot_token,
            bot_username,
            inline_cache_time: raw.inline_cache_time.unwrap_or(0),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
