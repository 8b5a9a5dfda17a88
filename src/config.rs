use std::env;
use std::path::PathBuf;

use crate::errors::BotError;

pub const REBRICKABLE_BASE_URL: &str = "https://rebrickable.com/api/v3";

/// How many alternates to request from Rebrickable per query.
pub const FETCH_LIMIT: usize = 12;

/// Fixed deadline on the one upstream call per user action.
pub const FETCH_TIMEOUT_MS: u64 = 20_000;

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const API_KEY_VAR: &str = "REBRICKABLE_API_KEY";
pub const PREFS_PATH_VAR: &str = "BRICKALTS_PREFS";

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub api_key: String,
    pub prefs_path: PathBuf,
}

impl Config {
    /// Reads the two secrets from the environment. Either one missing is
    /// fatal at startup, not a runtime error.
    pub fn from_env(prefs_override: Option<PathBuf>) -> Result<Self, BotError> {
        let bot_token = require_env(BOT_TOKEN_VAR)?;
        let api_key = require_env(API_KEY_VAR)?;
        let prefs_path = match prefs_override.or_else(prefs_path_from_env) {
            Some(path) => path,
            None => default_prefs_path()?,
        };
        Ok(Self {
            bot_token,
            api_key,
            prefs_path,
        })
    }
}

fn require_env(name: &str) -> Result<String, BotError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(BotError::Config(format!(
            "missing required environment variable {name}"
        ))),
    }
}

fn prefs_path_from_env() -> Option<PathBuf> {
    let value = env::var(PREFS_PATH_VAR).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(value.trim()))
}

fn default_prefs_path() -> Result<PathBuf, BotError> {
    let base = dirs::data_dir().ok_or_else(|| {
        BotError::Config("could not resolve data directory for this OS".to_string())
    })?;
    Ok(base.join("brickalts").join("lang_prefs.json"))
}
