//! Runtime settings loaded from the environment (and an optional `.env`)

use std::path::PathBuf;
use std::str::FromStr;

use crate::{OmniError, Result, BALANCE_THRESHOLD, DEFAULT_MAX_SESSIONS, PHI};

pub const ENV_PHI: &str = "OMNI_PHI";
pub const ENV_BALANCE_THRESHOLD: &str = "OMNI_BALANCE_THRESHOLD";
pub const ENV_ADDR: &str = "OMNI_ADDR";
pub const ENV_LEXICON: &str = "OMNI_LEXICON";
pub const ENV_CORS_ORIGINS: &str = "OMNI_CORS_ORIGINS";
pub const ENV_LOG_JSON: &str = "OMNI_LOG_JSON";
pub const ENV_MAX_SESSIONS: &str = "OMNI_MAX_SESSIONS";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Application settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Golden Ratio constant handed to the analyzer
    pub phi: f64,
    /// Balance threshold handed to the analyzer
    pub balance_threshold: f64,
    /// HTTP bind address
    pub addr: String,
    /// Replacement lexicon; `None` means the built-in Thai tables
    pub lexicon_path: Option<PathBuf>,
    /// Allowed CORS origins; a single `*` allows any
    pub cors_origins: Vec<String>,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Chat sessions held at once before the least recent is evicted
    pub max_sessions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            phi: PHI,
            balance_threshold: BALANCE_THRESHOLD,
            addr: DEFAULT_ADDR.to_string(),
            lexicon_path: None,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            log_json: false,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self> {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (environment, map in tests, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(v) = lookup(ENV_PHI) {
            settings.phi = parse_value(ENV_PHI, &v)?;
        }
        if let Some(v) = lookup(ENV_BALANCE_THRESHOLD) {
            settings.balance_threshold = parse_value(ENV_BALANCE_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_ADDR) {
            settings.addr = v.trim().to_string();
        }
        if let Some(v) = lookup(ENV_LEXICON) {
            let v = v.trim();
            if !v.is_empty() {
                settings.lexicon_path = Some(PathBuf::from(v));
            }
        }
        if let Some(v) = lookup(ENV_CORS_ORIGINS) {
            settings.cors_origins = parse_origins(&v);
        }
        if let Some(v) = lookup(ENV_LOG_JSON) {
            settings.log_json = parse_flag(ENV_LOG_JSON, &v)?;
        }
        if let Some(v) = lookup(ENV_MAX_SESSIONS) {
            settings.max_sessions = parse_value(ENV_MAX_SESSIONS, &v)?;
            if settings.max_sessions == 0 {
                return Err(OmniError::Config(format!("{ENV_MAX_SESSIONS}: must be at least 1")));
            }
        }

        Ok(settings)
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| OmniError::Config(format!("{key}: cannot parse {raw:?}")))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(OmniError::Config(format!("{key}: expected a boolean, got {raw:?}"))),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
