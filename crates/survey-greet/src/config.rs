//! Environment-sourced settings.
//!
//! Both config types read from a lookup function so callers (and tests) can
//! supply values without touching the process environment. The `from_env`
//! constructors use [`std::env::var`].

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;

pub const SURVEY_ID: &str = "SURVEY_ID";
pub const API_TOKEN: &str = "API_TOKEN";
pub const API_SECRET: &str = "API_SECRET";
pub const JSON_PATH: &str = "JSON_PATH";
pub const SURVEY_API_URL: &str = "SURVEY_API_URL";

/// Credentials and survey selection for the fetch mode.
#[derive(Clone)]
pub struct FetchConfig {
    pub survey_id: String,
    pub api_token: String,
    pub api_secret: String,
    /// Overrides the API host, e.g. to point at a local stand-in.
    pub base_url: Option<String>,
}

impl FetchConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            survey_id: required(&lookup, SURVEY_ID)?,
            api_token: required(&lookup, API_TOKEN)?,
            api_secret: required(&lookup, API_SECRET)?,
            base_url: lookup(SURVEY_API_URL).filter(|v| !v.is_empty()),
        })
    }
}

impl fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchConfig")
            .field("survey_id", &self.survey_id)
            .field("api_token", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Location of the record store, shared by both modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub json_path: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            json_path: PathBuf::from(required(&lookup, JSON_PATH)?),
        })
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingConfig(key)),
    }
}
