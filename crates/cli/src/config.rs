use anyhow::{Context, Result};
use std::path::PathBuf;

/// Set to `1` to convert kebab-case option keys to camelCase.
pub const CAMEL_CASE_ENV: &str = "ARGS2USERPARAMS_CAMELCASE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub camel_case: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            camel_case: lookup(CAMEL_CASE_ENV).is_some_and(|v| v.trim() == "1"),
        }
    }
}

/// Load a `.env` file from the working directory (or a parent), if present.
///
/// Variables already set in the process environment win.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err).context("failed to load .env"),
    }
}
