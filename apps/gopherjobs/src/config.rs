use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::classify::MatchMode;
use crate::render::{SiteMeta, DEFAULT_FOOTER, DEFAULT_LINK, DEFAULT_SITE_TITLE};

pub const DEFAULT_INPUT_DIR: &str = "job_results";
pub const DEFAULT_OUTPUT_DIR: &str = "static";

/// Run configuration loaded from environment variables (and `.env` if present).
/// Every setting has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub match_mode: MatchMode,
    pub site: SiteMeta,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let match_mode = var("MATCH_MODE", "substring")
            .parse::<MatchMode>()
            .map_err(|e| anyhow!(e))
            .context("MATCH_MODE must be `substring` or `word_boundary`")?;

        Ok(Config {
            input_dir: PathBuf::from(var("JOBS_INPUT_DIR", DEFAULT_INPUT_DIR)),
            output_dir: PathBuf::from(var("JOBS_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
            match_mode,
            site: SiteMeta {
                title: var("SITE_TITLE", DEFAULT_SITE_TITLE),
                footer: var("SITE_FOOTER", DEFAULT_FOOTER),
                link: var("SITE_LINK", DEFAULT_LINK),
            },
            rust_log: var("RUST_LOG", "info"),
        })
    }
}
