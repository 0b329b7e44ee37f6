use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::resume::projector::{EducationOrder, ProjectionConfig};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    /// Projection defaults applied when a request does not override them.
    pub projection: ProjectionConfig,
    pub resume_heading: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_recent_experience = lookup("MAX_RECENT_EXPERIENCE")
            .map(|v| {
                v.trim()
                    .parse::<i64>()
                    .context("MAX_RECENT_EXPERIENCE must be an integer")
            })
            .transpose()?;

        let education_order = match lookup("EDUCATION_ORDER") {
            Some(v) => v.parse::<EducationOrder>().context("EDUCATION_ORDER is invalid")?,
            None => EducationOrder::default(),
        };

        let mut projection = max_recent_experience
            .map(ProjectionConfig::short_form)
            .unwrap_or_default();
        projection.education_order = education_order;
        projection
            .validate()
            .context("MAX_RECENT_EXPERIENCE is invalid")?;

        Ok(Config {
            resume_path: lookup("RESUME_PATH")
                .map(PathBuf::from)
                .context("Required environment variable 'RESUME_PATH' is not set")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            projection,
            resume_heading: lookup("RESUME_HEADING").unwrap_or_else(|| "Resume".to_string()),
        })
    }
}
