use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::errors::ProjectionError;
use crate::models::resume::ResumeRecord;
use crate::resume::projector::{project, ProjectionConfig, ResumeView};

impl ResumeRecord {
    /// Validates the shape of raw resume JSON.
    ///
    /// Any missing required field or wrongly typed value (e.g. a non-integer
    /// education `date`) becomes `MalformedRecord` with serde's message,
    /// which names the offending field.
    pub fn from_value(value: Value) -> Result<Self, ProjectionError> {
        serde_json::from_value(value).map_err(|e| ProjectionError::MalformedRecord(e.to_string()))
    }
}

/// Validates `config`, then `raw`, then projects. Nothing is produced on failure.
pub fn project_value(raw: &Value, config: &ProjectionConfig) -> Result<ResumeView, ProjectionError> {
    config.validate()?;
    let record = ResumeRecord::from_value(raw.clone())?;
    project(&record, config)
}

/// Reads and validates the resume content file.
pub fn load_record(path: &Path) -> Result<ResumeRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read resume content at '{}'", path.display()))?;
    let raw: Value = serde_json::from_str(&text)
        .with_context(|| format!("Resume content at '{}' is not valid JSON", path.display()))?;
    let record = ResumeRecord::from_value(raw)
        .with_context(|| format!("Resume content at '{}' failed validation", path.display()))?;

    info!(
        "Loaded resume content: {} roles, {} education entries, {} skill groups",
        record.webdev_experience.len(),
        record.education.len(),
        record.technical_skills.len()
    );
    Ok(record)
}
