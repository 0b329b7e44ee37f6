//! Resume Projector — derives a render-ready view from authored resume content.
//!
//! Pure and synchronous: no I/O, no logging, the input record is only borrowed.
//! Callers may project the same record concurrently from any number of handlers.

use std::str::FromStr;

use serde::Serialize;

use crate::errors::ProjectionError;
use crate::models::resume::{CommunityContribution, EducationEntry, ExperienceEntry, ResumeRecord};

// ────────────────────────────────────────────────────────────────────────────
// Config
// ────────────────────────────────────────────────────────────────────────────

pub const SKILL_SEPARATOR: &str = ", ";
pub const LIST_SEPARATOR: &str = " | ";

/// How education entries are ordered in the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EducationOrder {
    /// Most recent year first; equal years keep authored order.
    #[default]
    YearDescending,
    /// Authored order reversed. Reproduces the old page, whose comparator read
    /// fields the entries never had and so left the list untouched before the
    /// trailing `reverse()`.
    HistoricalReverse,
}

impl FromStr for EducationOrder {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year_descending" => Ok(EducationOrder::YearDescending),
            "historical_reverse" => Ok(EducationOrder::HistoricalReverse),
            other => Err(ProjectionError::InvalidConfig(format!(
                "unknown education order '{other}' (expected year_descending or historical_reverse)"
            ))),
        }
    }
}

/// Projection options. `max_recent_experience: None` means no truncation.
///
/// The bound is signed so that a negative value coming from a query string or
/// env var reaches `project` and is rejected there as `InvalidConfig`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionConfig {
    pub max_recent_experience: Option<i64>,
    pub education_order: EducationOrder,
}

impl ProjectionConfig {
    /// Short form: keep only the `n` most recent roles.
    pub fn short_form(n: i64) -> Self {
        Self {
            max_recent_experience: Some(n),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        self.experience_limit().map(|_| ())
    }

    /// Resolves the bound to a usable count, rejecting negatives.
    fn experience_limit(&self) -> Result<Option<usize>, ProjectionError> {
        match self.max_recent_experience {
            None => Ok(None),
            Some(n) if n < 0 => Err(ProjectionError::InvalidConfig(format!(
                "maxRecentExperience must be >= 0, got {n}"
            ))),
            Some(n) => Ok(Some(usize::try_from(n).unwrap_or(usize::MAX))),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View
// ────────────────────────────────────────────────────────────────────────────

/// A skill group with its items joined for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillLine {
    pub label: String,
    pub content: String,
}

/// Render-ready projection of a `ResumeRecord`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    pub tag_line: String,
    pub technical_skills: Vec<SkillLine>,
    pub essential_skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub community_contributions: Vec<CommunityContribution>,
    pub personal_interests: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Projection
// ────────────────────────────────────────────────────────────────────────────

/// Projects `record` into a `ResumeView`.
///
/// Steps:
/// 1. Keep the first `max_recent_experience` roles in stored order
/// 2. Order education per `config.education_order`
/// 3. Join each skill group's items with `", "`
/// 4. Join interests and contact (when present) with `" | "`
/// 5. Copy tag line, essential skills and contributions through
///
/// Fails with `InvalidConfig` on a negative bound, before touching the record.
pub fn project(
    record: &ResumeRecord,
    config: &ProjectionConfig,
) -> Result<ResumeView, ProjectionError> {
    let limit = config.experience_limit()?;

    let experience = select_recent_experience(&record.webdev_experience, limit);
    let education = order_education(&record.education, config.education_order);

    let technical_skills = record
        .technical_skills
        .iter()
        .map(|group| SkillLine {
            label: group.label.clone(),
            content: group.content.join(SKILL_SEPARATOR),
        })
        .collect();

    Ok(ResumeView {
        tag_line: record.tag_line.clone(),
        technical_skills,
        essential_skills: record.essential_skills.clone(),
        experience,
        education,
        community_contributions: record.community_contributions.clone(),
        personal_interests: record.personal_interests.join(LIST_SEPARATOR),
        contact_information: record
            .contact_information
            .as_ref()
            .map(|contact| contact.join(LIST_SEPARATOR)),
    })
}

/// Stored order is trusted as reverse-chronological; nothing is re-sorted.
fn select_recent_experience(
    experience: &[ExperienceEntry],
    limit: Option<usize>,
) -> Vec<ExperienceEntry> {
    match limit {
        Some(k) => experience.iter().take(k).cloned().collect(),
        None => experience.to_vec(),
    }
}

fn order_education(education: &[EducationEntry], order: EducationOrder) -> Vec<EducationEntry> {
    let mut ordered = education.to_vec();
    match order {
        // `sort_by` is stable, so ties keep authored order.
        EducationOrder::YearDescending => ordered.sort_by(|a, b| b.date.cmp(&a.date)),
        EducationOrder::HistoricalReverse => ordered.reverse(),
    }
    ordered
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
