use serde::{Deserialize, Serialize};

/// Authored resume content, as read from the content file.
///
/// Wire names are camelCase to match the content file. `tagLine`,
/// `technicalSkills`, `webdevExperience` and `education` are required; the
/// remaining lists default to empty, except `contactInformation`, whose
/// absence is kept distinct from an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub tag_line: String,
    pub technical_skills: Vec<SkillGroup>,
    #[serde(default)]
    pub essential_skills: Vec<String>,
    pub webdev_experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub community_contributions: Vec<CommunityContribution>,
    #[serde(default)]
    pub personal_interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub content: Vec<String>,
}

/// One role. Dates are display strings ("June 2018", "Present").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub institution: String,
    pub location: String,
    /// Completion year.
    pub date: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityContribution {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub role: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}
