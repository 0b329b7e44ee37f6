//! Markdown layout of a projected resume.
//!
//! Mirrors the section order of the resume page: tag line, technical skills,
//! essential skills, experience, education, community, interests, contact.

use crate::models::resume::{CommunityContribution, EducationEntry, ExperienceEntry};
use crate::resume::projector::ResumeView;

/// Markdown hard line break.
const BREAK: &str = "  \n";

pub fn render_markdown(view: &ResumeView, heading: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {heading}\n\n{}\n", view.tag_line));

    out.push_str("\n## Technical Skills\n");
    for skill in &view.technical_skills {
        out.push_str(&format!("\n**{}**{BREAK}{}\n", skill.label, skill.content));
    }

    if !view.essential_skills.is_empty() {
        out.push_str("\n## Essential Human / Developer Skills\n\n");
        for skill in &view.essential_skills {
            out.push_str(&format!("- {skill}\n"));
        }
    }

    out.push_str("\n## Development Experience\n");
    for role in &view.experience {
        out.push('\n');
        out.push_str(&experience_block(role));
    }

    out.push_str("\n## Education & Training\n\n");
    for entry in &view.education {
        out.push_str(&education_line(entry));
        out.push('\n');
    }

    if !view.community_contributions.is_empty() {
        out.push_str("\n## Community Contributions\n");
        for contribution in &view.community_contributions {
            out.push('\n');
            out.push_str(&contribution_block(contribution));
        }
    }

    if !view.personal_interests.is_empty() {
        out.push_str(&format!("\n## Personal Interests\n\n{}\n", view.personal_interests));
    }

    if let Some(contact) = &view.contact_information {
        out.push_str(&format!("\n## Contact\n\n{contact}\n"));
    }

    out
}

fn experience_block(role: &ExperienceEntry) -> String {
    let mut block = format!(
        "**{} - {}**{BREAK}*{} ({} - {})*\n",
        role.title, role.company, role.location, role.start_date, role.end_date
    );
    for highlight in &role.highlights {
        block.push_str(&format!("- {highlight}\n"));
    }
    block
}

/// `2019 - GraphQL Intensive Workshop (16 hrs), Cascadia JS 2019, Seattle, WA`
pub fn education_line(entry: &EducationEntry) -> String {
    let duration = entry
        .duration
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default();
    format!(
        "{} - {}{}, {}, {}",
        entry.date, entry.title, duration, entry.institution, entry.location
    )
}

fn contribution_block(contribution: &CommunityContribution) -> String {
    let when_where = match contribution.year {
        Some(year) => format!("{year} - {}", contribution.location),
        None => contribution.location.clone(),
    };
    format!(
        "**{}, {} ({})**{BREAK}{}\n",
        contribution.role, contribution.title, when_where, contribution.description
    )
}
