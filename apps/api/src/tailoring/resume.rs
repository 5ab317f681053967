use serde::{Deserialize, Serialize};

/// Structured resume returned by the tailoring call and accepted by the PDF renderer.
///
/// Every field is optional on input so partially-filled JSON from the model or
/// the browser still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailoredResume {
    pub name: String,
    pub title: String,
    pub contact: String,
    pub summary: String,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Option<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    /// Comma-separated skills, kept as one string.
    pub items: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    /// Short domain tag shown next to the company.
    pub context: String,
    pub dates: String,
    pub location: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub dates: String,
    pub location: String,
}

impl Education {
    pub fn is_empty(&self) -> bool {
        [&self.degree, &self.school, &self.dates, &self.location]
            .iter()
            .all(|field| field.is_empty())
    }
}

impl TailoredResume {
    /// True when the resume carries nothing to render.
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.title, &self.contact, &self.summary]
            .iter()
            .all(|field| field.trim().is_empty())
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.education().is_none()
    }

    /// Education block, if the resume carries a non-empty one.
    pub fn education(&self) -> Option<&Education> {
        self.education.as_ref().filter(|edu| !edu.is_empty())
    }

    /// Plain-text rendition fed to the model as candidate context.
    pub fn to_context_text(&self) -> String {
        let mut lines = vec![
            format!("Name: {}", self.name),
            format!("Title: {}", self.title),
            format!("\nSummary:\n{}", self.summary),
            "\nSkills:".to_string(),
        ];
        for skill in &self.skills {
            lines.push(format!("  {}: {}", skill.category, skill.items));
        }
        lines.push("\nExperience:".to_string());
        for job in &self.experience {
            lines.push(format!(
                "\n  {} at {} ({})",
                job.job_title, job.company, job.dates
            ));
            for bullet in &job.bullets {
                lines.push(format!("    - {bullet}"));
            }
        }
        if let Some(edu) = self.education() {
            lines.push(format!("\nEducation: {} - {}", edu.degree, edu.school));
        }
        lines.join("\n")
    }
}
