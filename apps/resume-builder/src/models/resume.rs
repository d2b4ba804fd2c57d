use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid YAML")]
    Syntax(#[source] serde_yaml::Error),

    #[error("YAML does not match the resume schema")]
    Shape(#[source] serde_yaml::Error),

    #[error("failed to serialise YAML")]
    Serialize(#[source] serde_yaml::Error),

    #[error("`{0}` must contain at least one entry")]
    MissingEntry(&'static str),

    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("invalid {field} URL '{value}'")]
    InvalidUrl { field: &'static str, value: String },
}

/// One skill category line, e.g. `Languages: Rust, Go`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub category: String,
    pub skill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Points", default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Points", default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Issuer")]
    pub issuer: String,
}

/// A degree or diploma awarded by an institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Points", default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Credential", default)]
    pub credentials: Vec<Credential>,
}

/// Body of the resume. Only `summary` is required; list sections default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub education: Vec<Institution>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Resume {
    /// True when the data backing `kind` has nothing to render.
    pub fn is_section_empty(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::ProfessionalSummary => self.summary.trim().is_empty(),
            SectionKind::Skills => self.skills.is_empty(),
            SectionKind::Experience => self.work.is_empty(),
            SectionKind::Education => self.education.is_empty() && self.certificates.is_empty(),
            SectionKind::Projects => self.projects.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Section titles recognised in `resume_sections`. The title doubles as the heading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    #[serde(rename = "Professional Summary")]
    ProfessionalSummary,
    Skills,
    Experience,
    Education,
    Projects,
}

impl SectionKind {
    /// Every section, in the order used when `resume_sections` is absent.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::ProfessionalSummary,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::ProfessionalSummary => "Professional Summary",
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Projects => "Projects",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRef {
    #[serde(rename = "type")]
    pub kind: SectionKind,
}

fn default_sections() -> Vec<SectionRef> {
    SectionKind::ALL
        .iter()
        .map(|&kind| SectionRef { kind })
        .collect()
}

/// The full YAML document returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal_details: Vec<PersonalDetails>,
    pub resume: Vec<Resume>,
    #[serde(default = "default_sections")]
    pub resume_sections: Vec<SectionRef>,
}

impl ResumeDocument {
    /// Types an already-parsed YAML value and checks the list sections are populated.
    pub fn from_value(value: serde_yaml::Value) -> Result<Self, SchemaError> {
        let doc: ResumeDocument = serde_yaml::from_value(value).map_err(SchemaError::Shape)?;
        doc.details()?;
        doc.resume()?;
        Ok(doc)
    }

    /// First `personal_details` entry.
    pub fn details(&self) -> Result<&PersonalDetails, SchemaError> {
        self.personal_details
            .first()
            .ok_or(SchemaError::MissingEntry("personal_details"))
    }

    /// First `resume` entry.
    pub fn resume(&self) -> Result<&Resume, SchemaError> {
        self.resume.first().ok_or(SchemaError::MissingEntry("resume"))
    }

    pub fn section_order(&self) -> Vec<SectionKind> {
        self.resume_sections.iter().map(|s| s.kind).collect()
    }
}

/// Parses YAML text without applying the resume schema.
pub fn parse_yaml_value(text: &str) -> Result<serde_yaml::Value, SchemaError> {
    serde_yaml::from_str(text).map_err(SchemaError::Syntax)
}

/// Parses YAML text straight into a typed `ResumeDocument`.
#[cfg(test)]
pub fn parse_resume_yaml(text: &str) -> Result<ResumeDocument, SchemaError> {
    ResumeDocument::from_value(parse_yaml_value(text)?)
}
