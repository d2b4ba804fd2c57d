//! Document renderer — maps a typed resume onto styled paragraphs.
//!
//! Rendering is two steps: section renderers build a `DocumentPlan` (plain data,
//! easy to assert on), then `docx::write_docx` turns the plan into a Word file.

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::models::contact::ContactInfo;
use crate::models::resume::{ResumeDocument, SchemaError};

pub mod docx;
pub mod sections;
pub mod styles;

pub use styles::{PageMargins, TextStyle};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {message}", .path.display())]
    Pack { path: PathBuf, message: String },

    #[error("render task failed")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// A run of uniformly styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub style: TextStyle,
    /// External hyperlink target, if the run is a link.
    pub link: Option<String>,
    /// Emit a line break after the text.
    pub break_after: bool,
}

impl Run {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
            break_after: false,
        }
    }

    pub fn linked(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    pub fn with_break(mut self) -> Self {
        self.break_after = true;
        self
    }
}

/// One paragraph of the output document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub runs: Vec<Run>,
    pub alignment: Alignment,
    pub bullet: bool,
    /// Points; `None` keeps Word's default.
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
}

impl Block {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Self::empty().with_run(Run::new(text, style))
    }

    pub fn bullet(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            bullet: true,
            ..Self::text(text, style)
        }
    }

    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn space_before(mut self, pt: u32) -> Self {
        self.space_before = Some(pt);
        self
    }

    pub fn space_after(mut self, pt: u32) -> Self {
        self.space_after = Some(pt);
        self
    }

    /// Concatenated text of all runs.
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPlan {
    pub margins: PageMargins,
    pub blocks: Vec<Block>,
}

/// Builds the full plan: contact header, then every listed section in order.
pub fn build_plan(
    doc: &ResumeDocument,
    contact: &ContactInfo,
) -> Result<DocumentPlan, SchemaError> {
    let resume = doc.resume()?;
    let mut blocks = header_blocks(contact);

    for kind in doc.section_order() {
        if resume.is_section_empty(kind) {
            warn!("Section '{}' is listed but has no content", kind.title());
        }
        blocks.push(Block::text(kind.title(), styles::SECTION_HEADING));
        sections::renderer_for(kind).render(resume, &mut blocks);
    }

    Ok(DocumentPlan {
        margins: styles::PAGE_MARGINS,
        blocks,
    })
}

/// Centred name line followed by the centred `email | LinkedIn | GitHub` line.
fn header_blocks(contact: &ContactInfo) -> Vec<Block> {
    let name = Block::text(contact.name.clone(), styles::NAME)
        .centered()
        .space_after(0);

    let link_run = |label: &str, url: Option<&reqwest::Url>| {
        let run = Run::new(label, styles::LINKS);
        match url {
            Some(url) => run.linked(url.as_str()),
            None => run,
        }
    };

    let links = Block::empty()
        .with_run(Run::new(format!("{} | ", contact.email), styles::LINKS))
        .with_run(link_run("LinkedIn", contact.linkedin.as_ref()))
        .with_run(Run::new(" | ", styles::LINKS))
        .with_run(link_run("GitHub", contact.github.as_ref()))
        .centered();

    vec![name, links]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::parse_resume_yaml;
    use crate::models::resume::tests::SAMPLE_YAML;

    fn sample_plan() -> DocumentPlan {
        let doc = parse_resume_yaml(SAMPLE_YAML).unwrap();
        let contact = ContactInfo::from_details(doc.details().unwrap(), None, None).unwrap();
        build_plan(&doc, &contact).unwrap()
    }

    #[test]
    fn test_header_lines() {
        let plan = sample_plan();
        let name = &plan.blocks[0];
        assert_eq!(name.plain_text(), "Jane Doe");
        assert_eq!(name.alignment, Alignment::Center);
        assert_eq!(name.space_after, Some(0));
        assert_eq!(name.runs[0].style, styles::NAME);

        let links = &plan.blocks[1];
        assert_eq!(links.plain_text(), "jane@example.com | LinkedIn | GitHub");
        assert_eq!(links.alignment, Alignment::Center);
        assert!(links.runs.iter().all(|r| r.style == styles::LINKS));
    }

    #[test]
    fn test_links_only_where_urls_exist() {
        let plan = sample_plan();
        let links = &plan.blocks[1];
        let linkedin = links.runs.iter().find(|r| r.text == "LinkedIn").unwrap();
        let github = links.runs.iter().find(|r| r.text == "GitHub").unwrap();
        assert!(linkedin.link.is_none());
        assert_eq!(github.link.as_deref(), Some("https://github.com/janedoe"));
    }

    #[test]
    fn test_section_headings_follow_listed_order() {
        let plan = sample_plan();
        let headings: Vec<String> = plan
            .blocks
            .iter()
            .filter(|b| b.runs.first().map(|r| r.style) == Some(styles::SECTION_HEADING))
            .map(Block::plain_text)
            .collect();
        assert_eq!(
            headings,
            vec!["Professional Summary", "Skills", "Experience", "Education", "Projects"]
        );
    }

    #[test]
    fn test_empty_section_still_gets_heading() {
        let yaml = "personal_details:\n  - {name: A, email: a@b.io}\n\
                    resume:\n  - summary: hi\n\
                    resume_sections:\n  - type: Projects\n";
        let doc = parse_resume_yaml(yaml).unwrap();
        let contact = ContactInfo::from_details(doc.details().unwrap(), None, None).unwrap();
        let plan = build_plan(&doc, &contact).unwrap();

        assert_eq!(plan.blocks.len(), 3);
        assert_eq!(plan.blocks[2].plain_text(), "Projects");
    }

    #[test]
    fn test_plan_uses_page_margins() {
        assert_eq!(sample_plan().margins, styles::PAGE_MARGINS);
    }
}
