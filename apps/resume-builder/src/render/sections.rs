//! Per-section renderers, looked up by `SectionKind`.

use crate::models::resume::{Resume, SectionKind};
use crate::render::styles::{POINT, POINT_HEADING};
use crate::render::{Block, Run};

/// Renders one resume section into document blocks.
/// The section heading is emitted by the caller.
pub trait SectionRenderer: Send + Sync {
    fn render(&self, resume: &Resume, out: &mut Vec<Block>);
}

pub struct ProfessionalSummaryRenderer;
pub struct SkillRenderer;
pub struct WorkExperienceRenderer;
pub struct EducationRenderer;
pub struct ProjectRenderer;

pub fn renderer_for(kind: SectionKind) -> &'static dyn SectionRenderer {
    match kind {
        SectionKind::ProfessionalSummary => &ProfessionalSummaryRenderer,
        SectionKind::Skills => &SkillRenderer,
        SectionKind::Experience => &WorkExperienceRenderer,
        SectionKind::Education => &EducationRenderer,
        SectionKind::Projects => &ProjectRenderer,
    }
}

impl SectionRenderer for ProfessionalSummaryRenderer {
    fn render(&self, resume: &Resume, out: &mut Vec<Block>) {
        let summary = Run::new(resume.summary.trim(), POINT).with_break();
        out.push(Block::empty().with_run(summary).space_before(0).space_after(0));
    }
}

impl SectionRenderer for SkillRenderer {
    /// `Category: ` in bold, then the skills in regular weight.
    fn render(&self, resume: &Resume, out: &mut Vec<Block>) {
        for skill in &resume.skills {
            out.push(
                Block::text(format!("{}: ", skill.category), POINT_HEADING)
                    .with_run(Run::new(skill.skill.clone(), POINT))
                    .space_after(3),
            );
        }
        out.push(Block::empty());
    }
}

impl SectionRenderer for WorkExperienceRenderer {
    fn render(&self, resume: &Resume, out: &mut Vec<Block>) {
        for job in &resume.work {
            out.push(Block::text(
                format!("{}, {} {}", job.title, job.company, job.date),
                POINT_HEADING,
            ));
            for point in &job.points {
                out.push(Block::bullet(point.clone(), POINT).space_after(3));
            }
        }
        out.push(Block::empty());
    }
}

impl SectionRenderer for EducationRenderer {
    /// Institutions with their credentials, then certificates as bullets.
    fn render(&self, resume: &Resume, out: &mut Vec<Block>) {
        for institution in &resume.education {
            out.push(Block::text(institution.name.clone(), POINT_HEADING));
            for credential in &institution.credentials {
                out.push(Block::text(credential.name.clone(), POINT_HEADING).space_after(0));
                for point in &credential.points {
                    out.push(Block::bullet(point.clone(), POINT).space_after(0));
                }
            }
        }
        out.push(Block::empty());

        for certificate in &resume.certificates {
            out.push(
                Block::bullet(format!("{}: {}", certificate.name, certificate.issuer), POINT)
                    .space_after(2),
            );
        }
    }
}

impl SectionRenderer for ProjectRenderer {
    fn render(&self, resume: &Resume, out: &mut Vec<Block>) {
        for (index, project) in resume.projects.iter().enumerate() {
            let gap = if index == 0 { 0 } else { 9 };
            out.push(Block::text(project.name.clone(), POINT_HEADING).space_before(gap));
            for point in &project.points {
                out.push(
                    Block::bullet(point.clone(), POINT)
                        .space_before(15)
                        .space_after(3),
                );
            }
        }
    }
}
