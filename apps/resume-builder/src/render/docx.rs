//! Word writer — packs a `DocumentPlan` into a `.docx` file.

use std::fs::File;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, Hyperlink, HyperlinkType, IndentLevel,
    Level, LevelJc, LevelText, LineSpacing, NumberFormat, Numbering, NumberingId, PageMargin,
    Paragraph, Run as DocxRun, RunFonts, SpecialIndentType, Start,
};
use tracing::info;

use crate::render::{Alignment, Block, DocumentPlan, PageMargins, RenderError, Run};

const BULLET_NUMBERING_ID: usize = 1;
const TWIPS_PER_POINT: u32 = 20;
const TWIPS_PER_INCH: f32 = 1440.0;
/// Bullet text starts 0.5in in, the bullet itself hangs 0.25in to the left.
const BULLET_INDENT_TWIPS: i32 = 720;
const BULLET_HANGING_TWIPS: i32 = 360;

/// Writes `plan` to `path`, replacing any existing file.
pub fn write_docx(plan: &DocumentPlan, path: &Path) -> Result<(), RenderError> {
    let file = File::create(path).map_err(|source| RenderError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    to_docx(plan)
        .build()
        .pack(file)
        .map_err(|e| RenderError::Pack {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!("Wrote {} paragraphs to {}", plan.blocks.len(), path.display());
    Ok(())
}

pub fn to_docx(plan: &DocumentPlan) -> Docx {
    let docx = Docx::new()
        .page_margin(page_margin(&plan.margins))
        .add_abstract_numbering(bullet_definition())
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    plan.blocks
        .iter()
        .fold(docx, |docx, block| docx.add_paragraph(paragraph(block)))
}

fn page_margin(margins: &PageMargins) -> PageMargin {
    PageMargin::new()
        .top(inches_to_twips(margins.top))
        .right(inches_to_twips(margins.right))
        .bottom(inches_to_twips(margins.bottom))
        .left(inches_to_twips(margins.left))
}

fn inches_to_twips(inches: f32) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}

fn bullet_definition() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(
            Some(BULLET_INDENT_TWIPS),
            Some(SpecialIndentType::Hanging(BULLET_HANGING_TWIPS)),
            None,
            None,
        ),
    )
}

fn paragraph(block: &Block) -> Paragraph {
    let mut paragraph = Paragraph::new();

    for run in &block.runs {
        let docx_run = docx_run(run);
        paragraph = match &run.link {
            Some(url) => paragraph.add_hyperlink(
                Hyperlink::new(url.as_str(), HyperlinkType::External).add_run(docx_run),
            ),
            None => paragraph.add_run(docx_run),
        };
    }

    if block.alignment == Alignment::Center {
        paragraph = paragraph.align(AlignmentType::Center);
    }
    if block.bullet {
        paragraph = paragraph.numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
    }
    if block.space_before.is_some() || block.space_after.is_some() {
        let mut spacing = LineSpacing::new();
        if let Some(pt) = block.space_before {
            spacing = spacing.before(pt * TWIPS_PER_POINT);
        }
        if let Some(pt) = block.space_after {
            spacing = spacing.after(pt * TWIPS_PER_POINT);
        }
        paragraph = paragraph.line_spacing(spacing);
    }

    paragraph
}

fn docx_run(run: &Run) -> DocxRun {
    let font = run.style.font_name;
    let mut docx_run = DocxRun::new()
        .add_text(run.text.as_str())
        .size(run.style.half_points())
        .fonts(RunFonts::new().ascii(font).hi_ansi(font));
    if run.style.bold {
        docx_run = docx_run.bold();
    }
    if run.break_after {
        docx_run = docx_run.add_break(BreakType::TextWrapping);
    }
    docx_run
}
