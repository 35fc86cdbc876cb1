//! Document builder
//!
//! Pure transformation from a validated `ResearchProject` to the block
//! sequence the renderer consumes: centered title, the eight sections in
//! fixed order, then a right-aligned generation footer.

use chrono::{DateTime, Local};

use crate::document::{Block, Document};
use crate::project::ResearchProject;

/// Title printed centered at the top of every generated document
pub const DOCUMENT_TITLE: &str = "Proyecto de Investigación";

// Vertical gaps, in points (72 pt = 1 in)
const TITLE_GAP_PT: f32 = 18.0; // 0.25 in after the title
const SECTION_GAP_PT: f32 = 14.4; // 0.2 in after each section
const FOOTER_GAP_PT: f32 = 21.6; // 0.3 in before the footer

/// Build the document for a project, stamped with the current local time
pub fn build_document(project: &ResearchProject) -> Document {
    build_document_at(project, Local::now())
}

/// Build the document with an explicit generation timestamp
///
/// Separated from [`build_document`] so callers (and tests) control the
/// footer timestamp.
pub fn build_document_at(project: &ResearchProject, generated_at: DateTime<Local>) -> Document {
    let mut doc = Document::with_title(DOCUMENT_TITLE);

    doc.push(Block::Title(DOCUMENT_TITLE.to_string()));
    doc.push(Block::Spacer(TITLE_GAP_PT));

    for (heading, body) in project.sections() {
        doc.push(Block::Heading(heading.to_string()));
        doc.push(Block::Paragraph(body.to_string()));
        doc.push(Block::Spacer(SECTION_GAP_PT));
    }

    doc.push(Block::Spacer(FOOTER_GAP_PT));
    doc.push(Block::Footer(format!(
        "Generado automáticamente el {}.",
        generated_at.format("%d/%m/%Y %H:%M")
    )));

    doc
}
