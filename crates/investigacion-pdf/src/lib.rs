//! investigacion-pdf - PDF generation via Typst
//!
//! This crate turns a research-project `Document` into a PDF file using
//! Typst as the typesetting backend.
//!
//! # Architecture
//!
//! The pipeline has three stages:
//!
//! 1. **Transpiler** - Converts `investigacion_core::Document` to Typst markup
//! 2. **Compiler** - Compiles Typst markup to PDF bytes
//! 3. **Renderer** - Allocates the timestamped file name and writes the bytes
//!    into the output directory
//!
//! # Example
//!
//! ```ignore
//! use investigacion_core::Document;
//! use investigacion_pdf::{render_pdf, Renderer};
//!
//! let doc = Document::new();
//! let pdf_bytes = render_pdf(&doc)?;
//!
//! let renderer = Renderer::new(std::env::temp_dir());
//! let rendered = renderer.render_to_file(&doc)?;
//! println!("wrote {}", rendered.path.display());
//! ```

mod compiler;
mod error;
mod renderer;
mod transpiler;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use renderer::{output_filename, RenderedPdf, Renderer, FILE_PREFIX};
pub use transpiler::Transpiler;

use investigacion_core::Document;

/// Convenience function to render a document to PDF bytes
///
/// # Arguments
/// * `doc` - The document to render
///
/// # Returns
/// PDF bytes on success
pub fn render_pdf(doc: &Document) -> Result<Vec<u8>> {
    let typst_markup = Transpiler::transpile(doc);
    Compiler::compile(&typst_markup)
}
