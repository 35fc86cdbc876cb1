//! Output file renderer
//!
//! Owns the output directory: allocates the timestamped public file name,
//! renders the document, and writes the bytes to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use investigacion_core::Document;

use crate::error::Result;
use crate::render_pdf;

/// Prefix shared by every generated file name
pub const FILE_PREFIX: &str = "proyecto_investigacion_";

/// File name for a document generated at the given local time
///
/// Pattern: `proyecto_investigacion_<YYYYMMDD_HHMMSS>.pdf`. Second
/// granularity; renders within the same second reuse the name.
pub fn output_filename(at: DateTime<Local>) -> String {
    format!("{}{}.pdf", FILE_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

/// A rendered document written to disk
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    /// Public file name, the download identifier
    pub file_name: String,
    /// Canonical absolute path of the written file
    pub path: PathBuf,
}

/// Writes rendered documents into an output directory
#[derive(Debug, Clone)]
pub struct Renderer {
    output_dir: PathBuf,
}

impl Renderer {
    /// Create a renderer targeting `output_dir`
    ///
    /// The directory is created on first render, not here.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the renderer writes into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render `doc` and write it under a freshly allocated file name
    ///
    /// Single-shot: any compilation or write failure propagates to the
    /// caller and nothing is retried. Old files are never cleaned up.
    pub fn render_to_file(&self, doc: &Document) -> Result<RenderedPdf> {
        let file_name = output_filename(Local::now());
        let bytes = render_pdf(doc)?;

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&file_name);
        fs::write(&path, &bytes)?;

        Ok(RenderedPdf {
            file_name,
            path: path.canonicalize()?,
        })
    }
}
