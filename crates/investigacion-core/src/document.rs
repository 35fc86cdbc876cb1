//! Renderable document structure
//!
//! A `Document` is the ordered list of blocks the PDF renderer flows onto
//! pages. Blocks carry text and spacing only; page geometry lives in the
//! renderer.

use serde::{Deserialize, Serialize};

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Centered document title
    Title(String),
    /// A section heading
    Heading(String),
    /// Body text; embedded newlines become hard line breaks
    Paragraph(String),
    /// Vertical whitespace, in points
    Spacer(f32),
    /// Right-aligned small footer line
    Footer(String),
}

/// A complete renderable document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Title recorded in the PDF metadata, if any
    pub title: Option<String>,
    /// Document content blocks, in render order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            title: None,
            blocks: Vec::new(),
        }
    }

    /// Create a document with a metadata title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            blocks: Vec::new(),
        }
    }

    /// Append a block to the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
