//! investigacion-core - Research-project domain model and document assembly
//!
//! This crate holds everything that does not touch the network or the
//! filesystem: the `ResearchProject` record, explicit request validation,
//! and the builder that turns a validated record into an ordered sequence
//! of renderable blocks.
//!
//! # Example
//!
//! ```
//! use investigacion_core::{build_document, Block, ResearchProjectDraft};
//!
//! let draft: ResearchProjectDraft = serde_json::from_str(
//!     r#"{"problema": "P", "obj_general": "G", "obj_especificos": "E",
//!         "marco": "M", "metodologia": "Me", "resultados": "R",
//!         "conclusiones": "C", "referencias": "Ref"}"#,
//! )
//! .unwrap();
//!
//! let project = draft.validate().unwrap();
//! let doc = build_document(&project);
//! assert!(matches!(doc.blocks.first(), Some(Block::Title(_))));
//! ```

pub mod builder;
pub mod document;
pub mod project;
pub mod validate;

// Re-export main types and functions
pub use builder::{build_document, build_document_at, DOCUMENT_TITLE};
pub use document::{Block, Document};
pub use project::{ResearchProject, ResearchProjectDraft};
pub use validate::FieldError;
