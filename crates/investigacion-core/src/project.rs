//! Research-project record definitions
//!
//! This module defines the validated domain record and the raw draft shape
//! that request bodies deserialize into. Field names are fixed by the wire
//! contract and must not be renamed.

use serde::{Deserialize, Serialize};

/// A validated research project, ready for document assembly
///
/// All eight fields are guaranteed present (possibly empty). Construct one
/// through [`ResearchProjectDraft::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchProject {
    /// Problem statement
    pub problema: String,
    /// General objective
    pub obj_general: String,
    /// Specific objectives
    pub obj_especificos: String,
    /// Theoretical framework
    pub marco: String,
    /// Methodology
    pub metodologia: String,
    /// Expected results
    pub resultados: String,
    /// Conclusions
    pub conclusiones: String,
    /// References
    pub referencias: String,
}

/// The pre-validation shape of a generate request body
///
/// Every field is optional so that a partial body still deserializes and
/// validation can report the complete list of missing fields at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearchProjectDraft {
    pub problema: Option<String>,
    pub obj_general: Option<String>,
    pub obj_especificos: Option<String>,
    pub marco: Option<String>,
    pub metodologia: Option<String>,
    pub resultados: Option<String>,
    pub conclusiones: Option<String>,
    pub referencias: Option<String>,
}

impl ResearchProject {
    /// The eight document sections in render order: heading plus body text
    ///
    /// The headings are the Spanish section titles printed in the PDF; the
    /// order is part of the document contract.
    pub fn sections(&self) -> [(&'static str, &str); 8] {
        [
            ("Planteamiento del Problema", self.problema.as_str()),
            ("Objetivo General", self.obj_general.as_str()),
            ("Objetivos Específicos", self.obj_especificos.as_str()),
            ("Marco Teórico", self.marco.as_str()),
            ("Metodología", self.metodologia.as_str()),
            ("Resultados Esperados", self.resultados.as_str()),
            ("Conclusiones", self.conclusiones.as_str()),
            ("Referencias", self.referencias.as_str()),
        ]
    }
}
