//! Explicit request validation
//!
//! The schema layer only guarantees JSON shape; presence of the eight
//! required fields is checked here, returning either the validated record
//! or the complete list of missing fields.

use serde::Serialize;

use crate::project::{ResearchProject, ResearchProjectDraft};

/// A single validation failure, serialized into the 422 response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field
    pub field: String,
    /// Human-readable reason, in the API's language
    pub message: String,
}

impl FieldError {
    /// Failure for a field that was absent or null
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "campo requerido".to_string(),
        }
    }
}

impl ResearchProjectDraft {
    /// Validate presence of every required field
    ///
    /// Returns the validated record, or one [`FieldError`] per missing
    /// field (absent and `null` are both missing). Empty strings pass;
    /// no length or content constraints apply.
    pub fn validate(self) -> Result<ResearchProject, Vec<FieldError>> {
        let mut errors = Vec::new();

        let project = ResearchProject {
            problema: require(&mut errors, "problema", self.problema),
            obj_general: require(&mut errors, "obj_general", self.obj_general),
            obj_especificos: require(&mut errors, "obj_especificos", self.obj_especificos),
            marco: require(&mut errors, "marco", self.marco),
            metodologia: require(&mut errors, "metodologia", self.metodologia),
            resultados: require(&mut errors, "resultados", self.resultados),
            conclusiones: require(&mut errors, "conclusiones", self.conclusiones),
            referencias: require(&mut errors, "referencias", self.referencias),
        };

        if errors.is_empty() {
            Ok(project)
        } else {
            Err(errors)
        }
    }
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: Option<String>) -> String {
    match value {
        Some(value) => value,
        None => {
            errors.push(FieldError::missing(field));
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ResearchProjectDraft {
        ResearchProjectDraft {
            problema: Some("p".to_string()),
            obj_general: Some("g".to_string()),
            obj_especificos: Some("e".to_string()),
            marco: Some("m".to_string()),
            metodologia: Some("me".to_string()),
            resultados: Some("r".to_string()),
            conclusiones: Some("c".to_string()),
            referencias: Some("ref".to_string()),
        }
    }

    #[test]
    fn test_validate_complete_draft() {
        let project = full_draft().validate().unwrap();
        assert_eq!(project.problema, "p");
        assert_eq!(project.referencias, "ref");
    }

    #[test]
    fn test_validate_reports_single_missing_field() {
        let mut draft = full_draft();
        draft.problema = None;

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "problema");
        assert_eq!(errors[0].message, "campo requerido");
    }

    #[test]
    fn test_validate_reports_all_missing_fields() {
        let errors = ResearchProjectDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 8);
        // Errors come back in declaration order
        assert_eq!(errors[0].field, "problema");
        assert_eq!(errors[7].field, "referencias");
    }

    #[test]
    fn test_validate_accepts_empty_strings() {
        let mut draft = full_draft();
        draft.marco = Some(String::new());

        let project = draft.validate().unwrap();
        assert_eq!(project.marco, "");
    }

    #[test]
    fn test_field_error_serializes_to_wire_shape() {
        let json = serde_json::to_value(FieldError::missing("marco")).unwrap();
        assert_eq!(json["field"], "marco");
        assert_eq!(json["message"], "campo requerido");
    }
}
