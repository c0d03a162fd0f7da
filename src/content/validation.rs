//! Validation for loaded content before it reaches the simulation.

use super::data::{LOCOMOTION_SCHEMA_VERSION, LocomotionFile};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}' is invalid: {}",
            self.source_type, self.field, self.message
        )
    }
}

/// Validate a locomotion file.
/// Returns a list of validation errors, empty if the file is usable.
pub fn validate_locomotion(file: &LocomotionFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if file.schema_version != LOCOMOTION_SCHEMA_VERSION {
        errors.push(ValidationError {
            source_type: "LocomotionFile",
            field: "schema_version",
            message: format!(
                "expected {}, found {}",
                LOCOMOTION_SCHEMA_VERSION, file.schema_version
            ),
        });
    }

    if let Err(e) = file.tuning.validate() {
        errors.push(ValidationError {
            source_type: "LocomotionTuning",
            field: match e {
                crate::movement::LocomotionError::InvalidTuning { field, .. } => field,
                _ => "tuning",
            },
            message: e.to_string(),
        });
    }

    errors
}
