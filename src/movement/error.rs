//! Movement domain: configuration and wiring errors.

/// Errors raised while setting up the locomotion core.
#[derive(Debug, Clone, PartialEq)]
pub enum LocomotionError {
    InvalidTuning {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
    /// No camera is available to supply the visible horizontal range.
    MissingViewport,
    /// An avatar was spawned without its animation and light sinks.
    MissingRig,
}

impl std::fmt::Display for LocomotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocomotionError::InvalidTuning {
                field,
                value,
                reason,
            } => write!(f, "invalid tuning '{}' = {}: {}", field, value, reason),
            LocomotionError::MissingViewport => {
                write!(f, "no 2D camera found to provide the visible range")
            }
            LocomotionError::MissingRig => {
                write!(f, "avatar has no rig (animation and light sinks)")
            }
        }
    }
}

impl std::error::Error for LocomotionError {}
