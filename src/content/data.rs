//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use serde::{Deserialize, Serialize};

use crate::movement::LocomotionTuning;

/// Schema version understood by this build.
pub const LOCOMOTION_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Locomotion (locomotion.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionFile {
    pub schema_version: u32,
    pub tuning: LocomotionTuning,
}
