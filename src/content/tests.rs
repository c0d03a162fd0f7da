//! Content domain: tests for RON parsing and validation of locomotion data.

use std::path::Path;

use super::{
    LOCOMOTION_PATH, LOCOMOTION_SCHEMA_VERSION, load_locomotion, load_validated,
    parse_locomotion, validate_locomotion,
};
use crate::movement::LocomotionTuning;

const SAMPLE: &str = r#"
(
    schema_version: 1,
    tuning: (
        char_size: 48.0,
        climb_speed: 96.0,
        accel: 384.0,
        x_vel_max: 144.0,
        margin: 4.8,
        climb_clearance: 4.8,
        stuck_escape_time: 0.5,
        arrival_tolerance: 0.5,
    ),
)
"#;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_locomotion_file() {
    let file = parse_locomotion(SAMPLE, "sample").unwrap();

    assert_eq!(file.schema_version, LOCOMOTION_SCHEMA_VERSION);
    assert_eq!(file.tuning.char_size, 48.0);
    assert_eq!(file.tuning.x_vel_max, 144.0);
    assert_eq!(file.tuning.arrival_tolerance, 0.5);
    assert!(validate_locomotion(&file).is_empty());
}

#[test]
fn test_missing_tuning_fields_use_defaults() {
    let file = parse_locomotion("(schema_version: 1, tuning: (accel: 12.0))", "partial").unwrap();
    let defaults = LocomotionTuning::default();

    assert_eq!(file.tuning.accel, 12.0);
    assert_eq!(file.tuning.char_size, defaults.char_size);
    assert_eq!(file.tuning.stuck_escape_time, defaults.stuck_escape_time);
}

#[test]
fn test_parse_error_names_origin() {
    let err = parse_locomotion("(schema_version: 1, tuning: (", "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_locomotion(Path::new("assets/data/does_not_exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_schema_version_mismatch_is_reported() {
    let file = parse_locomotion("(schema_version: 99, tuning: (char_size: 1.0))", "future").unwrap();
    let errors = validate_locomotion(&file);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "schema_version");
}

#[test]
fn test_invalid_tuning_names_field() {
    let file = parse_locomotion(
        "(schema_version: 1, tuning: (x_vel_max: -2.0))",
        "negative",
    )
    .unwrap();
    let errors = validate_locomotion(&file);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_type, "LocomotionTuning");
    assert_eq!(errors[0].field, "x_vel_max");
}

#[test]
fn test_zero_accel_is_accepted() {
    let file = parse_locomotion("(schema_version: 1, tuning: (accel: 0.0))", "coast").unwrap();
    assert!(validate_locomotion(&file).is_empty());
}

// -----------------------------------------------------------------------------
// Shipped asset
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_locomotion_file_is_valid() {
    let tuning = load_validated(Path::new(LOCOMOTION_PATH)).unwrap();
    assert!(tuning.char_size > 0.0);
    assert!(tuning.stopping_distance(tuning.x_vel_max).is_some());
}
