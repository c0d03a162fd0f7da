//! Movement domain: tuning resource for the locomotion core.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::LocomotionError;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// Height of the avatar, in world units.
    pub char_size: f32,
    pub climb_speed: f32,
    pub accel: f32,
    pub x_vel_max: f32,
    /// Shared spacing used by block layout; not read by the controller.
    pub margin: f32,
    /// Extra height added above an obstacle's top when climbing onto it.
    pub climb_clearance: f32,
    /// Seconds of fruitless acceleration before the stuck escape fires.
    pub stuck_escape_time: f32,
    /// Distances below this snap to exactly zero.
    pub arrival_tolerance: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            char_size: 1.0,
            climb_speed: 2.0,
            accel: 8.0,
            x_vel_max: 3.0,
            margin: 0.1,
            climb_clearance: 0.1,
            stuck_escape_time: 0.5,
            arrival_tolerance: 1e-3,
        }
    }
}

impl LocomotionTuning {
    /// Distance covered while braking from `speed` to rest at `accel`.
    ///
    /// Returns `None` when `accel` cannot brake (zero, negative or non-finite),
    /// which callers treat as "never decelerate early".
    pub fn stopping_distance(&self, speed: f32) -> Option<f32> {
        if !self.accel.is_finite() || self.accel <= 0.0 {
            return None;
        }
        let distance = speed * speed / (2.0 * self.accel);
        distance.is_finite().then_some(distance)
    }

    pub fn half_size(&self) -> f32 {
        self.char_size / 2.0
    }

    /// Check every field; the first offending one is reported.
    pub fn validate(&self) -> Result<(), LocomotionError> {
        let fields = [
            ("char_size", self.char_size),
            ("climb_speed", self.climb_speed),
            ("accel", self.accel),
            ("x_vel_max", self.x_vel_max),
            ("margin", self.margin),
            ("climb_clearance", self.climb_clearance),
            ("stuck_escape_time", self.stuck_escape_time),
            ("arrival_tolerance", self.arrival_tolerance),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(LocomotionError::InvalidTuning {
                    field,
                    value,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(LocomotionError::InvalidTuning {
                    field,
                    value,
                    reason: "must not be negative",
                });
            }
        }

        // Zero accel is tolerated (never brakes early); these must move something.
        let positive = [
            ("char_size", self.char_size),
            ("climb_speed", self.climb_speed),
            ("climb_clearance", self.climb_clearance),
            ("arrival_tolerance", self.arrival_tolerance),
        ];
        for (field, value) in positive {
            if value == 0.0 {
                return Err(LocomotionError::InvalidTuning {
                    field,
                    value,
                    reason: "must be positive",
                });
            }
        }

        Ok(())
    }
}
