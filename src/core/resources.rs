//! Core domain: shared resources provided to the avatar.

use bevy::prelude::*;

use crate::movement::HorizontalRange;

/// World-space horizontal extent currently visible through the camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub x_min: f32,
    pub x_max: f32,
}

impl CameraBounds {
    pub fn range(&self) -> HorizontalRange {
        HorizontalRange::new(self.x_min, self.x_max)
    }
}
