//! Sprites module: presentation sinks fed by the avatar controller.
//!
//! This module handles:
//! - Publishing animation parameters to the head and torso rigs
//! - Driving the head light from the light toggle and facing

pub mod animation;

use bevy::prelude::*;

pub use animation::*;

use crate::core::FrameSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (publish_presentation, tint_by_pose, place_head_light)
                .chain()
                .in_set(FrameSet::Present),
        );
    }
}
