//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors the avatar walks on
    Ground,
    /// Word blocks: supports the avatar can climb
    WordBlock,
    /// The avatar itself
    Avatar,
    /// Sensors (cover objects) - should not block movement
    Sensor,
}

/// Marker for the controlled avatar
#[derive(Component, Debug)]
pub struct Avatar;

/// A climbable block carrying a word of the reading game
#[derive(Component, Debug, Clone)]
pub struct WordBlock {
    pub content: String,
}

/// Sensor the avatar can walk behind; only observed, never climbed
#[derive(Component, Debug)]
pub struct CoverObject;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Presentation sinks wired to the avatar at spawn time.
#[derive(Component, Debug, Clone, Copy)]
pub struct AvatarRig {
    pub head: Entity,
    pub torso: Entity,
    pub head_light: Entity,
}
