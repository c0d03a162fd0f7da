//! Core domain: camera, viewport bounds and cross-component messages.

mod events;
mod resources;
mod systems;

pub use events::{
    AvatarSpawned, ClimbFinished, ClimbStarted, DestinationOrder, LightKeyEdge, ReadingEvent,
    SpawnRootAssigned,
};
pub use resources::CameraBounds;

use bevy::prelude::*;

use crate::core::systems::{setup_camera, update_camera_bounds, verify_viewport};

/// Ordering of the per-frame pipeline: inputs land before the avatar ticks.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Viewport,
    Contacts,
    Commands,
    Tick,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ReadingEvent>()
            .add_message::<LightKeyEdge>()
            .add_message::<DestinationOrder>()
            .add_message::<SpawnRootAssigned>()
            .add_message::<AvatarSpawned>()
            .add_message::<ClimbStarted>()
            .add_message::<ClimbFinished>()
            .configure_sets(
                Update,
                (
                    FrameSet::Viewport,
                    FrameSet::Contacts,
                    FrameSet::Commands,
                    FrameSet::Tick,
                    FrameSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(PostStartup, verify_viewport)
            .add_systems(Update, update_camera_bounds.in_set(FrameSet::Viewport));
    }
}
