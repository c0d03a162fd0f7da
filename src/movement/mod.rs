//! Movement domain: avatar locomotion core and its plugin wiring.

mod bootstrap;
mod components;
mod contact;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod error;
mod resources;
mod stuck;
mod systems;


pub use components::{Avatar, AvatarRig, CoverObject, GameLayer, Ground, WordBlock};
pub use contact::{ContactTracker, ObstacleCategory, ObstacleId, SupportObstacle};
pub use controller::{
    AnimationParams, AvatarState, BodySample, ClimbCause, ClimbTransition, Facing,
    HorizontalRange, LightParams, MotionController, NO_DESTINATION, Presentation, TickInputs,
    TickOutput, TickStatus,
};
pub use error::LocomotionError;
pub use resources::LocomotionTuning;
pub use stuck::{ProgressSample, StuckDetector, StuckVerdict};

use bevy::prelude::*;

use crate::content::ContentLoadSet;
use crate::core::FrameSet;
use crate::movement::bootstrap::{spawn_avatar, verify_avatar_rig};
use crate::movement::systems::{
    apply_avatar_orders, drive_avatar, read_light_key, refresh_obstacle_tops,
    track_support_contacts,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_avatar.after(ContentLoadSet))
            .add_systems(PostStartup, verify_avatar_rig)
            .add_systems(
                Update,
                (track_support_contacts, refresh_obstacle_tops)
                    .chain()
                    .in_set(FrameSet::Contacts),
            )
            .add_systems(
                Update,
                (read_light_key, apply_avatar_orders)
                    .chain()
                    .in_set(FrameSet::Commands),
            )
            .add_systems(Update, drive_avatar.in_set(FrameSet::Tick));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_level.after(ContentLoadSet))
            .add_systems(Update, dev::click_to_walk.in_set(FrameSet::Commands));
    }
}
