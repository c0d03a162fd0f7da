//! Animation parameter sinks and the head light.
//!
//! The avatar publishes one set of named parameters per tick; the head and
//! torso rigs both receive identical copies and derive a coarse pose from them.

use bevy::prelude::*;

use crate::movement::{AnimationParams, Avatar, AvatarRig, LightParams, Presentation};

/// Speeds below this read as standing still.
const WALK_THRESHOLD: f32 = 0.05;

/// Coarse pose derived from the animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvatarPose {
    #[default]
    Idle,
    Walk,
    Climb,
}

impl AvatarPose {
    pub fn from_params(params: &AnimationParams) -> Self {
        if params.in_climb {
            AvatarPose::Climb
        } else if params.speed > WALK_THRESHOLD {
            AvatarPose::Walk
        } else {
            AvatarPose::Idle
        }
    }
}

/// Receives the avatar's animation parameters (one per rig).
#[derive(Component, Debug, Default)]
pub struct AnimationSink {
    pub params: AnimationParams,
    pub pose: AvatarPose,
}

impl AnimationSink {
    /// Store new parameters. Returns `true` if the pose changed.
    pub fn publish(&mut self, params: AnimationParams) -> bool {
        self.params = params;
        let pose = AvatarPose::from_params(&params);
        if pose != self.pose {
            self.pose = pose;
            return true;
        }
        false
    }
}

#[derive(Component, Debug, Default)]
pub struct HeadLight {
    pub light_on: bool,
    pub facing_right: bool,
}

/// Last presentation the avatar produced; `None` on ticks that publish nothing.
#[derive(Component, Debug, Default)]
pub struct PresentationState(pub Option<Presentation>);

pub(crate) fn publish_presentation(
    avatars: Query<(&AvatarRig, &PresentationState), With<Avatar>>,
    mut sinks: Query<(&mut AnimationSink, &mut Sprite)>,
    mut lights: Query<&mut HeadLight>,
) {
    for (rig, state) in &avatars {
        let Some(presentation) = state.0 else {
            continue;
        };

        for part in [rig.head, rig.torso] {
            if let Ok((mut sink, mut sprite)) = sinks.get_mut(part) {
                if sink.publish(presentation.animation) {
                    debug!("Rig {:?} pose -> {:?}", part, sink.pose);
                }
                sprite.flip_x = presentation.flip_x;
            }
        }

        if let Ok(mut light) = lights.get_mut(rig.head_light) {
            let LightParams {
                light_on,
                facing_right,
            } = presentation.light;
            if light.light_on != light_on || light.facing_right != facing_right {
                light.light_on = light_on;
                light.facing_right = facing_right;
            }
        }
    }
}

pub(crate) fn tint_by_pose(mut query: Query<(&AnimationSink, &mut Sprite), Changed<AnimationSink>>) {
    for (sink, mut sprite) in &mut query {
        let alpha = match sink.pose {
            AvatarPose::Idle => 1.0,
            AvatarPose::Walk => 0.9,
            AvatarPose::Climb => 0.75,
        };
        sprite.color.set_alpha(alpha);
    }
}

pub(crate) fn place_head_light(
    mut query: Query<(&HeadLight, &mut Transform, &mut Visibility), Changed<HeadLight>>,
) {
    for (light, mut transform, mut visibility) in &mut query {
        let side = if light.facing_right { 1.0 } else { -1.0 };
        transform.translation.x = transform.translation.x.abs() * side;
        *visibility = if light.light_on {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
