//! Movement domain: avatar bootstrap from loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    Avatar, AvatarRig, ContactTracker, GameLayer, LocomotionError, LocomotionTuning,
    MotionController,
};
use crate::sprites::{AnimationSink, HeadLight, PresentationState};

/// Spawn the inert avatar with its presentation sinks wired explicitly.
/// It stays hidden and physics-disabled until a spawn root arrives.
pub(crate) fn spawn_avatar(mut commands: Commands, tuning: Res<LocomotionTuning>) -> Result {
    let controller = MotionController::initialize(tuning.clone())?;
    let size = tuning.char_size;
    let body_size = Vec2::new(size * 0.5, size);

    let head = commands
        .spawn((
            Name::new("AvatarHead"),
            AnimationSink::default(),
            Sprite {
                color: Color::srgb(0.95, 0.9, 0.8),
                custom_size: Some(Vec2::splat(size * 0.4)),
                ..default()
            },
            Transform::from_xyz(0.0, size * 0.3, 0.2),
        ))
        .id();

    let torso = commands
        .spawn((
            Name::new("AvatarTorso"),
            AnimationSink::default(),
            Sprite {
                color: Color::srgb(0.4, 0.45, 0.6),
                custom_size: Some(Vec2::new(size * 0.45, size * 0.5)),
                ..default()
            },
            Transform::from_xyz(0.0, -size * 0.15, 0.1),
        ))
        .id();

    let head_light = commands
        .spawn((
            Name::new("AvatarHeadLight"),
            HeadLight::default(),
            Sprite {
                color: Color::srgba(1.0, 0.95, 0.6, 0.5),
                custom_size: Some(Vec2::new(size * 0.6, size * 0.2)),
                ..default()
            },
            Transform::from_xyz(size * 0.4, size * 0.3, 0.3),
            Visibility::Hidden,
        ))
        .id();

    commands
        .spawn((
            // Identity & Movement
            (
                Name::new("Avatar"),
                Avatar,
                controller,
                ContactTracker::default(),
                AvatarRig {
                    head,
                    torso,
                    head_light,
                },
                PresentationState::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgba(0.0, 0.0, 0.0, 0.0),
                custom_size: Some(body_size),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            Visibility::Hidden,
            // Physics
            (
                RigidBody::Dynamic,
                RigidBodyDisabled,
                Collider::rectangle(body_size.x, body_size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Avatar,
                    [GameLayer::Ground, GameLayer::WordBlock, GameLayer::Sensor],
                ),
            ),
        ))
        .add_children(&[head, torso, head_light]);

    info!("Avatar bootstrapped (char_size={}), waiting for a spawn root", size);
    Ok(())
}

/// Every avatar must carry a rig whose entities are real sinks.
pub(crate) fn verify_avatar_rig(
    avatars: Query<(Entity, Option<&AvatarRig>), With<Avatar>>,
    sinks: Query<(), With<AnimationSink>>,
    lights: Query<(), With<HeadLight>>,
) -> Result {
    for (entity, rig) in &avatars {
        let wired = rig.is_some_and(|rig| {
            sinks.contains(rig.head) && sinks.contains(rig.torso) && lights.contains(rig.head_light)
        });
        if !wired {
            error!("Avatar {:?} is missing its presentation rig", entity);
            return Err(LocomotionError::MissingRig.into());
        }
    }
    Ok(())
}
