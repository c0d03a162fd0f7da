//! Movement domain: applying external orders and ticking the controller.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{
    AvatarSpawned, CameraBounds, ClimbFinished, ClimbStarted, DestinationOrder, LightKeyEdge,
    ReadingEvent, SpawnRootAssigned,
};
use crate::movement::{
    Avatar, BodySample, ClimbTransition, ContactTracker, Facing, MotionController, TickInputs,
    TickStatus,
};
use crate::sprites::PresentationState;

/// Route messages from collaborators into every avatar's controller.
pub(crate) fn apply_avatar_orders(
    mut spawn_roots: MessageReader<SpawnRootAssigned>,
    mut orders: MessageReader<DestinationOrder>,
    mut reading: MessageReader<ReadingEvent>,
    mut light_keys: MessageReader<LightKeyEdge>,
    mut query: Query<&mut MotionController, With<Avatar>>,
) {
    for assigned in spawn_roots.read() {
        for mut controller in &mut query {
            controller.assign_spawn_root(assigned.root);
        }
        debug!("Spawn root assigned: {:?}", assigned.root);
    }

    for order in orders.read() {
        for mut controller in &mut query {
            controller.post_destination(order.destination);
        }
        debug!("Destination posted: {:?}", order.destination);
    }

    for event in reading.read() {
        let facing = match event {
            ReadingEvent::CorrectKeyPressed => Some(Facing::Right),
            ReadingEvent::CharacterDeleted => Some(Facing::Left),
            ReadingEvent::IncorrectKeyPressed => None,
        };
        debug!("Reading event {:?}", event);

        if let Some(facing) = facing {
            for mut controller in &mut query {
                controller.face(facing);
            }
        }
    }

    for edge in light_keys.read() {
        let held = *edge == LightKeyEdge::Pressed;
        for mut controller in &mut query {
            controller.set_light_held(held);
        }
        debug!("Light {}", if held { "on" } else { "off" });
    }
}

pub(crate) fn drive_avatar(
    mut commands: Commands,
    time: Res<Time>,
    bounds: Option<Res<CameraBounds>>,
    mut query: Query<
        (
            Entity,
            &mut MotionController,
            &ContactTracker,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut PresentationState,
            Option<&ColliderAabb>,
        ),
        With<Avatar>,
    >,
    mut spawned_events: MessageWriter<AvatarSpawned>,
    mut climb_started_events: MessageWriter<ClimbStarted>,
    mut climb_finished_events: MessageWriter<ClimbFinished>,
) {
    // The viewport appears after the first camera update.
    let Some(bounds) = bounds else {
        return;
    };
    let dt = time.delta_secs();

    for (
        entity,
        mut controller,
        contacts,
        mut transform,
        mut velocity,
        mut visibility,
        mut presentation,
        aabb,
    ) in &mut query
    {
        let inputs = TickInputs {
            dt,
            view: bounds.range(),
            body: controller.state().spawned.then(|| BodySample {
                position: transform.translation.truncate(),
                velocity: velocity.0,
            }),
            collider_bounds: aabb.map(|aabb| Rect::from_corners(aabb.min, aabb.max)),
        };

        let output = controller.tick(&inputs, contacts);

        match output.status {
            TickStatus::Inert => continue,
            TickStatus::Spawned => {
                transform.translation = output.position.extend(transform.translation.z);
                *visibility = Visibility::Visible;
                commands.entity(entity).remove::<RigidBodyDisabled>();
                spawned_events.write(AvatarSpawned {
                    avatar: entity,
                    position: output.position,
                });
            }
            TickStatus::Frozen | TickStatus::Active => {}
        }

        velocity.0 = output.velocity;
        presentation.0 = output.presentation;

        match output.climb {
            Some(ClimbTransition::Started { extent, cause }) => {
                climb_started_events.write(ClimbStarted {
                    avatar: entity,
                    extent,
                    cause,
                });
            }
            Some(ClimbTransition::Finished) => {
                climb_finished_events.write(ClimbFinished { avatar: entity });
            }
            None => {}
        }
    }
}
