//! Movement domain: contact tracking from physics collision messages.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    Avatar, ContactTracker, CoverObject, ObstacleCategory, SupportObstacle, WordBlock,
};

pub(crate) fn track_support_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut avatar_query: Query<&mut ContactTracker, With<Avatar>>,
    obstacle_query: Query<(Option<&WordBlock>, Has<CoverObject>, Option<&ColliderAabb>)>,
) {
    // Handle collision starts - obstacle touches the avatar
    for event in collision_start_events.read() {
        let (avatar_entity, other) = if avatar_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if avatar_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        let Ok((block, is_cover, aabb)) = obstacle_query.get(other) else {
            continue;
        };
        let Ok(mut contacts) = avatar_query.get_mut(avatar_entity) else {
            continue;
        };

        let category = ObstacleCategory::classify(block.is_some(), is_cover);
        if category == ObstacleCategory::Cover {
            debug!("Avatar {:?} came into contact with cover object {:?}", avatar_entity, other);
        }

        let obstacle = SupportObstacle {
            id: other.into(),
            category,
            top: aabb.map(|aabb| aabb.max.y).unwrap_or_default(),
            content: block.map(|block| block.content.clone()).unwrap_or_default(),
        };
        let (content, top) = (obstacle.content.clone(), obstacle.top);
        if contacts.on_enter_contact(obstacle) {
            debug!(
                "Word block '{}' in contact (top={}), {} tracked",
                content,
                top,
                contacts.len()
            );
        }
    }

    // Handle collision ends - obstacle leaves the avatar
    for event in collision_end_events.read() {
        let (avatar_entity, other) = if avatar_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if avatar_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if obstacle_query.get(other).is_ok_and(|(_, is_cover, _)| is_cover) {
            debug!("Avatar {:?} exited contact with cover object {:?}", avatar_entity, other);
        }

        let Ok(mut contacts) = avatar_query.get_mut(avatar_entity) else {
            continue;
        };
        if contacts.on_exit_contact(other.into()) {
            debug!("Obstacle {:?} left contact, {} tracked", other, contacts.len());
        }
    }
}

/// Keep cached top extents in step with moving blocks.
pub(crate) fn refresh_obstacle_tops(
    moved_blocks: Query<(Entity, &ColliderAabb), (With<WordBlock>, Changed<ColliderAabb>)>,
    mut avatar_query: Query<&mut ContactTracker, With<Avatar>>,
) {
    if moved_blocks.is_empty() {
        return;
    }

    for mut contacts in &mut avatar_query {
        for (entity, aabb) in &moved_blocks {
            let id = entity.into();
            if contacts.contains(id) {
                contacts.refresh_top(id, aabb.max.y);
            }
        }
    }
}
