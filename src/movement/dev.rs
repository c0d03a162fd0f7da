//! Movement domain: debug-only test level and mouse destinations.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::{DestinationOrder, SpawnRootAssigned};
use crate::movement::{CoverObject, GameLayer, Ground, LocomotionTuning, WordBlock};

const LEVEL_SEED: u64 = 0x5eed_b10c;
const FLOOR_TOP: f32 = 40.0;
const WORDS: [&str; 8] = ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"];

pub(crate) fn spawn_test_level(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    mut spawn_roots: MessageWriter<SpawnRootAssigned>,
    mut orders: MessageWriter<DestinationOrder>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let block_color = Color::srgb(0.5, 0.4, 0.3);
    let cover_color = Color::srgba(0.2, 0.3, 0.5, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Avatar]);
    let block_layers = CollisionLayers::new(GameLayer::WordBlock, [GameLayer::Avatar]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(2000.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(640.0, FLOOR_TOP - 20.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(2000.0, 40.0),
        ground_layers,
    ));

    // A row of word blocks with seeded heights, one or two blocks tall.
    let mut rng = ChaCha8Rng::seed_from_u64(LEVEL_SEED);
    let block_height = tuning.char_size * 0.5;
    let mut x = 360.0;
    for word in WORDS {
        let width = 24.0 + word.len() as f32 * 14.0;
        let height = block_height * rng.random_range(1..=2) as f32;
        commands.spawn((
            WordBlock {
                content: word.to_string(),
            },
            Sprite {
                color: block_color,
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_xyz(x + width / 2.0, FLOOR_TOP + height / 2.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, height),
            block_layers,
        ));
        x += width + tuning.margin * rng.random_range(2.0..12.0);
    }

    // Cover object sensor near the start
    commands.spawn((
        CoverObject,
        Sprite {
            color: cover_color,
            custom_size: Some(Vec2::new(80.0, 120.0)),
            ..default()
        },
        Transform::from_xyz(200.0, FLOOR_TOP + 60.0, 0.5),
        RigidBody::Static,
        Collider::rectangle(80.0, 120.0),
        Sensor,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Avatar]),
    ));

    spawn_roots.write(SpawnRootAssigned {
        root: Vec2::new(80.0, FLOOR_TOP),
    });
    orders.write(DestinationOrder {
        destination: Vec2::new(x + 40.0, FLOOR_TOP),
    });
    info!("Test level spawned with {} word blocks", WORDS.len());
}

/// Left click posts a destination override at the cursor.
pub(crate) fn click_to_walk(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut orders: MessageWriter<DestinationOrder>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor) = windows.iter().next().and_then(|w| w.cursor_position()) else {
        return;
    };
    let Some((camera, transform)) = cameras.iter().next() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(transform, cursor) else {
        return;
    };

    orders.write(DestinationOrder { destination: world });
}
