//! Core domain: camera setup and viewport tracking.

use bevy::prelude::*;

use crate::core::resources::CameraBounds;
use crate::movement::LocomotionError;

/// Where the camera looks; the play field lives at non-negative x.
pub const VIEW_CENTER: Vec2 = Vec2::new(640.0, 300.0);

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(VIEW_CENTER.x, VIEW_CENTER.y, 0.0)));
}

/// Fail startup when no camera can provide the visible range.
pub(crate) fn verify_viewport(cameras: Query<(), With<Camera2d>>) -> Result {
    if cameras.is_empty() {
        error!("No Camera2d in the world; avatar freeze logic cannot run");
        return Err(LocomotionError::MissingViewport.into());
    }
    Ok(())
}

pub(crate) fn update_camera_bounds(
    mut commands: Commands,
    cameras: Query<(&GlobalTransform, &Projection), With<Camera2d>>,
    bounds: Option<ResMut<CameraBounds>>,
) {
    let Some((transform, projection)) = cameras.iter().next() else {
        return;
    };
    let Projection::Orthographic(ortho) = projection else {
        return;
    };

    let center_x = transform.translation().x;
    let next = CameraBounds {
        x_min: center_x + ortho.area.min.x,
        x_max: center_x + ortho.area.max.x,
    };

    match bounds {
        Some(mut bounds) => {
            if *bounds != next {
                *bounds = next;
            }
        }
        None => {
            info!("Camera bounds available: [{}, {}]", next.x_min, next.x_max);
            commands.insert_resource(next);
        }
    }
}
