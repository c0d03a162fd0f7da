//! Movement domain: keyboard adapter producing debounced light-key edges.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::LightKeyEdge;

pub(crate) fn read_light_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut edges: MessageWriter<LightKeyEdge>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        edges.write(LightKeyEdge::Pressed);
    }
    if keyboard.just_released(KeyCode::Space) {
        edges.write(LightKeyEdge::Released);
    }
}
