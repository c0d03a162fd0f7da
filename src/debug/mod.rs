//! Debug overlay listing the word blocks the avatar is touching.
//!
//! F3 toggles the readout. The text is rebuilt only when the contact set
//! changes while the readout is visible.

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::movement::{Avatar, ContactTracker};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the contact readout is visible
    pub show_contacts: bool,
}

/// Marker for the contact readout text
#[derive(Component, Debug)]
pub struct ContactReadout;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_contact_readout)
            .add_systems(
                Update,
                (toggle_contact_readout, update_contact_readout)
                    .chain()
                    .in_set(FrameSet::Present),
            );
    }
}

fn spawn_contact_readout(mut commands: Commands) {
    commands.spawn((
        ContactReadout,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

fn toggle_contact_readout(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut readout: Query<&mut Visibility, With<ContactReadout>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    state.show_contacts = !state.show_contacts;
    for mut visibility in &mut readout {
        *visibility = if state.show_contacts {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    info!("Contact readout {}", if state.show_contacts { "on" } else { "off" });
}

fn update_contact_readout(
    state: Res<DebugState>,
    avatars: Query<Ref<ContactTracker>, With<Avatar>>,
    mut readout: Query<&mut Text, With<ContactReadout>>,
) {
    if !state.show_contacts {
        return;
    }

    for contacts in &avatars {
        if !contacts.is_changed() && !state.is_changed() {
            continue;
        }
        let line = format!("contacts ({}): {}", contacts.len(), contacts.describe());
        for mut text in &mut readout {
            text.0 = line.clone();
        }
    }
}
