//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{refresh_obstacle_tops, track_support_contacts};
pub(crate) use input::read_light_key;
pub(crate) use movement::{apply_avatar_orders, drive_avatar};
