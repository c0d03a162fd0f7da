//! Core domain: messages exchanged between the avatar and its collaborators.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::ClimbCause;

/// Feedback from the reading game driving the avatar's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingEvent {
    CorrectKeyPressed,
    IncorrectKeyPressed,
    CharacterDeleted,
}

impl Message for ReadingEvent {}

/// Debounced edge of the head-light key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKeyEdge {
    Pressed,
    Released,
}

impl Message for LightKeyEdge {}

/// Redirects the avatar; consumed on its next tick
#[derive(Debug, Clone, Copy)]
pub struct DestinationOrder {
    pub destination: Vec2,
}

impl Message for DestinationOrder {}

/// A spawn root became available (negative x means unassigned)
#[derive(Debug, Clone, Copy)]
pub struct SpawnRootAssigned {
    pub root: Vec2,
}

impl Message for SpawnRootAssigned {}

#[derive(Debug)]
pub struct AvatarSpawned {
    pub avatar: Entity,
    pub position: Vec2,
}

impl Message for AvatarSpawned {}

#[derive(Debug)]
pub struct ClimbStarted {
    pub avatar: Entity,
    pub extent: f32,
    pub cause: ClimbCause,
}

impl Message for ClimbStarted {}

#[derive(Debug)]
pub struct ClimbFinished {
    pub avatar: Entity,
}

impl Message for ClimbFinished {}
