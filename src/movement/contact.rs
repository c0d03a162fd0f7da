//! Movement domain: live set of support obstacles touching the avatar.

use bevy::prelude::*;

/// Stable handle for an obstacle the tracker refers to but never owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleId(pub u64);

impl From<Entity> for ObstacleId {
    fn from(entity: Entity) -> Self {
        Self(entity.to_bits())
    }
}

/// Physical category an obstacle was tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObstacleCategory {
    /// Word blocks: can interrupt horizontal motion and trigger a climb.
    #[default]
    Support,
    /// Cover objects are sensors; observed elsewhere.
    Cover,
    Other,
}

impl ObstacleCategory {
    /// Category of a collided entity from the markers it carries.
    pub fn classify(word_block: bool, cover: bool) -> Self {
        if word_block {
            ObstacleCategory::Support
        } else if cover {
            ObstacleCategory::Cover
        } else {
            ObstacleCategory::Other
        }
    }
}

/// Snapshot of an obstacle as seen by the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportObstacle {
    pub id: ObstacleId,
    pub category: ObstacleCategory,
    /// Highest surface of the obstacle, world Y.
    pub top: f32,
    /// Opaque payload, passed through for diagnostics.
    pub content: String,
}

impl SupportObstacle {
    pub fn support(id: ObstacleId, top: f32, content: impl Into<String>) -> Self {
        Self {
            id,
            category: ObstacleCategory::Support,
            top,
            content: content.into(),
        }
    }
}

/// Obstacles currently in contact, kept in insertion order.
#[derive(Component, Debug, Default, Clone)]
pub struct ContactTracker {
    contacts: Vec<SupportObstacle>,
}

impl ContactTracker {
    /// Insert an obstacle on enter-contact. Returns `true` if the set changed.
    ///
    /// Only `Support` obstacles participate; re-entering an obstacle that is
    /// already tracked only refreshes its snapshot.
    pub fn on_enter_contact(&mut self, obstacle: SupportObstacle) -> bool {
        if obstacle.category != ObstacleCategory::Support {
            return false;
        }

        if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == obstacle.id) {
            *existing = obstacle;
            return false;
        }

        self.contacts.push(obstacle);
        true
    }

    /// Remove an obstacle on exit-contact. No-op if it is not tracked.
    pub fn on_exit_contact(&mut self, id: ObstacleId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        self.contacts.len() != before
    }

    /// Update the cached top extent of a tracked obstacle (obstacles can move).
    pub fn refresh_top(&mut self, id: ObstacleId, top: f32) {
        if let Some(contact) = self.contacts.iter_mut().find(|c| c.id == id) {
            contact.top = top;
        }
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.contacts.iter().any(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Highest `top` among obstacles rising above `level`, if any.
    pub fn highest_top_above(&self, level: f32) -> Option<f32> {
        self.contacts
            .iter()
            .map(|c| c.top)
            .filter(|top| *top > level)
            .fold(None, |best, top| match best {
                Some(b) if b >= top => Some(b),
                _ => Some(top),
            })
    }

    /// Human-readable listing, e.g. `"0: cat 1: dog "`. Diagnostic only.
    pub fn describe(&self) -> String {
        self.contacts
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}: {} ", i, c.content))
            .collect()
    }
}
