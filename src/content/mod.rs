//! Content domain: data-driven tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{LOCOMOTION_SCHEMA_VERSION, LocomotionFile};
pub use loader::{ContentLoadError, load_locomotion, parse_locomotion};
pub use validation::{ValidationError, validate_locomotion};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::LocomotionTuning;

pub const LOCOMOTION_PATH: &str = "assets/data/locomotion.ron";

/// Runs before anything reads `LocomotionTuning`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLoadSet;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .add_systems(Startup, load_content.in_set(ContentLoadSet));
    }
}

fn load_content(mut tuning: ResMut<LocomotionTuning>) {
    match load_validated(Path::new(LOCOMOTION_PATH)) {
        Ok(loaded) => {
            info!("Locomotion tuning loaded from {}: {:?}", LOCOMOTION_PATH, loaded);
            *tuning = loaded;
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!("Falling back to default locomotion tuning");
            *tuning = LocomotionTuning::default();
        }
    }
}

/// Load and validate, collecting every problem found.
pub fn load_validated(path: &Path) -> Result<LocomotionTuning, Vec<String>> {
    let file = load_locomotion(path).map_err(|e| vec![e.to_string()])?;

    let errors = validate_locomotion(&file);
    if errors.is_empty() {
        Ok(file.tuning)
    } else {
        Err(errors.iter().map(ToString::to_string).collect())
    }
}
