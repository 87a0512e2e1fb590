#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::PhysicsSettings;
use crate::spatial::ObstacleWorld;

use super::platforms::sync_character_colliders;
use super::WorldCore;

/// Integrate every character body against the obstacle world. Returns the
/// total number of contact sides.
pub(super) fn step_characters(world: &mut WorldCore) -> u32 {
    let WorldCore { obstacles, characters, settings, .. } = world;
    let query: &ObstacleWorld = obstacles;
    let settings: &PhysicsSettings = settings;

    // Bodies only read the obstacle world; their colliders are synced after.
    #[cfg(feature = "parallel")]
    let contacts: u32 = characters
        .par_iter_mut()
        .map(|c| c.body.update(query, settings).count())
        .sum();

    #[cfg(not(feature = "parallel"))]
    let contacts: u32 = characters
        .iter_mut()
        .map(|c| c.body.update(query, settings).count())
        .sum();

    sync_character_colliders(obstacles, characters);
    contacts
}
