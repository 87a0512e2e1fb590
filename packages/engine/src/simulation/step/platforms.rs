use crate::spatial::ObstacleWorld;
use crate::systems::query::{ColliderHandle, Passenger, PassengerLookup};

use super::{Character, WorldCore};

/// Characters seen as platform passengers, looked up by collider
struct Riders<'a> {
    characters: &'a mut [Character],
}

impl PassengerLookup for Riders<'_> {
    fn passenger_mut(&mut self, handle: ColliderHandle) -> Option<&mut dyn Passenger> {
        self.characters
            .iter_mut()
            .find(|c| c.collider == handle)
            .map(|c| &mut c.body as &mut dyn Passenger)
    }
}

/// Move every platform one tick, carrying its riders. Returns the number of
/// riders carried.
pub(super) fn step_platforms(world: &mut WorldCore) -> u32 {
    let WorldCore { obstacles, characters, platforms, .. } = world;
    let mut carried = 0u32;

    for platform in platforms.iter_mut() {
        let velocity_y = platform.schedule.next_velocity(platform.transport.position().y);

        // A parked platform still runs `update` so last tick's movements are dropped.
        let found = platform.transport.update(
            velocity_y,
            &*obstacles,
            &mut Riders { characters: &mut characters[..] },
        );
        if velocity_y == 0.0 {
            continue;
        }
        sync_character_colliders(obstacles, characters);

        obstacles.set_position(platform.collider, platform.transport.position());

        platform.transport.after_update(&mut Riders { characters: &mut characters[..] });
        sync_character_colliders(obstacles, characters);

        carried += found as u32;
    }

    carried
}

/// Copy body positions onto their colliders
pub(super) fn sync_character_colliders(obstacles: &mut ObstacleWorld, characters: &[Character]) {
    for character in characters {
        obstacles.set_position(character.collider, character.body.position());
    }
}
