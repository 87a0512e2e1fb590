use super::characters::step_characters;
use super::platforms::{step_platforms, sync_character_colliders};
use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.colliders = world.obstacles.len() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    // Pick up teleports made through `character_mut` since the last step.
    sync_character_colliders(&mut world.obstacles, &world.characters);

    // === PLATFORMS ===
    // Riders are carried before bodies integrate so a body standing on a
    // platform sees it already in place.
    let t0 = PerfTimer::start_if(perf_on);
    let carried = step_platforms(world);
    if let Some(t0) = t0 {
        world.perf_stats.platforms_ms = t0.elapsed_ms();
        world.perf_stats.passengers_carried = carried;
    }

    // === CHARACTERS ===
    let t0 = PerfTimer::start_if(perf_on);
    let contacts = step_characters(world);
    if let Some(t0) = t0 {
        world.perf_stats.bodies_ms = t0.elapsed_ms();
        world.perf_stats.bodies_updated = world.characters.len() as u32;
        world.perf_stats.contacts = contacts;
    }

    world.frame += 1;

    if let Some(start) = step_start {
        world.perf_stats.step_ms = start.elapsed_ms();
    }
}
