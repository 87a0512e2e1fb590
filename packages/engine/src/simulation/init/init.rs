use crate::domain::{PhysicsSettings, SceneDesc};
use crate::spatial::ObstacleWorld;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(settings: PhysicsSettings) -> WorldCore {
    WorldCore {
        settings,
        obstacles: ObstacleWorld::new(),
        characters: Vec::new(),
        platforms: Vec::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Build the scene into a fresh world, then swap it in.
pub(super) fn load_scene(world: &mut WorldCore, scene: &SceneDesc) -> Result<(), String> {
    scene.settings.validate()?;
    let mut fresh = create_world_core(scene.settings);

    for (i, obstacle) in scene.obstacles.iter().enumerate() {
        fresh
            .add_obstacle(obstacle.position, obstacle.half_extents)
            .map_err(|e| format!("obstacle {}: {}", i, e))?;
    }
    for (i, character) in scene.characters.iter().enumerate() {
        fresh
            .add_character(character.position, &character.body)
            .map_err(|e| format!("character {}: {}", i, e))?;
    }
    for (i, platform) in scene.platforms.iter().enumerate() {
        fresh
            .add_platform(platform.position, &platform.platform)
            .map_err(|e| format!("platform {}: {}", i, e))?;
    }

    fresh.perf_enabled = world.perf_enabled;
    *world = fresh;

    engine_log!(
        "scene loaded: {} obstacles, {} characters, {} platforms",
        scene.obstacles.len(),
        scene.characters.len(),
        scene.platforms.len()
    );
    Ok(())
}
