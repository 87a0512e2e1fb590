use crate::core::Vec2;
use crate::domain::config::check_half_extents;
use crate::domain::{BodyConfig, ConfigError, PlatformConfig, CAT_CHARACTER, CAT_OBSTACLE};
use crate::systems::kinematic::KinematicBody;
use crate::systems::platform::{PlatformTransport, StopSchedule};
use crate::systems::query::ColliderHandle;

use super::{Character, Platform, WorldCore};

pub(super) fn add_obstacle(
    world: &mut WorldCore,
    position: Vec2,
    half_extents: Vec2,
) -> Result<ColliderHandle, ConfigError> {
    if let Err(err) = check_half_extents(half_extents.x, half_extents.y) {
        engine_warn!("obstacle at ({}, {}) rejected: {}", position.x, position.y, err);
        return Err(err);
    }
    Ok(world.obstacles.add_collider(position, half_extents, CAT_OBSTACLE))
}

pub(super) fn remove_obstacle(world: &mut WorldCore, id: ColliderHandle) -> bool {
    if is_character(world, id) || is_platform(world, id) {
        return false;
    }
    world.obstacles.remove_collider(id)
}

pub(super) fn add_character(
    world: &mut WorldCore,
    position: Vec2,
    config: &BodyConfig,
) -> Result<ColliderHandle, ConfigError> {
    let body = match KinematicBody::new(position, config, world.settings.skin_width) {
        Ok(body) => body,
        Err(err) => {
            engine_warn!("character at ({}, {}) rejected: {}", position.x, position.y, err);
            return Err(err);
        }
    };
    let collider = world.obstacles.add_collider(position, config.half_extents(), CAT_CHARACTER);
    world.characters.push(Character { collider, body });
    Ok(collider)
}

pub(super) fn remove_character(world: &mut WorldCore, id: ColliderHandle) -> bool {
    match world.characters.iter().position(|c| c.collider == id) {
        Some(idx) => {
            world.characters.remove(idx);
            world.obstacles.remove_collider(id);
            true
        }
        None => false,
    }
}

pub(super) fn add_platform(
    world: &mut WorldCore,
    position: Vec2,
    config: &PlatformConfig,
) -> Result<ColliderHandle, ConfigError> {
    let transport = match PlatformTransport::new(
        position,
        config.half_extents(),
        world.settings.skin_width,
        world.settings.platform_ray_count,
    ) {
        Ok(transport) => transport,
        Err(err) => {
            engine_warn!("platform at ({}, {}) rejected: {}", position.x, position.y, err);
            return Err(err);
        }
    };
    let collider = world.obstacles.add_collider(position, config.half_extents(), CAT_OBSTACLE);
    world.platforms.push(Platform {
        collider,
        transport,
        schedule: StopSchedule::from_config(config),
    });
    Ok(collider)
}

pub(super) fn remove_platform(world: &mut WorldCore, id: ColliderHandle) -> bool {
    match world.platforms.iter().position(|p| p.collider == id) {
        Some(idx) => {
            world.platforms.remove(idx);
            world.obstacles.remove_collider(id);
            true
        }
        None => false,
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    world.obstacles.clear();
    world.characters.clear();
    world.platforms.clear();
    world.frame = 0;
    world.perf_stats.reset();
}

fn is_character(world: &WorldCore, id: ColliderHandle) -> bool {
    world.characters.iter().any(|c| c.collider == id)
}

fn is_platform(world: &WorldCore, id: ColliderHandle) -> bool {
    world.platforms.iter().any(|p| p.collider == id)
}
