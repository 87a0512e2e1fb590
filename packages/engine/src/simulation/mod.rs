//! World - platformer simulation
//!
//! Owns the obstacle world, characters and moving platforms, and runs one
//! fixed tick per `step()`:
//! - platforms first (two-phase passenger carry)
//! - then every character body (in parallel with the `parallel` feature)
//!
//! Entity ids are the collider handles registered in the obstacle world.

use crate::core::Vec2;
use crate::domain::{BodyConfig, ConfigError, PhysicsSettings, PlatformConfig, SceneDesc};
use crate::spatial::ObstacleWorld;
use crate::systems::kinematic::KinematicBody;
use crate::systems::platform::{PlatformTransport, StopSchedule};
use crate::systems::query::ColliderHandle;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/platforms.rs"]
mod platforms;
#[path = "step/characters.rs"]
mod characters;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// A character body and the collider other bodies see it as
pub(crate) struct Character {
    pub(crate) collider: ColliderHandle,
    pub(crate) body: KinematicBody,
}

/// A scheduled moving platform
pub(crate) struct Platform {
    pub(crate) collider: ColliderHandle,
    pub(crate) transport: PlatformTransport,
    pub(crate) schedule: StopSchedule,
}

/// The simulation world
pub struct WorldCore {
    settings: PhysicsSettings,
    obstacles: ObstacleWorld,
    characters: Vec<Character>,
    platforms: Vec<Platform>,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldCore {
    /// Empty world with default settings
    pub fn new() -> Self {
        init::create_world_core(PhysicsSettings::default())
    }

    pub fn with_settings(settings: PhysicsSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(init::create_world_core(settings))
    }

    /// Replace the whole world with the scene. The current world is kept
    /// when any entry is rejected.
    pub fn load_scene(&mut self, scene: &SceneDesc) -> Result<(), String> {
        init::load_scene(self, scene)
    }

    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let scene = SceneDesc::from_json(json)?;
        self.load_scene(&scene)
    }

    pub fn settings(&self) -> &PhysicsSettings { &self.settings }

    /// Tick duration, friction and gravity apply from the next step; skin
    /// width and ray count only to entities added afterwards.
    pub fn set_settings(&mut self, settings: PhysicsSettings) -> Result<(), ConfigError> {
        settings::set_settings(self, settings)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn obstacles(&self) -> &ObstacleWorld { &self.obstacles }

    pub fn character_count(&self) -> usize { self.characters.len() }

    pub fn platform_count(&self) -> usize { self.platforms.len() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Static box obstacle
    pub fn add_obstacle(&mut self, position: Vec2, half_extents: Vec2) -> Result<ColliderHandle, ConfigError> {
        commands::add_obstacle(self, position, half_extents)
    }

    /// Remove a static obstacle. Characters and platforms are removed through
    /// their own calls.
    pub fn remove_obstacle(&mut self, id: ColliderHandle) -> bool {
        commands::remove_obstacle(self, id)
    }

    pub fn add_character(&mut self, position: Vec2, config: &BodyConfig) -> Result<ColliderHandle, ConfigError> {
        commands::add_character(self, position, config)
    }

    pub fn remove_character(&mut self, id: ColliderHandle) -> bool {
        commands::remove_character(self, id)
    }

    pub fn add_platform(&mut self, position: Vec2, config: &PlatformConfig) -> Result<ColliderHandle, ConfigError> {
        commands::add_platform(self, position, config)
    }

    pub fn remove_platform(&mut self, id: ColliderHandle) -> bool {
        commands::remove_platform(self, id)
    }

    pub fn character(&self, id: ColliderHandle) -> Option<&KinematicBody> {
        self.characters.iter().find(|c| c.collider == id).map(|c| &c.body)
    }

    /// Mutable body access. Teleports through `set_position` are picked up by
    /// the character's collider on the next step.
    pub fn character_mut(&mut self, id: ColliderHandle) -> Option<&mut KinematicBody> {
        self.characters.iter_mut().find(|c| c.collider == id).map(|c| &mut c.body)
    }

    /// Character ids in insertion order
    pub fn character_ids(&self) -> impl Iterator<Item = ColliderHandle> + '_ {
        self.characters.iter().map(|c| c.collider)
    }

    pub fn platform_position(&self, id: ColliderHandle) -> Option<Vec2> {
        self.platforms.iter().find(|p| p.collider == id).map(|p| p.transport.position())
    }

    /// Remove every entity and reset the frame counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the world by one tick
    pub fn step(&mut self) {
        step::step(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
