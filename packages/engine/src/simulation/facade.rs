use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::{BodyConfig, PhysicsSettings, PlatformConfig};
use crate::systems::kinematic::KinematicBody;
use crate::systems::query::ColliderHandle;

use super::perf_stats::PerfStats;
use super::WorldCore;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// JS handle to the simulation. Entity ids are plain `u32`s.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Native access to the wrapped world (tests, tools)
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }

    fn body(&self, id: u32) -> Option<&KinematicBody> {
        self.core.character(ColliderHandle(id))
    }

    fn with_body(&mut self, id: u32, f: impl FnOnce(&mut KinematicBody)) -> bool {
        match self.core.character_mut(ColliderHandle(id)) {
            Some(body) => {
                f(body);
                true
            }
            None => false,
        }
    }
}

#[wasm_bindgen]
impl World {
    #[wasm_bindgen(constructor)]
    pub fn new() -> World {
        World { core: WorldCore::new() }
    }

    /// Build a world from a scene description (see `SceneDesc`)
    pub fn from_scene_json(json: &str) -> Result<World, JsValue> {
        let mut core = WorldCore::new();
        core.load_scene_json(json).map_err(js_error)?;
        Ok(World { core })
    }

    pub fn load_scene_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_scene_json(json).map_err(js_error)
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = PhysicsSettings::from_json(json).map_err(js_error)?;
        self.core.set_settings(settings).map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn character_count(&self) -> u32 { self.core.character_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn platform_count(&self) -> u32 { self.core.platform_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn collider_count(&self) -> u32 { self.core.obstacles().len() as u32 }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === ENTITIES ===

    pub fn add_obstacle(&mut self, x: f32, y: f32, half_width: f32, half_height: f32) -> Result<u32, JsValue> {
        self.core
            .add_obstacle(Vec2::new(x, y), Vec2::new(half_width, half_height))
            .map(|h| h.id())
            .map_err(js_error)
    }

    pub fn remove_obstacle(&mut self, id: u32) -> bool {
        self.core.remove_obstacle(ColliderHandle(id))
    }

    /// Character using the world's gravity setting
    pub fn add_character(&mut self, x: f32, y: f32, half_width: f32, half_height: f32) -> Result<u32, JsValue> {
        let gravity = self.core.settings().gravity;
        self.add_character_with_gravity(x, y, half_width, half_height, gravity)
    }

    pub fn add_character_with_gravity(
        &mut self,
        x: f32,
        y: f32,
        half_width: f32,
        half_height: f32,
        gravity_acceleration: f32,
    ) -> Result<u32, JsValue> {
        let config = BodyConfig::new(half_width, half_height, gravity_acceleration);
        self.core
            .add_character(Vec2::new(x, y), &config)
            .map(|h| h.id())
            .map_err(js_error)
    }

    pub fn remove_character(&mut self, id: u32) -> bool {
        self.core.remove_character(ColliderHandle(id))
    }

    pub fn add_platform(
        &mut self,
        x: f32,
        y: f32,
        half_width: f32,
        half_height: f32,
        stops: Vec<f32>,
        speed: f32,
        wait_ticks: u32,
    ) -> Result<u32, JsValue> {
        let config = PlatformConfig { half_width, half_height, stops, speed, wait_ticks };
        self.core
            .add_platform(Vec2::new(x, y), &config)
            .map(|h| h.id())
            .map_err(js_error)
    }

    pub fn remove_platform(&mut self, id: u32) -> bool {
        self.core.remove_platform(ColliderHandle(id))
    }

    /// Platform height, NaN for unknown ids
    pub fn platform_y(&self, id: u32) -> f32 {
        self.core.platform_position(ColliderHandle(id)).map_or(f32::NAN, |p| p.y)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    // === CHARACTER STATE ===

    /// NaN for unknown ids
    pub fn character_x(&self, id: u32) -> f32 {
        self.body(id).map_or(f32::NAN, |b| b.position().x)
    }

    pub fn character_y(&self, id: u32) -> f32 {
        self.body(id).map_or(f32::NAN, |b| b.position().y)
    }

    pub fn character_velocity_x(&self, id: u32) -> f32 {
        self.body(id).map_or(f32::NAN, |b| b.velocity().x)
    }

    pub fn character_velocity_y(&self, id: u32) -> f32 {
        self.body(id).map_or(f32::NAN, |b| b.velocity().y)
    }

    /// Interleaved x, y of every character in insertion order
    pub fn character_positions(&self) -> js_sys::Float32Array {
        let mut data = Vec::with_capacity(self.core.character_count() * 2);
        for id in self.core.character_ids() {
            if let Some(body) = self.core.character(id) {
                data.push(body.position().x);
                data.push(body.position().y);
            }
        }
        js_sys::Float32Array::from(&data[..])
    }

    pub fn is_on_ground(&self, id: u32) -> bool {
        self.body(id).is_some_and(|b| b.is_on_ground())
    }

    pub fn is_on_ceiling(&self, id: u32) -> bool {
        self.body(id).is_some_and(|b| b.is_on_ceiling())
    }

    pub fn is_on_left_wall(&self, id: u32) -> bool {
        self.body(id).is_some_and(|b| b.is_on_left_wall())
    }

    pub fn is_on_right_wall(&self, id: u32) -> bool {
        self.body(id).is_some_and(|b| b.is_on_right_wall())
    }

    pub fn is_on_wall(&self, id: u32) -> bool {
        self.body(id).is_some_and(|b| b.is_on_wall())
    }

    // === CHARACTER CONTROL ===
    // Mutators return false for unknown ids.

    pub fn add_velocity(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.with_body(id, |b| b.add_velocity(x, y))
    }

    pub fn add_input_velocity(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.with_body(id, |b| b.add_input_velocity(x, y))
    }

    pub fn set_character_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.with_body(id, |b| b.set_position(Vec2::new(x, y)))
    }

    pub fn set_apply_gravity(&mut self, id: u32, apply: bool) -> bool {
        self.with_body(id, |b| b.set_apply_gravity(apply))
    }

    pub fn set_gravity_acceleration(&mut self, id: u32, gravity: f32) -> bool {
        self.with_body(id, |b| b.set_gravity_acceleration(gravity))
    }

    pub fn set_is_stuck_to_ceiling(&mut self, id: u32, stuck: bool) -> bool {
        self.with_body(id, |b| b.set_is_stuck_to_ceiling(stuck))
    }
}
