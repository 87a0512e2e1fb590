//! Platformer Physics - kinematic character bodies and moving platforms
//!
//! Architecture:
//! - core/        - math and logging
//! - domain/      - configuration, categories, scene data
//! - spatial/     - obstacle world (reference collision query)
//! - systems/     - raycast bounds, kinematic bodies, platform transport
//! - simulation/  - world orchestration and the wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel body phase in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("platformer physics {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{BodyConfig, ConfigError, PhysicsSettings, PlatformConfig, SceneDesc};
pub use simulation::{PerfStats, World, WorldCore};
pub use spatial::ObstacleWorld;
pub use systems::kinematic::{Contacts, KinematicBody};
pub use systems::platform::{PassengerMovement, PlatformTransport, StopSchedule};
pub use systems::query::{ColliderHandle, ObstacleQuery, Passenger, PassengerLookup};
pub use systems::raycast::RaycastBounds;
