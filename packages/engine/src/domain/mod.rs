//! Domain - configuration, categories and scene data

pub mod category;
pub mod config;
pub mod error;
pub mod scene;
pub mod settings;

pub use category::{CategoryMask, CAT_CHARACTER, CAT_OBSTACLE};
pub use config::{BodyConfig, PlatformConfig};
pub use error::ConfigError;
pub use scene::SceneDesc;
pub use settings::PhysicsSettings;
