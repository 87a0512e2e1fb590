//! Systems - the physics core
//!
//! - raycast/   - inset hitbox corners and ray spacing
//! - query      - collaborator contracts (obstacle queries, passengers)
//! - kinematic/ - character bodies
//! - platform/  - moving platforms and their riders

pub mod kinematic;
pub mod platform;
pub mod query;
pub mod raycast;
