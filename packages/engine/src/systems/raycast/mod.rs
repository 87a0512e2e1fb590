//! Raycast geometry shared by bodies and platforms
//!
//! A hitbox is shrunk by the skin width before sampling so a box resting
//! flush against a surface does not report a hit on the sides it is not
//! pressing into.

mod bounds;

pub use bounds::{EdgeSample, RaySpacing, RaycastBounds, RaycastOrigins, Side};
