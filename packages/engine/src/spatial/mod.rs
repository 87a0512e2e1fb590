//! Spatial - in-memory collider registry answering obstacle queries

mod obstacles;

pub use obstacles::{Collider, ObstacleWorld};
