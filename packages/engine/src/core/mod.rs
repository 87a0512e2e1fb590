//! Core - math and utilities shared by every system

#[macro_use]
pub mod utils;
pub mod vec2;

pub use vec2::{Axis, Vec2};
