//! KinematicBody - character movement against axis-aligned obstacles
//!
//! One `update` per fixed tick:
//! gravity -> friction -> integrate -> moving-obstacle transfer -> input
//! -> resolve (above, below, left, right) -> write back -> cache edges.
//!
//! Resolution is sequential: a ceiling or floor snap changes y before the
//! wall tests run.

mod body;
mod step;

pub use body::{Contacts, KinematicBody, ObstacleAnchor};
