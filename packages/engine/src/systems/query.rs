//! Collaborator contracts consumed by the physics core
//!
//! The core never owns or mutates world geometry. Bodies and platforms are
//! handed an `ObstacleQuery` on every call, and platforms reach riders only
//! through a `PassengerLookup`.

use crate::core::{Axis, Vec2};
use crate::domain::CategoryMask;

/// Stable, non-owning reference to a collider in the query's registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub u32);

impl ColliderHandle {
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Pose of an obstacle as seen by a query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleInfo {
    pub handle: ColliderHandle,
    pub position: Vec2,
    pub half_extents: Vec2,
}

impl ObstacleInfo {
    #[inline]
    pub fn half_extent_along(&self, axis: Axis) -> f32 {
        self.half_extents.along(axis)
    }
}

/// One ray intersection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec2,
    pub collider: ColliderHandle,
}

/// Read-only spatial queries against world geometry.
///
/// Implementations must be pure with respect to the caller: no query may
/// change what a later query in the same tick observes.
pub trait ObstacleQuery {
    /// A collider of `filter` overlapping the box spanned by two diagonal
    /// corners, preferring the deepest overlap.
    fn overlap_region(&self, a: Vec2, b: Vec2, filter: CategoryMask) -> Option<ObstacleInfo>;

    /// Every collider of `filter` overlapping the box, deepest overlap first.
    /// Queries that can only report one collider fall back to `overlap_region`.
    fn overlap_all(&self, a: Vec2, b: Vec2, filter: CategoryMask) -> Vec<ObstacleInfo> {
        self.overlap_region(a, b, filter).into_iter().collect()
    }

    /// Every collider of `filter` hit by the ray, nearest first.
    fn cast_all(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        filter: CategoryMask,
    ) -> Vec<RayHit>;

    /// Current pose of a previously returned collider, if it still exists.
    fn obstacle(&self, handle: ColliderHandle) -> Option<ObstacleInfo>;
}

/// Something a platform can carry.
pub trait Passenger {
    /// Translate by `displacement` without collision checks.
    fn move_by(&mut self, displacement: Vec2);
}

/// Resolves ray hits to carriable passengers.
pub trait PassengerLookup {
    fn passenger_mut(&mut self, collider: ColliderHandle) -> Option<&mut dyn Passenger>;
}
