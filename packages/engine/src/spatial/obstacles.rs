use crate::core::{Axis, Vec2};
use crate::domain::category::{matches, CategoryMask};
use crate::systems::query::{ColliderHandle, ObstacleInfo, ObstacleQuery, RayHit};

/// Axis-aligned box registered in the world
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    pub handle: ColliderHandle,
    pub position: Vec2,
    pub half_extents: Vec2,
    pub category: CategoryMask,
}

impl Collider {
    #[inline]
    fn min(&self) -> Vec2 {
        self.position - self.half_extents
    }

    #[inline]
    fn max(&self) -> Vec2 {
        self.position + self.half_extents
    }

    fn info(&self) -> ObstacleInfo {
        ObstacleInfo {
            handle: self.handle,
            position: self.position,
            half_extents: self.half_extents,
        }
    }
}

/// Floor for overlap extents so touching and zero-thickness strips still rank.
const OVERLAP_EPSILON: f32 = 1e-6;

/// Flat list of colliders. Worlds are small (a level's worth of tiles and
/// a handful of characters), so queries scan linearly in insertion order.
pub struct ObstacleWorld {
    colliders: Vec<Collider>,
    next_id: u32,
}

impl ObstacleWorld {
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add_collider(&mut self, position: Vec2, half_extents: Vec2, category: CategoryMask) -> ColliderHandle {
        let handle = ColliderHandle(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.colliders.push(Collider { handle, position, half_extents, category });
        handle
    }

    /// Remove a collider. Keeps insertion order of the rest.
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> bool {
        match self.colliders.iter().position(|c| c.handle == handle) {
            Some(idx) => {
                self.colliders.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn set_position(&mut self, handle: ColliderHandle, position: Vec2) -> bool {
        match self.colliders.iter_mut().find(|c| c.handle == handle) {
            Some(c) => {
                c.position = position;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
        self.next_id = 1;
    }
}

impl Default for ObstacleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Slab test. Returns the entry distance along a unit `dir`, 0 when the
/// origin starts inside the box.
fn ray_box(origin: Vec2, dir: Vec2, min: Vec2, max: Vec2) -> Option<f32> {
    let mut t_enter = 0.0f32;
    let mut t_exit = f32::INFINITY;

    for axis in [Axis::X, Axis::Y] {
        let o = origin.along(axis);
        let d = dir.along(axis);
        let lo = min.along(axis);
        let hi = max.along(axis);

        if d.abs() < 1e-8 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t1 = (lo - o) * inv;
        let mut t2 = (hi - o) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        t_enter = t_enter.max(t1);
        t_exit = t_exit.min(t2);
        if t_enter > t_exit {
            return None;
        }
    }

    Some(t_enter)
}

impl ObstacleQuery for ObstacleWorld {
    fn overlap_region(&self, a: Vec2, b: Vec2, filter: CategoryMask) -> Option<ObstacleInfo> {
        self.overlap_all(a, b, filter).into_iter().next()
    }

    fn overlap_all(&self, a: Vec2, b: Vec2, filter: CategoryMask) -> Vec<ObstacleInfo> {
        let lo = a.min(b);
        let hi = a.max(b);

        let mut found: Vec<(ObstacleInfo, f32)> = self
            .colliders
            .iter()
            .filter(|c| matches(c.category, filter))
            .filter_map(|c| {
                let (cmin, cmax) = (c.min(), c.max());
                let ox = hi.x.min(cmax.x) - lo.x.max(cmin.x);
                let oy = hi.y.min(cmax.y) - lo.y.max(cmin.y);
                if ox < 0.0 || oy < 0.0 {
                    return None;
                }
                Some((c.info(), ox.max(OVERLAP_EPSILON) * oy.max(OVERLAP_EPSILON)))
            })
            .collect();

        // Deepest first; stable, so first registered on ties.
        found.sort_by(|a, b| b.1.total_cmp(&a.1));
        found.into_iter().map(|(info, _)| info).collect()
    }

    fn cast_all(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        filter: CategoryMask,
    ) -> Vec<RayHit> {
        let dir = direction.normalize();
        if dir == Vec2::ZERO || !(max_distance >= 0.0) {
            return Vec::new();
        }

        let mut hits: Vec<RayHit> = self
            .colliders
            .iter()
            .filter(|c| matches(c.category, filter))
            .filter_map(|c| {
                let t = ray_box(origin, dir, c.min(), c.max())?;
                (t <= max_distance).then(|| RayHit {
                    distance: t,
                    point: origin + dir * t,
                    collider: c.handle,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn obstacle(&self, handle: ColliderHandle) -> Option<ObstacleInfo> {
        self.get(handle).map(Collider::info)
    }
}
