use crate::core::{Axis, Vec2};
use crate::domain::{PhysicsSettings, CAT_OBSTACLE};
use crate::systems::query::{ObstacleInfo, ObstacleQuery};
use crate::systems::raycast::{EdgeSample, Side};

use super::body::{Contacts, KinematicBody, ObstacleAnchor};

const REACH_EPSILON: f32 = 1e-4;

impl KinematicBody {
    /// Advance one fixed tick and return the new contacts.
    ///
    /// Never fails: a side whose query comes back empty simply does not
    /// collide this tick.
    pub fn update<Q: ObstacleQuery + ?Sized>(&mut self, query: &Q, settings: &PhysicsSettings) -> Contacts {
        let dt = settings.tick_duration;
        let gravity_on = self.apply_gravity && !self.stuck_to_ceiling;

        // 1. Gravity (velocity delta per tick)
        if gravity_on {
            self.velocity.y += self.gravity_acceleration;
        }

        // 2. Friction, from last tick's contacts, persistent velocity only
        let friction = settings.friction_denominator;
        if self.contacts.ground && gravity_on {
            self.velocity.x /= friction;
        }
        if self.contacts.on_wall() {
            self.velocity.y /= friction;
        }

        // 3. Integrate
        let mut next = self.position + self.velocity * dt;
        let motion = (self.velocity + self.input_velocity) * dt;

        // 4. Follow obstacles that moved under / over us since last tick
        next.y += self.moving_obstacle_delta(query);

        // 5. One-tick input
        next += self.input_velocity * dt;

        // 6. Resolve in fixed order against the tentative position
        for side in Side::ORDER {
            self.resolve_side(side, &mut next, motion, query);
        }

        // 7-9. Write back, cache edges, drop input
        self.position = next;
        self.edges = self.bounds.origins(next).edges();
        self.input_velocity = Vec2::zero();

        self.contacts
    }

    /// Vertical displacement of the anchored obstacles since last tick.
    fn moving_obstacle_delta<Q: ObstacleQuery + ?Sized>(&self, query: &Q) -> f32 {
        let moved = |anchor: Option<ObstacleAnchor>| -> f32 {
            anchor
                .and_then(|a| query.obstacle(a.handle).map(|o| o.position.y - a.last_position.y))
                .unwrap_or(0.0)
        };

        let below = moved(self.below);
        let mut above = moved(self.above);
        // A rising ceiling only drags bodies that cling to it.
        if above > 0.0 && !self.stuck_to_ceiling {
            above = 0.0;
        }
        below + above
    }

    /// Whether a hit on `side` counts, given current combined velocity.
    fn admits(&self, side: Side) -> bool {
        let moving = self.velocity + self.input_velocity;
        match side {
            Side::Above => moving.y > 0.0 || self.stuck_to_ceiling,
            Side::Below => moving.y <= 0.0,
            Side::Left => moving.x <= 0.0,
            Side::Right => moving.x >= 0.0,
        }
    }

    /// A hit counts only if the face it presents on `side` is no deeper past
    /// the new edge than this tick's own travel toward it. Deeper overlaps
    /// belong to another side (a wall clipped by the bottom edge while
    /// moving sideways into it).
    fn within_reach(&self, side: Side, edge: &EdgeSample, obstacle: &ObstacleInfo, motion: Vec2) -> bool {
        let o = obstacle.position;
        let ox = obstacle.half_extent_along(Axis::X);
        let oy = obstacle.half_extent_along(Axis::Y);
        let (depth, travel) = match side {
            Side::Above => (edge.start.y - (o.y - oy), motion.y),
            Side::Below => ((o.y + oy) - edge.start.y, -motion.y),
            Side::Left => ((o.x + ox) - edge.start.x, -motion.x),
            Side::Right => (edge.start.x - (o.x - ox), motion.x),
        };
        depth <= travel.max(0.0) + 2.0 * self.bounds.skin_width() + REACH_EPSILON
    }

    fn resolve_side<Q: ObstacleQuery + ?Sized>(&mut self, side: Side, next: &mut Vec2, motion: Vec2, query: &Q) {
        let from = self.edges[side.index()];
        let to = self.bounds.origins(*next).edge(side);
        let (a, b) = from.swept_to(&to);

        // Every overlap is considered: a deep one belonging to another side
        // must not hide a shallow one that belongs to this side.
        let hit = if self.admits(side) {
            query
                .overlap_all(a, b, CAT_OBSTACLE)
                .into_iter()
                .find(|o| self.within_reach(side, &to, o, motion))
        } else {
            None
        };

        let Some(obstacle) = hit else {
            self.contacts.set(side, false);
            match side {
                Side::Above => self.above = None,
                Side::Below => self.below = None,
                Side::Left | Side::Right => {}
            }
            return;
        };

        self.snap_flush(side, next, &obstacle);
        self.contacts.set(side, true);

        let anchor = Some(ObstacleAnchor {
            handle: obstacle.handle,
            last_position: obstacle.position,
        });
        match side {
            Side::Above => self.above = anchor,
            Side::Below => self.below = anchor,
            Side::Left | Side::Right => {}
        }
    }

    /// Place the body against the obstacle's face and kill velocity into it.
    fn snap_flush(&mut self, side: Side, next: &mut Vec2, obstacle: &ObstacleInfo) {
        let half_w = self.bounds.half_width();
        let half_h = self.bounds.half_height();
        let ox = obstacle.half_extent_along(Axis::X);
        let oy = obstacle.half_extent_along(Axis::Y);

        match side {
            Side::Above => {
                next.y = obstacle.position.y - oy - half_h;
                self.velocity.y = 0.0;
            }
            Side::Below => {
                next.y = obstacle.position.y + oy + half_h;
                self.velocity.y = 0.0;
            }
            Side::Left => {
                next.x = obstacle.position.x + ox + half_w;
                self.velocity.x = 0.0;
            }
            Side::Right => {
                next.x = obstacle.position.x - ox - half_w;
                self.velocity.x = 0.0;
            }
        }
    }
}
