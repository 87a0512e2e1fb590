use crate::core::Vec2;
use crate::domain::{BodyConfig, ConfigError};
use crate::systems::query::{ColliderHandle, Passenger};
use crate::systems::raycast::{EdgeSample, RaycastBounds, Side};

/// Contact flags written by the last `update`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    pub ground: bool,
    pub ceiling: bool,
    pub left_wall: bool,
    pub right_wall: bool,
}

impl Contacts {
    pub fn get(&self, side: Side) -> bool {
        match side {
            Side::Above => self.ceiling,
            Side::Below => self.ground,
            Side::Left => self.left_wall,
            Side::Right => self.right_wall,
        }
    }

    pub(super) fn set(&mut self, side: Side, value: bool) {
        match side {
            Side::Above => self.ceiling = value,
            Side::Below => self.ground = value,
            Side::Left => self.left_wall = value,
            Side::Right => self.right_wall = value,
        }
    }

    pub fn on_wall(&self) -> bool {
        self.left_wall || self.right_wall
    }

    /// Number of sides in contact
    pub fn count(&self) -> u32 {
        self.ground as u32 + self.ceiling as u32 + self.left_wall as u32 + self.right_wall as u32
    }
}

/// Obstacle touched last tick and where it was at the time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleAnchor {
    pub handle: ColliderHandle,
    pub last_position: Vec2,
}

/// Axis-aligned character body
#[derive(Clone, Debug)]
pub struct KinematicBody {
    pub(super) position: Vec2,
    pub(super) bounds: RaycastBounds,

    // === Velocity ===
    /// Carried across ticks (gravity, momentum)
    pub(super) velocity: Vec2,
    /// Applied for one tick, then cleared
    pub(super) input_velocity: Vec2,
    pub(super) gravity_acceleration: f32,

    // === Modes ===
    pub(super) apply_gravity: bool,
    pub(super) stuck_to_ceiling: bool,

    // === Per-tick caches ===
    pub(super) contacts: Contacts,
    pub(super) below: Option<ObstacleAnchor>,
    pub(super) above: Option<ObstacleAnchor>,
    /// Edge samples at the end of last tick, in `Side::ORDER`
    pub(super) edges: [EdgeSample; 4],
}

impl KinematicBody {
    pub fn new(position: Vec2, config: &BodyConfig, skin_width: f32) -> Result<Self, ConfigError> {
        let bounds = RaycastBounds::new(config.half_width, config.half_height, skin_width)?;
        Ok(Self {
            position,
            bounds,
            velocity: Vec2::zero(),
            input_velocity: Vec2::zero(),
            gravity_acceleration: config.gravity_acceleration,
            apply_gravity: true,
            stuck_to_ceiling: false,
            contacts: Contacts::default(),
            below: None,
            above: None,
            edges: bounds.origins(position).edges(),
        })
    }

    pub fn position(&self) -> Vec2 { self.position }

    /// Teleport. Drops every per-tick cache so nothing is swept or carried
    /// across the jump.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.edges = self.bounds.origins(position).edges();
        self.below = None;
        self.above = None;
        self.contacts = Contacts::default();
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.bounds.half_width(), self.bounds.half_height())
    }

    pub fn velocity(&self) -> Vec2 { self.velocity }

    pub fn input_velocity(&self) -> Vec2 { self.input_velocity }

    /// Persistent velocity (jumps, knockback)
    pub fn add_velocity(&mut self, x: f32, y: f32) {
        self.velocity += Vec2::new(x, y);
    }

    /// Velocity for the next `update` only (walking)
    pub fn add_input_velocity(&mut self, x: f32, y: f32) {
        self.input_velocity += Vec2::new(x, y);
    }

    pub fn gravity_acceleration(&self) -> f32 { self.gravity_acceleration }

    pub fn set_gravity_acceleration(&mut self, gravity: f32) {
        self.gravity_acceleration = gravity;
    }

    pub fn set_apply_gravity(&mut self, apply: bool) {
        self.apply_gravity = apply;
    }

    pub fn set_is_stuck_to_ceiling(&mut self, stuck: bool) {
        self.stuck_to_ceiling = stuck;
    }

    pub fn is_stuck_to_ceiling(&self) -> bool { self.stuck_to_ceiling }

    pub fn contacts(&self) -> Contacts { self.contacts }

    pub fn is_on_ground(&self) -> bool { self.contacts.ground }

    pub fn is_on_ceiling(&self) -> bool { self.contacts.ceiling }

    pub fn is_on_left_wall(&self) -> bool { self.contacts.left_wall }

    pub fn is_on_right_wall(&self) -> bool { self.contacts.right_wall }

    pub fn is_on_wall(&self) -> bool { self.contacts.on_wall() }

    pub fn obstacle_below(&self) -> Option<ObstacleAnchor> { self.below }

    pub fn obstacle_above(&self) -> Option<ObstacleAnchor> { self.above }
}

impl Passenger for KinematicBody {
    fn move_by(&mut self, displacement: Vec2) {
        self.position += displacement;
        for edge in self.edges.iter_mut() {
            edge.translate(displacement);
        }
        // The carrier already moved us; don't transfer the same motion again.
        if let Some(anchor) = self.below.as_mut() {
            anchor.last_position.y += displacement.y;
        }
    }
}
