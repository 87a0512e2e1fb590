use std::collections::HashSet;

use crate::core::Vec2;
use crate::domain::{ConfigError, CAT_CHARACTER};
use crate::systems::query::{ColliderHandle, ObstacleQuery, PassengerLookup};
use crate::systems::raycast::{RaySpacing, RaycastBounds, RaycastOrigins};

/// One rider's push for the current tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassengerMovement {
    pub passenger: ColliderHandle,
    pub push_y: f32,
    pub move_before_platform: bool,
}

/// Carries passengers standing on a vertically moving platform.
pub struct PlatformTransport {
    position: Vec2,
    bounds: RaycastBounds,
    ray_count: usize,
    spacing: RaySpacing,
    origins: RaycastOrigins,
    movements: Vec<PassengerMovement>,
    seen: HashSet<ColliderHandle>,
}

impl PlatformTransport {
    pub fn new(position: Vec2, half_extents: Vec2, skin_width: f32, ray_count: usize) -> Result<Self, ConfigError> {
        let bounds = RaycastBounds::new(half_extents.x, half_extents.y, skin_width)?;
        let spacing = bounds.ray_spacing(ray_count)?;
        Ok(Self {
            position,
            bounds,
            ray_count,
            spacing,
            origins: bounds.origins(position),
            movements: Vec::new(),
            seen: HashSet::new(),
        })
    }

    pub fn position(&self) -> Vec2 { self.position }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.origins = self.bounds.origins(position);
        self.movements.clear();
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.bounds.half_width(), self.bounds.half_height())
    }

    /// Movements computed by the last `update` (kept until the next one).
    pub fn movements(&self) -> &[PassengerMovement] {
        &self.movements
    }

    /// Pre-move phase. Returns the number of passengers found.
    pub fn update<Q, P>(&mut self, velocity_y: f32, query: &Q, passengers: &mut P) -> usize
    where
        Q: ObstacleQuery + ?Sized,
        P: PassengerLookup + ?Sized,
    {
        self.movements.clear();
        if velocity_y == 0.0 {
            return 0;
        }

        self.origins = self.bounds.origins(self.position);
        self.calculate_passenger_movements(velocity_y, query);
        self.move_passengers(true, passengers);
        self.position.y += velocity_y;

        self.movements.len()
    }

    /// Post-move phase, after the owner moved the platform to `position()`.
    pub fn after_update<P: PassengerLookup + ?Sized>(&mut self, passengers: &mut P) {
        self.origins = self.bounds.origins(self.position);
        self.move_passengers(false, passengers);
    }

    fn calculate_passenger_movements<Q: ObstacleQuery + ?Sized>(&mut self, velocity_y: f32, query: &Q) {
        self.seen.clear();
        let skin = self.bounds.skin_width();
        let rising = velocity_y > 0.0;

        // Rising: reach anything the top will sweep through.
        // Falling: only riders already resting on the top.
        let ray_length = if rising { velocity_y.abs() + skin } else { 2.0 * skin };

        for i in 0..self.ray_count {
            let origin = Vec2::new(
                self.origins.top_left.x + self.spacing.vertical * i as f32,
                self.origins.top_left.y,
            );

            for hit in query.cast_all(origin, Vec2::UP, ray_length, CAT_CHARACTER) {
                if !self.seen.insert(hit.collider) {
                    continue;
                }
                let gap = hit.distance - skin;
                let push_y = if rising { velocity_y - gap } else { velocity_y + gap };
                self.movements.push(PassengerMovement {
                    passenger: hit.collider,
                    push_y,
                    move_before_platform: rising,
                });
            }
        }
    }

    fn move_passengers<P: PassengerLookup + ?Sized>(&self, before_platform: bool, passengers: &mut P) {
        for movement in self.movements.iter().filter(|m| m.move_before_platform == before_platform) {
            if let Some(passenger) = passengers.passenger_mut(movement.passenger) {
                passenger.move_by(Vec2::new(0.0, movement.push_y));
            }
        }
    }
}
