use crate::domain::PlatformConfig;

/// Vertical stop-to-stop route for an elevator platform.
///
/// Stops are visited in order and wrap around; the platform dwells
/// `wait_ticks` at each one before leaving.
#[derive(Clone, Debug, PartialEq)]
pub struct StopSchedule {
    stops: Vec<f32>,
    speed: f32,
    wait_ticks: u32,
    target: usize,
    waiting: u32,
}

impl StopSchedule {
    pub fn new(stops: Vec<f32>, speed: f32, wait_ticks: u32) -> Self {
        if stops.is_empty() || !(speed > 0.0) {
            engine_warn!(
                "platform schedule has {} stops at speed {}; it will not move",
                stops.len(),
                speed
            );
        }
        Self {
            stops,
            speed: speed.max(0.0),
            wait_ticks,
            target: 0,
            waiting: 0,
        }
    }

    pub fn from_config(config: &PlatformConfig) -> Self {
        Self::new(config.stops.clone(), config.speed, config.wait_ticks)
    }

    /// Stop currently headed for
    pub fn target(&self) -> Option<f32> {
        self.stops.get(self.target).copied()
    }

    pub fn is_idle(&self) -> bool {
        self.stops.is_empty() || self.speed == 0.0
    }

    /// Vertical displacement for this tick from `current_y`.
    pub fn next_velocity(&mut self, current_y: f32) -> f32 {
        if self.is_idle() {
            return 0.0;
        }
        if self.waiting > 0 {
            self.waiting -= 1;
            return 0.0;
        }

        let Some(target) = self.target() else {
            return 0.0;
        };

        let remaining = target - current_y;
        if remaining.abs() <= self.speed {
            // Land exactly, then dwell and head for the next stop.
            self.waiting = self.wait_ticks;
            self.target = (self.target + 1) % self.stops.len();
            return remaining;
        }
        self.speed.copysign(remaining)
    }
}
