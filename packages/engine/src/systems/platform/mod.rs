//! Moving platforms: passenger transport and stop schedules
//!
//! Per tick, in this order:
//! 1. `PlatformTransport::update(vy)` - find riders, push the ones that must
//!    get out of the way (platform rising), advance the tracked position
//! 2. owner moves the platform collider to `position()`
//! 3. `PlatformTransport::after_update()` - drag the remaining riders along
//!    (platform descending)

mod schedule;
mod transport;

pub use schedule::StopSchedule;
pub use transport::{PassengerMovement, PlatformTransport};
