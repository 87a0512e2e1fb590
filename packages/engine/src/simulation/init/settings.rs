use crate::domain::{ConfigError, PhysicsSettings};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_settings(world: &mut WorldCore, settings: PhysicsSettings) -> Result<(), ConfigError> {
    if let Err(err) = settings.validate() {
        engine_warn!("settings rejected: {}", err);
        return Err(err);
    }
    world.settings = settings;
    Ok(())
}
