use wasm_bindgen::prelude::*;

/// Timings and counters for the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) platforms_ms: f64,
    pub(super) bodies_ms: f64,
    pub(super) bodies_updated: u32,
    pub(super) contacts: u32,
    pub(super) passengers_carried: u32,
    pub(super) colliders: u32,
}

impl PerfStats {
    pub(super) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn platforms_ms(&self) -> f64 { self.platforms_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_ms(&self) -> f64 { self.bodies_ms }

    /// Character bodies integrated this step
    #[wasm_bindgen(getter)]
    pub fn bodies_updated(&self) -> u32 { self.bodies_updated }
    /// Sum of contact sides over all bodies after the step
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    /// Riders moved by platforms this step
    #[wasm_bindgen(getter)]
    pub fn passengers_carried(&self) -> u32 { self.passengers_carried }
    #[wasm_bindgen(getter)]
    pub fn colliders(&self) -> u32 { self.colliders }
}
