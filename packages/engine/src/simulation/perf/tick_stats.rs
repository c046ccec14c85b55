use wasm_bindgen::prelude::*;

/// Counters for one tick, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub(super) tick_ms: f64,
    pub(super) movement_ms: f64,
    pub(super) decay_ms: f64,
    /// Cells handed to a behavior
    pub(super) cells_processed: u32,
    pub(super) particles_moved: u32,
    pub(super) cells_transformed: u32,
    /// Particles retired by the decay pass
    pub(super) particles_expired: u32,
    pub(super) particle_count: u32,
}

impl TickStats {
    pub(super) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }

    #[wasm_bindgen(getter)]
    pub fn movement_ms(&self) -> f64 { self.movement_ms }

    #[wasm_bindgen(getter)]
    pub fn decay_ms(&self) -> f64 { self.decay_ms }

    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }

    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }

    #[wasm_bindgen(getter)]
    pub fn cells_transformed(&self) -> u32 { self.cells_transformed }

    #[wasm_bindgen(getter)]
    pub fn particles_expired(&self) -> u32 { self.particles_expired }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
