use crate::systems::decay;

use super::update::movement_pass;
use super::{PerfTimer, SimulationCore, TickStats};

pub(super) fn tick(sim: &mut SimulationCore, dt: f32) {
    // Ages never run backwards
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    let mut timer = if sim.perf_enabled { Some(PerfTimer::start()) } else { None };

    let counts = movement_pass(sim);
    let movement_ms = timer.as_mut().map_or(0.0, PerfTimer::lap_ms);

    let expired = decay::apply(&mut sim.grid, &sim.settings, &mut sim.rng, dt);
    sim.frame = sim.frame.wrapping_add(1);

    if let Some(mut timer) = timer {
        sim.tick_stats = TickStats {
            movement_ms,
            decay_ms: timer.lap_ms(),
            tick_ms: timer.elapsed_ms(),
            cells_processed: counts.processed,
            particles_moved: counts.moved,
            cells_transformed: counts.transformed,
            particles_expired: expired,
            particle_count: sim.grid.particle_count() as u32,
        };
    }
}
