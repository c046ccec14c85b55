use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;

use super::{SimSettings, SimulationCore, TickStats};

pub(super) fn create_simulation_core(width: u32, height: u32, settings: SimSettings) -> SimulationCore {
    tracing::info!(width, height, seed = settings.seed, "creating simulation");
    SimulationCore {
        grid: Grid::new(width, height),
        behaviors: BehaviorRegistry::new(),
        rng: StdRng::seed_from_u64(settings.seed),
        current_material: settings.initial_material,
        settings,
        frame: 0,
        perf_enabled: false,
        tick_stats: TickStats::default(),
    }
}
