//! Simulation - owns the grid and drives it
//!
//! `SimulationCore` orchestrates; the per-material rules live in
//! `systems::behaviors`, the time effects in `systems::decay`.
//! Spawn requests are applied between ticks, never mid-scan.

use rand::rngs::StdRng;

use crate::domain::{Cell, Color, Material};
use crate::error::SimResult;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/tick_stats.rs"]
mod tick_stats;
#[path = "step/update.rs"]
mod update;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use settings::SimSettings;
pub use tick_stats::TickStats;

use perf_timer::PerfTimer;

/// The simulation: one grid, its rules and its random stream
pub struct SimulationCore {
    grid: Grid,
    behaviors: BehaviorRegistry,
    settings: SimSettings,
    rng: StdRng,

    current_material: Material,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    tick_stats: TickStats,
}

impl SimulationCore {
    /// Empty simulation with default settings
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation_core(width, height, SimSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: SimSettings) -> SimResult<Self> {
        settings.validate()?;
        Ok(init::create_simulation_core(width, height, settings))
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Ticks completed since creation
    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.grid.particle_count() }

    pub fn settings(&self) -> &SimSettings { &self.settings }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn at(&self, x: i32, y: i32) -> SimResult<Cell> {
        self.grid.at(x, y)
    }

    /// Direct cell write, mainly for building test scenes
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> SimResult<()> {
        self.grid.set(x, y, cell)
    }

    /// Replace the tunables. The random stream is not reseeded.
    pub fn apply_settings(&mut self, settings: SimSettings) -> SimResult<()> {
        settings::apply_settings(self, settings)
    }

    pub fn load_settings_json(&mut self, json: &str) -> SimResult<()> {
        let settings = SimSettings::from_json(json)?;
        self.apply_settings(settings)
    }

    /// Enable or disable per-tick stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's stats (zeros when perf is disabled)
    pub fn tick_stats(&self) -> TickStats {
        self.tick_stats.clone()
    }

    /// Advance one tick of `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        step::tick(self, dt);
    }

    /// Advance one tick of the configured default delta
    pub fn tick_default(&mut self) {
        let dt = self.settings.default_delta;
        step::tick(self, dt);
    }

    pub fn current_material(&self) -> Material {
        self.current_material
    }

    pub fn set_current_material(&mut self, material: Material) {
        commands::set_current_material(self, material);
    }

    /// Fill empty cells within `radius` of the center. Returns cells placed.
    pub fn spawn_at(&mut self, x: i32, y: i32, material: Material, radius: i32) -> usize {
        commands::spawn_at(self, x, y, material, radius)
    }

    /// `spawn_at` roughly every two cells along the segment
    pub fn spawn_between(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        material: Material,
        radius: i32,
    ) -> usize {
        commands::spawn_between(self, x0, y0, x1, y1, material, radius)
    }

    /// Spawn the current material with the configured brush
    pub fn paint_at(&mut self, x: i32, y: i32) -> usize {
        commands::paint_at(self, x, y)
    }

    pub fn paint_stroke(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
        commands::paint_stroke(self, x0, y0, x1, y1)
    }

    /// Clear every cell within `radius`. Returns cells cleared.
    pub fn erase_at(&mut self, x: i32, y: i32, radius: i32) -> usize {
        commands::erase_at(self, x, y, radius)
    }

    /// Clear all particles
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    /// Render view, row-major, `width * height` colors
    pub fn color_buffer(&self) -> &[Color] {
        self.grid.color_buffer()
    }

    pub fn color_bytes(&self) -> &[u8] {
        self.grid.color_bytes()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
