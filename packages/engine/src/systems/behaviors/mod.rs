//! Behaviors - per-category movement rules
//!
//! Each category gets one behavior; the registry dispatches on
//! `Material::category()`. A behavior either moves the particle, transforms
//! it in place, or settles it. All three leave an `updated` mark so the
//! scan never touches the same particle twice in one tick.

pub(crate) mod common;
mod energy;
mod gas;
mod liquid;
mod powder;

pub use common::get_random_dir;
pub use energy::EnergyBehavior;
pub use gas::GasBehavior;
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;

use rand::rngs::StdRng;
use rand::Rng;

use crate::domain::{Category, Material};
use crate::simulation::SimSettings;
use crate::spatial::grid::Grid;

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub settings: &'a SimSettings,
    pub rng: &'a mut StdRng,
    pub x: u32,
    pub y: u32,
    pub frame: u64,
    /// Particles relocated while handling this cell
    pub moved: u32,
    /// Cells transformed while handling this cell, neighbors included
    pub transformed: u32,
}

impl<'a> UpdateContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        settings: &'a SimSettings,
        rng: &'a mut StdRng,
        x: u32,
        y: u32,
        frame: u64,
    ) -> Self {
        Self { grid, settings, rng, x, y, frame, moved: 0, transformed: 0 }
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.grid.material_at(self.x, self.y)
    }

    /// Bernoulli draw with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f32) -> bool {
        p > 0.0 && self.rng.gen::<f32>() < p
    }

    /// Move the current particle into `(tx, ty)`, which must be in bounds.
    #[inline]
    pub fn move_to(&mut self, tx: i32, ty: i32) {
        self.grid.move_particle(self.x, self.y, tx as u32, ty as u32);
        self.moved += 1;
    }

    /// Stay put this tick.
    #[inline]
    pub fn settle(&mut self) {
        self.grid.set_updated(self.x, self.y, true);
    }
}

/// Behavior trait - each category implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by category
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
    energy: EnergyBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
            energy: EnergyBehavior::new(),
        }
    }

    pub fn update(&self, category: Category, ctx: &mut UpdateContext) {
        match category {
            Category::Powder => self.powder.update(ctx),
            Category::Liquid => self.liquid.update(ctx),
            Category::Gas => self.gas.update(ctx),
            Category::Energy => self.energy.update(ctx),
            // Wood and stone never move; they only get ignited or dissolved by others
            Category::Solid => ctx.settle(),
            Category::Empty => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
