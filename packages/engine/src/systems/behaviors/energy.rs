//! EnergyBehavior - fire and embers
//!
//! Fire rises erratically, burns its neighbors and throws off smoke and
//! embers. Embers are short-lived sparks that can only light wood.

use super::common::{drift_up, find_neighbor, try_move_by_velocity, try_rise_into_empty};
use super::{Behavior, UpdateContext};
use crate::domain::Material;
use crate::systems::reactions::{
    self, EMBER_IGNITES, FIRE_BYPRODUCT_CHANCE, FIRE_IGNITES, FIRE_QUENCH_STEAM_CHANCE,
};

const FIRE_LIFT: f32 = 0.15;
const FIRE_MAX_RISE: f32 = 2.0;
const FIRE_JITTER: f32 = 0.5;
const EMBER_LIFT: f32 = 0.05;
const EMBER_MAX_RISE: f32 = 3.0;
const EMBER_JITTER: f32 = 0.4;

pub struct EnergyBehavior;

impl EnergyBehavior {
    pub fn new() -> Self {
        Self
    }

    fn update_fire(&self, ctx: &mut UpdateContext) {
        if let Some((wx, wy, _)) = find_neighbor(ctx, |m| m == Material::Water) {
            reactions::transform_self(ctx, Material::Steam);
            if ctx.chance(FIRE_QUENCH_STEAM_CHANCE) {
                reactions::transform_at(ctx, wx, wy, Material::Steam);
            }
            return;
        }

        reactions::ignite_neighbors(ctx, &FIRE_IGNITES);
        reactions::emit_byproduct(ctx, FIRE_BYPRODUCT_CHANCE);

        drift_up(ctx, FIRE_LIFT, FIRE_MAX_RISE, FIRE_JITTER);
        self.rise(ctx);
    }

    fn update_ember(&self, ctx: &mut UpdateContext) {
        reactions::ignite_neighbors(ctx, &EMBER_IGNITES);
        drift_up(ctx, EMBER_LIFT, EMBER_MAX_RISE, EMBER_JITTER);
        self.rise(ctx);
    }

    fn rise(&self, ctx: &mut UpdateContext) {
        if try_move_by_velocity(ctx) || try_rise_into_empty(ctx) {
            return;
        }
        ctx.settle();
    }
}

impl Behavior for EnergyBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        match ctx.material() {
            Material::Fire => self.update_fire(ctx),
            Material::Ember => self.update_ember(ctx),
            _ => ctx.settle(),
        }
    }
}
