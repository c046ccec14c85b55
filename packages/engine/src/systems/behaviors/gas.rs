//! GasBehavior - smoke and steam
//!
//! Gases follow their velocity, then try up, up-diagonal and sideways.

use super::common::{drift_up, try_move_by_velocity, try_rise_into_empty, try_spread};
use super::{Behavior, UpdateContext};
use crate::domain::Material;
use crate::systems::reactions;

const GAS_LIFT: f32 = 0.1;
const GAS_MAX_RISE: f32 = 2.0;
const GAS_JITTER: f32 = 0.3;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if ctx.material() == Material::Steam {
            let condense = ctx.settings.steam_condense_chance;
            if ctx.chance(condense) {
                reactions::transform_self(ctx, Material::Water);
                return;
            }
        }

        drift_up(ctx, GAS_LIFT, GAS_MAX_RISE, GAS_JITTER);
        if try_move_by_velocity(ctx) || try_rise_into_empty(ctx) || try_spread(ctx, 1) {
            return;
        }
        ctx.settle();
    }
}
