//! PowderBehavior - sand, salt and gunpowder
//!
//! Fall straight, then roll diagonally, then sink through liquid, then settle.

use super::common::{accelerate_fall, land, try_fall_into_empty, NEIGHBORS_8};
use super::{Behavior, UpdateContext};
use crate::domain::materials_ext::{is_igniter, is_liquid};
use crate::domain::Material;
use crate::systems::reactions::{self, SALT_DISSOLVE_CHANCE};

/// Salt sinks through liquid on this fraction of ticks.
const SALT_SINK_CHANCE: f32 = 0.8;
/// Half-width of the square gunpowder watches for heat.
const GUNPOWDER_SENSE_RADIUS: i32 = 2;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Fire or lava anywhere in the 5x5 block around the grain.
    fn senses_heat(&self, ctx: &UpdateContext) -> bool {
        let (xi, yi) = (ctx.x as i32, ctx.y as i32);
        let r = GUNPOWDER_SENSE_RADIUS;
        (-r..=r).any(|dy| {
            (-r..=r).any(|dx| {
                ctx.grid
                    .material(xi + dx, yi + dy)
                    .map_or(false, is_igniter)
            })
        })
    }

    /// Each adjacent water cell is a separate chance to dissolve.
    fn salt_dissolves(&self, ctx: &mut UpdateContext) -> bool {
        let (xi, yi) = (ctx.x as i32, ctx.y as i32);
        let wet = NEIGHBORS_8
            .iter()
            .filter(|&&(dx, dy)| ctx.grid.material(xi + dx, yi + dy) == Some(Material::Water))
            .count();
        (0..wet).any(|_| ctx.chance(SALT_DISSOLVE_CHANCE))
    }

    /// Swap down through a lighter liquid directly below.
    fn try_sink(&self, ctx: &mut UpdateContext, me: Material) -> bool {
        let (xi, yi) = (ctx.x as i32, ctx.y as i32);
        let Some(below) = ctx.grid.material(xi, yi + 1) else {
            return false;
        };
        if !is_liquid(below) || me.density() <= below.density() {
            return false;
        }
        if me == Material::Salt && !ctx.chance(SALT_SINK_CHANCE) {
            return false;
        }
        ctx.move_to(xi, yi + 1);
        true
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let me = ctx.material();

        match me {
            Material::Gunpowder if self.senses_heat(ctx) => {
                let radius = ctx.settings.explosion_radius;
                // The blast covers the grain itself, so no further action this tick
                ctx.transformed +=
                    reactions::explode(&mut *ctx.grid, &mut *ctx.rng, ctx.x as i32, ctx.y as i32, radius);
                return;
            }
            Material::Salt if self.salt_dissolves(ctx) => {
                reactions::transform_self(ctx, Material::Empty);
                return;
            }
            _ => {}
        }

        accelerate_fall(ctx);
        if try_fall_into_empty(ctx) || self.try_sink(ctx, me) {
            return;
        }
        land(ctx);
    }
}
