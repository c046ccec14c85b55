//! LiquidBehavior - water, oil, acid and lava
//!
//! Liquids fall like powders, and when blocked they run sideways up to two
//! cells. A heavier liquid sinks through a lighter one, so oil ends up
//! floating on water. Contact reactions are symmetric: whichever partner
//! the scan reaches first resolves the pair.

use super::common::{accelerate_fall, find_neighbor, land, try_fall_into_empty, try_spread, NEIGHBORS_8};
use super::{Behavior, UpdateContext};
use crate::domain::materials_ext::is_liquid;
use crate::domain::Material;
use crate::systems::reactions::{
    self, ACID_CONSUMED_CHANCE, ACID_DILUTE_CHANCE, ACID_DISSOLVES, FIRE_QUENCH_STEAM_CHANCE,
    LAVA_BYPRODUCT_CHANCE, LAVA_IGNITES,
};

/// Sideways reach of a free-flowing liquid per tick.
const SPREAD_REACH: i32 = 2;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Water touching lava or fire. Returns true when the water's tick is spent.
    fn water_contact(&self, ctx: &mut UpdateContext) -> bool {
        let (xi, yi) = (ctx.x as i32, ctx.y as i32);
        let mut lava = false;
        let mut fire = false;
        for (dx, dy) in NEIGHBORS_8 {
            let (nx, ny) = (xi + dx, yi + dy);
            match ctx.grid.material(nx, ny) {
                Some(Material::Lava) => {
                    reactions::transform_at(ctx, nx, ny, Material::Stone);
                    lava = true;
                }
                Some(Material::Fire) => {
                    reactions::transform_at(ctx, nx, ny, Material::Steam);
                    fire = true;
                }
                _ => {}
            }
        }

        if lava || (fire && ctx.chance(FIRE_QUENCH_STEAM_CHANCE)) {
            reactions::transform_self(ctx, Material::Steam);
            true
        } else if fire {
            ctx.settle();
            true
        } else {
            false
        }
    }

    /// Returns true when the acid cell is gone.
    fn acid_reactions(&self, ctx: &mut UpdateContext) -> bool {
        if find_neighbor(ctx, |m| m == Material::Water).is_some() && ctx.chance(ACID_DILUTE_CHANCE) {
            reactions::transform_self(ctx, Material::Empty);
            return true;
        }

        let (xi, yi) = (ctx.x as i32, ctx.y as i32);
        for (dx, dy) in NEIGHBORS_8 {
            let (nx, ny) = (xi + dx, yi + dy);
            let Some(m) = ctx.grid.material(nx, ny) else { continue };
            let Some(&(_, p)) = ACID_DISSOLVES.iter().find(|(t, _)| *t == m) else { continue };
            if !ctx.chance(p) {
                continue;
            }
            reactions::transform_at(ctx, nx, ny, Material::Acid);
            if ctx.chance(ACID_CONSUMED_CHANCE) {
                reactions::transform_self(ctx, Material::Empty);
                return true;
            }
        }
        false
    }

    fn update_lava(&self, ctx: &mut UpdateContext) {
        if let Some((wx, wy, _)) = find_neighbor(ctx, |m| m == Material::Water) {
            reactions::transform_self(ctx, Material::Stone);
            reactions::transform_at(ctx, wx, wy, Material::Steam);
            return;
        }

        reactions::ignite_neighbors(ctx, &LAVA_IGNITES);
        reactions::emit_byproduct(ctx, LAVA_BYPRODUCT_CHANCE);

        let fall_chance = ctx.settings.lava_gravity_scale;
        if ctx.chance(fall_chance) {
            accelerate_fall(ctx);
            if try_fall_into_empty(ctx) {
                return;
            }
        }
        let spread_chance = ctx.settings.lava_spread_chance;
        if ctx.chance(spread_chance) && try_spread(ctx, 1) {
            return;
        }
        land(ctx);
    }

    /// Swap down through a lighter liquid directly below.
    fn try_sink(&self, ctx: &mut UpdateContext, me: Material) -> bool {
        let (xi, yi) = (ctx.x as i32, ctx.y as i32);
        match ctx.grid.material(xi, yi + 1) {
            Some(below) if is_liquid(below) && me.density() > below.density() => {
                ctx.move_to(xi, yi + 1);
                true
            }
            _ => false,
        }
    }

    fn flow(&self, ctx: &mut UpdateContext, me: Material) {
        accelerate_fall(ctx);
        if try_fall_into_empty(ctx) || self.try_sink(ctx, me) || try_spread(ctx, SPREAD_REACH) {
            return;
        }
        land(ctx);
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let me = ctx.material();
        match me {
            Material::Water => {
                if !self.water_contact(ctx) {
                    self.flow(ctx, me);
                }
            }
            Material::Acid => {
                if !self.acid_reactions(ctx) {
                    self.flow(ctx, me);
                }
            }
            Material::Lava => self.update_lava(ctx),
            _ => self.flow(ctx, me),
        }
    }
}
