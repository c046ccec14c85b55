//! Reactions - in-place material transformations
//!
//! Everything that turns one material into another goes through `replace`,
//! so a transformed cell always gets a fresh age, a fresh velocity, a
//! jittered color and an `updated` mark for the rest of the tick.

use rand::Rng;

use crate::domain::catalog;
use crate::domain::Material;
use crate::spatial::grid::Grid;

use super::behaviors::UpdateContext;
use crate::systems::behaviors::common::NEIGHBORS_8;

/// What fire sets alight, with per-tick chance per adjacent cell.
pub const FIRE_IGNITES: [(Material, f32); 3] = [
    (Material::Wood, 0.01),
    (Material::Oil, 0.2),
    (Material::Gunpowder, 0.5),
];

/// Lava burns hotter than fire.
pub const LAVA_IGNITES: [(Material, f32); 3] = [
    (Material::Wood, 0.05),
    (Material::Oil, 0.5),
    (Material::Gunpowder, 1.0),
];

pub const EMBER_IGNITES: [(Material, f32); 1] = [(Material::Wood, 0.05)];

/// What acid eats, with per-tick chance per adjacent cell.
pub const ACID_DISSOLVES: [(Material, f32); 4] = [
    (Material::Wood, 0.01),
    (Material::Stone, 0.003),
    (Material::Sand, 0.02),
    (Material::Salt, 0.05),
];

pub const FIRE_BYPRODUCT_CHANCE: f32 = 0.02;
pub const LAVA_BYPRODUCT_CHANCE: f32 = 0.01;
pub const FIRE_QUENCH_STEAM_CHANCE: f32 = 0.5;
pub const ACID_CONSUMED_CHANCE: f32 = 0.2;
pub const ACID_DILUTE_CHANCE: f32 = 0.1;
pub const SALT_DISSOLVE_CHANCE: f32 = 0.001;
/// Share of byproducts that come out as Smoke; the rest are Embers.
pub const BYPRODUCT_SMOKE_SHARE: f32 = 0.7;

/// Overwrite `(x, y)` with a freshly spawned `material`, already processed
/// for this tick. Replacing with Empty clears the cell.
pub fn replace<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, x: u32, y: u32, material: Material) {
    if material.is_empty() {
        grid.clear_cell(x, y);
        return;
    }
    let mut cell = catalog::spawn(material, rng);
    cell.updated_this_tick = true;
    let color = catalog::randomized_color(material, rng);
    grid.put(x, y, cell, color);
}

/// Transform the cell the context points at.
#[inline]
pub fn transform_self(ctx: &mut UpdateContext, material: Material) {
    replace(&mut *ctx.grid, &mut *ctx.rng, ctx.x, ctx.y, material);
    ctx.transformed += 1;
}

/// Transform a neighbor the caller already bounds-checked.
#[inline]
pub fn transform_at(ctx: &mut UpdateContext, x: i32, y: i32, material: Material) {
    replace(&mut *ctx.grid, &mut *ctx.rng, x as u32, y as u32, material);
    ctx.transformed += 1;
}

/// Roll `table` against every neighbor; each hit becomes Fire.
/// Hits are tallied in `ctx.transformed`.
pub fn ignite_neighbors(ctx: &mut UpdateContext, table: &[(Material, f32)]) {
    let (xi, yi) = (ctx.x as i32, ctx.y as i32);
    for (dx, dy) in NEIGHBORS_8 {
        let (nx, ny) = (xi + dx, yi + dy);
        let Some(m) = ctx.grid.material(nx, ny) else { continue };
        let Some(&(_, p)) = table.iter().find(|(t, _)| *t == m) else { continue };
        if ctx.chance(p) {
            transform_at(ctx, nx, ny, Material::Fire);
        }
    }
}

/// Occasionally puff Smoke (70%) or an Ember (30%) into the empty cell above.
pub fn emit_byproduct(ctx: &mut UpdateContext, chance: f32) {
    let (xi, yi) = (ctx.x as i32, ctx.y as i32);
    if !ctx.grid.is_empty(xi, yi - 1) || !ctx.chance(chance) {
        return;
    }
    let product = if ctx.chance(BYPRODUCT_SMOKE_SHARE) { Material::Smoke } else { Material::Ember };
    transform_at(ctx, xi, yi - 1, product);
}

/// Blast every cell within `radius` of the center into a mix of Fire (60%),
/// Smoke (25%) and Ember (15%). Stone survives. Returns cells converted.
pub fn explode<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, cx: i32, cy: i32, radius: i32) -> u32 {
    let r2 = radius * radius;
    let mut converted = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            match grid.material(x, y) {
                None | Some(Material::Stone) => continue,
                Some(_) => {}
            }
            let roll: f32 = rng.gen();
            let product = if roll < 0.6 {
                Material::Fire
            } else if roll < 0.85 {
                Material::Smoke
            } else {
                Material::Ember
            };
            replace(grid, rng, x as u32, y as u32, product);
            converted += 1;
        }
    }
    tracing::trace!(cx, cy, radius, converted, "explosion");
    converted
}
