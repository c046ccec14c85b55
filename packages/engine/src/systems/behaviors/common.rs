//! Helpers shared by the falling and rising behaviors.

use rand::Rng;

use super::UpdateContext;
use crate::domain::Material;

/// 8-neighborhood offsets
pub(crate) const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Lateral order for this cell: `(first, second)`, alternating with frame and column.
#[inline]
pub fn get_random_dir(frame: u64, x: u32) -> (i32, i32) {
    let go_left = ((frame as u32).wrapping_add(x) & 1) == 1;
    if go_left { (-1, 1) } else { (1, -1) }
}

/// Lateral order biased by horizontal velocity, falling back to `get_random_dir`.
#[inline]
pub(crate) fn lateral_order(ctx: &UpdateContext) -> (i32, i32) {
    let vx = ctx.grid.velocity(ctx.x, ctx.y).x;
    if vx > 0.0 {
        (1, -1)
    } else if vx < 0.0 {
        (-1, 1)
    } else {
        get_random_dir(ctx.frame, ctx.x)
    }
}

#[inline]
pub(crate) fn is_empty_at(ctx: &UpdateContext, x: i32, y: i32) -> bool {
    ctx.grid.is_empty(x, y)
}

/// First in-bounds neighbor whose material satisfies `pred`.
pub(crate) fn find_neighbor(
    ctx: &UpdateContext,
    pred: impl Fn(Material) -> bool,
) -> Option<(i32, i32, Material)> {
    let (xi, yi) = (ctx.x as i32, ctx.y as i32);
    NEIGHBORS_8.iter().find_map(|&(dx, dy)| {
        let (nx, ny) = (xi + dx, yi + dy);
        match ctx.grid.material(nx, ny) {
            Some(m) if pred(m) => Some((nx, ny, m)),
            _ => None,
        }
    })
}

/// Speed up toward +y, capped at the configured terminal speed.
#[inline]
pub(crate) fn accelerate_fall(ctx: &mut UpdateContext) {
    let mut v = ctx.grid.velocity(ctx.x, ctx.y);
    v.y = (v.y + ctx.settings.gravity_accel).min(ctx.settings.max_fall_speed);
    ctx.grid.set_velocity(ctx.x, ctx.y, v);
}

/// Settle a falling particle: vertical speed is lost on impact.
#[inline]
pub(crate) fn land(ctx: &mut UpdateContext) {
    let mut v = ctx.grid.velocity(ctx.x, ctx.y);
    v.y = 0.0;
    ctx.grid.set_velocity(ctx.x, ctx.y, v);
    ctx.settle();
}

/// Push velocity upward by `lift` (capped at `max_rise`) and jitter it sideways.
pub(crate) fn drift_up(ctx: &mut UpdateContext, lift: f32, max_rise: f32, jitter: f32) {
    let mut v = ctx.grid.velocity(ctx.x, ctx.y);
    v.y = (v.y - lift).max(-max_rise);
    v.x = (v.x + ctx.rng.gen_range(-jitter..=jitter)).clamp(-1.0, 1.0);
    ctx.grid.set_velocity(ctx.x, ctx.y, v);
}

/// Straight down, then the two down-diagonals, into empty cells only.
pub(crate) fn try_fall_into_empty(ctx: &mut UpdateContext) -> bool {
    let (xi, yi) = (ctx.x as i32, ctx.y as i32);
    if is_empty_at(ctx, xi, yi + 1) {
        ctx.move_to(xi, yi + 1);
        return true;
    }

    let (d1, d2) = lateral_order(ctx);
    for dx in [d1, d2] {
        if is_empty_at(ctx, xi + dx, yi + 1) {
            ctx.move_to(xi + dx, yi + 1);
            return true;
        }
    }
    false
}

/// Rise straight up, then along the two up-diagonals, into empty cells only.
pub(crate) fn try_rise_into_empty(ctx: &mut UpdateContext) -> bool {
    let (xi, yi) = (ctx.x as i32, ctx.y as i32);
    if is_empty_at(ctx, xi, yi - 1) {
        ctx.move_to(xi, yi - 1);
        return true;
    }

    let (d1, d2) = lateral_order(ctx);
    for dx in [d1, d2] {
        if is_empty_at(ctx, xi + dx, yi - 1) {
            ctx.move_to(xi + dx, yi - 1);
            return true;
        }
    }
    false
}

/// Follow the velocity's grid step if it lands on an empty cell.
pub(crate) fn try_move_by_velocity(ctx: &mut UpdateContext) -> bool {
    let (sx, sy) = ctx.grid.velocity(ctx.x, ctx.y).step();
    if sx == 0 && sy == 0 {
        return false;
    }
    let (xi, yi) = (ctx.x as i32, ctx.y as i32);
    if is_empty_at(ctx, xi + sx, yi + sy) {
        ctx.move_to(xi + sx, yi + sy);
        return true;
    }
    false
}

/// Slide sideways up to `reach` cells through empty space.
///
/// The path must be clear: a cell two away is only reachable over an
/// empty cell one away.
pub(crate) fn try_spread(ctx: &mut UpdateContext, reach: i32) -> bool {
    let (xi, yi) = (ctx.x as i32, ctx.y as i32);
    let (d1, d2) = lateral_order(ctx);
    for dir in [d1, d2] {
        let mut target = None;
        for step in 1..=reach {
            let tx = xi + dir * step;
            if !is_empty_at(ctx, tx, yi) {
                break;
            }
            target = Some(tx);
        }
        if let Some(tx) = target {
            let mut v = ctx.grid.velocity(ctx.x, ctx.y);
            v.x = dir as f32;
            ctx.grid.set_velocity(ctx.x, ctx.y, v);
            ctx.move_to(tx, yi);
            return true;
        }
    }
    false
}
