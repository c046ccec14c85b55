use crate::domain::{catalog, Material};

use super::settings::MAX_BRUSH_RADIUS;
use super::SimulationCore;

/// Offsets within Euclidean distance `radius`, row by row.
/// The radius is clamped to the brush range.
fn disc(radius: i32) -> impl Iterator<Item = (i32, i32)> {
    let r = radius.clamp(0, MAX_BRUSH_RADIUS);
    (-r..=r).flat_map(move |dy| {
        (-r..=r)
            .filter(move |dx| dx * dx + dy * dy <= r * r)
            .map(move |dx| (dx, dy))
    })
}

pub(super) fn spawn_at(sim: &mut SimulationCore, x: i32, y: i32, material: Material, radius: i32) -> usize {
    if !sim.grid.in_bounds(x, y) {
        tracing::trace!(x, y, "spawn outside the grid dropped");
        return 0;
    }
    if material.is_empty() {
        return 0;
    }

    let mut placed = 0;
    for (dx, dy) in disc(radius) {
        let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
        if !sim.grid.is_empty(px, py) {
            continue;
        }
        let cell = catalog::spawn(material, &mut sim.rng);
        let color = catalog::randomized_color(material, &mut sim.rng);
        sim.grid.put(px as u32, py as u32, cell, color);
        placed += 1;
    }
    placed
}

pub(super) fn spawn_between(
    sim: &mut SimulationCore,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    material: Material,
    radius: i32,
) -> usize {
    let (sx, sy) = (x0 as f64, y0 as f64);
    let (dx, dy) = (x1 as f64 - sx, y1 as f64 - sy);
    let distance = dx.hypot(dy);
    // About one brush stamp every two cells; the end point is the next stroke's start
    let steps = ((distance * 0.5) as i64).max(1);

    // Stamps centered off the grid place nothing, so only walk the stretch
    // of the segment that crosses it
    let (w, h) = (sim.grid.width() as f64, sim.grid.height() as f64);
    let Some((t_min, t_max)) = clip_segment(sx, sy, dx, dy, w, h) else {
        return 0;
    };
    let first = ((t_min * steps as f64).floor() as i64 - 1).max(0);
    let last = ((t_max * steps as f64).ceil() as i64 + 1).min(steps - 1);

    let mut placed = 0;
    for step in first..=last {
        let t = step as f64 / steps as f64;
        let px = (sx + dx * t) as i32;
        let py = (sy + dy * t) as i32;
        placed += spawn_at(sim, px, py, material, radius);
    }
    placed
}

/// Parameter range `[t_min, t_max]` within `0..=1` where `start + delta * t`
/// lies in `[-1, w] x [-1, h]`, one cell wider than the grid on every side.
fn clip_segment(sx: f64, sy: f64, dx: f64, dy: f64, w: f64, h: f64) -> Option<(f64, f64)> {
    let mut range = (0.0_f64, 1.0_f64);
    for (start, delta, hi) in [(sx, dx, w), (sy, dy, h)] {
        if delta == 0.0 {
            if start < -1.0 || start > hi {
                return None;
            }
            continue;
        }
        let (a, b) = ((-1.0 - start) / delta, (hi - start) / delta);
        range.0 = range.0.max(a.min(b));
        range.1 = range.1.min(a.max(b));
    }
    (range.0 <= range.1).then_some(range)
}

pub(super) fn paint_at(sim: &mut SimulationCore, x: i32, y: i32) -> usize {
    let (material, radius) = (sim.current_material, sim.settings.brush_radius);
    spawn_at(sim, x, y, material, radius)
}

pub(super) fn paint_stroke(sim: &mut SimulationCore, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
    let (material, radius) = (sim.current_material, sim.settings.brush_radius);
    spawn_between(sim, x0, y0, x1, y1, material, radius)
}

pub(super) fn erase_at(sim: &mut SimulationCore, x: i32, y: i32, radius: i32) -> usize {
    let mut cleared = 0;
    for (dx, dy) in disc(radius) {
        let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
        if !sim.grid.in_bounds(px, py) || sim.grid.is_empty(px, py) {
            continue;
        }
        sim.grid.clear_cell(px as u32, py as u32);
        cleared += 1;
    }
    cleared
}

pub(super) fn reset(sim: &mut SimulationCore) {
    sim.grid.reset();
    sim.tick_stats.reset();
    tracing::debug!(frame = sim.frame, "simulation reset");
}

pub(super) fn set_current_material(sim: &mut SimulationCore, material: Material) {
    sim.current_material = material;
    tracing::debug!(material = material.key(), "current material selected");
}
