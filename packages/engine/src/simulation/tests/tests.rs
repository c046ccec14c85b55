use super::*;
use crate::domain::Material;

fn count(sim: &SimulationCore, material: Material) -> usize {
    sim.grid.materials.iter().filter(|&&m| m == material).count()
}

#[test]
fn new_simulation_is_empty_and_transparent() {
    let sim = SimulationCore::new(7, 3);
    assert_eq!(sim.width(), 7);
    assert_eq!(sim.height(), 3);
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.particle_count(), 0);
    assert_eq!(sim.current_material(), Material::Sand);
    assert!(sim.color_buffer().iter().all(|c| *c == Color::TRANSPARENT));
}

#[test]
fn with_settings_rejects_invalid_settings() {
    let bad = SimSettings { lava_spread_chance: 2.0, ..SimSettings::default() };
    assert!(SimulationCore::with_settings(4, 4, bad).is_err());
}

#[test]
fn spawn_at_fills_a_disc_without_overwriting() {
    let mut sim = SimulationCore::new(11, 11);
    assert_eq!(sim.spawn_at(5, 5, Material::Sand, 2), 13);
    for y in 0..11 {
        for x in 0..11 {
            let d2 = (x - 5) * (x - 5) + (y - 5) * (y - 5);
            let m = sim.at(x, y).map(|c| c.material);
            if d2 <= 4 {
                assert_eq!(m, Ok(Material::Sand));
                assert!(!sim.grid.color_at(x as u32, y as u32).is_transparent());
            } else {
                assert_eq!(m, Ok(Material::Empty));
            }
        }
    }

    assert_eq!(sim.spawn_at(5, 5, Material::Water, 2), 0);
    assert_eq!(count(&sim, Material::Water), 0);
}

#[test]
fn spawn_at_clips_to_the_grid_and_ignores_outside_centers() {
    let mut sim = SimulationCore::new(8, 8);
    assert_eq!(sim.spawn_at(0, 0, Material::Stone, 2), 6);
    assert_eq!(sim.spawn_at(-1, 4, Material::Stone, 2), 0);
    assert_eq!(sim.spawn_at(4, 8, Material::Stone, 2), 0);
    assert_eq!(sim.particle_count(), 6);
}

#[test]
fn spawn_at_with_empty_or_negative_radius() {
    let mut sim = SimulationCore::new(4, 4);
    assert_eq!(sim.spawn_at(1, 1, Material::Empty, 2), 0);
    assert_eq!(sim.spawn_at(1, 1, Material::Sand, -3), 1);
    assert_eq!(sim.particle_count(), 1);
}

#[test]
fn spawn_between_stamps_every_other_cell_and_skips_the_end() {
    let mut sim = SimulationCore::new(12, 3);
    assert_eq!(sim.spawn_between(0, 1, 10, 1, Material::Stone, 0), 5);
    for x in [0, 2, 4, 6, 8] {
        assert_eq!(sim.grid.material_at(x, 1), Material::Stone);
    }
    assert_eq!(sim.grid.material_at(10, 1), Material::Empty);
}

#[test]
fn spawn_between_same_point_is_a_single_stamp() {
    let mut sim = SimulationCore::new(5, 5);
    assert_eq!(sim.spawn_between(2, 2, 2, 2, Material::Wood, 1), 5);
}

#[test]
fn paint_uses_current_material_and_brush() {
    let mut sim = SimulationCore::new(9, 9);
    sim.set_current_material(Material::Oil);
    assert_eq!(sim.paint_at(4, 4), 13);
    assert_eq!(count(&sim, Material::Oil), 13);

    sim.apply_settings(SimSettings { brush_radius: 0, ..SimSettings::default() }).expect("valid");
    assert_eq!(sim.current_material(), Material::Oil);
    assert_eq!(sim.paint_stroke(0, 0, 4, 0), 2);
    assert_eq!(count(&sim, Material::Oil), 15);
}

#[test]
fn erase_clears_cells_in_radius() {
    let mut sim = SimulationCore::new(9, 9);
    sim.spawn_at(4, 4, Material::Stone, 3);
    let before = sim.particle_count();
    assert_eq!(sim.erase_at(4, 4, 1), 5);
    assert_eq!(sim.particle_count(), before - 5);
    assert_eq!(sim.grid.color_at(4, 4), Color::TRANSPARENT);
    assert_eq!(sim.erase_at(4, 4, 1), 0);
}

#[test]
fn reset_is_idempotent_and_keeps_frame() {
    let mut sim = SimulationCore::new(6, 6);
    sim.spawn_at(3, 3, Material::Water, 2);
    sim.tick(1.0 / 60.0);
    sim.reset();
    let colors_once = sim.color_bytes().to_vec();
    sim.reset();
    assert_eq!(sim.color_bytes(), &colors_once[..]);
    assert_eq!(sim.particle_count(), 0);
    assert_eq!(sim.frame(), 1);
    assert!(colors_once.iter().all(|&b| b == 0));
}

#[test]
fn tick_clears_every_updated_flag() {
    let mut sim = SimulationCore::new(10, 10);
    sim.spawn_at(5, 2, Material::Sand, 2);
    sim.spawn_at(5, 7, Material::Water, 2);
    sim.tick(1.0 / 60.0);
    assert!(sim.grid.updated.iter().all(|u| !u));
    assert_eq!(sim.frame(), 1);
}

#[test]
fn tick_ages_particles_and_ignores_bad_deltas() {
    let mut sim = SimulationCore::new(3, 3);
    sim.spawn_at(1, 1, Material::Stone, 0);
    sim.tick(0.5);
    assert_eq!(sim.grid.age(1, 1), 0.5);
    sim.tick(-1.0);
    sim.tick(f32::NAN);
    assert_eq!(sim.grid.age(1, 1), 0.5);
}

#[test]
fn same_seed_replays_identically() {
    let run = || {
        let mut sim = SimulationCore::new(16, 16);
        sim.spawn_at(8, 2, Material::Water, 3);
        sim.spawn_at(4, 10, Material::Fire, 2);
        sim.spawn_at(12, 10, Material::Oil, 2);
        for _ in 0..30 {
            sim.tick_default();
        }
        sim.color_bytes().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn perf_metrics_are_opt_in() {
    let mut sim = SimulationCore::new(8, 8);
    sim.spawn_at(4, 0, Material::Sand, 0);
    sim.tick_default();
    assert_eq!(sim.tick_stats(), TickStats::default());

    sim.enable_perf_metrics(true);
    sim.tick_default();
    let stats = sim.tick_stats();
    assert_eq!(stats.cells_processed(), 1);
    assert_eq!(stats.particles_moved(), 1);
    assert_eq!(stats.particle_count(), 1);
    assert!(stats.tick_ms() >= 0.0);

    sim.enable_perf_metrics(false);
    assert_eq!(sim.tick_stats(), TickStats::default());
}

#[test]
fn load_settings_json_validates() {
    let mut sim = SimulationCore::new(4, 4);
    sim.load_settings_json(r#"{"brushRadius":5,"initialMaterial":"water"}"#).expect("valid json");
    assert_eq!(sim.settings().brush_radius, 5);
    assert_eq!(sim.current_material(), Material::Sand);
    assert!(sim.load_settings_json(r#"{"explosionRadius":99}"#).is_err());
    assert_eq!(sim.settings().brush_radius, 5);
}

#[test]
fn oversized_radius_is_clamped_to_the_brush_range() {
    let mut sim = SimulationCore::new(8, 8);
    assert_eq!(sim.spawn_at(3, 3, Material::Sand, 50_000), 64);
    assert_eq!(sim.erase_at(3, 3, i32::MAX), 64);
    assert_eq!(sim.spawn_at(3, 3, Material::Sand, i32::MIN), 1);
}

#[test]
fn erase_far_off_the_grid_is_ignored() {
    let mut sim = SimulationCore::new(8, 8);
    sim.spawn_at(7, 7, Material::Stone, 2);
    let before = sim.particle_count();
    assert_eq!(sim.erase_at(i32::MAX, i32::MAX, 3), 0);
    assert_eq!(sim.erase_at(i32::MIN, 0, 64), 0);
    assert_eq!(sim.particle_count(), before);
}

#[test]
fn spawn_between_extreme_endpoints_only_stamps_the_grid() {
    let mut sim = SimulationCore::new(8, 8);
    let placed = sim.spawn_between(i32::MIN, 0, 3, 3, Material::Sand, 1);
    assert!(placed > 0);
    assert_eq!(placed, sim.particle_count());

    let mut sim = SimulationCore::new(8, 8);
    let placed = sim.spawn_between(0, 0, 2_000_000_000, 0, Material::Stone, 0);
    assert!((4..=5).contains(&placed), "placed {}", placed);
    assert_eq!(sim.grid.material_at(0, 0), Material::Stone);
    assert_eq!(count(&sim, Material::Stone), placed);

    assert_eq!(sim.spawn_between(i32::MIN, i32::MIN, i32::MAX, i32::MIN, Material::Sand, 1), 0);
}

#[test]
fn spawn_between_entering_from_off_grid_matches_the_full_walk() {
    let (x0, y0, x1, y1) = (-40, -7, 9, 3);
    let mut sim = SimulationCore::new(10, 4);
    let placed = sim.spawn_between(x0, y0, x1, y1, Material::Stone, 0);

    // Every stamp of the whole segment, off-grid ones dropped
    let (dx, dy) = ((x1 - x0) as f64, (y1 - y0) as f64);
    let steps = ((dx.hypot(dy) * 0.5) as i64).max(1);
    let mut expected: Vec<(i32, i32)> = (0..steps)
        .map(|step| {
            let t = step as f64 / steps as f64;
            ((x0 as f64 + dx * t) as i32, (y0 as f64 + dy * t) as i32)
        })
        .filter(|&(x, y)| (0..10).contains(&x) && (0..4).contains(&y))
        .collect();
    expected.dedup();

    assert!(!expected.is_empty());
    assert_eq!(placed, expected.len());
    for (x, y) in expected {
        assert_eq!(sim.grid.material_at(x as u32, y as u32), Material::Stone);
    }
}
