use particle_sim_engine::{Material, SimSettings, SimulationCore};

const DT: f32 = 1.0 / 60.0;

fn material(sim: &SimulationCore, x: i32, y: i32) -> Material {
    sim.at(x, y).expect("in bounds").material
}

fn count(sim: &SimulationCore, m: Material) -> usize {
    let (w, h) = (sim.width() as i32, sim.height() as i32);
    (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| material(sim, x, y) == m)
        .count()
}

fn seeded(width: u32, height: u32, seed: u64) -> SimulationCore {
    let settings = SimSettings { seed, ..SimSettings::default() };
    SimulationCore::with_settings(width, height, settings).expect("valid settings")
}

#[test]
fn single_grain_reaches_the_floor_in_nine_ticks() {
    let mut sim = SimulationCore::new(10, 10);
    assert_eq!(sim.spawn_at(5, 0, Material::Sand, 0), 1);

    for _ in 0..9 {
        sim.tick(DT);
    }
    assert_eq!(material(&sim, 5, 9), Material::Sand);
    assert_eq!(sim.particle_count(), 1);

    for _ in 0..20 {
        sim.tick(DT);
        assert_eq!(material(&sim, 5, 9), Material::Sand);
    }
}

#[test]
fn grain_lands_within_height_ticks_on_any_column() {
    for x in [0, 3, 7] {
        let mut sim = SimulationCore::new(8, 13);
        sim.spawn_at(x, 0, Material::Sand, 0);
        for _ in 0..13 {
            sim.tick(DT);
        }
        assert_eq!(material(&sim, x, 12), Material::Sand);
    }
}

#[test]
fn lava_on_water_becomes_stone_and_steam() {
    let mut sim = SimulationCore::new(5, 5);
    sim.spawn_at(2, 2, Material::Lava, 0);
    sim.spawn_at(2, 3, Material::Water, 0);
    sim.tick(DT);
    assert_eq!(material(&sim, 2, 2), Material::Stone);
    assert_eq!(material(&sim, 2, 3), Material::Steam);
}

#[test]
fn fire_beside_water_always_becomes_steam() {
    let mut both = 0;
    for seed in 0..400 {
        let mut sim = seeded(5, 5, seed);
        sim.spawn_at(2, 2, Material::Fire, 0);
        sim.spawn_at(3, 2, Material::Water, 0);
        sim.tick(DT);
        assert_eq!(material(&sim, 2, 2), Material::Steam, "seed {}", seed);
        if count(&sim, Material::Steam) == 2 {
            both += 1;
        }
    }
    // The water joins in about half the time
    assert!((140..=260).contains(&both), "water converted {} / 400", both);
}

#[test]
fn fire_under_water_is_put_out_from_above() {
    let mut sim = SimulationCore::new(5, 5);
    sim.spawn_at(2, 1, Material::Water, 0);
    sim.spawn_at(2, 2, Material::Fire, 0);
    sim.tick(DT);
    assert_eq!(material(&sim, 2, 2), Material::Steam);
}

#[test]
fn sand_heap_has_no_floating_grains() {
    let mut sim = seeded(21, 15, 77);
    sim.spawn_at(10, 3, Material::Sand, 3);
    let grains = sim.particle_count();
    for _ in 0..200 {
        sim.tick(DT);
    }
    assert_eq!(sim.particle_count(), grains);
    for y in 0..14 {
        for x in 0..21 {
            if material(&sim, x, y) == Material::Sand {
                assert_ne!(material(&sim, x, y + 1), Material::Empty, "grain at ({}, {}) floats", x, y);
            }
        }
    }
}

#[test]
fn oil_ends_up_above_water() {
    let mut sim = SimulationCore::new(1, 4);
    sim.spawn_at(0, 0, Material::Water, 0);
    sim.spawn_at(0, 1, Material::Water, 0);
    sim.spawn_at(0, 2, Material::Oil, 0);
    sim.spawn_at(0, 3, Material::Oil, 0);
    for _ in 0..20 {
        sim.tick(DT);
    }
    assert_eq!(material(&sim, 0, 0), Material::Oil);
    assert_eq!(material(&sim, 0, 1), Material::Oil);
    assert_eq!(material(&sim, 0, 2), Material::Water);
    assert_eq!(material(&sim, 0, 3), Material::Water);
}

#[test]
fn gunpowder_touching_fire_explodes() {
    let mut sim = SimulationCore::new(9, 9);
    sim.spawn_at(4, 8, Material::Gunpowder, 0);
    sim.spawn_at(5, 8, Material::Fire, 0);
    sim.tick(DT);
    assert_eq!(count(&sim, Material::Gunpowder), 0);
    // The blast covers far more than the two starting cells
    assert!(sim.particle_count() > 10);
}

#[test]
fn embers_burn_out() {
    let mut sim = SimulationCore::new(6, 6);
    sim.spawn_at(3, 3, Material::Ember, 1);
    for _ in 0..40 {
        sim.tick(DT);
    }
    assert_eq!(sim.particle_count(), 0);
}

#[test]
fn smoke_clears_after_its_lifetime() {
    let mut sim = SimulationCore::new(6, 6);
    sim.spawn_at(3, 4, Material::Smoke, 1);
    for _ in 0..9 {
        sim.tick(1.0);
    }
    assert_eq!(sim.particle_count(), 0);
    assert!(sim.color_bytes().iter().all(|&b| b == 0));
}

#[test]
fn steam_condenses_when_told_to() {
    let settings = SimSettings { steam_condense_chance: 1.0, ..SimSettings::default() };
    let mut sim = SimulationCore::with_settings(3, 3, settings).expect("valid settings");
    sim.spawn_at(1, 1, Material::Steam, 0);
    sim.tick(DT);
    assert_eq!(count(&sim, Material::Water), 1);
    assert_eq!(count(&sim, Material::Steam), 0);
}

#[test]
fn wood_and_stone_never_move() {
    let mut sim = SimulationCore::new(6, 6);
    sim.spawn_at(1, 0, Material::Wood, 0);
    sim.spawn_at(4, 2, Material::Stone, 0);
    for _ in 0..30 {
        sim.tick(DT);
    }
    assert_eq!(material(&sim, 1, 0), Material::Wood);
    assert_eq!(material(&sim, 4, 2), Material::Stone);
}

#[test]
fn settings_json_drives_a_new_simulation() {
    let settings = SimSettings::from_json(r#"{"seed":3,"brushRadius":1,"initialMaterial":"stone"}"#)
        .expect("valid settings");
    let mut sim = SimulationCore::with_settings(5, 5, settings).expect("valid settings");
    assert_eq!(sim.paint_at(2, 2), 5);
    assert_eq!(count(&sim, Material::Stone), 5);
}
