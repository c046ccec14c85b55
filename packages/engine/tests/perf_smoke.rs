use particle_sim_engine::{el_sand, el_water, Simulation};

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::new(128, 64);
    sim.enable_perf_metrics(true);
    for x in (0..128).step_by(4) {
        sim.spawn_at(x, 8, el_sand(), 2).expect("sand is a material");
        sim.spawn_at(x + 2, 20, el_water(), 1).expect("water is a material");
    }
    let before = sim.particle_count();
    sim.step();

    let stats = sim.tick_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.cells_processed() > 0);
    assert_eq!(stats.particle_count(), before);
    assert_eq!(sim.frame(), 1);
    assert_eq!(sim.colors_len_bytes(), 128 * 64 * 4);
}
