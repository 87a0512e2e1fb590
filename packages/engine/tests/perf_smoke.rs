use platformer_physics::{BodyConfig, Vec2, WorldCore};

#[test]
fn perf_smoke_step() {
    let mut world = WorldCore::new();
    world.add_obstacle(Vec2::new(0.0, -0.5), Vec2::new(64.0, 0.5)).unwrap();
    for i in 0..256 {
        let x = -60.0 + (i % 64) as f32 * 1.8;
        let y = 1.0 + (i / 64) as f32 * 2.0;
        world
            .add_character(Vec2::new(x, y), &BodyConfig::new(0.4, 0.5, -2.0))
            .unwrap();
    }
    world.enable_perf_metrics(true);

    for _ in 0..30 {
        world.step();
    }

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.bodies_ms() >= 0.0);
    assert_eq!(stats.bodies_updated(), 256);
    assert_eq!(stats.contacts(), 256);
}
