use super::*;

const EPS: f32 = 1e-4;

fn body_config() -> BodyConfig {
    BodyConfig::new(0.25, 0.5, -2.0)
}

/// Floor with its top face at y = 0.5
fn world_with_floor() -> WorldCore {
    let mut world = WorldCore::new();
    world
        .add_obstacle(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.5))
        .unwrap();
    world
}

fn elevator(stops: Vec<f32>, wait_ticks: u32) -> PlatformConfig {
    PlatformConfig {
        half_width: 1.0,
        half_height: 0.25,
        stops,
        speed: 0.05,
        wait_ticks,
    }
}

#[test]
fn character_falls_and_rests_on_floor() {
    let mut world = world_with_floor();
    let id = world.add_character(Vec2::new(0.0, 2.0), &body_config()).unwrap();

    for _ in 0..50 {
        world.step();
    }

    let body = world.character(id).unwrap();
    assert!((body.position().y - 1.0).abs() < EPS, "y = {}", body.position().y);
    assert!(body.is_on_ground());
    assert_eq!(world.frame(), 50);
    assert_eq!(world.obstacles().get(id).unwrap().position, body.position());
}

#[test]
fn characters_do_not_block_each_other() {
    let mut world = world_with_floor();
    let low = world.add_character(Vec2::new(0.0, 1.0), &body_config()).unwrap();
    let high = world.add_character(Vec2::new(0.0, 2.5), &body_config()).unwrap();

    for _ in 0..50 {
        world.step();
    }

    let low_y = world.character(low).unwrap().position().y;
    let high_y = world.character(high).unwrap().position().y;
    assert!((low_y - 1.0).abs() < EPS);
    assert!((high_y - 1.0).abs() < EPS);
}

#[test]
fn elevator_lifts_its_rider() {
    let mut world = WorldCore::new();
    let config = BodyConfig::new(0.4, 0.5, -2.0);
    let rider = world.add_character(Vec2::new(0.0, 0.75), &config).unwrap();
    let lift = world.add_platform(Vec2::ZERO, &elevator(vec![1.0, 0.0], 100)).unwrap();

    for _ in 0..30 {
        world.step();
    }

    let platform_y = world.platform_position(lift).unwrap().y;
    assert!((platform_y - 1.0).abs() < EPS, "platform y = {}", platform_y);

    let body = world.character(rider).unwrap();
    assert!((body.position().y - 1.75).abs() < EPS, "rider y = {}", body.position().y);
    assert!(body.is_on_ground());
    assert_eq!(body.obstacle_below().map(|a| a.handle), Some(lift));
}

#[test]
fn perf_stats_count_carried_riders() {
    let mut world = WorldCore::new();
    let config = BodyConfig::new(0.4, 0.5, -2.0);
    world.add_character(Vec2::new(0.0, 0.75), &config).unwrap();
    world.add_platform(Vec2::ZERO, &elevator(vec![1.0, 0.0], 100)).unwrap();
    world.enable_perf_metrics(true);

    world.step();

    let stats = world.get_perf_stats();
    assert_eq!(stats.passengers_carried(), 1);
    assert_eq!(stats.bodies_updated(), 1);
    assert_eq!(stats.contacts(), 1);
    assert_eq!(stats.colliders(), 2);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn parked_platform_drops_last_movements() {
    let mut world = WorldCore::new();
    let config = BodyConfig::new(0.4, 0.5, -2.0);
    world.add_character(Vec2::new(0.0, 0.75), &config).unwrap();
    // One tick reaches the first stop, then it dwells.
    world.add_platform(Vec2::ZERO, &elevator(vec![0.05, 0.0], 5)).unwrap();

    world.step();
    assert_eq!(world.platforms[0].transport.movements().len(), 1);

    world.step();
    assert!(world.platforms[0].transport.movements().is_empty());
}

#[test]
fn perf_stats_stay_zero_when_disabled() {
    let mut world = world_with_floor();
    world.add_character(Vec2::new(0.0, 1.0), &body_config()).unwrap();
    world.step();

    let stats = world.get_perf_stats();
    assert_eq!(stats.bodies_updated(), 0);
    assert_eq!(stats.step_ms(), 0.0);
}

#[test]
fn invalid_entities_are_rejected() {
    let mut world = WorldCore::new();
    assert!(world.add_obstacle(Vec2::ZERO, Vec2::new(0.0, 1.0)).is_err());
    assert!(world.add_character(Vec2::ZERO, &BodyConfig::new(-1.0, 0.5, -2.0)).is_err());

    let mut thin = elevator(vec![0.0], 0);
    thin.half_height = 0.01;
    assert!(world.add_platform(Vec2::ZERO, &thin).is_err());

    assert_eq!(world.obstacles().len(), 0);
    assert_eq!(world.character_count(), 0);
    assert_eq!(world.platform_count(), 0);
}

#[test]
fn remove_obstacle_leaves_characters_and_platforms_alone() {
    let mut world = world_with_floor();
    let character = world.add_character(Vec2::new(0.0, 3.0), &body_config()).unwrap();
    let platform = world.add_platform(Vec2::new(3.0, 1.0), &elevator(vec![1.0], 0)).unwrap();

    assert!(!world.remove_obstacle(character));
    assert!(!world.remove_obstacle(platform));
    assert_eq!(world.obstacles().len(), 3);

    assert!(world.remove_character(character));
    assert!(world.character(character).is_none());
    assert!(world.obstacles().get(character).is_none());
    assert!(!world.remove_character(character));

    assert!(world.remove_platform(platform));
    assert!(world.platform_position(platform).is_none());
    assert_eq!(world.obstacles().len(), 1);
}

#[test]
fn removing_the_floor_lets_a_character_fall() {
    let mut world = WorldCore::new();
    let floor = world.add_obstacle(Vec2::ZERO, Vec2::new(4.0, 0.5)).unwrap();
    let id = world.add_character(Vec2::new(0.0, 1.0), &body_config()).unwrap();
    world.step();
    assert!(world.character(id).unwrap().is_on_ground());

    assert!(world.remove_obstacle(floor));
    world.step();

    let body = world.character(id).unwrap();
    assert!(!body.is_on_ground());
    assert!(body.position().y < 1.0);
}

#[test]
fn teleport_moves_the_collider_on_next_step() {
    let mut world = world_with_floor();
    let id = world.add_character(Vec2::new(0.0, 1.0), &body_config()).unwrap();
    world.step();

    world.character_mut(id).unwrap().set_position(Vec2::new(2.0, 1.0));
    world.step();

    let collider = world.obstacles().get(id).unwrap();
    assert!((collider.position.x - 2.0).abs() < EPS);
    assert!(world.character(id).unwrap().is_on_ground());
}

#[test]
fn set_settings_validates() {
    let mut world = WorldCore::new();
    let mut bad = PhysicsSettings::default();
    bad.tick_duration = 0.0;
    assert!(world.set_settings(bad).is_err());
    assert_eq!(world.settings().tick_duration, PhysicsSettings::default().tick_duration);

    let mut slow = PhysicsSettings::default();
    slow.tick_duration = 0.01;
    assert!(world.set_settings(slow).is_ok());
    assert_eq!(world.settings().tick_duration, 0.01);
}

#[test]
fn load_scene_json_builds_world() {
    let json = r#"{
        "settings": { "tick_duration": 0.02 },
        "obstacles": [{ "position": { "x": 0, "y": 0 }, "half_extents": { "x": 4, "y": 0.5 } }],
        "characters": [{ "position": { "x": 0, "y": 2 },
                         "body": { "half_width": 0.25, "half_height": 0.5, "gravity_acceleration": -2 } }],
        "platforms": [{ "position": { "x": 6, "y": 0 },
                        "platform": { "half_width": 1, "half_height": 0.25, "stops": [0, 2], "speed": 0.1 } }]
    }"#;

    let mut world = WorldCore::new();
    world.load_scene_json(json).unwrap();

    assert_eq!(world.obstacles().len(), 3);
    assert_eq!(world.character_count(), 1);
    assert_eq!(world.platform_count(), 1);
    assert_eq!(world.frame(), 0);
}

#[test]
fn bad_scene_keeps_current_world() {
    let mut world = world_with_floor();
    world.add_character(Vec2::new(0.0, 1.0), &body_config()).unwrap();

    let json = r#"{
        "obstacles": [{ "position": { "x": 0, "y": 0 }, "half_extents": { "x": -1, "y": 0.5 } }]
    }"#;
    let err = world.load_scene_json(json).unwrap_err();
    assert!(err.contains("obstacle 0"), "{}", err);

    assert!(world.load_scene_json("{ not json").is_err());
    assert_eq!(world.character_count(), 1);
    assert_eq!(world.obstacles().len(), 2);
}

#[test]
fn clear_resets_everything() {
    let mut world = world_with_floor();
    world.add_character(Vec2::new(0.0, 2.0), &body_config()).unwrap();
    world.add_platform(Vec2::new(3.0, 0.0), &elevator(vec![0.0, 1.0], 0)).unwrap();
    world.step();

    world.clear();

    assert_eq!(world.frame(), 0);
    assert_eq!(world.character_count(), 0);
    assert_eq!(world.platform_count(), 0);
    assert!(world.obstacles().is_empty());
}
