use platformer_physics::{BodyConfig, ColliderHandle, SceneDesc, Vec2, World, WorldCore};

const EPS: f32 = 1e-4;

#[test]
fn falling_body_lands_on_block() {
    let mut world = WorldCore::new();
    world.add_obstacle(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5)).unwrap();
    let id = world
        .add_character(Vec2::new(0.0, 1.5), &BodyConfig::new(0.5, 0.5, -2.0))
        .unwrap();

    world.step();
    let body = world.character(id).unwrap();
    assert_eq!(body.velocity().y, -2.0);
    assert!((body.position().y - 1.46).abs() < 1e-6);
    assert!(!body.is_on_ground());

    for _ in 0..20 {
        world.step();
    }
    let body = world.character(id).unwrap();
    assert!((body.position().y - 1.0).abs() < EPS);
    assert!(body.is_on_ground());
}

#[test]
fn facade_steps_scene_from_json() {
    let json = r#"{
        "obstacles": [
            { "position": { "x": 0, "y": -0.5 }, "half_extents": { "x": 10, "y": 0.5 } }
        ],
        "characters": [
            { "position": { "x": -3, "y": 3 },
              "body": { "half_width": 0.3, "half_height": 0.5, "gravity_acceleration": -2 } },
            { "position": { "x": 4, "y": 0.75 },
              "body": { "half_width": 0.4, "half_height": 0.5, "gravity_acceleration": -2 } }
        ],
        "platforms": [
            { "position": { "x": 4, "y": 0 },
              "platform": { "half_width": 1, "half_height": 0.25, "stops": [2, 0], "speed": 0.1, "wait_ticks": 200 } }
        ]
    }"#;

    let scene = SceneDesc::from_json(json).unwrap();
    assert_eq!(scene.characters.len(), 2);

    let mut world = World::from_scene_json(json).unwrap();
    assert_eq!(world.character_count(), 2);
    assert_eq!(world.platform_count(), 1);

    for _ in 0..60 {
        world.step();
    }

    let ids: Vec<ColliderHandle> = world.core().character_ids().collect();
    let walker = ids[0].id();
    let rider = ids[1].id();

    // Ground top is y = 0, so a resting body sits at its half-height.
    assert!((world.character_y(walker) - 0.5).abs() < EPS);
    assert!(world.is_on_ground(walker));

    // Handles: ground 1, characters 2 and 3, platform 4.
    // Elevator parked at its first stop with the rider on top.
    let platform = world.core().platform_position(ColliderHandle(4)).unwrap();
    assert!((platform.y - 2.0).abs() < EPS);
    assert!((world.character_y(rider) - 2.75).abs() < EPS);
    assert!(world.is_on_ground(rider));
    assert_eq!(world.frame(), 60);
}

#[test]
fn walking_into_a_wall_stops_at_its_face() {
    let mut world = World::new();
    world.add_obstacle(0.0, -0.5, 10.0, 0.5).unwrap();
    world.add_obstacle(3.0, 2.0, 0.5, 2.0).unwrap();
    let id = world.add_character(0.0, 0.5, 0.25, 0.5).unwrap();

    for _ in 0..100 {
        world.add_input_velocity(id, 5.0, 0.0);
        world.step();
    }

    // Wall face at x = 2.5
    assert!((world.character_x(id) - 2.25).abs() < EPS);
    assert!(world.is_on_right_wall(id));
    assert!(world.is_on_ground(id));
}

#[test]
fn unknown_ids_are_reported_not_panicking() {
    let mut world = World::new();
    assert!(world.character_x(42).is_nan());
    assert!(world.platform_y(42).is_nan());
    assert!(!world.add_velocity(42, 1.0, 0.0));
    assert!(!world.is_on_ground(42));
    assert!(!world.remove_character(42));
}
