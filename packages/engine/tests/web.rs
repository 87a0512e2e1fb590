#![cfg(target_arch = "wasm32")]

use platformer_physics::World;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn positions_are_interleaved() {
    let mut world = World::new();
    world.add_obstacle(0.0, -0.5, 10.0, 0.5).unwrap();
    world.add_character(-1.0, 0.5, 0.25, 0.5).unwrap();
    world.add_character(2.0, 0.5, 0.25, 0.5).unwrap();
    world.step();

    let positions = world.character_positions().to_vec();
    assert_eq!(positions.len(), 4);
    assert_eq!(positions[0], -1.0);
    assert_eq!(positions[2], 2.0);
}

#[wasm_bindgen_test]
fn bad_scene_is_a_js_error() {
    assert!(World::from_scene_json("{ nope").is_err());
}
