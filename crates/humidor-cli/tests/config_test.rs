mod common;
use common::stocked_world;

use humidor_testing::TestWorld;

#[test]
fn test_config_set_and_show() {
    let world = TestWorld::new();
    assert!(world.run(&["init"]).unwrap().success());

    let result = world.run_json(&["config", "set", "theme", "midnight"]).unwrap();
    assert!(result.success(), "config set failed: {}", result.stderr());
    assert_eq!(result.json().unwrap()["content"]["theme"], "midnight");

    let json = world.run_json(&["config", "show"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["theme"], "midnight");
    assert_eq!(json["content"]["top_n"], 5);
    assert_eq!(json["content"]["other_scope"], "featured");
}

#[test]
fn test_config_set_rejects_bad_values() {
    let world = TestWorld::new();
    assert!(world.run(&["init"]).unwrap().success());

    assert!(!world.run(&["config", "set", "top-n", "many"]).unwrap().success());
    assert!(!world.run(&["config", "set", "colour", "red"]).unwrap().success());

    let json = world.run_json(&["config", "show"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["top_n"], 5);
}

#[test]
fn test_configured_panels_drive_the_dashboard() {
    let world = stocked_world();

    let result = world
        .run(&["config", "set", "panels", "summary,top-brands"])
        .unwrap();
    assert!(result.success(), "config set failed: {}", result.stderr());

    let json = world.run_json(&["dashboard"]).unwrap().json().unwrap();
    let keys: Vec<&str> = json["content"]["panels"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["key"].as_str())
        .collect();
    assert_eq!(keys, vec!["summary", "top_brands"]);
}

#[test]
fn test_store_stats_and_vacuum() {
    let world = stocked_world();

    let json = world.run_json(&["store", "stats"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["humidors"], 2);
    assert_eq!(json["content"]["cigars"], 4);
    assert_eq!(json["content"]["journal_entries"], 1);
    assert_eq!(json["content"]["total_quantity"], 22);
    assert_eq!(json["content"]["schema_version"], 3);

    let result = world.run_json(&["store", "vacuum"]).unwrap();
    assert!(result.success(), "vacuum failed: {}", result.stderr());
}
