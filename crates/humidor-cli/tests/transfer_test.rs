mod common;
use common::stocked_world;

use humidor_testing::TestWorld;
use humidor_testing::assertions::{assert_badge, assert_brands};

#[test]
fn test_export_json_to_stdout_is_the_document() {
    let world = stocked_world();

    // Any --format: the document itself is what goes to stdout
    let result = world.run(&["export"]).unwrap();
    assert!(result.success(), "export failed: {}", result.stderr());

    let document: serde_json::Value = serde_json::from_str(result.stdout()).unwrap();
    assert_eq!(document["humidors"].as_array().unwrap().len(), 2);
    assert_eq!(document["cigars"].as_array().unwrap().len(), 4);
    assert_eq!(document["journalEntries"].as_array().unwrap().len(), 1);
}

#[test]
fn test_export_csv_to_file() {
    let world = stocked_world();
    let path = world.temp_dir().join("cigars.csv");

    let result = world
        .run_json(&["export", "--to", "csv", "--output", path.to_str().unwrap()])
        .unwrap();
    assert!(result.success(), "export failed: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["format"], "csv");
    assert_eq!(json["content"]["records"], 4);

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("id,humidor,brand"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn test_export_then_import_into_another_workspace() {
    let source = stocked_world();
    let path = source.temp_dir().join("backup.json");
    assert!(
        source
            .run(&["export", "-o", path.to_str().unwrap()])
            .unwrap()
            .success()
    );

    let target = TestWorld::new();
    assert!(target.run(&["init"]).unwrap().success());

    let result = target.run_json(&["import", path.to_str().unwrap()]).unwrap();
    assert!(result.success(), "import failed: {}", result.stderr());

    let json = result.json().unwrap();
    assert_badge(&json, "success").unwrap();
    assert_eq!(json["content"]["humidors"], 2);
    assert_eq!(json["content"]["cigars"], 4);
    assert_eq!(json["content"]["journal_entries"], 1);

    let json = target.run_json(&["cigar", "list"]).unwrap().json().unwrap();
    assert_brands(&json, &["Padron", "Davidoff", "Tatuaje", "Acid"]).unwrap();
}

#[test]
fn test_import_skips_bad_records() {
    let world = TestWorld::new();
    assert!(world.run(&["init"]).unwrap().success());

    let file = world
        .write_file(
            "partial.json",
            r#"{
                "humidors": [{"id": "h1", "name": "Travel"}],
                "cigars": [
                    {"id": "c1", "humidorId": "h1", "brand": "Oliva", "quantity": "3"},
                    {"id": "c2", "humidorId": "nowhere", "brand": "Ghost"}
                ]
            }"#,
        )
        .unwrap();

    let result = world.run_json(&["import", file.to_str().unwrap()]).unwrap();
    assert!(result.success(), "import failed: {}", result.stderr());

    let json = result.json().unwrap();
    assert_badge(&json, "warning").unwrap();
    assert_eq!(json["content"]["cigars"], 1);

    let skipped = json["content"]["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["position"], 1);
}

#[test]
fn test_import_replace_clears_existing_records() {
    let world = stocked_world();

    let file = world
        .write_file("travel.json", r#"{"humidors": [{"id": "h9", "name": "Travel"}]}"#)
        .unwrap();
    let result = world
        .run_json(&["import", file.to_str().unwrap(), "--replace"])
        .unwrap();
    assert!(result.success(), "import failed: {}", result.stderr());

    let json = world.run_json(&["store", "stats"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["humidors"], 1);
    assert_eq!(json["content"]["cigars"], 0);
}

#[test]
fn test_import_of_missing_file_fails() {
    let world = TestWorld::new();
    assert!(world.run(&["init"]).unwrap().success());

    let result = world.run(&["import", "does-not-exist.json"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("does-not-exist.json"));
}
