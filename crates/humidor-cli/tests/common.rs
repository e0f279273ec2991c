use humidor_testing::TestWorld;

/// Initialised world holding the sample collection.
pub fn stocked_world() -> TestWorld {
    let world = TestWorld::new();
    assert!(world.run(&["init"]).unwrap().success());

    let file = world.with_sample_collection().unwrap();
    let result = world.run(&["import", file.to_str().unwrap()]).unwrap();
    assert!(result.success(), "import failed: {}", result.stderr());
    world
}
