//! Release fixture generator: end-to-end save and load tests
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use release_fixture_generator::{
    clock::FixedClock, document, generate_and_save, GeneratorError, ReleaseFixtureGenerator,
};
use serde_json::Value;
use std::fs;

const NOW: i64 = 1_650_000_000;

#[test]
fn writes_a_document_of_one_hundred_releases() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    let summary = ReleaseFixtureGenerator::seeded(0, FixedClock(NOW))
        .generate_and_save(&path)
        .unwrap();
    assert_eq!(summary.count(), 100);
    assert_eq!(summary.path(), path.as_path());

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let releases = value.as_array().unwrap();
    assert_eq!(releases.len(), 100);

    for (i, release) in releases.iter().enumerate() {
        assert_eq!(release.as_object().unwrap().len(), 3);
        assert_eq!(release["version"], format!("1.0.{}", i + 1));
        assert_eq!(release["timestamp"], NOW - (99 - i as i64) * 3600);

        let tests = release["tests"].as_array().unwrap();
        assert!((1..=5).contains(&tests.len()));
        for test in tests {
            let host = test["host"].as_u64().unwrap();
            let result = test["result"].as_u64().unwrap();
            assert!((1..=10).contains(&host));
            assert!((1..=3).contains(&result));
        }
    }
}

#[test]
fn document_keeps_field_order_and_indentation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("releases.json");

    ReleaseFixtureGenerator::seeded(4, FixedClock(NOW))
        .generate_and_save(&path)
        .unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("[\n    {\n        \"timestamp\": "));
    let timestamp = text.find("\"timestamp\"").unwrap();
    let version = text.find("\"version\"").unwrap();
    let tests = text.find("\"tests\"").unwrap();
    let result = text.find("\"result\"").unwrap();
    let host = text.find("\"host\"").unwrap();
    assert!(timestamp < version && version < tests);
    assert!(result < host);
}

#[test]
fn saved_document_round_trips_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("releases.json");

    ReleaseFixtureGenerator::seeded(9, FixedClock(NOW))
        .generate_and_save(&path)
        .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let releases = document::load(&path).unwrap();
    assert_eq!(document::render(&releases).unwrap(), written);
}

#[test]
fn rerunning_overwrites_instead_of_appending() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("releases.json");
    fs::write(&path, "x".repeat(1 << 20)).unwrap();

    ReleaseFixtureGenerator::seeded(1, FixedClock(NOW))
        .generate_and_save(&path)
        .unwrap();
    let first = document::load(&path).unwrap();

    ReleaseFixtureGenerator::seeded(2, FixedClock(NOW + 60))
        .generate_and_save(&path)
        .unwrap();
    let second = document::load(&path).unwrap();

    assert_eq!(first.len(), 100);
    assert_eq!(second.len(), 100);
    assert_eq!(second.last().unwrap().timestamp(), NOW + 60);
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");

    ReleaseFixtureGenerator::seeded(11, FixedClock(NOW))
        .generate_and_save(&a)
        .unwrap();
    ReleaseFixtureGenerator::seeded(11, FixedClock(NOW))
        .generate_and_save(&b)
        .unwrap();

    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn missing_directory_fails_without_creating_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.json");

    match generate_and_save(&path) {
        Err(GeneratorError::WriteFailure { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!path.exists());
    assert!(!dir.path().join("no-such-dir").exists());
}

#[test]
fn entropy_seeded_runs_satisfy_the_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("releases.json");

    for _ in 0..2 {
        let summary = generate_and_save(&path).unwrap();
        assert_eq!(summary.count(), 100);

        let releases = document::load(&path).unwrap();
        assert_eq!(releases.len(), 100);
        for pair in releases.windows(2) {
            assert!(pair[0].timestamp() <= pair[1].timestamp());
        }
    }
}
