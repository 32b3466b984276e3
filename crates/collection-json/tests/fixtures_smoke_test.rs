use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use collection_json::{Entity, from_document};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

#[test]
fn smoke_test_valid_fixtures_round_trip() {
    let fixtures = collect_json_files(fixtures_dir());
    assert!(!fixtures.is_empty(), "No fixtures found in tests/fixtures");

    let mut failed = Vec::new();

    for path in &fixtures {
        let source = fs::read_to_string(path).expect("Failed to read fixture");
        let original: Value = serde_json::from_str(&source).expect("Fixture is valid JSON");

        match from_document(&source) {
            Ok(collection) => {
                if collection.to_value() != original {
                    failed.push((path.clone(), "re-emitted document differs".to_string()));
                }
                match from_document(&collection.to_text()) {
                    Ok(reparsed) if reparsed == collection => {}
                    Ok(_) => failed.push((path.clone(), "reparsed collection differs".to_string())),
                    Err(err) => failed.push((path.clone(), err.to_string())),
                }
            }
            Err(err) => failed.push((path.clone(), err.to_string())),
        }
    }

    if !failed.is_empty() {
        for (path, reason) in &failed {
            eprintln!("  - {}: {}", path.display(), reason);
        }
        panic!("{} fixture(s) failed", failed.len());
    }
}

#[test]
fn smoke_test_error_fixtures_fail() {
    let fixtures = collect_json_files(fixtures_dir().join("errors"));
    assert!(!fixtures.is_empty(), "No fixtures found in tests/fixtures/errors");

    let mut unexpectedly_passed = Vec::new();

    for path in &fixtures {
        let source = fs::read_to_string(path).expect("Failed to read fixture");
        match from_document(&source) {
            Ok(_) => unexpectedly_passed.push(path.clone()),
            Err(err) => assert!(
                !err.diagnostics().is_empty(),
                "{}: error without diagnostics",
                path.display()
            ),
        }
    }

    assert!(
        unexpectedly_passed.is_empty(),
        "Error fixtures parsed successfully: {unexpectedly_passed:?}"
    );
}
