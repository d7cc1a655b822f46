//! Tests for loading the vectorizer/classifier pair from disk

use sentinel_common::artifacts::{Artifacts, CLASSIFIER_FILE, VECTORIZER_FILE};
use sentinel_common::{clean_text, Error};
use std::fs;
use tempfile::TempDir;

const VECTORIZER: &str = r#"{
    "vocabulary": {"confirm": 0, "hoax": 1},
    "idf": [1.2, 1.7]
}"#;

const CLASSIFIER: &str = r#"{"classes": [0, 1], "coef": [[2.0, -2.0]], "intercept": [-0.1]}"#;

fn artifact_dir(vectorizer: Option<&str>, classifier: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    if let Some(content) = vectorizer {
        fs::write(dir.path().join(VECTORIZER_FILE), content).unwrap();
    }
    if let Some(content) = classifier {
        fs::write(dir.path().join(CLASSIFIER_FILE), content).unwrap();
    }
    dir
}

#[test]
fn test_load_matched_pair() {
    let dir = artifact_dir(Some(VECTORIZER), Some(CLASSIFIER));
    let artifacts = Artifacts::load_from_dir(dir.path()).unwrap();

    assert_eq!(artifacts.vectorizer.n_features(), 2);
    assert_eq!(artifacts.classifier.n_features(), 2);

    let confirmed = clean_text("Officials CONFIRM it");
    let satire = clean_text("[Satire] total HOAX!");
    let rows = artifacts
        .vectorizer
        .transform(&[confirmed.as_str(), satire.as_str()])
        .unwrap();
    assert_eq!(artifacts.classifier.predict(&rows).unwrap(), vec![1, 0]);
}

#[test]
fn test_missing_vectorizer_file() {
    let dir = artifact_dir(None, Some(CLASSIFIER));
    let err = Artifacts::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, Error::ArtifactRead { .. }));
}

#[test]
fn test_missing_classifier_file() {
    let dir = artifact_dir(Some(VECTORIZER), None);
    let err = Artifacts::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, Error::ArtifactRead { .. }));
}

#[test]
fn test_corrupt_artifact() {
    let dir = artifact_dir(Some("\u{80}pickle"), Some(CLASSIFIER));
    let err = Artifacts::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, Error::ArtifactParse { .. }));
}

#[test]
fn test_feature_width_mismatch() {
    let dir = artifact_dir(
        Some(VECTORIZER),
        Some(r#"{"classes": [0, 1], "coef": [1.0, 2.0, 3.0], "intercept": 0.0}"#),
    );
    let err = Artifacts::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Artifact(_)));
}
