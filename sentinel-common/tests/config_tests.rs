//! Tests for artifact directory resolution
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate SENTINEL_ARTIFACT_DIR are marked with #[serial].

use sentinel_common::config::{load_toml_config, ArtifactDirResolver, ARTIFACT_DIR_ENV};
use sentinel_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_cli_argument_wins() {
    env::set_var(ARTIFACT_DIR_ENV, "/tmp/sentinel-from-env");
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "artifact_dir = \"/tmp/sentinel-from-toml\"\n");

    let resolved = ArtifactDirResolver::new(Some(PathBuf::from("/tmp/sentinel-from-cli")))
        .with_config_file(config)
        .resolve()
        .unwrap();

    assert_eq!(resolved, PathBuf::from("/tmp/sentinel-from-cli"));
    env::remove_var(ARTIFACT_DIR_ENV);
}

#[test]
#[serial]
fn test_env_var_beats_config_file() {
    env::set_var(ARTIFACT_DIR_ENV, "/tmp/sentinel-from-env");
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "artifact_dir = \"/tmp/sentinel-from-toml\"\n");

    let resolved = ArtifactDirResolver::new(None).with_config_file(config).resolve().unwrap();

    assert_eq!(resolved, PathBuf::from("/tmp/sentinel-from-env"));
    env::remove_var(ARTIFACT_DIR_ENV);
}

#[test]
#[serial]
fn test_config_file_used_without_overrides() {
    env::remove_var(ARTIFACT_DIR_ENV);
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "artifact_dir = \"/srv/models\"\n");

    let resolved = ArtifactDirResolver::new(None).with_config_file(config).resolve().unwrap();

    assert_eq!(resolved, PathBuf::from("/srv/models"));
}

#[test]
#[serial]
fn test_falls_back_to_working_directory() {
    env::remove_var(ARTIFACT_DIR_ENV);
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.toml");

    let resolved = ArtifactDirResolver::new(None).with_config_file(missing).resolve().unwrap();

    assert_eq!(resolved, PathBuf::from("."));
}

#[test]
#[serial]
fn test_malformed_config_is_an_error() {
    env::remove_var(ARTIFACT_DIR_ENV);
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "artifact_dir = [not toml");

    let err = ArtifactDirResolver::new(None)
        .with_config_file(config)
        .resolve()
        .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
#[serial]
fn test_malformed_config_ignored_when_env_set() {
    env::set_var(ARTIFACT_DIR_ENV, "/tmp/sentinel-from-env");
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "artifact_dir = [not toml");

    let resolved = ArtifactDirResolver::new(None).with_config_file(config).resolve();

    env::remove_var(ARTIFACT_DIR_ENV);
    assert_eq!(resolved.unwrap(), PathBuf::from("/tmp/sentinel-from-env"));
}

#[test]
fn test_load_toml_config_without_key() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "# empty\n");

    let parsed = load_toml_config(&config).unwrap();
    assert!(parsed.artifact_dir.is_none());
}
