//! Configuration loading and artifact directory resolution

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{Error, Result};

/// Environment variable naming the artifact directory
pub const ARTIFACT_DIR_ENV: &str = "SENTINEL_ARTIFACT_DIR";

/// Optional TOML configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Directory holding the vectorizer and classifier artifacts
    #[serde(default)]
    pub artifact_dir: Option<PathBuf>,
}

/// Load and parse a TOML configuration file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Platform configuration file location, if one exists on disk
///
/// Linux checks the user config dir first, then /etc.
pub fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("sentinel").join("config.toml"));

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/sentinel/config.toml");
        user_config
            .filter(|p| p.exists())
            .or_else(|| Some(system_config).filter(|p| p.exists()))
    } else {
        user_config.filter(|p| p.exists())
    }
}

/// Resolves the artifact directory in priority order:
/// 1. Command-line argument
/// 2. `SENTINEL_ARTIFACT_DIR` environment variable
/// 3. `artifact_dir` key in the TOML config file
/// 4. Current working directory
#[derive(Debug, Clone, Default)]
pub struct ArtifactDirResolver {
    cli_arg: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl ArtifactDirResolver {
    pub fn new(cli_arg: Option<PathBuf>) -> Self {
        Self {
            cli_arg,
            config_file: None,
        }
    }

    /// Read the TOML tier from `path` instead of the platform location
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// A config file that is absent falls through to the default; one that
    /// exists but cannot be read or parsed is an error.
    pub fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = &self.cli_arg {
            debug!("Artifact directory from command line");
            return Ok(path.clone());
        }

        if let Ok(path) = std::env::var(ARTIFACT_DIR_ENV) {
            if !path.is_empty() {
                debug!("Artifact directory from {}", ARTIFACT_DIR_ENV);
                return Ok(PathBuf::from(path));
            }
        }

        let config_path = self.config_file.clone().or_else(default_config_path);
        if let Some(config_path) = config_path.filter(|p| p.exists()) {
            match load_toml_config(&config_path)? {
                TomlConfig {
                    artifact_dir: Some(dir),
                } => {
                    info!("Artifact directory from {}", config_path.display());
                    return Ok(dir);
                }
                _ => debug!("{} has no artifact_dir", config_path.display()),
            }
        }

        Ok(PathBuf::from("."))
    }
}
