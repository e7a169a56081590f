use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub depth: usize,
    pub keep_upper: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: 10,
            keep_upper: false,
        }
    }
}

/// One configuration file layer; keys absent from the file leave the value
/// from earlier layers in place.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    depth: Option<usize>,
    keep_upper: Option<bool>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(depth: Option<usize>, keep_upper: bool) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.apply(ConfigFile::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".recase.toml");
        if local_path.exists() {
            config.apply(ConfigFile::from_file(&local_path)?);
        }

        // Apply CLI overrides
        if let Some(depth) = depth {
            config.depth = depth;
        }
        if keep_upper {
            config.keep_upper = true;
        }

        Ok(config)
    }

    fn apply(&mut self, layer: ConfigFile) {
        if let Some(depth) = layer.depth {
            self.depth = depth;
        }
        if let Some(keep_upper) = layer.keep_upper {
            self.keep_upper = keep_upper;
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

impl ConfigFile {
    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
