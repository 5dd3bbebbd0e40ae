//! Configuration management for the promptsync CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Built-in defaults (project root next to the installed binary)
//! - An optional `promptsync.yaml` in the project root
//! - Environment variables
//! - Command-line flags
//!
//! All paths are resolved against the project root, never the current
//! working directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default prompts directory, relative to the project root.
pub const DEFAULT_PROMPTS_DIR: &str = "docs/prompts";

/// Default target file, relative to the project root.
pub const DEFAULT_TARGET: &str = "js/api.js";

/// Optional per-project config file name.
pub const CONFIG_FILE_NAME: &str = "promptsync.yaml";

/// Environment variable overriding the project root.
pub const ROOT_ENV: &str = "PROMPTSYNC_ROOT";

/// Settings for a single sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Project root; relative paths below are joined onto it
    pub root: PathBuf,

    /// Directory holding the prompt markdown files
    pub prompts_dir: PathBuf,

    /// File containing the `DEFAULT_PROMPTS` block
    pub target: PathBuf,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Render and locate the block without writing the target
    pub dry_run: bool,

    /// Print the summary as JSON
    pub json: bool,
}

/// Layout of `promptsync.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(rename = "promptsDir")]
    prompts_dir: Option<PathBuf>,
    target: Option<PathBuf>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl SyncConfig {
    /// Build the default configuration for a given project root.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prompts_dir: PathBuf::from(DEFAULT_PROMPTS_DIR),
            target: PathBuf::from(DEFAULT_TARGET),
            log_level: None,
            verbose: false,
            no_color: false,
            dry_run: false,
            json: false,
        }
    }

    /// Load configuration from the install location, the project config
    /// file and environment variables.
    ///
    /// Environment variables:
    /// - `PROMPTSYNC_ROOT`: Override the project root
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// `root_override` takes precedence over everything else when set, so
    /// the root is fixed before `promptsync.yaml` is looked up.
    pub fn load(root_override: Option<PathBuf>) -> AppResult<Self> {
        let root = match root_override {
            Some(root) => root,
            None => match std::env::var_os(ROOT_ENV) {
                Some(root) => PathBuf::from(root),
                None => install_root()?,
            },
        };

        let mut config = Self::for_root(root);

        let config_path = config.root.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            config.merge_yaml(&config_path)?;
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        // An empty file deserializes to unit, not a mapping
        if contents.trim().is_empty() {
            return Ok(());
        }

        let file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        tracing::debug!("Merging config file: {:?}", path);

        if let Some(prompts_dir) = file.prompts_dir {
            self.prompts_dir = prompts_dir;
        }

        if let Some(target) = file.target {
            self.target = target;
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
        dry_run: bool,
        json: bool,
    ) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        self.no_color |= no_color;
        self.dry_run = dry_run;
        self.json = json;

        self
    }

    /// Absolute path of the prompts directory.
    pub fn prompts_path(&self) -> PathBuf {
        self.root.join(&self.prompts_dir)
    }

    /// Absolute path of the target file.
    pub fn target_path(&self) -> PathBuf {
        self.root.join(&self.target)
    }

    /// Check that both the prompts directory and the target file exist.
    pub fn validate(&self) -> AppResult<()> {
        let prompts = self.prompts_path();
        if !prompts.is_dir() {
            return Err(AppError::Config(format!(
                "Prompts directory not found: {}",
                prompts.display()
            )));
        }

        let target = self.target_path();
        if !target.is_file() {
            let name = target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Target file".to_string());
            return Err(AppError::Config(format!(
                "{} not found: {}",
                name,
                target.display()
            )));
        }

        Ok(())
    }
}

/// Project root derived from the running executable: the parent of the
/// directory the binary lives in.
pub fn install_root() -> AppResult<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| AppError::Config(format!("Cannot locate executable: {}", e)))?;
    let exe = exe.canonicalize().unwrap_or(exe);
    root_from_executable(&exe)
}

fn root_from_executable(exe: &Path) -> AppResult<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            AppError::Config(format!(
                "Cannot derive project root from executable path: {}",
                exe.display()
            ))
        })
}
