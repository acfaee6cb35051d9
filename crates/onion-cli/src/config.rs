//! Application settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns settings; the core crate never sees them. These are not the
//! architecture document, only defaults for working with one.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ONION_DEFAULTS__UI_FRAMEWORK=vue`
//! 3. Settings file: `--config FILE`, otherwise the user config dir and then
//!    `.onion.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use onion_core::domain::{DiFramework, UiFramework};

/// Per-directory settings file, read after the user-wide one.
pub const LOCAL_CONFIG: &str = ".onion.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for documents and new architectures.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Document used when `--file` is not given.
    pub file: PathBuf,
    pub ui_framework: UiFramework,
    pub di_framework: DiFramework,
    pub folder_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                file: PathBuf::from("onion.json"),
                ui_framework: UiFramework::default(),
                di_framework: DiFramework::default(),
                folder_path: String::new(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load settings by layering defaults, files and environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to encode default settings")?,
        );

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit settings file");
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                builder = builder
                    .add_source(File::from(Self::config_path()).required(false))
                    .add_source(File::from(Path::new(LOCAL_CONFIG)).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ONION")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Failed to deserialize settings")
    }

    /// Path to the user-wide settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.onion.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "onion", "onion")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// Look up a dotted key, e.g. `defaults.ui_framework`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.file" => self.defaults.file.display().to_string(),
            "defaults.ui_framework" => self.defaults.ui_framework.to_string(),
            "defaults.di_framework" => self.defaults.di_framework.to_string(),
            "defaults.folder_path" => self.defaults.folder_path.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    pub const KEYS: [&'static str; 6] = [
        "defaults.file",
        "defaults.ui_framework",
        "defaults.di_framework",
        "defaults.folder_path",
        "output.no_color",
        "output.format",
    ];
}
