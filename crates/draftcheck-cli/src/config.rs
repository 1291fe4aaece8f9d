//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the [`DraftDefaults`]
//! taken from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables, `DRAFTCHECK__SECTION__KEY`
//! 3. The `--config` file, or else `.draftcheck.toml` in the current
//!    directory layered over the user config file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use draftcheck_core::domain::DraftDefaults;
use draftcheck_adapters::DocumentFormat;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".draftcheck.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Values filled into drafts that leave them empty.
    #[serde(default)]
    pub defaults: DraftDefaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// `draftcheck check` settings.
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Extensions read when walking a directory.
    pub extensions: Vec<String>,
    pub fail_fast: bool,
    pub recursive: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            extensions: DocumentFormat::DEFAULT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            fail_fast: false,
            recursive: true,
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to seed built-in defaults")?,
        );

        match config_file {
            Some(path) => {
                anyhow::ensure!(path.exists(), "config file not found: {}", path.display());
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                builder = builder
                    .add_source(
                        File::from(Self::config_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    )
                    .add_source(
                        File::from(Self::local_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
            }
        }

        builder
            .add_source(
                Environment::with_prefix("DRAFTCHECK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.draftcheck.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "draftcheck", "draftcheck")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(Self::local_path)
    }

    /// Path to the per-directory configuration file.
    pub fn local_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// The file that wins resolution, if any exists.
    pub fn active_path(config_file: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = config_file {
            return Some(path.to_path_buf());
        }
        [Self::local_path(), Self::config_path()]
            .into_iter()
            .find(|p| p.exists())
    }

    /// Render as TOML, the format `init` writes.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}
