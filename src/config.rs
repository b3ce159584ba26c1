//! Project configuration for the generator
//!
//! Loaded from `modular-livewire.toml` at the application root. Every key is
//! optional; a missing file means "use the Laravel defaults".

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the application root
pub const CONFIG_FILE: &str = "modular-livewire.toml";

/// Settings for the default (non-module) Livewire generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LivewireConfig {
    /// Namespace generated classes live in (`livewire.class_namespace`)
    pub class_namespace: String,
    /// View directory relative to the application root (`livewire.view_path`)
    pub view_path: String,
    /// Root namespace of the application, mapped to the `app/` directory
    pub app_namespace: String,
}

impl Default for LivewireConfig {
    fn default() -> Self {
        Self {
            class_namespace: "App\\Livewire".to_string(),
            view_path: "resources/views/livewire".to_string(),
            app_namespace: "App\\".to_string(),
        }
    }
}

/// Settings for module discovery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModulesConfig {
    /// Directory holding one sub-directory per module
    pub directory: String,
    /// Namespace prefix used when a module's composer.json has no PSR-4 entry
    pub namespace: String,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            directory: "app-modules".to_string(),
            namespace: "Modules".to_string(),
        }
    }
}

/// Complete configuration loaded from `modular-livewire.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    pub livewire: LivewireConfig,
    pub modules: ModulesConfig,
}

impl ProjectConfig {
    /// Load the configuration for the application at `base_path`
    ///
    /// Returns the defaults when the file does not exist, and an error when
    /// it exists but cannot be read or parsed.
    pub fn load(base_path: &Path) -> anyhow::Result<Self> {
        let config_path = config_path(base_path);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: ProjectConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "loaded project config");
        Ok(config)
    }
}

/// Path of the config file for the application at `base_path`
pub fn config_path(base_path: &Path) -> PathBuf {
    base_path.join(CONFIG_FILE)
}
