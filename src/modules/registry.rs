use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{ModuleDescriptor, ModuleLookup};
use crate::config::ModulesConfig;
use crate::generator::studly;

/// Modules of an application, keyed by name
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, ModuleDescriptor>,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerManifest {
    #[serde(default)]
    autoload: ComposerAutoload,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerAutoload {
    #[serde(default, rename = "psr-4")]
    psr4: serde_json::Map<String, serde_json::Value>,
}

impl ComposerManifest {
    /// Namespace mapped to `src/`, or the first PSR-4 namespace in file order.
    fn root_namespace(&self) -> Option<&str> {
        let maps_to_src = |value: &serde_json::Value| match value {
            serde_json::Value::String(dir) => dir.trim_end_matches('/') == "src",
            serde_json::Value::Array(dirs) => dirs
                .iter()
                .any(|d| d.as_str().map(|d| d.trim_end_matches('/')) == Some("src")),
            _ => false,
        };
        self.autoload
            .psr4
            .iter()
            .find(|(_, dir)| maps_to_src(dir))
            .or_else(|| self.autoload.psr4.iter().next())
            .map(|(namespace, _)| namespace.as_str())
    }
}

impl ModuleRegistry {
    /// Build a registry from already-resolved descriptors.
    pub fn from_modules(modules: impl IntoIterator<Item = ModuleDescriptor>) -> Self {
        Self {
            modules: modules
                .into_iter()
                .map(|m| (m.name().to_string(), m))
                .collect(),
        }
    }

    /// Discover the modules of the application rooted at `base_path`
    ///
    /// Every sub-directory of the modules directory holding a `composer.json`
    /// is a module named after the directory. A missing modules directory
    /// yields an empty registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the modules directory cannot be listed or a
    /// `composer.json` cannot be read or parsed.
    pub fn discover(base_path: &Path, config: &ModulesConfig) -> anyhow::Result<Self> {
        let modules_dir = base_path.join(&config.directory);
        if !modules_dir.is_dir() {
            tracing::debug!(dir = %modules_dir.display(), "no modules directory");
            return Ok(Self::default());
        }

        let mut modules = Vec::new();
        let entries = fs::read_dir(&modules_dir)
            .with_context(|| format!("Failed to list modules in {}", modules_dir.display()))?;
        for entry in entries {
            let entry = entry?;
            let root = entry.path();
            let manifest_path = root.join("composer.json");
            if !root.is_dir() || !manifest_path.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();

            let raw = fs::read_to_string(&manifest_path)
                .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
            let manifest: ComposerManifest = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

            let namespace = match manifest.root_namespace() {
                Some(ns) => ns.to_string(),
                None => format!("{}\\{}\\", config.namespace, studly(&name)),
            };
            tracing::debug!(module = %name, %namespace, root = %root.display(), "discovered module");
            modules.push(ModuleDescriptor::new(name, root, namespace));
        }

        Ok(Self::from_modules(modules))
    }

    /// All modules, ordered by name
    pub fn modules(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleLookup for ModuleRegistry {
    fn module(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_module(base: &Path, name: &str, composer: &str) {
        let dir = base.join("app-modules").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("composer.json"), composer).unwrap();
    }

    #[test]
    fn discovers_modules_with_composer_manifests() {
        let base = tempfile::tempdir().unwrap();
        write_module(
            base.path(),
            "crm",
            r#"{"name": "modules/crm", "autoload": {"psr-4": {"Modules\\Crm\\": "src/"}}}"#,
        );
        write_module(base.path(), "billing", r#"{"name": "modules/billing"}"#);
        fs::create_dir_all(base.path().join("app-modules").join("not-a-module")).unwrap();

        let registry = ModuleRegistry::discover(base.path(), &ModulesConfig::default()).unwrap();
        assert_eq!(registry.len(), 2);

        let crm = registry.module("crm").unwrap();
        assert_eq!(crm.qualify("Livewire"), "Modules\\Crm\\Livewire");
        assert!(crm.root_path().ends_with("app-modules/crm"));

        let billing = registry.module("billing").unwrap();
        assert_eq!(billing.namespace(), "Modules\\Billing\\");
        assert!(registry.module("not-a-module").is_none());
    }

    #[test]
    fn prefers_the_namespace_mapped_to_src() {
        let base = tempfile::tempdir().unwrap();
        write_module(
            base.path(),
            "crm",
            r#"{"autoload": {"psr-4": {"Aaa\\Database\\": "database/", "Zed\\Crm\\": "src/"}}}"#,
        );
        let registry = ModuleRegistry::discover(base.path(), &ModulesConfig::default()).unwrap();
        assert_eq!(registry.module("crm").unwrap().namespace(), "Zed\\Crm\\");
    }

    #[test]
    fn falls_back_to_the_first_namespace_in_file_order() {
        let base = tempfile::tempdir().unwrap();
        write_module(
            base.path(),
            "crm",
            r#"{"autoload": {"psr-4": {"Zed\\Crm\\": "lib/", "Aaa\\Crm\\": "other/"}}}"#,
        );
        let registry = ModuleRegistry::discover(base.path(), &ModulesConfig::default()).unwrap();
        assert_eq!(registry.module("crm").unwrap().namespace(), "Zed\\Crm\\");
    }

    #[test]
    fn missing_directory_is_an_empty_registry() {
        let base = tempfile::tempdir().unwrap();
        let registry = ModuleRegistry::discover(base.path(), &ModulesConfig::default()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn broken_manifest_is_reported() {
        let base = tempfile::tempdir().unwrap();
        write_module(base.path(), "crm", "{ not json");
        let err = ModuleRegistry::discover(base.path(), &ModulesConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
