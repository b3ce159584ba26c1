//! # Modules
//!
//! A module is a self-contained subtree of the application with its own root
//! directory and root namespace. This module holds the [`ModuleDescriptor`]
//! handle, the [`ModuleLookup`] seam the generator resolves modules through,
//! and [`resolve_module`], which turns the `--module` option into a descriptor.
//!
//! ```rust
//! use modular_livewire::modules::ModuleDescriptor;
//!
//! let crm = ModuleDescriptor::new("Crm", "/app/Modules/Crm", "Crm\\");
//! assert_eq!(crm.qualify("Livewire"), "Crm\\Livewire");
//! assert_eq!(
//!     crm.path("src/Livewire/Dashboard.php"),
//!     std::path::PathBuf::from("/app/Modules/Crm/src/Livewire/Dashboard.php")
//! );
//! ```

mod registry;

pub use registry::ModuleRegistry;

use crate::error::MakeError;
use std::path::{Path, PathBuf};

/// Resolved handle to a module: name, root directory and root namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    name: String,
    root_path: PathBuf,
    namespace: String,
}

impl ModuleDescriptor {
    /// Build a descriptor. A trailing `\` is appended to `namespace` when missing.
    pub fn new(
        name: impl Into<String>,
        root_path: impl Into<PathBuf>,
        namespace: impl Into<String>,
    ) -> Self {
        let mut namespace = namespace.into();
        if !namespace.is_empty() && !namespace.ends_with('\\') {
            namespace.push('\\');
        }
        Self {
            name: name.into(),
            root_path: root_path.into(),
            namespace,
        }
    }

    /// Module name, unique within its registry
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the module's root directory
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Root namespace, always ending in `\`
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Qualify `suffix` with the module's root namespace.
    pub fn qualify(&self, suffix: &str) -> String {
        format!("{}{}", self.namespace, suffix.trim_start_matches('\\'))
    }

    /// Resolve `relative` against the module root.
    pub fn path(&self, relative: &str) -> PathBuf {
        let relative = relative.trim_end_matches('/');
        if relative.is_empty() {
            self.root_path.clone()
        } else {
            self.root_path.join(relative)
        }
    }
}

/// Lookup of modules by name
pub trait ModuleLookup {
    /// The module registered under `name`, if any.
    fn module(&self, name: &str) -> Option<&ModuleDescriptor>;
}

/// Turn the `--module` option into a descriptor.
///
/// `None`, an empty value or `"0"` means no module was requested and the
/// caller must fall back to the default generator.
///
/// # Errors
///
/// [`MakeError::UnknownModule`] when a name was given but is not registered.
pub fn resolve_module<'a, L>(
    registry: &'a L,
    option: Option<&str>,
) -> Result<Option<&'a ModuleDescriptor>, MakeError>
where
    L: ModuleLookup + ?Sized,
{
    let name = match option {
        Some(name) if !name.is_empty() && name != "0" => name,
        _ => return Ok(None),
    };

    match registry.module(name) {
        Some(module) => Ok(Some(module)),
        None => Err(MakeError::UnknownModule {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ModuleRegistry {
        ModuleRegistry::from_modules(vec![
            ModuleDescriptor::new("Crm", "/app/Modules/Crm", "Crm\\"),
            ModuleDescriptor::new("billing", "/app/app-modules/billing", "Modules\\Billing"),
        ])
    }

    #[test]
    fn qualify_strips_leading_separators() {
        let module = ModuleDescriptor::new("billing", "/m/billing", "Modules\\Billing");
        assert_eq!(module.namespace(), "Modules\\Billing\\");
        assert_eq!(module.qualify("\\Livewire"), "Modules\\Billing\\Livewire");
        assert_eq!(module.qualify(""), "Modules\\Billing\\");
    }

    #[test]
    fn path_trims_trailing_slashes() {
        let module = ModuleDescriptor::new("billing", "/m/billing", "Modules\\Billing\\");
        assert_eq!(module.path(""), PathBuf::from("/m/billing"));
        assert_eq!(
            module.path("resources/views/livewire/"),
            PathBuf::from("/m/billing/resources/views/livewire")
        );
    }

    #[test]
    fn absent_option_resolves_to_none() {
        let registry = registry();
        assert_eq!(resolve_module(&registry, None).unwrap(), None);
        assert_eq!(resolve_module(&registry, Some("")).unwrap(), None);
        assert_eq!(resolve_module(&registry, Some("0")).unwrap(), None);
    }

    #[test]
    fn known_module_is_passed_through() {
        let registry = registry();
        let resolved = resolve_module(&registry, Some("Crm")).unwrap().unwrap();
        assert!(std::ptr::eq(resolved, registry.module("Crm").unwrap()));
    }

    #[test]
    fn unknown_module_carries_the_name() {
        let registry = registry();
        let err = resolve_module(&registry, Some("Inventory")).unwrap_err();
        match &err {
            MakeError::UnknownModule { name } => assert_eq!(name, "Inventory"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "The \"Inventory\" module does not exist.");
    }
}
