use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};

use super::component::{nest, ComponentSpec};
use super::scaffold::ensure_parent_exists;
use crate::error::MakeError;
use crate::modules::ModuleDescriptor;

/// Template data for a component feature test
#[derive(Template)]
#[template(path = "livewire.test.stub", escape = "none")]
pub struct FeatureTestTemplateData {
    /// Namespace of the test class
    pub namespace: String,
    /// Fully-qualified class of the component under test
    pub component_class: String,
    /// Short class name of the component
    pub class_name: String,
}

/// Where feature tests for components are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestLayout {
    /// Root namespace of generated tests (no trailing `\`)
    pub namespace: String,
    /// Directory mirroring `namespace`
    pub dir: PathBuf,
}

impl TestLayout {
    /// `tests/Feature/Livewire` inside a module.
    pub fn for_module(module: &ModuleDescriptor) -> Self {
        Self {
            namespace: module.qualify("Tests\\Feature\\Livewire"),
            dir: module.path("tests/Feature/Livewire"),
        }
    }

    /// `tests/Feature/Livewire` of the application.
    pub fn for_app(base_path: &Path) -> Self {
        Self {
            namespace: "Tests\\Feature\\Livewire".to_string(),
            dir: base_path.join("tests").join("Feature").join("Livewire"),
        }
    }

    /// Test file of `component`.
    pub fn test_file(&self, component: &ComponentSpec) -> PathBuf {
        nest(
            &self.dir,
            &format!("{}Test.php", component.class_name.replace('\\', "/")),
        )
    }

    /// Namespace of the test class for `component`.
    pub fn test_namespace(&self, component: &ComponentSpec) -> String {
        let mut namespace = self.namespace.clone();
        if let Some((sub, _)) = component.class_name.rsplit_once('\\') {
            namespace.push('\\');
            namespace.push_str(sub);
        }
        namespace
    }
}

/// Write the feature test for `component`
///
/// Overwrites an existing test, like the component files themselves.
///
/// # Errors
///
/// Returns [`MakeError::Io`] if the directory or file cannot be written.
pub fn write_feature_test(
    layout: &TestLayout,
    component: &ComponentSpec,
) -> Result<PathBuf, MakeError> {
    let path = layout.test_file(component);
    let rendered = FeatureTestTemplateData {
        namespace: layout.test_namespace(component),
        component_class: component.qualified_class(),
        class_name: component.short_class.clone(),
    }
    .render()
    .map_err(|source| MakeError::Render {
        path: path.clone(),
        source,
    })?;

    ensure_parent_exists(&path)?;
    fs::write(&path, rendered).map_err(|e| MakeError::io(&path, e))?;
    tracing::info!(test = %path.display(), "wrote feature test");
    Ok(path)
}
