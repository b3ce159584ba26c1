use std::fs;
use std::path::{Path, PathBuf};

use super::component::ComponentSpec;
use crate::error::MakeError;

/// Paths written by [`ScaffoldWriter::write`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    pub class_file_path: PathBuf,
    pub template_file_path: PathBuf,
}

impl WriteResult {
    /// Success line reported to the console
    pub fn message(&self) -> String {
        format!(
            "Livewire component [{}] created successfully.",
            self.class_file_path.display()
        )
    }
}

/// Writes a component's class and view files from stubs
///
/// Existing files are overwritten without confirmation. A failure part-way
/// (class written, view not) is left as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScaffoldWriter;

impl ScaffoldWriter {
    /// Render and write both files of `spec`.
    ///
    /// # Errors
    ///
    /// [`MakeError::Io`] naming the first directory or file that failed.
    pub fn write(
        &self,
        spec: &ComponentSpec,
        class_stub: &str,
        view_stub: &str,
    ) -> Result<WriteResult, MakeError> {
        ensure_parent_exists(&spec.class_file_path)?;
        ensure_parent_exists(&spec.template_file_path)?;

        let class_content = render_class(spec, class_stub);

        fs::write(&spec.class_file_path, class_content)
            .map_err(|e| MakeError::io(&spec.class_file_path, e))?;
        fs::write(&spec.template_file_path, view_stub)
            .map_err(|e| MakeError::io(&spec.template_file_path, e))?;

        tracing::info!(
            class = %spec.class_file_path.display(),
            view = %spec.template_file_path.display(),
            "wrote component files"
        );
        Ok(WriteResult {
            class_file_path: spec.class_file_path.clone(),
            template_file_path: spec.template_file_path.clone(),
        })
    }
}

/// Substitute `[namespace]`, `[class]` and `[view]` in a class stub.
pub fn render_class(spec: &ComponentSpec, class_stub: &str) -> String {
    class_stub
        .replace("[namespace]", &spec.namespace)
        .replace("[class]", &spec.short_class)
        .replace("[view]", &spec.template_id)
}

/// Create the parent directory of `path` if missing.
pub(crate) fn ensure_parent_exists(path: &Path) -> Result<(), MakeError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| MakeError::io(dir, e))
        }
        _ => Ok(()),
    }
}
