use std::fs;
use std::path::Path;

use crate::error::MakeError;

/// Class stub file name
pub const CLASS_STUB: &str = "livewire.stub";
/// View stub file name
pub const VIEW_STUB: &str = "livewire.view.stub";

const DEFAULT_CLASS_STUB: &str = include_str!("../../stubs/livewire.stub");
const DEFAULT_VIEW_STUB: &str = include_str!("../../stubs/livewire.view.stub");

/// Stub texts used to render a class-based component
///
/// Stubs are read once and never mutated; rendering works on copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubSet {
    pub class: String,
    pub view: String,
}

impl Default for StubSet {
    fn default() -> Self {
        Self {
            class: DEFAULT_CLASS_STUB.to_string(),
            view: DEFAULT_VIEW_STUB.to_string(),
        }
    }
}

impl StubSet {
    /// Load stubs, preferring `<base>/stubs/<name>` over the built-in ones.
    ///
    /// # Errors
    ///
    /// Returns [`MakeError::Io`] if a custom stub exists but cannot be read.
    pub fn load(base_path: &Path) -> Result<Self, MakeError> {
        let custom = base_path.join("stubs");
        Ok(Self {
            class: read_stub(&custom, CLASS_STUB, DEFAULT_CLASS_STUB)?,
            view: read_stub(&custom, VIEW_STUB, DEFAULT_VIEW_STUB)?,
        })
    }
}

fn read_stub(dir: &Path, name: &str, fallback: &str) -> Result<String, MakeError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Ok(fallback.to_string());
    }
    tracing::debug!(stub = %path.display(), "using custom stub");
    fs::read_to_string(&path).map_err(|e| MakeError::io(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_class_stub_has_every_token() {
        let stubs = StubSet::default();
        for token in ["[namespace]", "[class]", "[view]"] {
            assert_eq!(stubs.class.matches(token).count(), 1, "{token}");
        }
        assert!(stubs.view.starts_with("<div>"));
    }

    #[test]
    fn custom_stub_overrides_builtin() {
        let base = tempfile::tempdir().unwrap();
        fs::create_dir_all(base.path().join("stubs")).unwrap();
        fs::write(base.path().join("stubs").join(VIEW_STUB), "<section></section>\n").unwrap();

        let stubs = StubSet::load(base.path()).unwrap();
        assert_eq!(stubs.view, "<section></section>\n");
        assert_eq!(stubs.class, StubSet::default().class);
    }
}
