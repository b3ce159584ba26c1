//! Errors raised while resolving modules and scaffolding components.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit status for a successful command.
pub const SUCCESS: u8 = 0;
/// Exit status for a generic failure (I/O, existing files, dispatch).
pub const FAILURE: u8 = 1;
/// Exit status for an invalid option or usage error.
pub const INVALID: u8 = 2;

/// Failure of a generator command
///
/// Every variant names the offending input so the message printed by the
/// console is actionable on its own.
#[derive(Debug)]
pub enum MakeError {
    /// `--module` named a module the registry does not know
    UnknownModule {
        /// The module name as typed by the user
        name: String,
    },
    /// The component name has no usable segments
    EmptyName,
    /// Directory creation or file write failed
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error, surfaced verbatim
        source: io::Error,
    },
    /// A compiled template failed to render
    Render {
        /// File the template was rendered for
        path: PathBuf,
        /// Underlying template error
        source: askama::Error,
    },
    /// The default generator refuses to overwrite an existing class without `--force`
    ComponentExists {
        /// Existing class file
        path: PathBuf,
    },
    /// No command is registered under this name
    CommandNotFound {
        /// Requested command name
        name: String,
    },
}

impl MakeError {
    /// Wrap an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MakeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    ///
    /// Option and usage errors map to [`INVALID`] so callers can tell a bad
    /// `--module` value apart from a filesystem failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            MakeError::UnknownModule { .. } | MakeError::EmptyName => INVALID,
            MakeError::Io { .. }
            | MakeError::Render { .. }
            | MakeError::ComponentExists { .. }
            | MakeError::CommandNotFound { .. } => FAILURE,
        }
    }
}

impl fmt::Display for MakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MakeError::UnknownModule { name } => {
                write!(f, "The \"{}\" module does not exist.", name)
            }
            MakeError::EmptyName => write!(f, "A component name is required."),
            MakeError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            MakeError::Render { path, source } => {
                write!(f, "Failed to render {}: {}", path.display(), source)
            }
            MakeError::ComponentExists { path } => {
                write!(f, "Component already exists [{}].", path.display())
            }
            MakeError::CommandNotFound { name } => {
                write!(f, "Command \"{}\" is not defined.", name)
            }
        }
    }
}

impl std::error::Error for MakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MakeError::Io { source, .. } => Some(source),
            MakeError::Render { source, .. } => Some(source),
            _ => None,
        }
    }
}
