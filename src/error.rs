//! Domain-specific error types for dependency discovery and stamping.
//!
//! Every error is fatal.  Library code raises [`DependentError`] values inside
//! [`anyhow::Error`] so callers can still `downcast_ref` to the typed variant;
//! the binary reports the chain and exits non-zero.
//!
//! # Error taxonomy
//!
//! ```text
//! DependentError
//! ├── FileNotFound       - manifest, stylesheet or dependency missing
//! ├── UnresolvedImport   - `using` path not found in any include directory
//! ├── CyclicDependency   - stylesheet imports itself, directly or not
//! ├── UnknownFileType    - `-t` value is not style, qrc or qrc_list
//! ├── MissingFileType    - no `-t` given
//! ├── MissingOutputFile  - no `-o` given for a mode that stamps the marker
//! └── Io                 - any other filesystem failure
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level error type for the dependency toucher.
#[derive(Error, Debug)]
pub enum DependentError {
    /// A manifest, stylesheet or dependency does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path that was expected to be a regular file.
        path: PathBuf,
    },

    /// A `using` directive names a file absent from every include directory.
    #[error("File not found: {import} (imported from {})", .from.display())]
    UnresolvedImport {
        /// Relative path exactly as written in the directive.
        import: String,
        /// Stylesheet containing the directive.
        from: PathBuf,
    },

    /// A stylesheet depends on itself through a chain of imports.
    #[error("Cyclic dependencies: {}", format_chain(.chain))]
    CyclicDependency {
        /// Import chain, first and last elements are the same file.
        chain: Vec<PathBuf>,
    },

    /// The `-t` value does not name a known file type.
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    /// No `-t` option was supplied.
    #[error("File type was not provided.")]
    MissingFileType,

    /// The selected mode reconciles the marker file but no `-o` was supplied.
    #[error("Output file (-o) is required for file type '{mode}'")]
    MissingOutputFile {
        /// Name of the selected mode.
        mode: String,
    },

    /// An I/O error occurred on a specific path.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl DependentError {
    /// Build a [`DependentError::FileNotFound`] for `path`.
    #[must_use]
    pub fn not_found(path: &Path) -> Self {
        Self::FileNotFound {
            path: path.to_path_buf(),
        }
    }

    /// Wrap an I/O error that occurred on `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Render an import chain as `a -> b -> a`.
fn format_chain(chain: &[PathBuf]) -> String {
    let mut out = String::new();
    for (i, path) in chain.iter().enumerate() {
        if i > 0 {
            out.push_str(" -> ");
        }
        let _ = write!(out, "{}", path.display());
    }
    out
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn file_not_found_display() {
        let e = DependentError::not_found(Path::new("/res/app.qrc"));
        assert_eq!(e.to_string(), "File not found: /res/app.qrc");
    }

    #[test]
    fn unresolved_import_display() {
        let e = DependentError::UnresolvedImport {
            import: "basic.style".to_string(),
            from: PathBuf::from("/ui/widgets.style"),
        };
        assert_eq!(
            e.to_string(),
            "File not found: basic.style (imported from /ui/widgets.style)"
        );
    }

    #[test]
    fn cyclic_dependency_display() {
        let e = DependentError::CyclicDependency {
            chain: vec![
                PathBuf::from("a.style"),
                PathBuf::from("b.style"),
                PathBuf::from("a.style"),
            ],
        };
        assert_eq!(
            e.to_string(),
            "Cyclic dependencies: a.style -> b.style -> a.style"
        );
    }

    #[test]
    fn unknown_file_type_display() {
        let e = DependentError::UnknownFileType("foo".to_string());
        assert_eq!(e.to_string(), "Unknown file type: foo");
    }

    #[test]
    fn missing_file_type_display() {
        assert_eq!(
            DependentError::MissingFileType.to_string(),
            "File type was not provided."
        );
    }

    #[test]
    fn missing_output_file_display() {
        let e = DependentError::MissingOutputFile {
            mode: "qrc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Output file (-o) is required for file type 'qrc'"
        );
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error as StdError;
        let e = DependentError::io(
            Path::new("/out/changed"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(e.to_string().contains("/out/changed"));
        assert!(e.source().is_some());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn dependent_error_is_send_sync() {
        assert_send_sync::<DependentError>();
    }

    #[test]
    fn dependent_error_converts_to_anyhow() {
        let e = DependentError::MissingFileType;
        let _anyhow_err: anyhow::Error = e.into();
    }
}
