// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed source tree with pinned modification
// times, so each integration test can set up manifests, stylesheets and their
// dependencies without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use filetime::FileTime;
use update_dependent::commands::{self, Outcome};
use update_dependent::config::{FileType, Options};
use update_dependent::logging::Logger;

/// Modification time used for "old" files.
pub const OLD: i64 = 1_000_000;
/// Modification time used for "new" files.
pub const NEW: i64 = 2_000_000;

/// An isolated source tree backed by a [`tempfile::TempDir`].
pub struct Tree {
    /// Temporary directory holding the tree.
    pub root: tempfile::TempDir,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    /// Write `content` to `rel` and pin its mtime to `unix_secs`.
    pub fn file(&self, rel: &str, content: &str, unix_secs: i64) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write file");
        set_mtime(&path, unix_secs);
        path
    }

    /// Create directory `rel` and return its path.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        std::fs::create_dir_all(&path).expect("create dir");
        path
    }
}

/// Pin the mtime of `path`.
pub fn set_mtime(path: &Path, unix_secs: i64) {
    filetime::set_file_mtime(path, FileTime::from_unix_time(unix_secs, 0)).expect("set mtime");
}

/// Current mtime of `path`.
pub fn mtime(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&std::fs::metadata(path).expect("metadata"))
}

/// Whether `path` still carries the pinned mtime `unix_secs`.
pub fn has_mtime(path: &Path, unix_secs: i64) -> bool {
    mtime(path) == FileTime::from_unix_time(unix_secs, 0)
}

/// A `<file>` manifest embedding `entries`.
pub fn manifest(entries: &[&str]) -> String {
    let mut out = String::from("<!DOCTYPE RCC><RCC version=\"1.0\">\n<qresource prefix=\"/gui\">\n");
    for entry in entries {
        out.push_str("    <file>");
        out.push_str(entry);
        out.push_str("</file>\n");
    }
    out.push_str("</qresource>\n</RCC>\n");
    out
}

/// A stylesheet importing `imports`.
pub fn stylesheet(imports: &[&str]) -> String {
    let mut out = String::new();
    for import in imports {
        out.push_str("using \"");
        out.push_str(import);
        out.push_str("\";\n");
    }
    out.push_str("\ndefaultButton: FlatButton {\n    color: windowFg;\n}\n");
    out
}

/// Run the library entry point in a touch mode.
pub fn touch(
    file_type: FileType,
    include_dirs: Vec<PathBuf>,
    marker: &Path,
    inputs: Vec<PathBuf>,
) -> anyhow::Result<Outcome> {
    let options = Options {
        file_type,
        include_dirs,
        output: Some(marker.to_path_buf()),
        inputs,
    };
    let mut out = Vec::new();
    commands::run(&options, &Logger::new(), &mut out)
}
