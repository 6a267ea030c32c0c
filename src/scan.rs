//! Line-oriented scanner for resource manifests and stylesheets.
//!
//! Both formats are read one line at a time and only a single construct per
//! line is recognised.  The scanner turns each line into an optional
//! [`ScanEvent`]; everything else in the file is ignored.
//!
//! Resource manifest:
//! ```xml
//! <qresource prefix="/gui">
//!   <file alias="logo.png">art/logo.png</file>
//! </qresource>
//! ```
//!
//! Stylesheet:
//! ```text
//! using "basic/basic.style"
//! ```
use anyhow::{Context as _, Result};
use std::path::Path;

/// A dependency reference found on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    /// `<file ...>path</file>` in a resource manifest.
    FileReference(&'a str),
    /// `using "path"` in a stylesheet.
    Import(&'a str),
}

impl<'a> ScanEvent<'a> {
    /// The referenced path, exactly as written.
    #[must_use]
    pub const fn path(&self) -> &'a str {
        match self {
            Self::FileReference(p) | Self::Import(p) => p,
        }
    }
}

/// Which grammar to apply to each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Resource manifest (`<file>` entries).
    Manifest,
    /// Stylesheet (`using` directives).
    Style,
}

impl Grammar {
    /// Classify a single line.
    #[must_use]
    pub fn scan_line(self, line: &str) -> Option<ScanEvent<'_>> {
        match self {
            Self::Manifest => scan_file_entry(line).map(ScanEvent::FileReference),
            Self::Style => scan_using(line).map(ScanEvent::Import),
        }
    }
}

/// Scan text and return every event in line order.
///
/// # Examples
///
/// ```
/// use update_dependent::scan::{Grammar, ScanEvent, scan_str};
///
/// let events = scan_str(Grammar::Style, "using \"basic.style\"\nother: 1px;\n");
/// assert_eq!(events, [ScanEvent::Import("basic.style")]);
/// ```
#[must_use]
pub fn scan_str(grammar: Grammar, content: &str) -> Vec<ScanEvent<'_>> {
    content
        .lines()
        .filter_map(|line| grammar.scan_line(line))
        .collect()
}

/// Read `path` and return the referenced paths in line order.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn scan_file(grammar: Grammar, path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(scan_str(grammar, &content)
        .into_iter()
        .map(|event| event.path().to_string())
        .collect())
}

/// Match `<file>path</file>` or `<file attrs>path</file>` at the start of a
/// line (leading whitespace allowed).  The path stops at the first `<`, which
/// must open the closing tag.
fn scan_file_entry(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("<file")?;
    let rest = match rest.chars().next()? {
        '>' => rest.get(1..)?,
        c if c.is_whitespace() => {
            let close = rest.find('>')?;
            rest.get(close + 1..)?
        }
        _ => return None,
    };
    let end = rest.find('<')?;
    let path = rest.get(..end)?;
    if path.is_empty() || !rest.get(end..)?.starts_with("</file>") {
        return None;
    }
    Some(path)
}

/// Match `using "path"` at the start of a line (leading whitespace allowed).
fn scan_using(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("using")?;
    let unspaced = rest.trim_start_matches([' ', '\t']);
    if unspaced.len() == rest.len() {
        return None;
    }
    let quoted = unspaced.strip_prefix('"')?;
    let end = quoted.find('"')?;
    let path = quoted.get(..end)?;
    if path.is_empty() {
        return None;
    }
    Some(path)
}
