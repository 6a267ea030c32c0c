//! Validated run options.
//!
//! [`Options`] is built from the parsed [`Cli`] before any file is read, so a
//! bad `-t` or a missing `-o` never leaves a half-updated tree behind.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::Cli;
use crate::error::DependentError;

/// Input grammar and mode selected by `-t`.
///
/// # Examples
///
/// ```
/// use update_dependent::config::FileType;
///
/// assert_eq!("qrc_list".parse::<FileType>().unwrap(), FileType::QrcList);
/// assert!("foo".parse::<FileType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Stylesheets with `using` imports; touched when stale.
    Style,
    /// Resource manifests; touched when stale.
    Qrc,
    /// Resource manifests; dependencies are printed, nothing is touched.
    QrcList,
}

impl FileType {
    /// Name as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Qrc => "qrc",
            Self::QrcList => "qrc_list",
        }
    }

    /// Whether this mode reconciles the output marker file.
    #[must_use]
    pub const fn stamps_marker(self) -> bool {
        !matches!(self, Self::QrcList)
    }
}

impl FromStr for FileType {
    type Err = DependentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "style" => Ok(Self::Style),
            "qrc" => Ok(Self::Qrc),
            "qrc_list" => Ok(Self::QrcList),
            other => Err(DependentError::UnknownFileType(other.to_string())),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a run needs, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Selected grammar and mode.
    pub file_type: FileType,
    /// Include directories for `using` resolution, in search order.
    pub include_dirs: Vec<PathBuf>,
    /// Marker file; always present when [`FileType::stamps_marker`] is true.
    pub output: Option<PathBuf>,
    /// Files to process, in command-line order.
    pub inputs: Vec<PathBuf>,
}

impl Options {
    /// The marker file path, if this run reconciles one.
    #[must_use]
    pub fn marker(&self) -> Option<&Path> {
        if self.file_type.stamps_marker() {
            self.output.as_deref()
        } else {
            None
        }
    }
}

impl TryFrom<&Cli> for Options {
    type Error = DependentError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let file_type: FileType = match cli.file_type.as_deref() {
            None | Some("") => return Err(DependentError::MissingFileType),
            Some(name) => name.parse()?,
        };
        if file_type.stamps_marker() && cli.output.is_none() {
            return Err(DependentError::MissingOutputFile {
                mode: file_type.to_string(),
            });
        }
        Ok(Self {
            file_type,
            include_dirs: cli.include_dirs.clone(),
            output: cli.output.clone(),
            inputs: cli.inputs.clone(),
        })
    }
}
