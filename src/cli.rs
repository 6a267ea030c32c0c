//! Command-line grammar.
use clap::Parser;
use std::path::PathBuf;

/// Version reported by `--version`: the `git describe` string captured by the
/// build script when available, otherwise the crate version.
pub const VERSION: &str = match option_env!("UPDATE_DEPENDENT_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Command-line arguments.
///
/// Short options accept their value either attached (`-tstyle`, `-Isrc`,
/// `-ochanged.timestamp`) or as the following token.
#[derive(Parser, Debug)]
#[command(
    name = "update_dependent",
    about = "Touch resource manifests and stylesheets whose dependencies changed",
    version = VERSION
)]
pub struct Cli {
    /// File type of the inputs.
    #[arg(
        short = 't',
        value_name = "TYPE",
        help = "File type of the inputs: style, qrc or qrc_list"
    )]
    pub file_type: Option<String>,

    /// Directory searched for `using` imports (repeatable, searched in order)
    #[arg(short = 'I', value_name = "DIR")]
    pub include_dirs: Vec<PathBuf>,

    /// Marker file created or touched when any input was updated
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Manifests or stylesheets to check
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,
}
