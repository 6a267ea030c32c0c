//! Dependency toucher for generated build artifacts.
//!
//! Decides whether resource manifests (`.qrc`) and stylesheets (`.style`) are
//! stale relative to the files they reference, touches the stale ones, and
//! maintains a marker file whose timestamp tells the calling build system that
//! something changed.
//!
//! The public API is organised into layers:
//!
//! - **[`cli`]** and **[`config`]**: argument grammar and validated options
//! - **[`scan`]**: line scanner for both file formats
//! - **[`deps`]**: dependency discovery (`qrc` entries, `style` import closure)
//! - **[`stamp`]**: `check + apply` timestamp primitives
//! - **[`commands`]**: per-mode orchestration (`qrc_list`, `qrc`, `style`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod deps;
pub mod error;
pub mod fs;
pub mod logging;
pub mod scan;
pub mod stamp;
