//! Logging infrastructure: stderr console output through `tracing`.

mod logger;
mod subscriber;

pub use logger::{InputEntry, Logger};
pub use subscriber::{LOG_ENV, init_subscriber};
