//! Tracing subscriber setup: console formatter and initialisation.
use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an [`EnvFilter`] directive that overrides the
/// `-v` flag (e.g. `UPDATE_DEPENDENT_LOG=update_dependent=trace`).
pub const LOG_ENV: &str = "UPDATE_DEPENDENT_LOG";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that prefixes every line with
/// the tool name, so messages stay attributable inside a build log.
struct ToolFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ToolFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;
        let color = writer.has_ansi_escapes();

        let (tag, style) = match level {
            tracing::Level::ERROR => ("error: ", "\x1b[31m"),
            tracing::Level::WARN => ("warning: ", "\x1b[33m"),
            tracing::Level::INFO if target == "update_dependent::stage" => ("==> ", "\x1b[1;34m"),
            tracing::Level::INFO => ("", ""),
            _ => ("", "\x1b[2m"),
        };

        if color && !style.is_empty() {
            writeln!(writer, "update_dependent: {style}{tag}{msg}\x1b[0m")
        } else {
            writeln!(writer, "update_dependent: {tag}{msg}")
        }
    }
}

/// Build the level filter: [`LOG_ENV`] when set and valid, otherwise `debug`
/// for verbose runs and `warn` for quiet ones.
fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    })
}

/// Initialise the global [`tracing`] subscriber.
///
/// All output goes to stderr; stdout carries only `qrc_list` results.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let console_layer = fmt::layer()
        .event_format(ToolFormatter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_filter(filter(verbose));

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn quiet_filter_hides_info() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        assert_eq!(
            filter(false).max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::WARN)
        );
    }

    #[test]
    fn verbose_filter_shows_debug() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        assert_eq!(
            filter(true).max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::DEBUG)
        );
    }

    #[test]
    fn message_extractor_reads_message_field() {
        use tracing_subscriber::layer::SubscriberExt as _;

        #[derive(Clone, Default)]
        struct Capture(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Capture {
            fn on_event(
                &self,
                event: &tracing::Event<'_>,
                _ctx: tracing_subscriber::layer::Context<'_, S>,
            ) {
                let mut extractor = MessageExtractor::default();
                event.record(&mut extractor);
                self.0.lock().unwrap().push(extractor.message);
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("touched {}", "app.qrc");
        });
        assert_eq!(*capture.0.lock().unwrap(), ["touched app.qrc"]);
    }
}
