//! Logging setup.
//!
//! Scoring progress and rejections are reported as log lines on stderr. The
//! plain layout is `LEVEL : message` followed by any event fields, without
//! timestamps, targets or span context; the JSON layout is meant for
//! collecting results from automated runs.

use anyhow::{Context, Result};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
///
/// # Examples
///
/// ```no_run
/// use hate_scorer_common::telemetry::init_tracing;
///
/// init_tracing("info", false).expect("Failed to initialize tracing");
/// ```
pub fn init_tracing(log_level: &str, json_format: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = Registry::default().with(env_filter);

    if json_format {
        registry
            .with(json_layer())
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    } else {
        registry
            .with(plain_layer(std::io::stderr))
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    }

    Ok(())
}

/// JSON lines on stderr
fn json_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .with_target(false)
        .with_level(true)
}

/// `LEVEL : message` lines
fn plain_layer<S, W>(make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .event_format(LevelPrefixFormat)
}

/// Event format writing `LEVEL : ` and the event fields.
struct LevelPrefixFormat;

impl<S, N> FormatEvent<S, N> for LevelPrefixFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} : ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plain_layout_is_level_then_message() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = Registry::default().with(plain_layer(move || writer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("read_labels", path = "gold_subtask_1A.tsv");
            let _guard = span.enter();
            tracing::info!("All files exist!");
            tracing::warn!(id = "7", "Duplicate identifier");
        });

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "INFO : All files exist!");
        assert!(lines[1].starts_with("WARN : "));
        assert!(lines[1].contains("Duplicate identifier"));
        assert!(!output.contains("read_labels"));
    }

    #[test]
    fn test_init_tracing_twice_reports_error() {
        // The global subscriber can only be installed once per process
        let _ = init_tracing("info", false);
        assert!(init_tracing("debug", true).is_err());
    }
}
