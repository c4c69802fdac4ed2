//! `timestamp - target - LEVEL - message` event format.

use std::fmt;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Renders each event on one line as
/// `timestamp - target - LEVEL - message key=value...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            metadata.target(),
            metadata.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render(emit: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .event_format(LineFormat)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, emit);
        let bytes = capture.0.lock().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn renders_target_level_and_message() {
        let line = render(|| tracing::info!(target: "homework_bot::poller", "No homeworks found"));
        let (timestamp, rest) = line.split_once(" - ").unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, "homework_bot::poller - INFO - No homeworks found\n");
    }

    #[test]
    fn appends_fields_after_message() {
        let line = render(|| tracing::error!(target: "bot", status = 503, "Polling cycle failed"));
        assert!(line.ends_with(" - bot - ERROR - Polling cycle failed status=503\n"));
    }

    #[test]
    fn one_line_per_event() {
        let out = render(|| {
            tracing::debug!(target: "bot", "first");
            tracing::warn!(target: "bot", "second");
        });
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("bot - DEBUG - first"));
        assert!(lines[1].ends_with("bot - WARN - second"));
    }
}
