use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing::Subscriber;
use tracing_subscriber::{
    Layer,
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
    registry::LookupSpan,
};

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: a compact stderr layer, plus a plain-text file layer
/// when `log_file` is given. Both layers share the verbosity filter.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(path).map_err(CliError::Io)?;
        subscriber.with(file_layer(file)).init();
    } else {
        subscriber.init();
    }

    Ok(())
}

fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::{debug, error, info, trace, warn};

    fn capture_file_log(verbosity: u8, quiet: bool, emit: impl FnOnce()) -> String {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("ljbox.log");

        let file = File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry()
            .with(level_filter(verbosity, quiet))
            .with(file_layer(file));
        tracing::subscriber::with_default(subscriber, emit);

        std::fs::read_to_string(log_path).unwrap()
    }

    #[test]
    fn verbosity_maps_to_level() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn quiet_log_file_keeps_only_errors() {
        let content = capture_file_log(3, true, || {
            error!("Frame sink failed.");
            warn!("Run stopped before all frames were completed.");
            info!("Run complete.");
        });

        assert!(content.contains("ERROR"));
        assert!(content.contains("Frame sink failed."));
        assert!(!content.contains("Run stopped before all frames were completed."));
        assert!(!content.contains("Run complete."));
    }

    #[test]
    #[serial]
    fn debug_log_file_records_target_and_thread_but_not_trace() {
        let content = capture_file_log(2, false, || {
            debug!(kinetic = 1.5, "Initial energy evaluated.");
            trace!(frame_index = 4, "Frame advanced.");
        });

        assert!(content.contains("DEBUG"));
        assert!(content.contains("Initial energy evaluated."));
        assert!(content.contains("kinetic=1.5"));
        assert!(content.contains("logging::tests"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains("Frame advanced."));
    }

    #[test]
    fn unwritable_log_file_is_reported_before_installing_the_subscriber() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("missing").join("ljbox.log");

        let result = setup_logging(1, false, Some(&log_path));
        assert!(matches!(result, Err(CliError::Io(_))));
        assert!(!log_path.exists());
    }
}
