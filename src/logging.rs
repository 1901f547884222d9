//! Structured logging via `tracing`.
//!
//! The terminal belongs to the UI while the page is up, so log output only goes to a file, and
//! only when one is requested. `FOLIO_LOG` overrides the verbosity-derived filter.

use crate::error::Result;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

#[must_use]
/// Maps `-v` occurrences to a filter directive: warn, info, debug, then trace.
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber writing to `log_file`; a no-op without one.
///
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(log_file: Option<&Path>, verbosity: u8) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(verbosity >= 2)
        .with_writer(Arc::new(file))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(1), "info");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(3), "trace");
        assert_eq!(verbosity_to_directive(u8::MAX), "trace");
    }

    #[test]
    fn no_log_file_is_a_noop() {
        init_logging(None, 3).unwrap();
    }

    #[test]
    fn log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.log");
        init_logging(Some(&path), 1).unwrap();
        assert!(path.exists());
    }
}
