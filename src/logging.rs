//! File logging
//!
//! The TUI owns the terminal, so log records go to a file instead of stderr.
//! Call sites use the `log` macros; a `tracing-subscriber` fmt subscriber
//! receives them through its `log` bridge and filters with `RUST_LOG`
//! directives.

use std::env;
use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::util::SubscriberInitExt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Filter from `RUST_LOG`; unset or unparsable directives fall back to `info`.
fn env_filter() -> EnvFilter {
    parse_filter(&env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default())
}

fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Opens `path` for appending, creating it and its directory if needed.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Plain-text subscriber writing timestamped lines to `file`.
fn file_subscriber(filter: EnvFilter, file: File) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .finish()
}

/// Installs the file subscriber globally and bridges the `log` macros into it.
pub fn init(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = open_log_file(path)?;
    file_subscriber(env_filter(), file).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn capture(directives: &str, emit: impl FnOnce()) -> String {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("admin.log");
        let file = open_log_file(&path).unwrap();

        tracing::subscriber::with_default(file_subscriber(parse_filter(directives), file), emit);
        fs::read_to_string(&path).unwrap()
    }

    fn emit_all() {
        tracing::debug!(target: "solicite_admin::ui", "shell detail");
        tracing::info!(target: "solicite_admin::ui", "dashboard loaded");
        tracing::debug!(target: "tokio::runtime", "runtime detail");
        tracing::warn!(target: "tokio::runtime", "runtime warning");
    }

    #[test]
    fn test_default_level_is_info() {
        let contents = capture("", emit_all);
        assert!(contents.contains("INFO solicite_admin::ui: dashboard loaded"));
        assert!(contents.contains("runtime warning"));
        assert!(!contents.contains("shell detail"));
        assert!(!contents.contains("runtime detail"));
    }

    #[test]
    fn test_crate_override_keeps_global_level() {
        let contents = capture("warn,solicite_admin=debug", emit_all);
        assert!(contents.contains("shell detail"));
        assert!(contents.contains("runtime warning"));
        assert!(!contents.contains("runtime detail"));
    }

    #[test]
    fn test_module_directive_does_not_leak_to_other_targets() {
        let contents = capture("solicite_admin=debug,tokio=warn", emit_all);
        assert!(contents.contains("shell detail"));
        assert!(!contents.contains("runtime detail"));
        assert!(contents.contains("runtime warning"));
    }

    #[test]
    fn test_off_disables_logging() {
        let contents = capture("off", emit_all);
        assert!(contents.is_empty());
    }

    #[test]
    fn test_lines_carry_no_ansi_codes() {
        let contents = capture("info", emit_all);
        assert_eq!(contents.lines().count(), 2);
        assert!(!contents.contains('\u{1b}'));
    }
}
