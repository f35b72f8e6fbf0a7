//! `tracing` output for tests.
//!
//! Routes events through the libtest capture writer so they only show up for
//! failing tests (or with `--nocapture`). Honors `RUST_LOG`; defaults to
//! `debug` for ctrlkit crates.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_DIRECTIVES: &str = "ctrlkit_pid=debug,ctrlkit_filters=debug,warn";

/// Install a test subscriber once per test binary.
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_test_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    // A second init in the same binary fails; that is the expected case.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Run `f` under a thread-scoped subscriber and return what it logged.
///
/// Captures every target at `debug` and above, formatted without colors.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = {
        let _guard = subscriber.set_default();
        f()
    };
    (result, logs.contents())
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if let Ok(mut buf) = self.0.lock() {
            buf.extend_from_slice(bytes);
        }
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
