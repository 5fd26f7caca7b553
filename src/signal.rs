//! Signal handling for graceful shutdown.
//!
//! Centralized Ctrl+C handling built on an `AtomicBool` flag. The menu loop
//! checks the flag between commands; an interrupt observed at a prompt ends
//! the session and the process exits with code 130 (128 + SIGINT).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared shutdown flag set when an interrupt signal is received.
///
/// # Example
///
/// ```no_run
/// use imagekeep::signal::install_handler;
///
/// let handler = install_handler().expect("failed to install signal handler");
/// if handler.is_shutdown_requested() {
///     // wind down
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandler {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandler {
    /// Create a handler with the flag initially unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if shutdown has been requested.
    #[must_use]
    pub fn is_shutdown_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Manually request a shutdown.
    pub fn request_shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Get a clone of the underlying flag.
    #[must_use]
    pub fn get_flag(&self) -> Arc<AtomicBool> {
        self.flag.clone()
    }
}

/// Install the Ctrl+C handler and return the shared shutdown flag.
///
/// # Errors
///
/// Returns an error if the process-wide signal handler cannot be installed
/// (e.g. one was already registered).
pub fn install_handler() -> anyhow::Result<ShutdownHandler> {
    let handler = ShutdownHandler::new();
    let flag = handler.get_flag();

    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
        eprintln!("\nInterrupted.");
    })?;

    Ok(handler)
}
