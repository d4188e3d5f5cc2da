use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target of every business log line; filter with `RUST_LOG=grocery_prices=debug`.
pub const LOG_TARGET: &str = "grocery_prices";

/// `Logger` port adapter backed by the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
