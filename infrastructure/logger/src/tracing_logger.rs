use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cart_service", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cart_service", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cart_service", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cart_service", "{}", message);
    }
}
