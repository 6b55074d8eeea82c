use business::domain::logger::Logger;
use tracing::{debug, error, info};

/// `Logger` port backed by the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "gogpt", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "gogpt", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "gogpt", "{}", message);
    }
}
