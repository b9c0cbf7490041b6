//! Progress notification port
//!
//! Defines the interface for reporting outbound requests while they run.

/// Callback for progress updates during a search or fetch
///
/// Implementations live in the presentation layer (e.g. a terminal
/// spinner). Tool executors use [`NoProgress`]; an agent runtime has no
/// terminal to draw on.
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the outbound request is sent
    fn on_request_start(&self, operation: &str, target: &str);

    /// Called once the request finished, successfully or not
    fn on_request_complete(&self, operation: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _operation: &str, _target: &str) {}
    fn on_request_complete(&self, _operation: &str, _success: bool) {}
}
