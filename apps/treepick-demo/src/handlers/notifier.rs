use tracing::error;
use treepick_domain::{Notifier, PickerError};

/// Shows picker errors as log lines, the demo's stand-in for a toast
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, err: &PickerError) {
        error!(error = %err, "Domain picker error");
    }
}
