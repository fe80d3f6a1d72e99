//! Submit handler printing the resolved selection

use std::future::Future;

use tracing::info;
use treepick_domain::{EntityReference, PickerError, SelectionHandler};

/// Prints the submitted selection to stdout as pretty JSON
#[derive(Debug, Clone, Default)]
pub struct StdoutSubmitHandler;

impl SelectionHandler for StdoutSubmitHandler {
    fn submit(
        &self,
        selection: Vec<EntityReference>,
    ) -> impl Future<Output = Result<(), PickerError>> + Send {
        let rendered = serde_json::to_string_pretty(&selection)
            .map_err(|err| PickerError::submit_failure(err.to_string()));

        async move {
            let rendered = rendered?;
            info!(count = selection.len(), "Selection submitted");
            println!("{rendered}");
            Ok(())
        }
    }

    fn cancel(&self) {
        info!("Selection cancelled");
    }
}
