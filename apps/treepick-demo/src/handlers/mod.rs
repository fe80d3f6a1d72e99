//! Port implementations owned by the demo

mod notifier;
mod submit;

pub use notifier::LogNotifier;
pub use submit::StdoutSubmitHandler;
