//! Console presentation and file export sinks.
mod format;
mod writers;


pub use format::Presenter;
pub use writers::{export_csv, export_json};
