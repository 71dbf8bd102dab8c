//! Run orchestration and the final report.
mod runner;
mod summary;
mod tag_help;

pub(crate) use runner::run_probe;
pub(crate) use tag_help::print_tag_help;
