//! Run configuration for the leave planner.
//!
//! The binary resolves its command-line flags into an [`Options`] value;
//! everything downstream of the CLI consumes only this resolved form.

mod options;

pub use options::{Options, YearSelection};
