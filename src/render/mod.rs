//! Report rendering for the leave planner.
//!
//! Rendering happens in two steps: [`month_grid`] builds a pure grid
//! structure for one calendar month, and the `html` functions serialize
//! grids and summary data into a self-contained HTML document.

mod grid;
mod html;

pub use grid::{DayCell, MonthGrid, month_grid};
pub use html::render_document;
