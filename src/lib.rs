//! Leave planning calendar generator.
//!
//! This crate reads public-holiday `.ics` calendar files and a set of
//! user-declared leave date ranges, computes annual-leave usage and
//! entitlements against a carry-over policy, and renders a static HTML
//! calendar coloring each day by status (working day, public holiday,
//! planned leave, or both).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod planner;
pub mod render;
