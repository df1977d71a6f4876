//! job-gantt: a Gantt chart viewer for hierarchical scheduler job trees.
//!
//! The `model` module holds everything that can be computed without a UI:
//! timestamp parsing, the padded time window, bar layout, visible rows,
//! dependency routing and the modal's resize state machine. The `ui` module
//! paints those results with egui.

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod ui;

pub use error::{GanttError, Result};
