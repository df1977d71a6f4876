pub mod dialogs;
pub mod gantt_chart;
pub mod gantt_modal;
pub mod theme;
pub mod toolbar;

pub use gantt_modal::GanttModal;
