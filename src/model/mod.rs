pub mod geometry;
pub mod layout;
pub mod modal;
pub mod project;
pub mod routing;
pub mod rows;
pub mod sample;
pub mod task;
pub mod timeline;
pub mod timestamp;
pub mod tooltip;

pub use geometry::{GeometryBuilder, GeometryCache, RowGeometry};
pub use layout::{layout_bar, BarLayout, BarSpan};
pub use modal::{ModalPhase, ModalState, ResizeEdge};
pub use project::{Project, TaskIndex};
pub use routing::{route_dependencies, Connector};
pub use rows::{visible_rows, VisibleRow};
pub use task::{JobState, Task, TaskStatus};
pub use timeline::TimeWindow;
