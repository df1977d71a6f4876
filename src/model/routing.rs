use egui::{Pos2, Vec2};

use super::geometry::GeometryCache;
use super::task::Task;

/// Arrowhead size in points.
pub const ARROW_LENGTH: f32 = 8.0;
pub const ARROW_HALF_WIDTH: f32 = 4.0;

/// One drawable dependency edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// The task that declares the dependency.
    pub dependent: String,
    /// The task it depends on; the arrow points at its bar.
    pub dependency: String,
    /// Elbow path: exit, elbow top, elbow bottom, entry.
    pub path: [Pos2; 4],
    /// Arrowhead triangle, tip first.
    pub arrow: [Pos2; 3],
}

impl Connector {
    pub fn tip(&self) -> Pos2 {
        self.path[3]
    }
}

/// Build a connector for every dependency whose two rows are on screen.
///
/// Edges with an endpoint that has no geometry (collapsed away, or an id
/// that does not exist) are left out.
pub fn route_dependencies(
    root: &Task,
    geometry: &GeometryCache,
    elbow_offset: f32,
) -> Vec<Connector> {
    let mut connectors = Vec::new();
    for task in root.iter() {
        for dep_id in &task.dependencies {
            if dep_id == &task.id {
                tracing::trace!(task = %task.id, "ignoring self dependency");
                continue;
            }
            let (Some(from), Some(to)) = (geometry.get(&task.id), geometry.get(dep_id)) else {
                tracing::trace!(task = %task.id, dependency = %dep_id, "dependency not drawable");
                continue;
            };

            let start = from.exit_point();
            let end = to.entry_point();
            let elbow_x = start.x + elbow_offset;

            connectors.push(Connector {
                dependent: task.id.clone(),
                dependency: dep_id.clone(),
                path: [
                    start,
                    Pos2::new(elbow_x, start.y),
                    Pos2::new(elbow_x, end.y),
                    end,
                ],
                arrow: arrowhead(end),
            });
        }
    }
    connectors
}

/// Triangle with its tip at `tip`, approached from the left.
pub fn arrowhead(tip: Pos2) -> [Pos2; 3] {
    [
        tip,
        tip + Vec2::new(-ARROW_LENGTH, -ARROW_HALF_WIDTH),
        tip + Vec2::new(-ARROW_LENGTH, ARROW_HALF_WIDTH),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geometry::RowGeometry;
    use egui::Rect;

    const NAME_WIDTH: f32 = 240.0;
    const ROW_HEIGHT: f32 = 30.0;

    fn row(id: &str, index: usize, bar_offset: f32, bar_width: f32) -> RowGeometry {
        let top = index as f32 * ROW_HEIGHT;
        let row = Rect::from_min_size(Pos2::new(0.0, top), Vec2::new(1000.0, ROW_HEIGHT));
        let track = Rect::from_min_max(Pos2::new(NAME_WIDTH, top), row.max);
        let bar = Rect::from_min_size(
            Pos2::new(track.left() + bar_offset, top + 4.0),
            Vec2::new(bar_width, ROW_HEIGHT - 8.0),
        );
        RowGeometry {
            id: id.to_string(),
            row,
            track,
            bar,
        }
    }

    fn tree() -> Task {
        Task::new("1234", "ETL_MAIN")
            .with_times("2025/04/29 10:52:29.000 +0000", "2025/04/29 12:49:46.000 +0000")
            .with_dependencies(["jkl", "def"])
            .with_children(vec![
                Task::new("def", "ETL_LOAD")
                    .with_times("2025/04/29 11:30:00.000 +0000", "2025/04/29 12:10:00.000 +0000"),
                Task::new("jkl", "ETL_EXPORT"),
            ])
    }

    #[test]
    fn routes_elbow_into_bar_start() {
        let geometry = GeometryCache::from_rows([
            row("1234", 0, 50.0, 600.0),
            row("def", 1, 300.0, 100.0),
            row("jkl", 2, 0.0, 760.0),
        ]);
        let connectors = route_dependencies(&tree(), &geometry, 20.0);
        assert_eq!(connectors.len(), 2);

        let to_def = connectors.iter().find(|c| c.dependency == "def").unwrap();
        assert_eq!(to_def.dependent, "1234");
        assert_eq!(to_def.path[0], Pos2::new(NAME_WIDTH, 15.0));
        assert_eq!(to_def.path[1], Pos2::new(NAME_WIDTH + 20.0, 15.0));
        assert_eq!(to_def.path[2], Pos2::new(NAME_WIDTH + 20.0, 45.0));
        assert_eq!(to_def.tip(), Pos2::new(NAME_WIDTH + 300.0, 45.0));
        assert_eq!(to_def.arrow[0], to_def.tip());
        assert!(to_def.arrow[1].x < to_def.tip().x && to_def.arrow[2].x < to_def.tip().x);
    }

    #[test]
    fn undated_dependency_points_at_track_start() {
        let geometry = GeometryCache::from_rows([
            row("1234", 0, 50.0, 600.0),
            row("def", 1, 300.0, 100.0),
            row("jkl", 2, 0.0, 760.0),
        ]);
        let connectors = route_dependencies(&tree(), &geometry, 20.0);
        let to_jkl = connectors.iter().find(|c| c.dependency == "jkl").unwrap();
        assert_eq!(to_jkl.tip(), Pos2::new(NAME_WIDTH, 75.0));
    }

    #[test]
    fn missing_geometry_skips_edge() {
        // Root collapsed: only its own row was rendered.
        let geometry = GeometryCache::from_rows([row("1234", 0, 50.0, 600.0)]);
        assert!(route_dependencies(&tree(), &geometry, 20.0).is_empty());

        let geometry = GeometryCache::default();
        assert!(route_dependencies(&tree(), &geometry, 20.0).is_empty());
    }

    #[test]
    fn unknown_and_self_references_are_skipped() {
        let root = Task::new("a", "A").with_dependencies(["a", "ghost"]);
        let geometry = GeometryCache::from_rows([row("a", 0, 0.0, 100.0)]);
        assert!(route_dependencies(&root, &geometry, 20.0).is_empty());
    }

    #[test]
    fn upward_edges_route_the_same_way() {
        let root = Task::new("r", "R").with_children(vec![
            Task::new("a", "A"),
            Task::new("b", "B").with_dependencies(["a"]),
        ]);
        let geometry = GeometryCache::from_rows([
            row("r", 0, 0.0, 760.0),
            row("a", 1, 10.0, 50.0),
            row("b", 2, 100.0, 50.0),
        ]);
        let connectors = route_dependencies(&root, &geometry, 20.0);
        assert_eq!(connectors.len(), 1);
        let c = &connectors[0];
        assert_eq!(c.path[0].y, 75.0);
        assert_eq!(c.path[3].y, 45.0);
        assert_eq!(c.path[1].x, c.path[2].x);
    }
}
