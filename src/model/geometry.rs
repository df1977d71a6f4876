use std::collections::HashMap;

use egui::{Pos2, Rect};

/// Screen-space placement of one rendered row, published after the row is
/// painted.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGeometry {
    pub id: String,
    /// The full row, including the indented name column.
    pub row: Rect,
    /// The time axis area of the row that bars are positioned in.
    pub track: Rect,
    /// The painted bar after clamping. Undated bars fill the track.
    pub bar: Rect,
}

impl RowGeometry {
    pub fn center_y(&self) -> f32 {
        self.row.center().y
    }

    /// Where connectors leave a dependent row.
    pub fn exit_point(&self) -> Pos2 {
        Pos2::new(self.track.left(), self.center_y())
    }

    /// Where connectors arrive at a dependency row: the visible start of its
    /// bar.
    pub fn entry_point(&self) -> Pos2 {
        Pos2::new(self.bar.left(), self.center_y())
    }
}

/// Row geometry for one frame, keyed by task id.
///
/// Never patched: each render pass builds a new cache and swaps it in.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    rows: HashMap<String, RowGeometry>,
}

impl GeometryCache {
    pub fn from_rows(rows: impl IntoIterator<Item = RowGeometry>) -> Self {
        Self {
            rows: rows.into_iter().map(|g| (g.id.clone(), g)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&RowGeometry> {
        self.rows.get(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Collects row geometry while rows are painted. Finishing the builder is
/// the boundary between the render and the routing phase.
#[derive(Debug, Default)]
pub struct GeometryBuilder {
    rows: Vec<RowGeometry>,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, geometry: RowGeometry) {
        self.rows.push(geometry);
    }

    pub fn finish(self) -> GeometryCache {
        GeometryCache::from_rows(self.rows)
    }
}
