use egui::{Pos2, Vec2};

use crate::config::ModalConfig;

/// Which resize affordance is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Right,
    Bottom,
    Corner,
}

impl ResizeEdge {
    pub fn resizes_width(self) -> bool {
        matches!(self, ResizeEdge::Right | ResizeEdge::Corner)
    }

    pub fn resizes_height(self) -> bool {
        matches!(self, ResizeEdge::Bottom | ResizeEdge::Corner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalPhase {
    Closed,
    Idle,
    Resizing(ResizeEdge),
}

/// Open/close and resize state of one modal instance.
#[derive(Debug, Clone)]
pub struct ModalState {
    phase: ModalPhase,
    size: Vec2,
    limits: ModalConfig,
}

impl ModalState {
    pub fn new(limits: ModalConfig) -> Self {
        Self {
            phase: ModalPhase::Closed,
            size: Vec2::new(limits.initial_width, limits.initial_height),
            limits,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.phase, ModalPhase::Resizing(_))
    }

    /// Open at the initial size, capped to a share of the viewport.
    /// Opening an open modal keeps its current size.
    pub fn open(&mut self, viewport: Vec2) {
        if self.is_open() {
            return;
        }
        let cap = self.limits.initial_viewport_fraction;
        self.size = Vec2::new(
            self.limits.initial_width.min(viewport.x * cap),
            self.limits.initial_height.min(viewport.y * cap),
        );
        self.phase = ModalPhase::Idle;
    }

    /// Close the modal, dropping any drag in progress.
    pub fn close(&mut self) {
        self.phase = ModalPhase::Closed;
    }

    /// Press on a resize affordance. Ignored unless the modal is idle.
    pub fn begin_resize(&mut self, edge: ResizeEdge) -> bool {
        if self.phase != ModalPhase::Idle {
            return false;
        }
        self.phase = ModalPhase::Resizing(edge);
        true
    }

    /// Pointer moved while resizing. `origin` is the modal's top-left
    /// corner. Returns whether the size changed.
    pub fn drag_to(&mut self, pointer: Pos2, origin: Pos2, viewport: Vec2) -> bool {
        let ModalPhase::Resizing(edge) = self.phase else {
            return false;
        };
        let before = self.size;
        let ceiling = self.limits.max_viewport_fraction;
        if edge.resizes_width() {
            self.size.x = clamp_extent(
                pointer.x - origin.x,
                self.limits.min_width,
                viewport.x * ceiling,
            );
        }
        if edge.resizes_height() {
            self.size.y = clamp_extent(
                pointer.y - origin.y,
                self.limits.min_height,
                viewport.y * ceiling,
            );
        }
        self.size != before
    }

    /// Pointer released. Returns true when a resize ended, which means row
    /// geometry has to be measured again.
    pub fn end_resize(&mut self) -> bool {
        if self.is_resizing() {
            self.phase = ModalPhase::Idle;
            true
        } else {
            false
        }
    }
}

/// Clamp to `[min, max]`; the minimum wins when the viewport is too small.
fn clamp_extent(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
