use chrono::{DateTime, Utc};
use egui::{Context, CursorIcon, Id, Pos2, Rect, RichText, Sense, Ui, Vec2};
use uuid::Uuid;

use crate::config::ChartConfig;
use crate::model::timestamp::format_timestamp;
use crate::model::tooltip::tooltip_anchor;
use crate::model::{ModalState, Project, ResizeEdge, Task, TimeWindow};
use crate::ui::gantt_chart::{self, HoveredBar};
use crate::ui::theme;

/// Time window cached for one revision of one loaded project.
#[derive(Debug, Clone)]
struct WindowCache {
    loaded: DateTime<Utc>,
    revision: u64,
    window: TimeWindow,
}

/// The Gantt chart as a resizable modal window.
///
/// Each instance owns its own egui id namespace, so two modals never share
/// drag or hover state.
pub struct GanttModal {
    id: Id,
    state: ModalState,
    config: ChartConfig,
    window_cache: Option<WindowCache>,
    /// Top-left corner, centred in the viewport when the modal opens.
    position: Pos2,
}

impl GanttModal {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            id: Id::new(("gantt-modal", Uuid::new_v4())),
            state: ModalState::new(config.modal.clone()),
            config,
            window_cache: None,
            position: Pos2::ZERO,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Show the modal while `open` is true. `on_close` fires once when the
    /// user dismisses it, after `open` has been cleared.
    pub fn show(
        &mut self,
        ctx: &Context,
        project: &mut Project,
        open: &mut bool,
        on_close: impl FnOnce(),
    ) {
        let viewport = ctx.screen_rect().size();

        if !*open {
            if self.state.is_open() {
                self.state.close();
            }
            return;
        }
        if !self.state.is_open() {
            self.state.open(viewport);
            self.position = (((viewport - self.state.size()) * 0.5).max(Vec2::ZERO)).to_pos2();
            tracing::debug!(size = ?self.state.size(), "gantt modal opened");
        }

        let cache = match self.window_cache.take() {
            Some(cache) if cache.loaded == project.loaded && cache.revision == project.revision => {
                cache
            }
            _ => WindowCache {
                loaded: project.loaded,
                revision: project.revision,
                window: TimeWindow::from_tree(&project.root, Utc::now()),
            },
        };

        let mut close_requested =
            ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape));
        let mut toggled = None;
        let mut hovered = None;
        let resizing = self.state.is_resizing();

        let id = self.id;
        let config = &self.config;
        let state = &mut self.state;
        let root = &project.root;
        let window = &cache.window;

        egui::Window::new("Gantt Chart")
            .id(id)
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .fixed_pos(self.position)
            .fixed_size(state.size())
            .show(ctx, |ui| {
                let content = ui.max_rect();

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Gantt Chart").font(theme::font_title()).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close = ui.add(
                            egui::Button::new(RichText::new(egui_phosphor::regular::X).size(16.0))
                                .frame(false),
                        );
                        if close.on_hover_text("Close").clicked() {
                            close_requested = true;
                        }
                    });
                });
                ui.separator();

                let output = gantt_chart::show_gantt_chart(root, window, config, !resizing, ui);
                toggled = output.toggled;
                hovered = output.hovered;

                resize_handles(ui, id, content, state, viewport);
            });

        self.window_cache = Some(cache);

        if let Some(task_id) = toggled {
            if project.toggle_expanded(&task_id) {
                tracing::debug!(task = %task_id, "toggled expansion");
            }
        }

        if !self.state.is_resizing() {
            if let Some(hover) = hovered {
                if let Some(task) = project.root.find(&hover.task_id) {
                    self.show_tooltip(ctx, task, &hover, viewport);
                }
            }
        }

        if close_requested {
            self.state.close();
            *open = false;
            tracing::debug!("gantt modal closed");
            on_close();
        }
    }

    fn show_tooltip(&self, ctx: &Context, task: &Task, hover: &HoveredBar, viewport: Vec2) {
        let size = Vec2::new(self.config.tooltip_width, self.config.tooltip_height);
        let anchor = tooltip_anchor(hover.bar, size, viewport, self.config.tooltip_margin);
        let state = task.job_state();

        egui::Area::new(self.id.with("tooltip"))
            .order(egui::Order::Tooltip)
            .fixed_pos(anchor)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(size.x - 16.0);
                    ui.label(RichText::new(&task.name).strong());
                    ui.horizontal(|ui| {
                        let (dot, _) = ui.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
                        ui.painter().circle_filled(dot.center(), 4.0, theme::state_color(state));
                        ui.label(format!("Status: {}", state.label()));
                    });
                    ui.horizontal(|ui| {
                        ui.label("Progress:");
                        ui.add(
                            egui::ProgressBar::new(f32::from(task.percent()) / 100.0)
                                .desired_width(140.0)
                                .fill(theme::progress_color(task.percent())),
                        );
                        ui.label(format!("{}%", task.percent()));
                    });
                    ui.label(format!("Start: {}", format_timestamp(task.start_time.as_deref())));
                    ui.label(format!("End: {}", format_timestamp(task.end_time.as_deref())));
                });
            });
    }
}

/// Right edge, bottom edge and corner affordances. A drag on one of them
/// drives the modal's resize state.
fn resize_handles(ui: &Ui, id: Id, content: Rect, state: &mut ModalState, viewport: Vec2) {
    let t = theme::HANDLE_THICKNESS;
    let c = theme::CORNER_HANDLE;
    let handles = [
        (
            ResizeEdge::Right,
            Rect::from_min_max(
                Pos2::new(content.right() - t, content.top()),
                Pos2::new(content.right(), content.bottom() - c),
            ),
            CursorIcon::ResizeHorizontal,
        ),
        (
            ResizeEdge::Bottom,
            Rect::from_min_max(
                Pos2::new(content.left(), content.bottom() - t),
                Pos2::new(content.right() - c, content.bottom()),
            ),
            CursorIcon::ResizeVertical,
        ),
        (
            ResizeEdge::Corner,
            Rect::from_min_max(content.max - Vec2::splat(c), content.max),
            CursorIcon::ResizeNwSe,
        ),
    ];

    for (edge, rect, cursor) in handles {
        let response = ui.interact(rect, id.with(("resize", edge_key(edge))), Sense::drag());
        if response.hovered() || response.dragged() {
            ui.ctx().set_cursor_icon(cursor);
        }
        if response.drag_started() {
            state.begin_resize(edge);
        }
        if response.dragged() {
            if let Some(pointer) = ui.ctx().pointer_interact_pos() {
                state.drag_to(pointer, content.min, viewport);
            }
        }
        if response.drag_stopped() && state.end_resize() {
            tracing::debug!(size = ?state.size(), "resize finished, rebuilding dependency layer");
        }
    }

    // Release outside any handle (e.g. the pointer left the window).
    if state.is_resizing() && !ui.ctx().input(|i| i.pointer.any_down()) && state.end_resize() {
        tracing::debug!(size = ?state.size(), "resize finished outside handle");
    }
}

fn edge_key(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::Right => "right",
        ResizeEdge::Bottom => "bottom",
        ResizeEdge::Corner => "corner",
    }
}
