use egui::{Align2, Color32, Pos2, Rect, Rounding, Sense, Shape, Stroke, Ui, Vec2};

use crate::config::ChartConfig;
use crate::model::timestamp::format_instant;
use crate::model::{
    layout_bar, route_dependencies, visible_rows, BarLayout, GeometryBuilder, GeometryCache,
    JobState, RowGeometry, Task, TimeWindow, VisibleRow,
};
use crate::ui::theme;

const MIN_TRACK_WIDTH: f32 = 320.0;
const MIN_PAINTED_BAR: f32 = 2.0;

/// A bar under the pointer this frame.
#[derive(Debug, Clone)]
pub struct HoveredBar {
    pub task_id: String,
    pub bar: Rect,
}

/// What happened while drawing the chart.
#[derive(Debug, Default)]
pub struct ChartInteraction {
    /// Task whose expand/collapse toggle was clicked.
    pub toggled: Option<String>,
    pub hovered: Option<HoveredBar>,
    /// Row geometry published by this pass.
    pub geometry: GeometryCache,
    pub connectors_drawn: usize,
}

/// Render the chart for one frame.
///
/// Runs the render → measure → route pipeline in order: every row is painted
/// and publishes its geometry first, and only then is the dependency overlay
/// routed from the finished geometry. With `route_overlay` false (while the
/// modal is being resized) the overlay is left out entirely.
pub fn show_gantt_chart(
    root: &Task,
    window: &TimeWindow,
    config: &ChartConfig,
    route_overlay: bool,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();
    let rows = visible_rows(root);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .drag_to_scroll(false)
        .show(ui, |ui| {
            let available = ui.available_size();
            let chart_width = available.x.max(config.name_column_width + MIN_TRACK_WIDTH);
            let chart_height = theme::HEADER_HEIGHT + rows.len() as f32 * config.row_height;
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width, chart_height.max(available.y)),
                Sense::hover(),
            );
            let canvas = response.rect;
            painter.rect_filled(canvas, 0.0, theme::BG_DARK);

            let track_x = canvas.left() + config.name_column_width;
            let track_span = (canvas.right() - track_x).max(1.0);

            draw_time_axis(&painter, canvas, track_x, track_span, window);

            // Phase 1: render rows, publishing geometry as we go.
            let mut builder = GeometryBuilder::new();
            for (i, row) in rows.iter().enumerate() {
                let top = canvas.top() + theme::HEADER_HEIGHT + i as f32 * config.row_height;
                let row_rect = Rect::from_min_max(
                    Pos2::new(canvas.left(), top),
                    Pos2::new(canvas.right(), top + config.row_height),
                );
                let track = Rect::from_min_max(Pos2::new(track_x, top), row_rect.max);

                if i % 2 == 1 {
                    painter.rect_filled(row_rect, 0.0, theme::BG_PANEL);
                }
                painter.line_segment(
                    [row_rect.left_bottom(), row_rect.right_bottom()],
                    Stroke::new(0.5, theme::BORDER_SUBTLE),
                );

                if let Some(id) = draw_name_cell(ui, &painter, row, row_rect, config) {
                    interaction.toggled = Some(id);
                }

                let (bar, painted) = draw_bar(&painter, row.task, window, track);
                let bar_response = ui.interact(
                    painted,
                    ui.make_persistent_id(("gantt-bar", row.id())),
                    Sense::hover(),
                );
                if bar_response.hovered() {
                    interaction.hovered = Some(HoveredBar {
                        task_id: row.id().to_string(),
                        bar,
                    });
                }

                builder.publish(RowGeometry {
                    id: row.id().to_string(),
                    row: row_rect,
                    track,
                    bar,
                });
            }

            // Phase 2: geometry is complete for this pass.
            interaction.geometry = builder.finish();

            // Phase 3: route and paint the dependency overlay.
            if route_overlay {
                let connectors =
                    route_dependencies(root, &interaction.geometry, config.elbow_offset);
                let stroke = Stroke::new(1.2, theme::DEPENDENCY_LINE);
                for connector in &connectors {
                    painter.extend(Shape::dashed_line(&connector.path, stroke, 4.0, 2.0));
                    painter.add(Shape::convex_polygon(
                        connector.arrow.to_vec(),
                        theme::DEPENDENCY_LINE,
                        Stroke::NONE,
                    ));
                }
                interaction.connectors_drawn = connectors.len();
            }
        });

    interaction
}

fn draw_time_axis(
    painter: &egui::Painter,
    canvas: Rect,
    track_x: f32,
    track_span: f32,
    window: &TimeWindow,
) {
    painter.rect_filled(
        Rect::from_min_size(canvas.min, Vec2::new(canvas.width(), theme::HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(canvas.left(), canvas.top() + theme::HEADER_HEIGHT),
            Pos2::new(canvas.right(), canvas.top() + theme::HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    let last = window.ticks.len().saturating_sub(1);
    for (i, tick) in window.ticks.iter().enumerate() {
        let x = track_x + window.fraction(*tick) as f32 * track_span;
        painter.line_segment(
            [
                Pos2::new(x, canvas.top() + theme::HEADER_HEIGHT * 0.6),
                Pos2::new(x, canvas.bottom()),
            ],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        // Keep the outermost labels inside the canvas.
        let align = if i == 0 {
            Align2::LEFT_CENTER
        } else if i == last {
            Align2::RIGHT_CENTER
        } else {
            Align2::CENTER_CENTER
        };
        painter.text(
            Pos2::new(x, canvas.top() + 14.0),
            align,
            format_instant(*tick),
            theme::font_small(),
            theme::TEXT_SECONDARY,
        );
    }
}

/// Name column of a row. Returns the task id when its toggle was clicked.
fn draw_name_cell(
    ui: &Ui,
    painter: &egui::Painter,
    row: &VisibleRow<'_>,
    row_rect: Rect,
    config: &ChartConfig,
) -> Option<String> {
    let task = row.task;
    let cell = Rect::from_min_size(
        row_rect.min,
        Vec2::new(config.name_column_width, row_rect.height()),
    );
    let mut x = cell.left() + 6.0 + row.depth as f32 * config.indent;
    let y = cell.center().y;
    let mut toggled = None;

    if task.has_children() {
        let response = ui.interact(
            cell,
            ui.make_persistent_id(("gantt-toggle", row.id())),
            Sense::click(),
        );
        if response.hovered() {
            painter.rect_filled(cell, 0.0, theme::BG_ROW_HOVER);
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if response.clicked() {
            toggled = Some(task.id.clone());
        }
        let icon = if task.is_expanded() {
            egui_phosphor::regular::CARET_DOWN
        } else {
            egui_phosphor::regular::CARET_RIGHT
        };
        painter.text(
            Pos2::new(x, y),
            Align2::LEFT_CENTER,
            icon,
            theme::font_row(),
            theme::TEXT_SECONDARY,
        );
        x += 16.0;
    }

    let clipped = painter.with_clip_rect(cell.shrink2(Vec2::new(2.0, 0.0)));
    let name_rect = clipped.text(
        Pos2::new(x, y),
        Align2::LEFT_CENTER,
        &task.name,
        theme::font_row(),
        theme::TEXT_PRIMARY,
    );
    if task.job_state() == JobState::Failed {
        clipped.text(
            Pos2::new(name_rect.right() + 8.0, y),
            Align2::LEFT_CENTER,
            "(Failed)",
            theme::font_row(),
            theme::FAILED_MARKER,
        );
    }

    toggled
}

/// Paint one bar inside `track`. Returns the laid-out bar and the painted
/// rect, which is never narrower than [`MIN_PAINTED_BAR`].
fn draw_bar(
    painter: &egui::Painter,
    task: &Task,
    window: &TimeWindow,
    track: Rect,
) -> (Rect, Rect) {
    let inset = theme::BAR_INSET;
    let rounding = Rounding::same(theme::BAR_ROUNDING);
    let mixed = task.has_mixed_child_status();

    match layout_bar(task, window) {
        BarLayout::Undated => {
            let bar = Rect::from_min_max(
                Pos2::new(track.left(), track.top() + inset),
                Pos2::new(track.right(), track.bottom() - inset),
            );
            painter.rect_filled(bar, rounding, theme::undated_fill());
            if mixed {
                draw_stripes(painter, bar, theme::MIXED_STRIPE);
            }
            (bar, bar)
        }
        BarLayout::Dated(span) => {
            let left = track.left() + span.offset_fraction as f32 * track.width();
            let width = span.width_fraction as f32 * track.width();
            let bar = Rect::from_min_size(
                Pos2::new(left, track.top() + inset),
                Vec2::new(width, track.height() - inset * 2.0),
            );
            let painted = Rect::from_min_size(
                bar.min,
                Vec2::new(width.max(MIN_PAINTED_BAR), bar.height()),
            );

            let state = task.job_state();
            let base = theme::state_color(state);
            painter.rect_filled(painted, rounding, base);
            if mixed {
                draw_stripes(painter, painted, progress_stripe(task.percent()));
            }

            let progress_width = span.progress_fraction as f32 * track.width();
            if progress_width > 0.0 {
                let fill = Rect::from_min_size(
                    bar.min,
                    Vec2::new(progress_width.min(width), bar.height()),
                );
                painter.rect_filled(fill, rounding, base.gamma_multiply(0.85));
            }

            let border = if task.has_children() {
                Stroke::new(2.0, theme::PARENT_BORDER)
            } else {
                Stroke::new(1.0, theme::LEAF_BORDER)
            };
            painter.rect_stroke(painted, rounding, border);
            if mixed {
                painter.rect_stroke(
                    painted.expand(2.0),
                    Rounding::same(theme::BAR_ROUNDING + 2.0),
                    Stroke::new(2.0, theme::MIXED_OUTLINE),
                );
            }
            (bar, painted)
        }
    }
}

fn progress_stripe(percent: u8) -> Color32 {
    if percent >= 100 {
        theme::STATE_SUCCESS
    } else if percent > 0 {
        theme::MIXED_STRIPE
    } else {
        theme::STATE_NOT_STARTED
    }
}

/// Diagonal stripes clipped to `rect`.
fn draw_stripes(painter: &egui::Painter, rect: Rect, color: Color32) {
    let clipped = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    let stroke = Stroke::new(theme::STRIPE_SPACING * 0.5, color);
    let h = rect.height();
    let mut x = rect.left() - h;
    while x < rect.right() {
        clipped.line_segment(
            [Pos2::new(x, rect.bottom()), Pos2::new(x + h, rect.top())],
            stroke,
        );
        x += theme::STRIPE_SPACING;
    }
}
