//! Drives the chart through a headless egui frame and checks the geometry it
//! publishes and the dependency overlay routed from it.

use chrono::{TimeZone, Utc};
use egui::{Event, Pos2, Rect, Vec2};
use job_gantt::config::ChartConfig;
use job_gantt::model::sample::sample_tree;
use job_gantt::model::{layout_bar, route_dependencies, Task, TimeWindow};
use job_gantt::ui::gantt_chart::{show_gantt_chart, ChartInteraction};

fn draw_frame(
    ctx: &egui::Context,
    root: &Task,
    route_overlay: bool,
    events: Vec<Event>,
) -> ChartInteraction {
    let window = TimeWindow::from_tree(root, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    let config = ChartConfig::default();
    let input = egui::RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1600.0, 900.0))),
        events,
        ..Default::default()
    };

    let mut out = None;
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            out = Some(show_gantt_chart(root, &window, &config, route_overlay, ui));
        });
    });
    out.expect("chart was drawn")
}

fn run_chart(root: &Task, route_overlay: bool) -> ChartInteraction {
    draw_frame(&egui::Context::default(), root, route_overlay, Vec::new())
}

#[test]
fn every_visible_row_publishes_geometry() {
    let root = sample_tree();
    let output = run_chart(&root, true);
    assert_eq!(output.geometry.len(), 6);
    assert_eq!(output.connectors_drawn, 2);

    let root_row = output.geometry.get("1234").unwrap();
    for id in ["abc", "xyz", "def", "ghi", "jkl"] {
        let row = output.geometry.get(id).unwrap();
        assert_eq!(row.track.left(), root_row.track.left());
        assert!(row.row.top() > root_row.row.top());
    }
}

#[test]
fn bars_sit_at_their_layout_offset() {
    let root = sample_tree();
    let window = TimeWindow::from_tree(&root, Utc::now());
    let output = run_chart(&root, true);
    for task in root.iter() {
        let geometry = output.geometry.get(&task.id).unwrap();
        let start = layout_bar(task, &window).start_fraction() as f32;
        let expected = geometry.track.left() + start * geometry.track.width();
        assert!((geometry.bar.left() - expected).abs() < 0.5, "bar of {} misplaced", task.id);
        assert!(geometry.bar.right() <= geometry.track.right() + 0.5);
    }
}

#[test]
fn connectors_end_at_dependency_bar_start() {
    let root = sample_tree();
    let output = run_chart(&root, true);
    let elbow = ChartConfig::default().elbow_offset;
    let connectors = route_dependencies(&root, &output.geometry, elbow);
    for connector in &connectors {
        let target = output.geometry.get(&connector.dependency).unwrap();
        assert_eq!(connector.tip(), Pos2::new(target.bar.left(), target.row.center().y));
    }
}

#[test]
fn collapsed_root_hides_children_and_their_edges() {
    let mut root = sample_tree();
    root.toggle_expanded("1234");
    let output = run_chart(&root, true);
    assert_eq!(output.geometry.len(), 1);
    assert_eq!(output.connectors_drawn, 0);
}

#[test]
fn overlay_is_skipped_while_resizing() {
    let root = sample_tree();
    let output = run_chart(&root, false);
    assert_eq!(output.geometry.len(), 6);
    assert_eq!(output.connectors_drawn, 0);
}

#[test]
fn undated_dependency_does_not_panic() {
    let mut root = sample_tree();
    if let Some(jkl) = root.find_mut("jkl") {
        jkl.start_time = None;
        jkl.end_time = None;
    }
    let output = run_chart(&root, true);
    assert_eq!(output.connectors_drawn, 2);
    let jkl = output.geometry.get("jkl").unwrap();
    assert_eq!(jkl.bar.left(), jkl.track.left());
}

#[test]
fn zero_width_bar_still_shows_tooltip() {
    // Ends before it starts, so the laid-out bar has no width.
    let root = Task::new("run", "RUN")
        .with_times("2025/04/29 10:00:00.000 +0000", "2025/04/29 12:00:00.000 +0000")
        .with_children(vec![Task::new("blip", "BLIP")
            .with_times("2025/04/29 11:00:00.000 +0000", "2025/04/29 10:30:00.000 +0000")]);
    let ctx = egui::Context::default();
    let first = draw_frame(&ctx, &root, true, Vec::new());
    let blip = first.geometry.get("blip").unwrap();
    assert_eq!(blip.bar.width(), 0.0);

    let pointer = Pos2::new(blip.bar.left() + 1.0, blip.center_y());
    let mut hovered = None;
    for _ in 0..2 {
        hovered = draw_frame(&ctx, &root, true, vec![Event::PointerMoved(pointer)]).hovered;
    }
    let hovered = hovered.expect("sliver is hoverable");
    assert_eq!(hovered.task_id, "blip");
}
