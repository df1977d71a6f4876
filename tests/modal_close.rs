//! Host-facing close behaviour of the Gantt modal, driven through headless
//! egui frames.

use egui::{Event, Key, Modifiers, Pos2, RawInput, Rect, Vec2};
use job_gantt::config::ChartConfig;
use job_gantt::model::sample::sample_tree;
use job_gantt::model::{ModalPhase, Project};
use job_gantt::ui::GanttModal;

struct Harness {
    ctx: egui::Context,
    modal: GanttModal,
    project: Project,
    open: bool,
    closes: usize,
}

impl Harness {
    fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            modal: GanttModal::new(ChartConfig::default()),
            project: Project::new("sample", sample_tree()),
            open: true,
            closes: 0,
        }
    }

    fn frame(&mut self, events: Vec<Event>) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1600.0, 900.0))),
            events,
            ..Default::default()
        };
        let Self {
            ctx,
            modal,
            project,
            open,
            closes,
        } = self;
        let _ = ctx.run(input, |ctx| {
            modal.show(ctx, project, open, || *closes += 1);
        });
    }
}

fn escape() -> Event {
    Event::Key {
        key: Key::Escape,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn escape_closes_and_fires_callback_once() {
    let mut h = Harness::new();
    h.frame(Vec::new());
    assert_eq!(h.modal.state().phase(), ModalPhase::Idle);
    assert_eq!(h.closes, 0);

    h.frame(vec![escape()]);
    assert!(!h.open);
    assert_eq!(h.closes, 1);
    assert_eq!(h.modal.state().phase(), ModalPhase::Closed);

    h.frame(Vec::new());
    h.frame(vec![escape()]);
    assert_eq!(h.closes, 1);
    assert_eq!(h.modal.state().phase(), ModalPhase::Closed);
}

#[test]
fn host_clearing_open_skips_callback() {
    let mut h = Harness::new();
    h.frame(Vec::new());
    assert!(h.modal.state().is_open());

    h.open = false;
    h.frame(Vec::new());
    assert_eq!(h.closes, 0);
    assert_eq!(h.modal.state().phase(), ModalPhase::Closed);
}

#[test]
fn reopening_starts_idle_again() {
    let mut h = Harness::new();
    h.frame(Vec::new());
    h.frame(vec![escape()]);
    assert_eq!(h.closes, 1);

    h.open = true;
    h.frame(Vec::new());
    assert_eq!(h.modal.state().phase(), ModalPhase::Idle);
    assert_eq!(h.closes, 1);
}
