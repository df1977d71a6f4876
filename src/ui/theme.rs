use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::JobState;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const BG_ROW_HOVER: Color32 = Color32::from_rgba_premultiplied(14, 14, 14, 14);
pub const BG_SELECTED: Color32 = Color32::from_rgba_premultiplied(35, 62, 97, 45);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 46, 58);

// ── Job states ───────────────────────────────────────────────────────────────

pub const STATE_NOT_STARTED: Color32 = Color32::from_rgb(0xE6, 0xF3, 0xFF);
pub const STATE_IN_PROGRESS: Color32 = Color32::from_rgb(0x00, 0x78, 0xD7);
pub const STATE_SUCCESS: Color32 = Color32::from_rgb(0x38, 0xA1, 0x69);
pub const STATE_FAILED: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);

/// Second stripe colour on bars whose children disagree.
pub const MIXED_STRIPE: Color32 = Color32::from_rgb(0x42, 0x99, 0xE1);
pub const MIXED_OUTLINE: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);
pub const FAILED_MARKER: Color32 = MIXED_OUTLINE;

pub const PARENT_BORDER: Color32 = Color32::from_rgb(0x4A, 0x55, 0x68);
pub const LEAF_BORDER: Color32 = Color32::from_rgb(0xCB, 0xD5, 0xE0);

pub const DEPENDENCY_LINE: Color32 = Color32::from_rgb(0xFF, 0x45, 0x00);

/// Base colour of a bar in the given state.
pub fn state_color(state: JobState) -> Color32 {
    match state {
        JobState::NotStarted => STATE_NOT_STARTED,
        JobState::InProgress => STATE_IN_PROGRESS,
        JobState::Success => STATE_SUCCESS,
        JobState::Failed => STATE_FAILED,
    }
}

/// Placeholder fill for bars without dates.
pub fn undated_fill() -> Color32 {
    STATE_NOT_STARTED.gamma_multiply(0.7)
}

/// Progress-bar fill used in the tooltip.
pub fn progress_color(percent: u8) -> Color32 {
    if percent >= 100 {
        STATE_SUCCESS
    } else {
        MIXED_STRIPE
    }
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const HEADER_HEIGHT: f32 = 44.0;
pub const BAR_ROUNDING: f32 = 4.0;
pub const BAR_INSET: f32 = 5.0; // vertical inset so bars don't touch row edges
pub const STRIPE_SPACING: f32 = 14.0;
pub const HANDLE_THICKNESS: f32 = 6.0;
pub const CORNER_HANDLE: f32 = 14.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_row() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

pub fn font_title() -> FontId {
    FontId::proportional(16.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = Color32::from_rgb(20, 20, 28);

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(42, 44, 56);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 54, 68);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(60, 62, 76);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_a_distinct_color() {
        let colors = [
            state_color(JobState::NotStarted),
            state_color(JobState::InProgress),
            state_color(JobState::Success),
            state_color(JobState::Failed),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
