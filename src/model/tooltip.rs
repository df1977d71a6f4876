use egui::{Pos2, Rect, Vec2};

/// Top-left corner for a hover tooltip over `bar`.
///
/// Prefers sitting above the bar, left-aligned with it. Moves left when it
/// would run off the right edge and drops below the bar when there is no
/// room above.
pub fn tooltip_anchor(bar: Rect, size: Vec2, viewport: Vec2, margin: f32) -> Pos2 {
    let mut left = bar.left();
    let mut top = bar.top() - size.y - margin;

    if left + size.x > viewport.x {
        left = viewport.x - size.x - margin;
    }
    if top < 0.0 {
        top = bar.bottom() + margin;
    }

    Pos2::new(left.max(0.0), top)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(300.0, 100.0);
    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    fn bar(x: f32, y: f32) -> Rect {
        Rect::from_min_size(Pos2::new(x, y), Vec2::new(120.0, 22.0))
    }

    #[test]
    fn sits_above_the_bar() {
        assert_eq!(
            tooltip_anchor(bar(400.0, 300.0), SIZE, VIEWPORT, 10.0),
            Pos2::new(400.0, 190.0)
        );
    }

    #[test]
    fn flips_below_near_the_top() {
        assert_eq!(tooltip_anchor(bar(400.0, 40.0), SIZE, VIEWPORT, 10.0), Pos2::new(400.0, 72.0));
    }

    #[test]
    fn shifts_left_near_the_right_edge() {
        assert_eq!(
            tooltip_anchor(bar(1100.0, 300.0), SIZE, VIEWPORT, 10.0),
            Pos2::new(970.0, 190.0)
        );
    }

    #[test]
    fn never_leaves_the_left_edge() {
        let narrow = Vec2::new(250.0, 720.0);
        assert_eq!(tooltip_anchor(bar(10.0, 300.0), SIZE, narrow, 10.0).x, 0.0);
    }
}
