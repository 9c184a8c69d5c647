//! Cursor overlay
//!
//! Drawn last on every screen: the trail from faint and thin (oldest) to
//! solid and thick (newest), then a pulsing marker on the pointer.

use crate::quiz::MAX_TRAIL_LENGTH;
use crate::render::{DrawCommand, QuizView, RenderList};
use crate::util::{map_range, sin_deg, Rgba};

const TRAIL_RGB: (u8, u8, u8) = (50, 150, 255);
const MARKER_COLOR: Rgba = Rgba::rgb(255, 100, 100);

/// Weight and alpha of the trail sample at position `i` (0 = oldest)
pub fn trail_style(i: usize) -> (f64, u8) {
    let i = i as f64;
    let max = MAX_TRAIL_LENGTH as f64;
    let weight = map_range(i, 0.0, max, 1.0, 5.0);
    let alpha = map_range(i, 0.0, max, 50.0, 200.0).round().clamp(0.0, 255.0) as u8;
    (weight, alpha)
}

/// Diameter of the pointer marker at `frame`
pub fn marker_size(frame: u64) -> f64 {
    10.0 + sin_deg(frame as f64 * 10.0) * 3.0
}

pub fn render(view: &QuizView<'_>, list: &mut RenderList) {
    let (r, g, b) = TRAIL_RGB;
    for (i, point) in view.trail.iter().enumerate() {
        let (weight, alpha) = trail_style(i);
        list.push(DrawCommand::Dot {
            at: *point,
            weight,
            color: Rgba::rgba(r, g, b, alpha),
        });
    }

    let size = marker_size(view.frame);
    list.push(DrawCommand::Ellipse {
        center: view.pointer,
        width: size,
        height: size,
        color: MARKER_COLOR,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{ClickEffect, CursorTrail, Screen};
    use crate::render::QuizView;
    use crate::util::Point;

    #[test]
    fn test_trail_style_grows_with_recency() {
        let (w0, a0) = trail_style(0);
        let (w_last, a_last) = trail_style(MAX_TRAIL_LENGTH - 1);
        assert_eq!((w0, a0), (1.0, 50));
        assert!(w_last > w0);
        assert!(a_last > a0);
        assert!(w_last < 5.0);
    }

    #[test]
    fn test_marker_pulses() {
        assert_eq!(marker_size(0), 10.0);
        assert!((marker_size(9) - 13.0).abs() < 1e-9);
        assert!((marker_size(27) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlay_draws_trail_then_marker() {
        let effect = ClickEffect::new();
        let mut trail = CursorTrail::new();
        trail.push(Point::new(1.0, 1.0));
        trail.push(Point::new(2.0, 2.0));
        let view = QuizView {
            screen: Screen::Encourage,
            question: None,
            index: 0,
            total: 1,
            score: 0,
            effect: &effect,
            trail: &trail,
            pointer: Point::new(2.0, 2.0),
            frame: 1,
        };
        let mut list = RenderList::new();
        render(&view, &mut list);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::Dot { .. }));
        match &list.commands()[2] {
            DrawCommand::Ellipse { center, .. } => assert_eq!(*center, Point::new(2.0, 2.0)),
            other => panic!("expected marker ellipse, got {:?}", other),
        }
    }
}
