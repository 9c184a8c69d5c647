//! Encouragement finale
//!
//! Slowly rising bubbles that wrap back to the bottom, every other one
//! labelled, under a message whose opacity breathes with the frame counter.

use crate::render::{DrawCommand, QuizView, RenderList};
use crate::util::{sin_deg, Point, Rgba};
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub const BACKGROUND: Rgba = Rgba::rgb(100, 100, 150);
pub const HEADLINE: &str = "It's okay!";
pub const SUBLINE: &str = "Progress is the best score!";
pub const BUBBLE_LABEL: &str = "learn";

const BUBBLES: usize = 10;
const BUBBLE_COLOR: Rgba = Rgba::rgba(150, 200, 255, 120);

/// Center and diameter of bubble `i` at frame `frame`
pub fn bubble(i: usize, frame: u64) -> (Point, f64) {
    let f = frame as f64;
    let i = i as f64;

    let phase = sin_deg(f * 0.5 + i * 10.0);
    let x = i * 80.0 + phase * 50.0;
    let y = CANVAS_HEIGHT - (f * 0.8 + i * 50.0) % (CANVAS_HEIGHT + 100.0);
    let size = 20.0 + phase.abs() * 10.0;

    (Point::new(x, y), size)
}

/// Opacity of the message text, clamped to the displayable range
pub fn text_alpha(frame: u64) -> u8 {
    (200.0 + sin_deg(frame as f64 * 3.0) * 55.0)
        .round()
        .clamp(0.0, 255.0) as u8
}

pub fn render(view: &QuizView<'_>, list: &mut RenderList) {
    list.push(DrawCommand::Background { color: BACKGROUND });

    for i in 0..BUBBLES {
        let (center, size) = bubble(i, view.frame);
        list.push(DrawCommand::Ellipse {
            center,
            width: size,
            height: size,
            color: BUBBLE_COLOR,
        });
        if i % 2 == 0 {
            list.text(center, BUBBLE_LABEL, 12.0, Rgba::WHITE);
        }
    }

    let message = Rgba::WHITE.with_alpha(text_alpha(view.frame));
    let cx = CANVAS_WIDTH / 2.0;
    list.text(Point::new(cx, CANVAS_HEIGHT / 2.0 - 50.0), HEADLINE, 60.0, message);
    list.text(Point::new(cx, CANVAS_HEIGHT / 2.0 + 30.0), SUBLINE, 30.0, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubbles_rise_and_wrap() {
        let (start, _) = bubble(0, 0);
        let (later, _) = bubble(0, 100);
        assert_eq!(start.y, CANVAS_HEIGHT);
        assert!(later.y < start.y);

        // One full cycle of (H + 100) / 0.8 frames brings it back
        let (wrapped, _) = bubble(0, 875);
        assert!((wrapped.y - CANVAS_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_bubble_size_range() {
        for frame in 0..720 {
            let (_, size) = bubble(3, frame);
            assert!((20.0..=30.0).contains(&size));
        }
    }

    #[test]
    fn test_text_alpha_breathes() {
        assert_eq!(text_alpha(0), 200);
        // sin(90 deg) would give 255
        assert_eq!(text_alpha(30), 255);
        // sin(270 deg) gives 145
        assert_eq!(text_alpha(90), 145);
    }
}
