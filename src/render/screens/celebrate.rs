//! Celebration finale
//!
//! Ribbons orbit the center on a breathing radius while their hue cycles, and
//! the headline bounces one character at a time. Everything is a function of
//! the frame counter; angles are in degrees.

use crate::render::{DrawCommand, QuizView, RenderList};
use crate::util::{cos_deg, hsb_to_rgb, sin_deg, Point, Rgba};
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub const BACKGROUND: Rgba = Rgba::rgb(255, 230, 150);
pub const HEADLINE: &str = "Great job!";

const RIBBONS: usize = 20;
const HEADLINE_COLOR: Rgba = Rgba::rgb(255, 50, 0);
const GLYPH_SPACING: f64 = 50.0;

/// Center, rotation and color of ribbon `i` at frame `frame`
pub fn ribbon(i: usize, frame: u64) -> (Point, f64, Rgba) {
    let f = frame as f64;
    let i = i as f64;

    let angle = (f * 5.0 + i * 20.0) % 360.0;
    let radius = 200.0 + sin_deg(f * 2.0) * 50.0;
    let center = Point::new(
        CANVAS_WIDTH / 2.0 + cos_deg(angle) * radius,
        CANVAS_HEIGHT / 2.0 + sin_deg(angle) * radius,
    );
    let rotation = angle + f * 10.0;
    let hue = (f + i * 15.0) % 255.0;

    (center, rotation, hsb_to_rgb(hue, 200.0, 255.0, 200))
}

/// Vertical bounce of headline glyph `i`
pub fn glyph_offset(i: usize, frame: u64) -> f64 {
    sin_deg(frame as f64 * 8.0 + i as f64 * 50.0) * 15.0
}

pub fn render(view: &QuizView<'_>, list: &mut RenderList) {
    list.push(DrawCommand::Background { color: BACKGROUND });

    for i in 0..RIBBONS {
        let (center, angle, color) = ribbon(i, view.frame);
        list.push(DrawCommand::RotatedRect {
            center,
            width: 50.0,
            height: 10.0,
            angle,
            color,
        });
    }

    let left = CANVAS_WIDTH / 2.0 - 250.0;
    for (i, glyph) in HEADLINE.chars().enumerate() {
        let at = Point::new(
            left + i as f64 * GLYPH_SPACING,
            CANVAS_HEIGHT / 2.0 + glyph_offset(i, view.frame),
        );
        list.text(at, glyph.to_string(), 80.0, HEADLINE_COLOR);
    }
}
