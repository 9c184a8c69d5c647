//! Result screen renderer
//!
//! Static final score. Which finale follows is decided on click, not shown here.

use crate::render::{QuizView, RenderList};
use crate::util::{Point, Rgba};
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

use super::quiz::TEXT_COLOR;

const SCORE_COLOR: Rgba = Rgba::rgb(0, 150, 0);
const HINT_COLOR: Rgba = Rgba::gray(100);

pub fn render(view: &QuizView<'_>, list: &mut RenderList) {
    let cx = CANVAS_WIDTH / 2.0;

    list.text(Point::new(cx, CANVAS_HEIGHT / 3.0), "Quiz complete!", 40.0, TEXT_COLOR);
    list.text(
        Point::new(cx, CANVAS_HEIGHT / 2.0),
        format!("Score: {} / {}", view.score, view.total),
        60.0,
        SCORE_COLOR,
    );
    list.text(
        Point::new(cx, CANVAS_HEIGHT - 100.0),
        "Click anywhere to continue",
        20.0,
        HINT_COLOR,
    );
}
