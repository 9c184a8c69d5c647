//! Quiz screen renderer
//!
//! Progress line, wrapped prompt, and one row per option. A row is drawn in
//! exactly one of three styles: click feedback if the running effect targets
//! it, hover if the pointer is inside it, otherwise the default fill.

use crate::models::{OptionLabel, Question};
use crate::quiz::{option_bounds, ClickEffect};
use crate::render::{DrawCommand, QuizView, RenderList, TextAlign};
use crate::util::{Bounds, Point, Rgba};
use crate::CANVAS_WIDTH;

pub const TEXT_COLOR: Rgba = Rgba::gray(50);
pub const OPTION_DEFAULT: Rgba = Rgba::gray(180);
pub const OPTION_HOVER: Rgba = Rgba::rgb(150, 200, 255);
pub const FEEDBACK_CORRECT: Rgba = Rgba::rgb(100, 255, 100);
pub const FEEDBACK_WRONG: Rgba = Rgba::rgb(255, 100, 100);

const OPTION_RADIUS: f64 = 10.0;
const OPTION_TEXT_INSET: f64 = 20.0;

/// How an option row is filled this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionStyle {
    Default,
    Hovered,
    /// Click feedback; `fill` already interpolated
    Feedback { fill: Rgba },
}

impl OptionStyle {
    pub fn fill(self) -> Rgba {
        match self {
            OptionStyle::Default => OPTION_DEFAULT,
            OptionStyle::Hovered => OPTION_HOVER,
            OptionStyle::Feedback { fill } => fill,
        }
    }
}

/// Fill of the clicked row while its effect runs
///
/// Starts at the neutral fill and approaches green or red as the remaining
/// ticks run out.
pub fn feedback_fill(question: &Question, effect: &ClickEffect) -> Option<Rgba> {
    let target = effect.target()?;
    let feedback = if question.is_correct(target) {
        FEEDBACK_CORRECT
    } else {
        FEEDBACK_WRONG
    };
    Some(feedback.lerp(OPTION_DEFAULT, effect.fraction_remaining()))
}

/// Style of one row; the effect wins over hover on its own row
pub fn option_style(
    label: OptionLabel,
    question: &Question,
    effect: &ClickEffect,
    pointer: Point,
) -> OptionStyle {
    if effect.target() == Some(label) {
        if let Some(fill) = feedback_fill(question, effect) {
            return OptionStyle::Feedback { fill };
        }
    }
    if option_bounds(label).contains(pointer) {
        OptionStyle::Hovered
    } else {
        OptionStyle::Default
    }
}

pub fn render(view: &QuizView<'_>, list: &mut RenderList) {
    // Finished quizzes switch to the result screen before rendering
    let Some(question) = view.question else {
        return;
    };

    list.text(
        Point::new(CANVAS_WIDTH / 2.0, 50.0),
        format!("Question {} / {}", view.index + 1, view.total),
        28.0,
        TEXT_COLOR,
    );
    list.push(DrawCommand::TextBox {
        bounds: Bounds::new(50.0, 90.0, CANVAS_WIDTH - 100.0, 80.0),
        text: question.prompt().to_string(),
        size: 20.0,
        color: TEXT_COLOR,
    });

    for (label, text) in question.options() {
        let bounds = option_bounds(label);
        let style = option_style(label, question, view.effect, view.pointer);

        list.push(DrawCommand::Rect {
            bounds,
            radius: OPTION_RADIUS,
            color: style.fill(),
        });
        list.push(DrawCommand::Text {
            at: Point::new(bounds.x + OPTION_TEXT_INSET, bounds.center().y),
            text: format!("{}. {}", label, text),
            size: 18.0,
            color: TEXT_COLOR,
            align: TextAlign::Left,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{CursorTrail, Screen, EFFECT_DURATION};

    fn question() -> Question {
        Question::new(
            "Pick B",
            ["no".to_string(), "yes".to_string(), "no".to_string()],
            OptionLabel::B,
        )
        .unwrap()
    }

    fn row_center(label: OptionLabel) -> Point {
        option_bounds(label).center()
    }

    #[test]
    fn test_default_and_hover_styles() {
        let q = question();
        let effect = ClickEffect::new();
        let pointer = row_center(OptionLabel::A);

        assert_eq!(option_style(OptionLabel::A, &q, &effect, pointer), OptionStyle::Hovered);
        assert_eq!(option_style(OptionLabel::B, &q, &effect, pointer), OptionStyle::Default);
    }

    #[test]
    fn test_effect_takes_precedence_over_hover() {
        let q = question();
        let mut effect = ClickEffect::new();
        effect.activate(OptionLabel::A);

        let style = option_style(OptionLabel::A, &q, &effect, row_center(OptionLabel::A));
        assert!(matches!(style, OptionStyle::Feedback { .. }));
    }

    #[test]
    fn test_other_rows_still_hover_during_effect() {
        let q = question();
        let mut effect = ClickEffect::new();
        effect.activate(OptionLabel::A);

        let style = option_style(OptionLabel::C, &q, &effect, row_center(OptionLabel::C));
        assert_eq!(style, OptionStyle::Hovered);
    }

    #[test]
    fn test_feedback_starts_neutral_and_approaches_target() {
        let q = question();
        let mut effect = ClickEffect::new();
        effect.activate(OptionLabel::B);
        assert_eq!(feedback_fill(&q, &effect), Some(OPTION_DEFAULT));

        for _ in 0..EFFECT_DURATION - 1 {
            effect.advance();
        }
        let late = feedback_fill(&q, &effect).unwrap();
        let near_green = FEEDBACK_CORRECT.lerp(OPTION_DEFAULT, 1.0 / EFFECT_DURATION as f64);
        assert_eq!(late, near_green);
        assert!(late.g > late.r);
    }

    #[test]
    fn test_wrong_answer_turns_red() {
        let q = question();
        let mut effect = ClickEffect::new();
        effect.activate(OptionLabel::C);
        for _ in 0..EFFECT_DURATION - 1 {
            effect.advance();
        }
        let late = feedback_fill(&q, &effect).unwrap();
        assert!(late.r > late.g);
    }

    #[test]
    fn test_render_draws_progress_prompt_and_options() {
        let q = question();
        let effect = ClickEffect::new();
        let trail = CursorTrail::new();
        let view = QuizView {
            screen: Screen::Quiz,
            question: Some(&q),
            index: 1,
            total: 3,
            score: 0,
            effect: &effect,
            trail: &trail,
            pointer: Point::new(0.0, 0.0),
            frame: 1,
        };
        let mut list = RenderList::new();
        render(&view, &mut list);

        assert_eq!(
            list.texts(),
            vec!["Question 2 / 3", "Pick B", "A. no", "B. yes", "C. no"]
        );
        let rects = list
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 3);
    }

    #[test]
    fn test_render_without_question_draws_nothing() {
        let effect = ClickEffect::new();
        let trail = CursorTrail::new();
        let view = QuizView {
            screen: Screen::Quiz,
            question: None,
            index: 3,
            total: 3,
            score: 0,
            effect: &effect,
            trail: &trail,
            pointer: Point::default(),
            frame: 1,
        };
        let mut list = RenderList::new();
        render(&view, &mut list);
        assert!(list.is_empty());
    }
}
