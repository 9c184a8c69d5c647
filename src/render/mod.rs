//! Frame rendering
//!
//! Renderers are pure: they read a [`QuizView`] and append [`DrawCommand`]s
//! to a [`RenderList`]. Nothing here touches session state. The host decides
//! how the commands reach a real surface.

use serde::Serialize;

use crate::models::Question;
use crate::quiz::{ClickEffect, CursorTrail, Screen};
use crate::util::{Bounds, Point, Rgba};

pub mod cursor;
pub mod screens;

/// Canvas background behind every screen
pub const BACKGROUND: Rgba = Rgba::gray(240);

/// Horizontal anchoring of a text command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Text starts at the anchor
    Left,
    /// Text is centered on the anchor
    Center,
}

/// One drawing primitive on the logical canvas
///
/// Text anchors are vertically centered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill the whole canvas
    Background { color: Rgba },
    /// Filled rectangle with rounded corners
    Rect { bounds: Bounds, radius: f64, color: Rgba },
    /// Filled rectangle centered on `center`, rotated clockwise by `angle` degrees
    RotatedRect {
        center: Point,
        width: f64,
        height: f64,
        angle: f64,
        color: Rgba,
    },
    /// Filled ellipse
    Ellipse {
        center: Point,
        width: f64,
        height: f64,
        color: Rgba,
    },
    /// Single stroked point of the given weight
    Dot { at: Point, weight: f64, color: Rgba },
    /// Single line of text
    Text {
        at: Point,
        text: String,
        size: f64,
        color: Rgba,
        align: TextAlign,
    },
    /// Text wrapped and centered inside a box
    TextBox {
        bounds: Bounds,
        text: String,
        size: f64,
        color: Rgba,
    },
}

/// Draw commands of one frame, in paint order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderList {
    commands: Vec<DrawCommand>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Centered single-line text
    pub fn text(&mut self, at: Point, text: impl Into<String>, size: f64, color: Rgba) {
        self.push(DrawCommand::Text {
            at,
            text: text.into(),
            size,
            color,
            align: TextAlign::Center,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// All text content in paint order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } | DrawCommand::TextBox { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

/// Read-only snapshot of everything a renderer may look at
#[derive(Debug, Clone, Copy)]
pub struct QuizView<'a> {
    pub screen: Screen,
    /// Question on screen; stays on the answered one while its effect runs
    pub question: Option<&'a Question>,
    pub index: usize,
    pub total: usize,
    pub score: usize,
    pub effect: &'a ClickEffect,
    pub trail: &'a CursorTrail,
    pub pointer: Point,
    /// Animation clock, starts at 1 on the first frame
    pub frame: u64,
}

/// Paint the background and the current screen
pub fn render_screen(view: &QuizView<'_>, list: &mut RenderList) {
    list.push(DrawCommand::Background { color: BACKGROUND });

    match view.screen {
        Screen::Quiz => screens::quiz::render(view, list),
        Screen::Result => screens::result::render(view, list),
        Screen::Celebrate => screens::celebrate::render(view, list),
        Screen::Encourage => screens::encourage::render(view, list),
    }
}
