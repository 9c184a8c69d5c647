//! Main application controller
//!
//! Owns the terminal and the quiz, and runs the fixed-rate frame loop:
//! drain input, tick the quiz, paint the frame.

use std::time::Duration;

use ratatui::layout::Rect;
use tokio::time::{self, MissedTickBehavior};

use crate::{
    app::{
        surface::{CanvasMapping, CanvasSurface},
        tui::{Input, Tui},
    },
    config::QuizConfig,
    models::QuestionStore,
    quiz::{FrameContext, Quiz, Transition},
    util::Point,
    QuizError, Result,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Quiz controller
    quiz: Quiz,
    /// Time between frames
    frame_interval: Duration,
    /// Last known pointer on the logical canvas
    pointer: Point,
    /// Terminal area the canvas is painted into
    canvas: Rect,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &QuizConfig, store: QuestionStore) -> Result<Self> {
        let frame_interval = config.frame_interval()?;
        let tui = Tui::new().map_err(|e| QuizError::Tui(e.to_string()))?;
        let canvas = tui.size().map_err(|e| QuizError::Tui(e.to_string()))?;
        Ok(Self {
            tui,
            quiz: Quiz::new(store),
            frame_interval,
            pointer: Point::default(),
            canvas,
            should_quit: false,
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| QuizError::Tui(e.to_string()))?;
        tracing::info!(
            questions = self.quiz.total_questions(),
            interval = ?self.frame_interval,
            "quiz started"
        );
        Ok(())
    }

    /// Run the frame loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let mut ticker = time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.should_quit {
            ticker.tick().await;
            self.handle_events()?;
            if self.should_quit {
                break;
            }
            self.draw()?;
        }

        tracing::info!(
            frames = self.quiz.frame_count(),
            score = self.quiz.session().score(),
            screen = ?self.quiz.screen(),
            "quit"
        );
        self.tui.restore()?;
        Ok(())
    }

    /// Tick the quiz and paint the resulting frame
    fn draw(&mut self) -> Result<()> {
        self.canvas = self.tui.size()?;
        let frame = self.quiz.tick(FrameContext::new(self.pointer));
        self.tui.draw(|f| {
            f.render_widget(CanvasSurface::new(&frame), f.size());
        })?;
        Ok(())
    }

    /// Drain every input that arrived since the last frame
    fn handle_events(&mut self) -> Result<()> {
        while let Some(input) = self.tui.poll_input(Duration::ZERO)? {
            let mapping = CanvasMapping::new(self.canvas);
            if apply_input(&mut self.quiz, &mapping, &mut self.pointer, input) {
                self.should_quit = true;
                return Ok(());
            }
        }
        Ok(())
    }
}

/// Feed one input to the quiz; returns true when the user asked to quit
fn apply_input(
    quiz: &mut Quiz,
    mapping: &CanvasMapping,
    pointer: &mut Point,
    input: Input,
) -> bool {
    match input {
        Input::Quit => return true,
        Input::PointerMoved { column, row } => {
            *pointer = mapping.to_logical(column, row);
        }
        Input::Click { column, row } => {
            *pointer = mapping.to_logical(column, row);
            if let Transition::ScreenChanged { from, to } = quiz.on_click(*pointer) {
                tracing::info!(?from, ?to, "screen changed by click");
            }
        }
    }
    false
}
