//! Quiz controller
//!
//! [`Quiz`] owns the question store, the session, the click effect and the
//! cursor trail. The host feeds it one [`FrameContext`] per frame through
//! [`Quiz::tick`] and every left click through [`Quiz::on_click`].

use crate::models::{OptionLabel, Question, QuestionStore};
use crate::quiz::effect::ClickEffect;
use crate::quiz::layout::hit_test;
use crate::quiz::state::{Screen, SessionState};
use crate::quiz::trail::CursorTrail;
use crate::render::{self, QuizView, RenderList};
use crate::util::Point;

/// Per-frame input sampled by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameContext {
    /// Pointer position on the logical canvas
    pub pointer: Point,
}

impl FrameContext {
    pub fn new(pointer: Point) -> Self {
        Self { pointer }
    }
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    None,
    /// An option was picked and its effect started
    Answered { label: OptionLabel, correct: bool },
    /// The screen moved forward
    ScreenChanged { from: Screen, to: Screen },
}

/// Single-session quiz controller
#[derive(Debug)]
pub struct Quiz {
    store: QuestionStore,
    session: SessionState,
    effect: ClickEffect,
    trail: CursorTrail,
    frame_count: u64,
    pointer: Point,
}

impl Quiz {
    /// Start a session on the first question
    pub fn new(store: QuestionStore) -> Self {
        Self {
            store,
            session: SessionState::new(),
            effect: ClickEffect::new(),
            trail: CursorTrail::new(),
            frame_count: 0,
            pointer: Point::default(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn effect(&self) -> &ClickEffect {
        &self.effect
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn total_questions(&self) -> usize {
        self.store.len()
    }

    /// Question being shown, `None` once all have been answered
    pub fn current_question(&self) -> Option<&Question> {
        self.store.get(self.session.current_index())
    }

    /// Score as a fraction of the question count; 0.0 for an empty store
    pub fn percentage(&self) -> f64 {
        let total = self.total_questions();
        if total == 0 {
            return 0.0;
        }
        self.session.score() as f64 / total as f64
    }

    /// Read-only snapshot handed to the renderers
    pub fn view(&self) -> QuizView<'_> {
        QuizView {
            screen: self.session.screen(),
            question: self.current_question(),
            index: self.session.current_index(),
            total: self.total_questions(),
            score: self.session.score(),
            effect: &self.effect,
            trail: &self.trail,
            pointer: self.pointer,
            frame: self.frame_count,
        }
    }

    /// Handle a left click at `at` on the logical canvas
    pub fn on_click(&mut self, at: Point) -> Transition {
        match self.session.screen() {
            Screen::Quiz => self.answer_at(at),
            Screen::Result => {
                let to = Screen::finale_for(self.session.score(), self.total_questions());
                if self.session.transition_to(to) {
                    Transition::ScreenChanged {
                        from: Screen::Result,
                        to,
                    }
                } else {
                    Transition::None
                }
            }
            finale => {
                debug_assert!(finale.is_terminal());
                Transition::None
            }
        }
    }

    fn answer_at(&mut self, at: Point) -> Transition {
        if self.effect.is_active() {
            tracing::debug!("click ignored while feedback is running");
            return Transition::None;
        }
        let Some(label) = hit_test(at) else {
            return Transition::None;
        };
        let Some(correct) = self.current_question().map(|q| q.is_correct(label)) else {
            return Transition::None;
        };

        if correct {
            self.session.record_correct();
        }
        self.effect.activate(label);
        tracing::info!(
            index = self.session.current_index(),
            label = %label,
            correct,
            score = self.session.score(),
            "answered"
        );
        Transition::Answered { label, correct }
    }

    /// Run one frame and return what to draw
    ///
    /// Order: finished-quiz check, screen, effect countdown, trail sample,
    /// cursor overlay on top.
    pub fn tick(&mut self, ctx: FrameContext) -> RenderList {
        self.frame_count += 1;
        self.pointer = ctx.pointer;

        let finished = self.session.screen() == Screen::Quiz
            && self.session.current_index() >= self.total_questions();

        let mut list = RenderList::new();
        if finished {
            // The frame that leaves the quiz paints only the background
            self.session.transition_to(Screen::Result);
            list.push(render::DrawCommand::Background {
                color: render::BACKGROUND,
            });
        } else {
            render::render_screen(&self.view(), &mut list);
        }

        if self.effect.advance() {
            self.session.advance_question();
            tracing::debug!(index = self.session.current_index(), "next question");
        }

        self.trail.push(self.pointer);
        render::cursor::render(&self.view(), &mut list);

        tracing::trace!(frame = self.frame_count, commands = list.len(), "frame");
        list
    }
}
