//! Session state and screen transitions
//!
//! Screens only ever move forward: Quiz, then Result, then one of the two
//! finales.

use serde::Serialize;

/// Minimum score fraction that earns the celebration finale
pub const PASS_THRESHOLD: f64 = 0.70;

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Screen {
    /// Answering questions
    #[default]
    Quiz,
    /// Final score, waiting for a click
    Result,
    /// Finale for a passing score
    Celebrate,
    /// Finale for a failing score
    Encourage,
}

impl Screen {
    /// Whether `next` is a legal successor of this screen
    pub fn can_transition_to(self, next: Screen) -> bool {
        matches!(
            (self, next),
            (Screen::Quiz, Screen::Result)
                | (Screen::Result, Screen::Celebrate)
                | (Screen::Result, Screen::Encourage)
        )
    }

    /// Finales accept no further input
    pub fn is_terminal(self) -> bool {
        matches!(self, Screen::Celebrate | Screen::Encourage)
    }

    /// Finale reached from the result screen for a given score
    pub fn finale_for(score: usize, total: usize) -> Screen {
        // Compared in whole percent so 7/10 lands on Celebrate exactly
        let threshold_percent = (PASS_THRESHOLD * 100.0).round() as usize;
        if total > 0 && score * 100 >= total * threshold_percent {
            Screen::Celebrate
        } else {
            Screen::Encourage
        }
    }
}

/// Mutable run state of one quiz session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_index: usize,
    score: usize,
    screen: Screen,
}

impl SessionState {
    /// Fresh session on the first question
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Count a correct answer; ignored outside the quiz screen
    pub(crate) fn record_correct(&mut self) {
        if self.screen == Screen::Quiz {
            self.score += 1;
        }
    }

    pub(crate) fn advance_question(&mut self) {
        self.current_index += 1;
    }

    /// Move to `next` if it is a legal successor; returns whether it moved
    pub(crate) fn transition_to(&mut self, next: Screen) -> bool {
        if !self.screen.can_transition_to(next) {
            tracing::warn!(from = ?self.screen, to = ?next, "rejected screen transition");
            return false;
        }
        tracing::info!(from = ?self.screen, to = ?next, score = self.score, "screen transition");
        self.screen = next;
        true
    }
}
