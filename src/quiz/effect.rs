//! Click feedback timer
//!
//! Counts frames, not wall-clock time, so the feedback lasts longer on a
//! slower frame rate.

use crate::models::OptionLabel;

/// Frames the click feedback stays on screen before the quiz moves on
pub const EFFECT_DURATION: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    target: OptionLabel,
    remaining: u32,
}

/// Transient per-click state; at most one click is in flight at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEffect {
    pending: Option<Pending>,
}

impl ClickEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Option that was clicked, while the effect runs
    pub fn target(&self) -> Option<OptionLabel> {
        self.pending.map(|p| p.target)
    }

    /// Frames left; zero when idle
    pub fn remaining_ticks(&self) -> u32 {
        self.pending.map_or(0, |p| p.remaining)
    }

    /// `remaining / D`: 1.0 right after the click, falling towards 0.0
    pub fn fraction_remaining(&self) -> f64 {
        self.remaining_ticks() as f64 / EFFECT_DURATION as f64
    }

    /// Start the effect for `target`; refused while another one runs
    pub fn activate(&mut self, target: OptionLabel) -> bool {
        if self.is_active() {
            return false;
        }
        self.pending = Some(Pending {
            target,
            remaining: EFFECT_DURATION,
        });
        true
    }

    /// Count down one frame; returns true on the frame the effect finishes
    pub fn advance(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        pending.remaining = pending.remaining.saturating_sub(1);
        if pending.remaining == 0 {
            self.pending = None;
            return true;
        }
        false
    }
}
