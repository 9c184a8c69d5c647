//! Quiz core
//!
//! The presentation state machine, the click effect timer, the cursor trail,
//! and the option layout used for hit testing. [`Quiz`] owns all of them and
//! is the only type the host talks to.

pub mod effect;
pub mod layout;
pub mod machine;
pub mod state;
pub mod trail;

pub use effect::{ClickEffect, EFFECT_DURATION};
pub use layout::{hit_test, option_bounds};
pub use machine::{FrameContext, Quiz, Transition};
pub use state::{Screen, SessionState, PASS_THRESHOLD};
pub use trail::{CursorTrail, MAX_TRAIL_LENGTH};
