//! TUI application module
//!
//! Contains the terminal handling, the raster surface that turns draw
//! commands into terminal cells, and the frame loop tying them to the quiz.

pub mod app;
pub mod surface;
pub mod tui;

pub use app::App;
pub use surface::{CanvasMapping, CanvasSurface};
pub use tui::{Input, Tui};
