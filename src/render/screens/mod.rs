//! Per-screen renderers
//!
//! One module per [`Screen`](crate::quiz::Screen). Each exposes a
//! `render(view, list)` function.

pub mod celebrate;
pub mod encourage;
pub mod quiz;
pub mod result;
