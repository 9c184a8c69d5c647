//! Option row layout on the logical canvas
//!
//! Rows are stacked top to bottom in label order and centered horizontally.
//! The same geometry drives both drawing and hit testing.

use crate::models::OptionLabel;
use crate::util::{Bounds, Point};
use crate::CANVAS_WIDTH;

pub const OPTION_WIDTH: f64 = 450.0;
pub const OPTION_HEIGHT: f64 = 60.0;
pub const OPTION_SPACING: f64 = 20.0;
/// Top edge of the first option row
pub const OPTIONS_TOP: f64 = 150.0;

/// Screen rectangle of the row for `label`
pub fn option_bounds(label: OptionLabel) -> Bounds {
    let top = OPTIONS_TOP + label.index() as f64 * (OPTION_HEIGHT + OPTION_SPACING);
    Bounds::centered_x(CANVAS_WIDTH / 2.0, top, OPTION_WIDTH, OPTION_HEIGHT)
}

/// Option whose row strictly contains `point`, if any
pub fn hit_test(point: Point) -> Option<OptionLabel> {
    OptionLabel::ALL
        .into_iter()
        .find(|&label| option_bounds(label).contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_do_not_overlap() {
        let a = option_bounds(OptionLabel::A);
        let b = option_bounds(OptionLabel::B);
        let c = option_bounds(OptionLabel::C);
        assert_eq!(a.y, 150.0);
        assert_eq!(b.y, 230.0);
        assert_eq!(c.y, 310.0);
        assert!(a.bottom() < b.y);
        assert!(b.bottom() < c.y);
    }

    #[test]
    fn test_hit_test_inside_rows() {
        assert_eq!(hit_test(Point::new(400.0, 180.0)), Some(OptionLabel::A));
        assert_eq!(hit_test(Point::new(200.0, 260.0)), Some(OptionLabel::B));
        assert_eq!(hit_test(Point::new(600.0, 369.0)), Some(OptionLabel::C));
    }

    #[test]
    fn test_hit_test_misses() {
        // Gap between rows
        assert_eq!(hit_test(Point::new(400.0, 220.0)), None);
        // Left of the rows
        assert_eq!(hit_test(Point::new(100.0, 180.0)), None);
        // Exactly on an edge
        assert_eq!(hit_test(Point::new(175.0, 180.0)), None);
        assert_eq!(hit_test(Point::new(400.0, 150.0)), None);
        // Below the last row
        assert_eq!(hit_test(Point::new(400.0, 500.0)), None);
    }
}
