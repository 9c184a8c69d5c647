//! Cursor trail history

use std::collections::VecDeque;

use crate::util::Point;

/// Number of pointer samples kept for the trail
pub const MAX_TRAIL_LENGTH: usize = 15;

/// Bounded history of pointer positions, oldest first
#[derive(Debug, Clone)]
pub struct CursorTrail {
    points: VecDeque<Point>,
    capacity: usize,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TRAIL_LENGTH)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a sample, evicting the oldest once over capacity
    pub fn push(&mut self, point: Point) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_fills_up_to_capacity() {
        let mut trail = CursorTrail::new();
        for i in 0..10 {
            trail.push(Point::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 10);
        assert_eq!(trail.capacity(), MAX_TRAIL_LENGTH);
    }

    #[test]
    fn test_trail_keeps_most_recent_in_order() {
        let mut trail = CursorTrail::new();
        let total = MAX_TRAIL_LENGTH + 7;
        for i in 0..total {
            trail.push(Point::new(i as f64, i as f64));
        }
        assert_eq!(trail.len(), MAX_TRAIL_LENGTH);

        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        let expected: Vec<f64> = (total - MAX_TRAIL_LENGTH..total).map(|i| i as f64).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut trail = CursorTrail::with_capacity(0);
        trail.push(Point::new(1.0, 1.0));
        assert!(trail.is_empty());
    }
}
