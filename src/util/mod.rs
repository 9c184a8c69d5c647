//! Utility functions module
//! 
//! Contains color construction, canvas geometry, and the small numeric
//! helpers the animations are written with.

pub mod color;
pub mod geometry;

// Re-export commonly used items
pub use color::{hsb_to_rgb, Rgba};
pub use geometry::{Bounds, Point};

/// Linearly re-map `value` from one range onto another, without clamping
///
/// # Examples
/// ```
/// use quizfx::util::map_range;
///
/// assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(map_range(0.0, 0.0, 15.0, 1.0, 5.0), 1.0);
/// ```
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_max == in_min {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Sine of an angle given in degrees
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(15.0, 0.0, 15.0, 50.0, 200.0), 200.0);
        assert_eq!(map_range(7.5, 0.0, 15.0, 50.0, 200.0), 125.0);
        // Degenerate input range collapses to the lower bound
        assert_eq!(map_range(3.0, 2.0, 2.0, 1.0, 9.0), 1.0);
    }

    #[test]
    fn test_degree_trig() {
        assert!((sin_deg(90.0) - 1.0).abs() < 1e-9);
        assert!((cos_deg(180.0) + 1.0).abs() < 1e-9);
        assert!(sin_deg(360.0).abs() < 1e-9);
    }
}
