//! Color construction
//!
//! Every color is built explicitly as an [`Rgba`] value. There is no shared
//! "current color mode"; HSB colors go through [`hsb_to_rgb`].

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Opaque color from components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray level
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Interpolate towards `other`; `t` is clamped to [0, 1]
    ///
    /// `t == 0` yields `self`, `t == 1` yields `other`.
    pub fn lerp(self, other: Rgba, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Alpha-composite this color over an opaque background
    pub fn over(self, background: (u8, u8, u8)) -> (u8, u8, u8) {
        let alpha = self.a as f64 / 255.0;
        let blend = |fg: u8, bg: u8| -> u8 {
            (fg as f64 * alpha + bg as f64 * (1.0 - alpha)).round() as u8
        };
        (
            blend(self.r, background.0),
            blend(self.g, background.1),
            blend(self.b, background.2),
        )
    }
}

/// Convert hue/saturation/brightness (each on a 0..=255 scale) to RGB
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64, alpha: u8) -> Rgba {
    let h = (hue.rem_euclid(255.0) / 255.0) * 6.0;
    let s = (saturation / 255.0).clamp(0.0, 1.0);
    let v = (brightness / 255.0).clamp(0.0, 1.0);

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let to_byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba::rgba(to_byte(r), to_byte(g), to_byte(b), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let neutral = Rgba::gray(180);
        let green = Rgba::rgb(100, 255, 100);
        assert_eq!(neutral.lerp(green, 0.0), neutral);
        assert_eq!(neutral.lerp(green, 1.0), green);
        assert_eq!(neutral.lerp(green, 0.5), Rgba::rgb(140, 218, 140));
    }

    #[test]
    fn test_lerp_clamps_fraction() {
        let a = Rgba::gray(0);
        let b = Rgba::gray(200);
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn test_hsb_primary_hues() {
        assert_eq!(hsb_to_rgb(0.0, 255.0, 255.0, 255), Rgba::rgb(255, 0, 0));
        assert_eq!(hsb_to_rgb(85.0, 255.0, 255.0, 255), Rgba::rgb(0, 255, 0));
        assert_eq!(hsb_to_rgb(170.0, 255.0, 255.0, 255), Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn test_hsb_zero_saturation_is_gray() {
        let c = hsb_to_rgb(123.0, 0.0, 128.0, 200);
        assert_eq!((c.r, c.g, c.b, c.a), (128, 128, 128, 200));
    }

    #[test]
    fn test_over_blends() {
        let half_white = Rgba::rgba(255, 255, 255, 128);
        let (r, g, b) = half_white.over((0, 0, 0));
        assert_eq!((r, g, b), (128, 128, 128));
        assert_eq!(Rgba::rgb(10, 20, 30).over((200, 200, 200)), (10, 20, 30));
    }
}
