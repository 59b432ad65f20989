//! Colors and the per-draw color randomization.
//!
//! Colors are expressed the way artists pick them: hue, saturation and
//! brightness on a 0-255 scale. Every draw samples a fresh color, so the
//! whole scene shimmers from frame to frame.

use rand::Rng;

/// Full scale of the HSB components.
pub const HSB_LIMIT: f32 = 255.0;

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Opaque color from RGB components in `[0, 1]`.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from hue, saturation and brightness, each on a
    /// `0..=255` scale. Hue wraps: 255 is back to red.
    #[must_use]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let v = (brightness / HSB_LIMIT).clamp(0.0, 1.0);
        let s = (saturation / HSB_LIMIT).clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::rgb(v, v, v);
        }

        let h = (hue / HSB_LIMIT).rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let fraction = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * fraction);
        let t = v * (1.0 - s * (1.0 - fraction));

        match sector as u32 {
            0 | 6 => Self::rgb(v, t, p),
            1 => Self::rgb(q, v, p),
            2 => Self::rgb(p, v, t),
            3 => Self::rgb(p, q, v),
            4 => Self::rgb(t, p, v),
            _ => Self::rgb(v, p, q),
        }
    }

    /// Components as an array, for vertex data.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Color ranges the renderer samples from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Lower bound of connecting-line brightness (0-255, upper bound 255).
    pub line_brightness_min: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            line_brightness_min: 128.0,
        }
    }
}

impl Palette {
    /// A red of random brightness for an origin-to-object line.
    pub fn line_color<R: Rng>(&self, rng: &mut R) -> Color {
        let min = self.line_brightness_min.clamp(0.0, HSB_LIMIT);
        let brightness = if min < HSB_LIMIT {
            rng.random_range(min..HSB_LIMIT)
        } else {
            HSB_LIMIT
        };
        Color::from_hsb(0.0, HSB_LIMIT, brightness)
    }

    /// A fully saturated, fully bright color of random hue for a shape.
    pub fn shape_color<R: Rng>(&self, rng: &mut R) -> Color {
        Color::from_hsb(rng.random_range(0.0..HSB_LIMIT), HSB_LIMIT, HSB_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-5
            && (a.g - b.g).abs() < 1e-5
            && (a.b - b.b).abs() < 1e-5
            && (a.a - b.a).abs() < 1e-5
    }

    #[test]
    fn primary_hues() {
        assert!(approx(Color::from_hsb(0.0, 255.0, 255.0), Color::rgb(1.0, 0.0, 0.0)));
        assert!(approx(Color::from_hsb(85.0, 255.0, 255.0), Color::rgb(0.0, 1.0, 0.0)));
        assert!(approx(Color::from_hsb(170.0, 255.0, 255.0), Color::rgb(0.0, 0.0, 1.0)));
        assert!(approx(Color::from_hsb(255.0, 255.0, 255.0), Color::rgb(1.0, 0.0, 0.0)));
    }

    #[test]
    fn zero_saturation_is_gray() {
        let c = Color::from_hsb(120.0, 0.0, 127.5);
        assert!(approx(c, Color::rgb(0.5, 0.5, 0.5)));
    }

    #[test]
    fn zero_brightness_is_black() {
        assert!(approx(Color::from_hsb(200.0, 255.0, 0.0), Color::BLACK));
    }

    #[test]
    fn line_colors_are_warm_reds() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let c = palette.line_color(&mut rng);
            assert_eq!(c.g, 0.0);
            assert_eq!(c.b, 0.0);
            assert!(c.r >= 128.0 / 255.0 - 1e-6 && c.r <= 1.0);
        }
    }

    #[test]
    fn shape_colors_are_fully_saturated() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let c = palette.shape_color(&mut rng);
            let max = c.r.max(c.g).max(c.b);
            let min = c.r.min(c.g).min(c.b);
            assert!((max - 1.0).abs() < 1e-5);
            assert!(min.abs() < 1e-5);
        }
    }

    #[test]
    fn consecutive_samples_differ() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(13);
        let first = palette.shape_color(&mut rng);
        let differs = (0..10).any(|_| palette.shape_color(&mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn full_brightness_floor_pins_lines_to_pure_red() {
        let palette = Palette {
            line_brightness_min: 255.0,
        };
        let mut rng = StdRng::seed_from_u64(14);
        assert_eq!(palette.line_color(&mut rng), Color::rgb(1.0, 0.0, 0.0));
    }
}
