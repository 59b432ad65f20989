use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Frame pacing and wireframe appearance.
pub struct DisplayOptions {
    /// Frame limiter target (0 = unlimited).
    pub target_fps: u32,
    /// Clear color as linear RGB.
    pub background: [f32; 3],
    /// Segments per ring of a wireframe sphere.
    pub sphere_resolution: u32,
    /// Lower bound of the HSB brightness drawn for connecting lines
    /// (0-255 scale, upper bound is 255).
    pub line_brightness_min: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            target_fps: 60,
            background: [0.0, 0.0, 0.0],
            sphere_resolution: 100,
            line_brightness_min: 128.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spheres_default_to_one_hundred_segments() {
        assert_eq!(DisplayOptions::default().sphere_resolution, 100);

        let partial: DisplayOptions = toml::from_str("target_fps = 30").unwrap();
        assert_eq!(partial.sphere_resolution, 100);
    }
}
