use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Population and placement of the orbit objects.
pub struct SceneOptions {
    /// Number of objects created at startup.
    pub object_count: usize,
    /// Half-extent of the cube positions are drawn from
    /// (`[-spread, spread]` on every axis).
    pub spread: f32,
    /// Smallest base size (inclusive).
    pub min_size: u32,
    /// Largest base size (exclusive).
    pub max_size: u32,
    /// Fixed RNG seed for a reproducible layout. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            object_count: 20,
            spread: 2000.0,
            min_size: 10,
            max_size: 100,
            seed: None,
        }
    }
}

impl SceneOptions {
    /// Reject values the generator cannot draw from.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.spread.is_finite() {
            return Err(format!("scene.spread must be finite, got {}", self.spread));
        }
        if self.max_size <= self.min_size {
            return Err(format!(
                "scene.max_size ({}) must be greater than scene.min_size ({})",
                self.max_size, self.min_size
            ));
        }
        Ok(())
    }
}
