//! Scene configuration shared by the desktop app and the headless example.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RidgeError};
use crate::raster::SceneStyle;
use crate::source::RngSource;

/// Everything needed to produce one ridge image.
///
/// Missing fields in a JSON file fall back to [`SceneConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels; also the baseline.
    pub height: u32,
    /// Number of buckets, one ridge point each.
    pub segments: usize,
    /// Seed for the random source. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub outline_width: f64,
    pub triangle_width: f64,
    /// Where the headless renderer writes its PNG.
    pub output: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 2436,
            height: 1125,
            segments: 15,
            seed: None,
            outline_width: 5.0,
            triangle_width: 1.0,
            output: PathBuf::from("ridge.png"),
        }
    }
}

impl SceneConfig {
    /// Read a config from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RidgeError::invalid_argument(format!(
                "canvas must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.segments < 1 {
            return Err(RidgeError::invalid_argument("segments must be at least 1"));
        }
        let widths = [self.outline_width, self.triangle_width];
        if widths.iter().any(|w| !(*w >= 0.0) || !w.is_finite()) {
            return Err(RidgeError::invalid_argument(
                "line widths must be non-negative and finite",
            ));
        }
        Ok(())
    }

    pub fn style(&self) -> SceneStyle {
        SceneStyle {
            outline_width: self.outline_width,
            triangle_width: self.triangle_width,
        }
    }

    /// The random source for this scene: seeded when a seed is set.
    pub fn source(&self) -> RngSource<rand::rngs::StdRng> {
        match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        }
    }
}
