// ridge holds the silhouette generator, the triangulator and the raster layer
pub mod config;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod ridge;
pub mod source;
pub mod triangulate;
pub mod utils;

pub use config::SceneConfig;
pub use error::{Result, RidgeError};
pub use geometry::{Point, RidgeSequence, Triangle};
pub use raster::{Canvas, SceneStyle, render_scene};
pub use ridge::{RidgeGenerator, generate};
pub use source::{FixedSource, RngSource, UniformSource};
pub use triangulate::triangulate;
