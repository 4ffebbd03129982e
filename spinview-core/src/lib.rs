/// Spinview Core Library - rotation math and model state
///
/// This library provides the pure core of the wireframe viewer: Euler-angle
/// orientations and their combined rotation matrix, wireframe shapes, scene
/// models with per-vertex modification offsets, and the JSON model store.

pub mod disturb;
pub mod error;
pub mod model;
pub mod rotation;
pub mod shape;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Rgb, SceneModel};
pub use rotation::{Orientation, Rotation};
pub use shape::Shape;
pub use store::{ModelRecord, ShapeRecord};
