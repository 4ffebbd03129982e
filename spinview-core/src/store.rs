/// Model file store: JSON records plus the parametric model generators
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Rgb, SceneModel};
use crate::shape::Shape;

/// On-disk shape record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub vertices: Vec<[f64; 3]>,
    #[serde(default)]
    pub edges: Vec<[usize; 2]>,
}

/// On-disk model record: a shape plus an RGB color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    pub shape: ShapeRecord,
    pub color: Rgb,
}

impl ModelRecord {
    /// Validate the record and build a scene model from it.
    pub fn into_model(self) -> Result<SceneModel> {
        let vertices = self
            .shape
            .vertices
            .into_iter()
            .map(|[x, y, z]| Point3::new(x, y, z))
            .collect();
        let shape = Shape::new(vertices, self.shape.edges)?;
        Ok(SceneModel::new(shape, self.color))
    }
}

/// Read a model file and validate it into a scene model.
pub fn load_model(path: &Path) -> Result<SceneModel> {
    debug!("loading model from {}", path.display());
    let data = fs::read_to_string(path)?;
    let record: ModelRecord = serde_json::from_str(&data)?;
    record.into_model()
}

/// Write a model record as pretty-printed JSON.
pub fn save_record(path: &Path, record: &ModelRecord) -> Result<()> {
    debug!("writing model to {}", path.display());
    let data = serde_json::to_string_pretty(record)?;
    fs::write(path, data)?;
    Ok(())
}

/// List the model files in a directory, sorted by file name.
pub fn list_models(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Generate a sphere point cloud over a rings x rings parametric grid.
/// Emits vertices only; the edge list is always empty.
pub fn sphere_record(radius: f64, rings: u32, color: Rgb) -> ModelRecord {
    ring_grid(radius, rings, rings, color)
}

/// Generate a ball point cloud over a rings x ring_points grid.
pub fn ball_record(radius: f64, rings: u32, ring_points: u32, color: Rgb) -> ModelRecord {
    ring_grid(radius, rings, ring_points, color)
}

fn ring_grid(radius: f64, rings: u32, ring_points: u32, color: Rgb) -> ModelRecord {
    let mut vertices = Vec::with_capacity((rings * ring_points) as usize);
    for vertical in 0..rings {
        let v_angle = ((360.0 / rings as f64) * vertical as f64).to_radians();
        for horizontal in 0..ring_points {
            let h_angle = ((360.0 / ring_points as f64) * horizontal as f64).to_radians();

            let x = radius * v_angle.cos() * h_angle.cos();
            let y = radius * v_angle.cos() * h_angle.sin();
            let z = radius * v_angle.sin();
            vertices.push([x, y, z]);
        }
    }

    ModelRecord {
        shape: ShapeRecord {
            vertices,
            edges: Vec::new(),
        },
        color,
    }
}
