/// Flat disturbance pattern: dents a band of vertices with small random
/// negative z offsets while leaving the band borders untouched.
use nalgebra::Vector3;
use rand::Rng;

use crate::error::Result;
use crate::model::SceneModel;

/// Indices outside `5..=20` and indices on a 5-boundary are skipped; every
/// other vertex in the band gets a z offset drawn from `[-0.1, 0)`.
pub fn flat_mask(vertex_count: usize) -> Vec<Option<Vector3<f64>>> {
    let mut rng = rand::thread_rng();
    (0..vertex_count)
        .map(|i| {
            if i < 5 || i > 20 || i % 5 == 0 || (i + 1) % 5 == 0 {
                None
            } else {
                Some(Vector3::new(0.0, 0.0, rng.gen_range(-1.0..0.0) / 10.0))
            }
        })
        .collect()
}

/// Apply the flat disturbance to a model through its bulk offset operation.
pub fn disturb_flat(model: &mut SceneModel) -> Result<()> {
    let mask = flat_mask(model.shape().vertex_count());
    model.set_offsets(&mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn grid_model(count: usize) -> SceneModel {
        let vertices = (0..count)
            .map(|i| Point3::new(i as f64, 0.0, 0.0))
            .collect();
        SceneModel::new(Shape::new(vertices, Vec::new()).unwrap(), [80, 80, 80])
    }

    #[test]
    fn test_mask_skips_borders() {
        let mask = flat_mask(30);
        assert_eq!(mask.len(), 30);
        for (i, entry) in mask.iter().enumerate() {
            let skipped = i < 5 || i > 20 || i % 5 == 0 || (i + 1) % 5 == 0;
            assert_eq!(entry.is_none(), skipped, "index {i}");
            if let Some(offset) = entry {
                assert_eq!(offset.x, 0.0);
                assert_eq!(offset.y, 0.0);
                assert!(offset.z < 0.0 && offset.z >= -0.1);
            }
        }
    }

    #[test]
    fn test_disturb_leaves_skipped_vertices_in_place() {
        let mut model = grid_model(30);
        disturb_flat(&mut model).unwrap();

        let (vertices, _) = model.project();
        for (i, (projected, original)) in
            vertices.iter().zip(model.shape().vertices()).enumerate()
        {
            if i < 5 || i > 20 || i % 5 == 0 || (i + 1) % 5 == 0 {
                assert_relative_eq!((projected - original).norm(), 0.0, epsilon = 1e-12);
            } else {
                assert!(projected.z < original.z);
            }
        }
    }

    #[test]
    fn test_small_models_are_untouched() {
        let mut model = grid_model(5);
        disturb_flat(&mut model).unwrap();
        let (vertices, _) = model.project();
        for (projected, original) in vertices.iter().zip(model.shape().vertices()) {
            assert_relative_eq!((projected - original).norm(), 0.0, epsilon = 1e-12);
        }
    }
}
