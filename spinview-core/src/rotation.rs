/// Euler-angle orientation and the combined rotation matrix
use nalgebra::{Matrix3, Point3};

/// Orientation around the three axes, in degrees.
///
/// Components are kept canonical in `[0, 360)`: both construction and
/// `advance` wrap with `rem_euclid`, so the stored magnitude stays bounded
/// no matter how many frames of input accumulate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Rotation around the x axis (γ).
    pub pitch: f64,
    /// Rotation around the y axis (β).
    pub yaw: f64,
    /// Rotation around the z axis (α).
    pub roll: f64,
}

impl Orientation {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self {
            pitch: wrap_degrees(pitch),
            yaw: wrap_degrees(yaw),
            roll: wrap_degrees(roll),
        }
    }

    pub fn zero() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
        }
    }

    /// Advance by a delta (in degrees), wrapping each component back into
    /// `[0, 360)`. A zero delta leaves a canonical orientation unchanged.
    pub fn advance(&mut self, delta: Orientation) {
        self.pitch = wrap_degrees(self.pitch + delta.pitch);
        self.yaw = wrap_degrees(self.yaw + delta.yaw);
        self.roll = wrap_degrees(self.roll + delta.roll);
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::zero()
    }
}

/// Wrap an angle in degrees into the canonical range `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Rotation matrix builder and applicator.
pub struct Rotation;

impl Rotation {
    /// Build the combined rotation matrix R = Rz(α) · Ry(β) · Rx(γ)
    /// with γ = pitch, β = yaw, α = roll converted to radians:
    ///
    /// ```text
    ///     [ cosα cosβ    cosα sinβ sinγ - sinα cosγ    cosα sinβ cosγ + sinα sinγ ]
    /// R = [ sinα cosβ    sinα sinβ sinγ + cosα cosγ    sinα sinβ cosγ - cosα sinγ ]
    ///     [   -sinβ               cosβ sinγ                     cosβ cosγ         ]
    /// ```
    pub fn matrix(orientation: &Orientation) -> Matrix3<f64> {
        let (sin_g, cos_g) = orientation.pitch.to_radians().sin_cos();
        let (sin_b, cos_b) = orientation.yaw.to_radians().sin_cos();
        let (sin_a, cos_a) = orientation.roll.to_radians().sin_cos();

        Matrix3::new(
            cos_a * cos_b,
            cos_a * sin_b * sin_g - sin_a * cos_g,
            cos_a * sin_b * cos_g + sin_a * sin_g,
            sin_a * cos_b,
            sin_a * sin_b * sin_g + cos_a * cos_g,
            sin_a * sin_b * cos_g - cos_a * sin_g,
            -sin_b,
            cos_b * sin_g,
            cos_b * cos_g,
        )
    }

    /// Apply a rotation matrix to every point, preserving order and length.
    pub fn apply(matrix: &Matrix3<f64>, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| matrix * p).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_zero_orientation_is_identity() {
        let matrix = Rotation::matrix(&Orientation::zero());
        assert!((matrix - Matrix3::identity()).norm() < 1e-9);
    }

    #[test]
    fn test_advance_with_zero_delta_is_identity() {
        let mut orientation = Orientation::new(12.5, 340.0, 180.0);
        let before = orientation;
        for _ in 0..100 {
            orientation.advance(Orientation::zero());
        }
        assert_eq!(orientation, before);
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let mut orientation = Orientation::new(30.0, 60.0, 90.0);
        // 36 steps of 10 degrees per axis sum to a full turn.
        for _ in 0..36 {
            orientation.advance(Orientation::new(10.0, 10.0, 10.0));
        }
        assert_relative_eq!(orientation.pitch, 30.0, epsilon = 1e-9);
        assert_relative_eq!(orientation.yaw, 60.0, epsilon = 1e-9);
        assert_relative_eq!(orientation.roll, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_advance_stays_bounded() {
        let mut orientation = Orientation::zero();
        for _ in 0..10_000 {
            orientation.advance(Orientation::new(7.3, -2.9, 359.9));
        }
        for angle in [orientation.pitch, orientation.yaw, orientation.roll] {
            assert!((0.0..360.0).contains(&angle));
        }
    }

    #[test]
    fn test_wrap_degrees_negative() {
        assert_relative_eq!(wrap_degrees(-90.0), 270.0);
        assert_relative_eq!(wrap_degrees(-360.0), 0.0);
        assert_relative_eq!(wrap_degrees(720.0), 0.0);
    }

    #[test]
    fn test_pitch_quarter_turn() {
        // 90 degrees around x maps (1, 1, 1) to (1, -1, 1) in this convention.
        let matrix = Rotation::matrix(&Orientation::new(90.0, 0.0, 0.0));
        let rotated = Rotation::apply(&matrix, &[Point3::new(1.0, 1.0, 1.0)]);
        assert_relative_eq!(rotated[0].x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(rotated[0].y, -1.0, epsilon = 1e-6);
        assert_relative_eq!(rotated[0].z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_preserves_norm() {
        let points = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-0.5, 0.25, 4.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        for orientation in [
            Orientation::new(45.0, 0.0, 0.0),
            Orientation::new(13.0, 77.0, 211.0),
            Orientation::new(359.0, 180.0, 90.0),
        ] {
            let matrix = Rotation::matrix(&orientation);
            let rotated = Rotation::apply(&matrix, &points);
            assert_eq!(rotated.len(), points.len());
            for (before, after) in points.iter().zip(&rotated) {
                let norm_before = Vector3::new(before.x, before.y, before.z).norm();
                let norm_after = Vector3::new(after.x, after.y, after.z).norm();
                assert_relative_eq!(norm_before, norm_after, epsilon = 1e-6);
            }
        }
    }
}
