use crate::math::{Matrix4, Point3, Vector3};

/// A bounding cylinder around a point set.
#[derive(Debug, Clone, Copy)]
pub struct CylinderFit {
    /// Midpoint of the cylinder axis.
    pub center: Point3,
    /// Unit axis direction.
    pub axis: Vector3,
    /// Cylinder radius.
    pub radius: f64,
    /// Cylinder height along the axis.
    pub height: f64,
}

impl CylinderFit {
    /// Returns the cylinder-to-world transform: the local +Z axis maps onto
    /// the cylinder axis and the local origin onto the center.
    #[must_use]
    pub fn to_world(&self) -> Matrix4 {
        let rotation = nalgebra::Rotation3::rotation_between(&Vector3::z(), &self.axis)
            .unwrap_or_else(|| {
                // Antiparallel axis: rotate half a turn around X.
                nalgebra::Rotation3::from_axis_angle(
                    &nalgebra::Vector3::x_axis(),
                    std::f64::consts::PI,
                )
            });
        let mut m = rotation.to_homogeneous();
        m[(0, 3)] = self.center.x;
        m[(1, 3)] = self.center.y;
        m[(2, 3)] = self.center.z;
        m
    }
}
