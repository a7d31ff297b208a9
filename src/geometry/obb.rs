use crate::math::{Matrix4, Point3, Vector3};

/// An oriented bounding box.
///
/// The axes form a right-handed orthonormal frame; which axis ends up first
/// is an implementation detail of the fitting operation and not guaranteed
/// to be world-aligned.
#[derive(Debug, Clone, Copy)]
pub struct OrientedBox {
    /// Center of the box.
    pub center: Point3,
    /// Orthonormal box axes.
    pub axes: [Vector3; 3],
    /// Half-extent along each axis.
    pub half_extents: Vector3,
}

impl OrientedBox {
    /// Returns the box-to-world transform: axes as the rotation columns and
    /// the center as the translation.
    #[must_use]
    pub fn to_world(&self) -> Matrix4 {
        let mut m = Matrix4::identity();
        for (col, axis) in self.axes.iter().enumerate() {
            m[(0, col)] = axis.x;
            m[(1, col)] = axis.y;
            m[(2, col)] = axis.z;
        }
        m[(0, 3)] = self.center.x;
        m[(1, 3)] = self.center.y;
        m[(2, 3)] = self.center.z;
        m
    }

    /// Returns the 8 corner points of the box in world coordinates.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let e = self.half_extents;
        let mut out = [self.center; 8];
        for (i, corner) in out.iter_mut().enumerate() {
            let sx = if i & 1 == 0 { -1.0 } else { 1.0 };
            let sy = if i & 2 == 0 { -1.0 } else { 1.0 };
            let sz = if i & 4 == 0 { -1.0 } else { 1.0 };
            *corner += self.axes[0] * (sx * e.x)
                + self.axes[1] * (sy * e.y)
                + self.axes[2] * (sz * e.z);
        }
        out
    }

    /// Returns the box volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        8.0 * self.half_extents.x * self.half_extents.y * self.half_extents.z
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn axis_aligned_box() -> OrientedBox {
        OrientedBox {
            center: Point3::new(1.0, 2.0, 3.0),
            axes: [Vector3::x(), Vector3::y(), Vector3::z()],
            half_extents: Vector3::new(0.5, 1.0, 1.5),
        }
    }

    #[test]
    fn to_world_maps_local_origin_to_center() {
        let b = axis_aligned_box();
        let m = b.to_world();
        let mapped = m * nalgebra::Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((mapped.x - 1.0).abs() < TOLERANCE);
        assert!((mapped.y - 2.0).abs() < TOLERANCE);
        assert!((mapped.z - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn corners_span_extents() {
        let b = axis_aligned_box();
        let corners = b.corners();
        let max_x = corners.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
        let min_z = corners.iter().map(|c| c.z).fold(f64::INFINITY, f64::min);
        assert!((max_x - 1.5).abs() < TOLERANCE);
        assert!((min_z - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn volume_of_unit_half_extents() {
        let b = OrientedBox {
            center: Point3::origin(),
            axes: [Vector3::x(), Vector3::y(), Vector3::z()],
            half_extents: Vector3::new(1.0, 1.0, 1.0),
        };
        assert!((b.volume() - 8.0).abs() < TOLERANCE);
    }
}
