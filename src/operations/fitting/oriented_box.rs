use crate::error::{GeometryError, Result};
use crate::geometry::OrientedBox;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::principal_axes;

/// Fits an oriented bounding box around a point set.
///
/// The box axes are the principal axes of the point cloud (descending
/// variance, right-handed), so the fit is deterministic but the axis
/// convention is an implementation detail. Callers must not assume a
/// world-aligned or globally minimum-volume box.
pub struct FitOrientedBox {
    points: Vec<Point3>,
}

impl FitOrientedBox {
    /// Creates a new `FitOrientedBox` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Executes the fit.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than 3 points are
    /// given or all points coincide.
    pub fn execute(&self) -> Result<OrientedBox> {
        if self.points.len() < 3 {
            return Err(GeometryError::Degenerate(
                "bounding box requires at least 3 points".into(),
            )
            .into());
        }

        let (centroid, axes) = principal_axes(&self.points);
        if axes[0].0 < TOLERANCE {
            return Err(GeometryError::Degenerate("points are coincident".into()).into());
        }

        // Right-handed frame from the two dominant axes.
        let a0 = axes[0].1;
        let a1 = axes[1].1;
        let a2 = a0.cross(&a1);
        let frame = [a0, a1, a2];

        let mut min = Vector3::repeat(f64::INFINITY);
        let mut max = Vector3::repeat(f64::NEG_INFINITY);
        for p in &self.points {
            let d = p - centroid;
            for (i, axis) in frame.iter().enumerate() {
                let t = d.dot(axis);
                min[i] = min[i].min(t);
                max[i] = max[i].max(t);
            }
        }

        let mid = (min + max) / 2.0;
        let center = centroid + frame[0] * mid.x + frame[1] * mid.y + frame[2] * mid.z;

        Ok(OrientedBox {
            center,
            axes: frame,
            half_extents: (max - min) / 2.0,
        })
    }
}
