use crate::error::{GeometryError, Result};
use crate::geometry::Plane;
use crate::math::{Point3, TOLERANCE};

use super::principal_axes;

/// Fits a least-squares plane through a point set.
///
/// The plane origin is the point-set centroid (which always lies on the
/// least-squares plane) and the normal is the least-variance principal
/// axis. Deterministic for a given input.
pub struct FitPlane {
    points: Vec<Point3>,
}

impl FitPlane {
    /// Creates a new `FitPlane` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Executes the fit.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than 3 points are
    /// given or the points are collinear (the normal direction is not
    /// unique).
    pub fn execute(&self) -> Result<Plane> {
        if self.points.len() < 3 {
            return Err(
                GeometryError::Degenerate("plane fit requires at least 3 points".into()).into(),
            );
        }

        let (centroid, axes) = principal_axes(&self.points);

        // The middle variance vanishing means the points span at most a
        // line, so every plane through it fits equally well.
        if axes[1].0 < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "collinear points do not define a plane".into(),
            )
            .into());
        }

        Plane::from_normal(centroid, axes[2].1)
    }
}
