use crate::error::{GeometryError, Result};
use crate::geometry::CylinderFit;
use crate::math::{Point3, TOLERANCE};

use super::principal_axes;

/// Fits a bounding cylinder around a point set.
///
/// The cylinder axis is the largest-variance principal axis; the height is
/// the projection extent along it and the radius the largest radial
/// distance from it. Deterministic for a given input, tight for elongated
/// clouds, but not a globally minimum-volume cylinder.
pub struct BoundingCylinder {
    points: Vec<Point3>,
}

impl BoundingCylinder {
    /// Creates a new `BoundingCylinder` operation.
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
    pub fn execute(&self) -> Result<CylinderFit> {
        if self.points.len() < 3 {
            return Err(GeometryError::Degenerate(
                "bounding cylinder requires at least 3 points".into(),
            )
            .into());
        }

        let (centroid, axes) = principal_axes(&self.points);
        if axes[0].0 < TOLERANCE {
            return Err(GeometryError::Degenerate("points are coincident".into()).into());
        }
        let axis = axes[0].1;

        let mut t_min = f64::INFINITY;
        let mut t_max = f64::NEG_INFINITY;
        let mut radius: f64 = 0.0;
        for p in &self.points {
            let d = p - centroid;
            let t = d.dot(&axis);
            t_min = t_min.min(t);
            t_max = t_max.max(t);
            radius = radius.max((d - axis * t).norm());
        }

        Ok(CylinderFit {
            center: centroid + axis * ((t_min + t_max) / 2.0),
            axis,
            radius,
            height: t_max - t_min,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn fits_points_on_a_cylinder_surface() {
        // Two rings of 8 points at z = ±3, radius 2: the z spread dominates,
        // so the axis is ±Z.
        let mut points = Vec::new();
        for z in [-3.0, 3.0] {
            for i in 0..8 {
                let theta = TAU * f64::from(i) / 8.0;
                points.push(Point3::new(2.0 * theta.cos(), 2.0 * theta.sin(), z));
            }
        }
        let fit = BoundingCylinder::new(points).execute().unwrap();
        assert!(fit.axis.z.abs() > 0.999);
        assert!((fit.height - 6.0).abs() < 1e-9);
        assert!((fit.radius - 2.0).abs() < 1e-9);
        assert!(fit.center.coords.norm() < 1e-9);
    }

    #[test]
    fn offset_cloud_moves_the_center() {
        let mut points = Vec::new();
        for z in [0.0, 4.0] {
            for i in 0..6 {
                let theta = TAU * f64::from(i) / 6.0;
                points.push(Point3::new(
                    10.0 + theta.cos(),
                    theta.sin(),
                    z,
                ));
            }
        }
        let fit = BoundingCylinder::new(points).execute().unwrap();
        assert!((fit.center.x - 10.0).abs() < 1e-9);
        assert!((fit.center.z - 2.0).abs() < 1e-9);
        assert!((fit.height - 4.0).abs() < 1e-9);
    }

    #[test]
    fn collinear_points_fit_a_zero_radius_cylinder() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 0.0, 5.0),
        ];
        let fit = BoundingCylinder::new(points).execute().unwrap();
        assert!(fit.radius < 1e-9);
        assert!((fit.height - 5.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_points_fail() {
        let points = vec![Point3::new(2.0, 2.0, 2.0); 4];
        assert!(BoundingCylinder::new(points).execute().is_err());
    }

    #[test]
    fn too_few_points_fail() {
        assert!(BoundingCylinder::new(vec![Point3::origin()]).execute().is_err());
    }
}
