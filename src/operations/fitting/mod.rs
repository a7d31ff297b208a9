mod bounding_cylinder;
mod fit_plane;
mod oriented_box;

pub use bounding_cylinder::BoundingCylinder;
pub use fit_plane::FitPlane;
pub use oriented_box::FitOrientedBox;

use crate::math::{Point3, Vector3};

/// Computes the centroid (arithmetic mean) of a 3D point set.
///
/// Returns the origin for an empty set.
#[must_use]
pub fn centroid_3d(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / points.len() as f64;
    Point3::new(
        points.iter().map(|p| p.x).sum::<f64>() * inv_n,
        points.iter().map(|p| p.y).sum::<f64>() * inv_n,
        points.iter().map(|p| p.z).sum::<f64>() * inv_n,
    )
}

/// Principal axes of a point set: centroid plus `(variance, unit axis)`
/// pairs sorted by descending variance.
///
/// Axis signs are normalized (largest-magnitude component positive) so the
/// result is deterministic for a given input.
pub(crate) fn principal_axes(points: &[Point3]) -> (Point3, [(f64, Vector3); 3]) {
    let centroid = centroid_3d(points);

    let mut covariance = nalgebra::Matrix3::<f64>::zeros();
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / points.len().max(1) as f64;
    for p in points {
        let d = p - centroid;
        covariance += d * d.transpose() * inv_n;
    }

    let eigen = nalgebra::SymmetricEigen::new(covariance);
    let mut pairs: Vec<(f64, Vector3)> = (0..3)
        .map(|i| (eigen.eigenvalues[i], eigen.eigenvectors.column(i).into_owned()))
        .collect();
    pairs.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_, axis) in &mut pairs {
        let mut dominant = 0;
        for i in 1..3 {
            if axis[i].abs() > axis[dominant].abs() {
                dominant = i;
            }
        }
        if axis[dominant] < 0.0 {
            *axis = -*axis;
        }
    }

    (
        centroid,
        [pairs[0], pairs[1], pairs[2]],
    )
}
