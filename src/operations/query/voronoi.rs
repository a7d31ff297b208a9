use spade::{
    DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, PositionInTriangulation,
    Triangulation,
};

use crate::error::{GeometryError, Result, TessellationError};
use crate::math::Point2;

/// Computes the Voronoi vertices of a 2D point set.
///
/// The vertices are the circumcenters of the Delaunay triangles of the
/// input. By default only vertices inside the convex hull of the points are
/// kept, since circumcenters of sliver triangles near the hull can land
/// arbitrarily far outside the sampled region.
///
/// Degenerate input (fewer than 3 points, or all collinear) has no Delaunay
/// triangles and yields an empty result rather than an error.
pub struct VoronoiDiagram {
    points: Vec<Point2>,
    only_inside: bool,
}

impl VoronoiDiagram {
    /// Creates a new `VoronoiDiagram` query keeping only vertices inside
    /// the convex hull.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            only_inside: true,
        }
    }

    /// Keeps or discards Voronoi vertices outside the convex hull.
    #[must_use]
    pub fn only_inside(mut self, only_inside: bool) -> Self {
        self.only_inside = only_inside;
        self
    }

    /// Executes the query, returning the Voronoi vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::Failed`] if a point cannot be inserted
    /// into the triangulation (non-finite coordinates).
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let mut triangulation: DelaunayTriangulation<SpadePoint2<f64>> =
            DelaunayTriangulation::new();
        for pt in &self.points {
            triangulation
                .insert(SpadePoint2::new(pt.x, pt.y))
                .map_err(|e: InsertionError| {
                    TessellationError::Failed(format!("Delaunay insert: {e}"))
                })?;
        }

        let mut vertices = Vec::new();
        for face in triangulation.inner_faces() {
            let center = face.circumcenter();
            if self.only_inside {
                let position = triangulation.locate(center);
                if matches!(
                    position,
                    PositionInTriangulation::OutsideOfConvexHull(_)
                        | PositionInTriangulation::NoTriangulation
                ) {
                    continue;
                }
            }
            vertices.push(Point2::new(center.x, center.y));
        }

        Ok(vertices)
    }
}

/// Finds the Voronoi vertex farthest from a point cloud.
///
/// For each candidate vertex the minimum distance to any input point is
/// computed; the vertex maximizing that distance marks the most empty spot
/// of the cloud (e.g. the center of its largest gap). Ties keep the first
/// vertex encountered.
pub struct FarthestVoronoiVertex {
    vertices: Vec<Point2>,
    points: Vec<Point2>,
}

impl FarthestVoronoiVertex {
    /// Creates a new `FarthestVoronoiVertex` query from precomputed Voronoi
    /// vertices and the generating point cloud.
    #[must_use]
    pub fn new(vertices: Vec<Point2>, points: Vec<Point2>) -> Self {
        Self { vertices, points }
    }

    /// Executes the query, returning the farthest vertex and its distance
    /// to the cloud.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than 4 points are
    /// given (a 2D Voronoi diagram needs at least 4 generators to have a
    /// meaningful interior vertex) or the vertex list is empty.
    pub fn execute(&self) -> Result<(Point2, f64)> {
        if self.points.len() < 4 {
            return Err(GeometryError::Degenerate(
                "farthest-vertex query requires at least 4 points".into(),
            )
            .into());
        }

        let mut best: Option<(Point2, f64)> = None;
        for vertex in &self.vertices {
            let distance = self
                .points
                .iter()
                .map(|p| (*p - *vertex).norm())
                .fold(f64::INFINITY, f64::min);
            let improves = best.map_or(true, |(_, best_distance)| distance > best_distance);
            if improves {
                best = Some((*vertex, distance));
            }
        }

        best.ok_or_else(|| {
            GeometryError::Degenerate("no Voronoi vertices to search".into()).into()
        })
    }
}
