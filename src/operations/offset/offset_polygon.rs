use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{bounding_rect, signed_area_2d};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Maximum miter distance as a multiple of the offset distance. When a
/// sharp corner would extend further, the miter is clamped. A limit of 4.0
/// clips at ~30° turn angles (matches the SVG default).
const MITER_LIMIT: f64 = 4.0;

/// Shrinks or swells a closed polygon by a fraction of its size.
///
/// The offset distance is `factor` times the distance from the center of
/// the polygon's bounding rectangle to that rectangle's minimum corner, so
/// the amount scales with the polygon instead of being an absolute length.
/// Swelling moves every edge outward; shrinking moves it inward.
///
/// Corners are joined with clamped miters. No self-intersection cleanup is
/// performed: shrinking a polygon past its inradius produces a
/// self-intersecting result, which is the caller's lookout.
pub struct OffsetPolygon {
    points: Vec<Point2>,
    factor: f64,
    swell: bool,
}

impl OffsetPolygon {
    /// Creates a new `OffsetPolygon` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, factor: f64, swell: bool) -> Self {
        Self {
            points,
            factor,
            swell,
        }
    }

    /// Executes the offset, returning the new boundary in the input's
    /// winding order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than 3 points are
    /// given or the polygon has no area to derive a winding from.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let n = self.points.len();
        if n < 3 {
            return Err(GeometryError::Degenerate(
                "polygon offset requires at least 3 points".into(),
            )
            .into());
        }

        let area = signed_area_2d(&self.points);
        if area.abs() < TOLERANCE {
            return Err(
                GeometryError::Degenerate("polygon has no area to offset".into()).into(),
            );
        }

        let (min, max) = bounding_rect(&self.points)
            .ok_or_else(|| GeometryError::Degenerate("empty polygon".into()))?;
        let center = Point2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
        let distance = (center - min).norm() * self.factor;
        let distance = if self.swell { distance } else { -distance };

        // Outward edge normal: for counter-clockwise winding that is the
        // right-hand normal of the edge direction, for clockwise the left.
        let outward = |dir: Vector2| -> Vector2 {
            if area > 0.0 {
                Vector2::new(dir.y, -dir.x)
            } else {
                Vector2::new(-dir.y, dir.x)
            }
        };

        let mut offset = Vec::with_capacity(n);
        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let curr = self.points[i];
            let next = self.points[(i + 1) % n];

            let incoming = edge_direction(prev, curr);
            let outgoing = edge_direction(curr, next);
            let (n1, n2) = match (incoming, outgoing) {
                (Some(a), Some(b)) => (outward(a), outward(b)),
                (Some(a), None) => (outward(a), outward(a)),
                (None, Some(b)) => (outward(b), outward(b)),
                // Both neighbors coincide with this vertex; nothing to
                // offset along.
                (None, None) => {
                    offset.push(curr);
                    continue;
                }
            };

            let miter = n1 + n2;
            let miter_len = miter.norm();
            if miter_len < TOLERANCE {
                // Near-180° reversal: fall back to a flat cap along the
                // incoming edge normal.
                offset.push(curr + n1 * distance);
            } else {
                let miter = miter / miter_len;
                let cos_half = miter.dot(&n1).max(1.0 / MITER_LIMIT);
                offset.push(curr + miter * (distance / cos_half));
            }
        }

        Ok(offset)
    }
}

/// Unit direction of an edge, or `None` for a zero-length edge.
fn edge_direction(from: Point2, to: Point2) -> Option<Vector2> {
    let d = to - from;
    let len = d.norm();
    if len < TOLERANCE {
        None
    } else {
        Some(d / len)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square_ccw() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]
    }

    #[test]
    fn swell_grows_the_bounding_rect() {
        // Center (1,1) to min corner (0,0) is √2; factor 0.1 gives an
        // offset of 0.1·√2 on every side.
        let d = 0.1 * 2.0_f64.sqrt();
        let out = OffsetPolygon::new(square_ccw(), 0.1, true).execute().unwrap();
        let (min, max) = bounding_rect(&out).unwrap();
        assert!((min.x + d).abs() < 1e-9);
        assert!((min.y + d).abs() < 1e-9);
        assert!((max.x - 2.0 - d).abs() < 1e-9);
        assert!((max.y - 2.0 - d).abs() < 1e-9);
    }

    #[test]
    fn shrink_moves_edges_inward() {
        let d = 0.1 * 2.0_f64.sqrt();
        let out = OffsetPolygon::new(square_ccw(), 0.1, false).execute().unwrap();
        let (min, max) = bounding_rect(&out).unwrap();
        assert!((min.x - d).abs() < 1e-9);
        assert!((max.x - 2.0 + d).abs() < 1e-9);
    }

    #[test]
    fn winding_order_is_preserved() {
        let swelled = OffsetPolygon::new(square_ccw(), 0.1, true).execute().unwrap();
        assert!(signed_area_2d(&swelled) > 0.0);

        let clockwise: Vec<Point2> = square_ccw().into_iter().rev().collect();
        let swelled_cw = OffsetPolygon::new(clockwise, 0.1, true).execute().unwrap();
        assert!(signed_area_2d(&swelled_cw) < 0.0);
    }

    #[test]
    fn clockwise_input_still_swells_outward() {
        let clockwise: Vec<Point2> = square_ccw().into_iter().rev().collect();
        let out = OffsetPolygon::new(clockwise, 0.25, true).execute().unwrap();
        let (min, max) = bounding_rect(&out).unwrap();
        assert!(min.x < -0.1);
        assert!(max.y > 2.1);
    }

    #[test]
    fn swell_then_area_grows() {
        let original = signed_area_2d(&square_ccw());
        let swelled = OffsetPolygon::new(square_ccw(), 0.1, true).execute().unwrap();
        assert!(signed_area_2d(&swelled) > original);
    }

    #[test]
    fn duplicate_vertices_are_carried_through() {
        let mut points = square_ccw();
        points.insert(1, p(2.0, 0.0));
        let out = OffsetPolygon::new(points, 0.1, true).execute().unwrap();
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn too_few_points_fail() {
        assert!(OffsetPolygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)], 0.1, true)
            .execute()
            .is_err());
    }

    #[test]
    fn zero_area_polygon_fails() {
        let collinear = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert!(OffsetPolygon::new(collinear, 0.1, true).execute().is_err());
    }
}
