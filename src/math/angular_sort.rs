use super::Point2;

/// Computes the centroid (arithmetic mean) of a 2D point set.
///
/// Returns the origin for an empty set.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / points.len() as f64;
    Point2::new(
        points.iter().map(|p| p.x).sum::<f64>() * inv_n,
        points.iter().map(|p| p.y).sum::<f64>() * inv_n,
    )
}

/// Sorts points into clockwise order around their centroid.
///
/// The key is `atan2(x - cx, y - cy)`, arguments swapped from the
/// conventional `atan2(y, x)` so that angle zero points along +Y and
/// ascending angle sweeps clockwise. Downstream extrusion relies on this
/// exact ordering; do not "fix" the argument order.
///
/// Angle ties (duplicate points, points collinear with the centroid) keep
/// their input order: the sort is stable and no further tie-break is
/// applied. Always returns a permutation of the input; with fewer than 3
/// points or fully collinear input the ordering is degenerate and the
/// resulting polygon is not guaranteed simple.
#[must_use]
pub fn sort_clockwise(points: &[Point2]) -> Vec<Point2> {
    let c = centroid_2d(points);
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        let angle_a = (a.x - c.x).atan2(a.y - c.y);
        let angle_b = (b.x - c.x).atan2(b.y - c.y);
        angle_a.total_cmp(&angle_b)
    });
    sorted
}

/// Sorts points into counter-clockwise order around their centroid.
///
/// Exactly the reverse of [`sort_clockwise`].
#[must_use]
pub fn sort_counter_clockwise(points: &[Point2]) -> Vec<Point2> {
    let mut sorted = sort_clockwise(points);
    sorted.reverse();
    sorted
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area_2d;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn centroid_of_square() {
        let c = centroid_2d(&[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
        assert!((c.x - 1.0).abs() < TOLERANCE);
        assert!((c.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_empty_set_is_origin() {
        let c = centroid_2d(&[]);
        assert!(c.x.abs() < TOLERANCE && c.y.abs() < TOLERANCE);
    }

    // ── Clockwise ordering ─────────────────────────────────────

    #[test]
    fn square_corners_trace_boundary() {
        // Unordered corners of a 2x2 square: the sorted cycle must walk the
        // boundary without crossing, i.e. every edge has length 2 (no
        // diagonal of length 2√2 appears).
        let unordered = vec![p(0.0, 0.0), p(2.0, 2.0), p(2.0, 0.0), p(0.0, 2.0)];
        let sorted = sort_clockwise(&unordered);
        assert_eq!(sorted.len(), 4);
        for i in 0..4 {
            let a = sorted[i];
            let b = sorted[(i + 1) % 4];
            let edge = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
            assert!((edge - 2.0).abs() < TOLERANCE, "edge {i} has length {edge}");
        }
    }

    #[test]
    fn clockwise_order_has_negative_area() {
        let unordered = vec![p(0.0, 0.0), p(2.0, 2.0), p(2.0, 0.0), p(0.0, 2.0)];
        let sorted = sort_clockwise(&unordered);
        assert!(signed_area_2d(&sorted) < 0.0);
    }

    #[test]
    fn counter_clockwise_order_has_positive_area() {
        let unordered = vec![p(0.0, 0.0), p(2.0, 2.0), p(2.0, 0.0), p(0.0, 2.0)];
        let sorted = sort_counter_clockwise(&unordered);
        assert!(signed_area_2d(&sorted) > 0.0);
    }

    #[test]
    fn angles_ascend_monotonically() {
        let unordered = vec![
            p(3.0, 1.0),
            p(-1.0, 2.5),
            p(0.5, -2.0),
            p(2.0, 2.0),
            p(-2.0, -1.0),
        ];
        let sorted = sort_clockwise(&unordered);
        let c = centroid_2d(&sorted);
        let angles: Vec<f64> = sorted.iter().map(|q| (q.x - c.x).atan2(q.y - c.y)).collect();
        for w in angles.windows(2) {
            assert!(w[0] <= w[1], "angles not ascending: {w:?}");
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let unordered = vec![p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0), p(0.0, -1.0), p(1.0, 1.0)];
        let once = sort_clockwise(&unordered);
        let twice = sort_clockwise(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn ccw_is_exact_reverse_of_cw() {
        // No two points share an angle around the centroid.
        let unordered = vec![p(2.0, 0.0), p(0.0, 3.0), p(-1.0, -1.0), p(1.5, 2.0)];
        let cw = sort_clockwise(&unordered);
        let mut ccw = sort_counter_clockwise(&unordered);
        ccw.reverse();
        assert_eq!(cw, ccw);
    }

    #[test]
    fn duplicate_points_keep_input_order() {
        // Two identical points have identical angles; the stable sort must
        // keep them adjacent and in input order.
        let a = p(1.0, 1.0);
        let unordered = vec![p(-1.0, 0.0), a, a, p(0.0, -1.0)];
        let sorted = sort_clockwise(&unordered);
        assert_eq!(sorted.len(), 4);
        let dup_positions: Vec<usize> = sorted
            .iter()
            .enumerate()
            .filter(|(_, q)| **q == a)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(dup_positions.len(), 2);
        assert_eq!(dup_positions[1], dup_positions[0] + 1);
    }

    #[test]
    fn collinear_points_do_not_panic() {
        let collinear = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)];
        let sorted = sort_clockwise(&collinear);
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn fewer_than_three_points_are_returned_as_is() {
        let two = vec![p(0.0, 0.0), p(1.0, 1.0)];
        let sorted = sort_clockwise(&two);
        assert_eq!(sorted.len(), 2);
    }
}
