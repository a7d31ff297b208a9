use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::FixedFaceHandle;
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::math::Point2;

/// Triangulates a simple polygon using constrained Delaunay triangulation.
///
/// Returns triangle index triples into the input slice, counter-clockwise
/// oriented. Duplicate input points collapse to the first occurrence. The
/// polygon is not validated: a self-intersecting boundary propagates
/// whatever the triangulator produces (or panics inside the CDT when
/// constraint edges cross). Callers needing guarantees must order the
/// points first.
///
/// # Errors
///
/// Returns [`TessellationError::Failed`] when fewer than 3 points are given
/// or a point cannot be inserted into the triangulation.
#[allow(clippy::cast_possible_truncation)]
pub fn triangulate_polygon(points: &[Point2]) -> Result<Vec<[u32; 3]>> {
    if points.len() < 3 {
        return Err(
            TessellationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
    let mut handles = Vec::with_capacity(points.len());
    // Maps spade vertex indices back to input indices (first occurrence wins
    // for duplicates).
    let mut input_index: HashMap<usize, u32> = HashMap::new();

    for (i, pt) in points.iter().enumerate() {
        let handle = cdt
            .insert(SpadePoint2::new(pt.x, pt.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        input_index.entry(handle.index()).or_insert(i as u32);
        handles.push(handle);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    let interior = classify_interior_faces(&cdt);

    let mut triangles = Vec::new();
    for face in cdt.inner_faces() {
        if !interior.contains(&face.fix().index()) {
            continue;
        }
        let verts = face.vertices();
        let mut tri = [0u32; 3];
        let mut mapped = true;
        for (slot, vh) in verts.iter().enumerate() {
            // Every CDT vertex maps back to an input: no Steiner points are
            // inserted.
            match input_index.get(&vh.fix().index()) {
                Some(&idx) => tri[slot] = idx,
                None => {
                    mapped = false;
                    break;
                }
            }
        }
        if mapped {
            triangles.push(tri);
        }
    }

    Ok(triangles)
}

/// Classifies which inner faces of the CDT are inside the polygon using
/// flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each
/// time a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(
    cdt: &ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<spade::handles::InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    // Seed: find inner faces adjacent to the outer face via directed edges
    for edge in cdt.directed_edges() {
        if edge.face().fix() == outer_fix {
            let rev_face = edge.rev().face();
            if let Some(inner) = rev_face.as_inner() {
                let idx = inner.fix().index();
                if depth_map.contains_key(&idx) {
                    continue;
                }
                let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                depth_map.insert(idx, depth);
                if depth % 2 == 1 {
                    interior.insert(idx);
                }
                queue.push_back((inner.fix(), depth));
            }
        }
    }

    // BFS flood-fill
    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let neighbor = edge.rev().face();
            if let Some(inner_neighbor) = neighbor.as_inner() {
                let n_idx = inner_neighbor.fix().index();
                if depth_map.contains_key(&n_idx) {
                    continue;
                }
                let new_depth = if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                    depth + 1
                } else {
                    depth
                };
                depth_map.insert(n_idx, new_depth);
                if new_depth % 2 == 1 {
                    interior.insert(n_idx);
                }
                queue.push_back((inner_neighbor.fix(), new_depth));
            }
        }
    }

    interior
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area_2d;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn triangle_produces_one_triangle() {
        let tris = triangulate_polygon(&[p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0)]).unwrap();
        assert_eq!(tris.len(), 1);
    }

    #[test]
    fn square_produces_two_triangles() {
        let tris =
            triangulate_polygon(&[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]).unwrap();
        assert_eq!(tris.len(), 2);
    }

    #[test]
    fn l_shape_concave_triangulates() {
        let pts = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ];
        let tris = triangulate_polygon(&pts).unwrap();
        // 6 boundary vertices, no interior points → n - 2 triangles.
        assert_eq!(tris.len(), 4);
        // No triangle centroid may fall outside the L (the notch is x>2, y>2).
        for tri in &tris {
            let cx = tri.iter().map(|&i| pts[i as usize].x).sum::<f64>() / 3.0;
            let cy = tri.iter().map(|&i| pts[i as usize].y).sum::<f64>() / 3.0;
            assert!(
                !(cx > 2.0 && cy > 2.0),
                "triangle centroid ({cx}, {cy}) is inside the notch"
            );
        }
    }

    #[test]
    fn triangles_are_counter_clockwise() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        let tris = triangulate_polygon(&pts).unwrap();
        for tri in &tris {
            let corners: Vec<Point2> = tri.iter().map(|&i| pts[i as usize]).collect();
            assert!(signed_area_2d(&corners) > 0.0);
        }
    }

    #[test]
    fn too_few_points_fail() {
        assert!(triangulate_polygon(&[p(0.0, 0.0), p(1.0, 0.0)]).is_err());
    }

    #[test]
    fn duplicate_points_collapse() {
        let tris = triangulate_polygon(&[
            p(0.0, 0.0),
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(2.0, 3.0),
        ])
        .unwrap();
        assert_eq!(tris.len(), 1);
        for tri in &tris {
            assert!(tri.iter().all(|&i| (i as usize) < 4));
        }
    }
}
