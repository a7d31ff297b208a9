use crate::error::Result;
use crate::geometry::{Model, ModelStyle};
use crate::math::angular_sort::sort_clockwise;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Matrix4, Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::{triangulate_polygon, TriangleMesh};

/// Optional knobs for [`ExtrudePolygon`].
///
/// Scale and transform are genuine optionals rather than sentinel values:
/// `scale: Some(Vector3::zeros())` really does request a zero scale.
#[derive(Debug, Clone)]
pub struct ExtrudeParams {
    /// Sort the input points into clockwise order first. Disable only when
    /// the points already trace a simple boundary.
    pub sort_points: bool,
    /// Rotation about the X axis in degrees, applied first. Skipped when
    /// exactly zero.
    pub rotate_x: f64,
    /// Rotation about the Y axis in degrees, applied second.
    pub rotate_y: f64,
    /// Rotation about the Z axis in degrees, applied third.
    pub rotate_z: f64,
    /// Non-uniform scale applied after the rotations.
    pub scale: Option<Vector3>,
    /// Affine transform composed last, after all of the above.
    pub transform: Option<Matrix4>,
    /// Display attributes attached to the result.
    pub style: ModelStyle,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            sort_points: true,
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
            scale: None,
            transform: None,
            style: ModelStyle::named("Extrude"),
        }
    }
}

/// Extrudes a 2D polygon into a capped, watertight solid.
///
/// The polygon is placed at z = 0, triangulated, extruded along +Z by
/// `height` with matching end caps, and then translated by `-height/2` so
/// the solid is centered on the XY plane; the centering step is always
/// applied. Rotations, scale, and the final affine transform follow in that
/// fixed order when requested.
///
/// The polygon is not validated: a boundary that still self-intersects
/// after sorting (or unsorted input that never was simple) propagates
/// whatever the triangulation produces.
pub struct ExtrudePolygon {
    points: Vec<Point2>,
    height: f64,
    params: ExtrudeParams,
}

impl ExtrudePolygon {
    /// Creates a new `ExtrudePolygon` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, height: f64, params: ExtrudeParams) -> Self {
        Self {
            points,
            height,
            params,
        }
    }

    /// Executes the extrusion, returning the solid and its display
    /// attributes.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary has fewer than 3 points or a point
    /// cannot be inserted into the triangulation.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<Model> {
        let boundary = if self.params.sort_points {
            sort_clockwise(&self.points)
        } else {
            self.points.clone()
        };

        // The cap and side builders assume clockwise order; flip unsorted
        // counter-clockwise input so the faces come out pointing outward.
        let boundary = if signed_area_2d(&boundary) > 0.0 {
            boundary.into_iter().rev().collect()
        } else {
            boundary
        };

        let cap_triangles = triangulate_polygon(&boundary)?;

        let mut mesh = TriangleMesh::default();
        let n = boundary.len() as u32;

        // Bottom cap at z = 0, facing -Z: CDT triangles are CCW in the XY
        // plane, so reverse their winding.
        for pt in &boundary {
            mesh.vertices.push(Point3::new(pt.x, pt.y, 0.0));
            mesh.normals.push(-Vector3::z());
        }
        for tri in &cap_triangles {
            mesh.indices.push([tri[0], tri[2], tri[1]]);
        }

        // Top cap at z = height, facing +Z.
        for pt in &boundary {
            mesh.vertices.push(Point3::new(pt.x, pt.y, self.height));
            mesh.normals.push(Vector3::z());
        }
        for tri in &cap_triangles {
            mesh.indices.push([n + tri[0], n + tri[1], n + tri[2]]);
        }

        // Side quads: for a clockwise boundary the outward normal of edge
        // a→b is z × dir.
        for i in 0..boundary.len() {
            let j = (i + 1) % boundary.len();
            let a = boundary[i];
            let b = boundary[j];
            let dir = Vector3::new(b.x - a.x, b.y - a.y, 0.0);
            let len = dir.norm();
            let normal = if len > TOLERANCE {
                Vector3::z().cross(&(dir / len))
            } else {
                Vector3::z()
            };

            let base = mesh.vertices.len() as u32;
            mesh.vertices.push(Point3::new(a.x, a.y, 0.0)); // a0
            mesh.vertices.push(Point3::new(b.x, b.y, 0.0)); // b0
            mesh.vertices.push(Point3::new(a.x, a.y, self.height)); // a1
            mesh.vertices.push(Point3::new(b.x, b.y, self.height)); // b1
            for _ in 0..4 {
                mesh.normals.push(normal);
            }
            mesh.indices.push([base, base + 3, base + 1]);
            mesh.indices.push([base, base + 2, base + 3]);
        }

        // Center the solid on the extrusion axis. Always applied.
        mesh.translate(&Vector3::new(0.0, 0.0, -self.height / 2.0));

        for (axis, angle) in [
            (nalgebra::Vector3::x_axis(), self.params.rotate_x),
            (nalgebra::Vector3::y_axis(), self.params.rotate_y),
            (nalgebra::Vector3::z_axis(), self.params.rotate_z),
        ] {
            if angle != 0.0 {
                let rotation =
                    nalgebra::Rotation3::from_axis_angle(&axis, angle.to_radians())
                        .to_homogeneous();
                mesh.apply(&rotation);
            }
        }

        if let Some(scale) = self.params.scale {
            mesh.apply(&Matrix4::new_nonuniform_scaling(&scale));
        }

        if let Some(transform) = self.params.transform {
            mesh.apply(&transform);
        }

        Ok(Model {
            mesh,
            style: self.params.style.clone(),
        })
    }
}
