use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::geometry::{Model, ModelStyle};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};
use crate::tessellation::TriangleMesh;

/// Parameters for [`MakeHollowCylinder`].
#[derive(Debug, Clone)]
pub struct HollowCylinderParams {
    /// Cylinder height.
    pub height: f64,
    /// Inner radius; zero produces a solid cylinder.
    pub radius_inner: f64,
    /// Outer radius.
    pub radius_outer: f64,
    /// Number of radial vertex rings spanning inner to outer radius.
    pub rings: usize,
    /// Angular resolution of the polar grid.
    pub segments: usize,
    /// Center of the cylinder.
    pub center: Point3,
    /// Axis direction; need not be normalized.
    pub direction: Vector3,
    /// Affine transform composed last.
    pub transform: Option<Matrix4>,
    /// Display attributes attached to the result.
    pub style: ModelStyle,
}

impl Default for HollowCylinderParams {
    fn default() -> Self {
        Self {
            height: 1.0,
            radius_inner: 0.0,
            radius_outer: 1.0,
            rings: 5,
            segments: 64,
            center: Point3::origin(),
            direction: Vector3::z(),
            transform: None,
            style: ModelStyle::named("Cylinder"),
        }
    }
}

/// Builds a hollow (annular) cylinder as a triangle mesh.
///
/// The tube is generated around the local +Z axis, centered on the origin,
/// then rotated onto `direction` and translated to `center`. End caps are
/// polar grids with `rings` radial subdivisions so the annulus between the
/// two radii is meshed evenly; with `radius_inner = 0` the caps degenerate
/// to full discs and no inner wall is emitted.
pub struct MakeHollowCylinder {
    params: HollowCylinderParams,
}

impl MakeHollowCylinder {
    /// Creates a new `MakeHollowCylinder` operation.
    #[must_use]
    pub fn new(params: HollowCylinderParams) -> Self {
        Self { params }
    }

    /// Executes the operation, returning the cylinder and its display
    /// attributes.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidParameter`] if the radii are not
    /// `0 <= radius_inner < radius_outer`, the height is not positive, the
    /// axis direction is zero-length, or the resolution is below 2 rings /
    /// 3 segments.
    pub fn execute(&self) -> Result<Model> {
        let p = &self.params;
        if p.radius_outer < TOLERANCE {
            return Err(
                OperationError::InvalidParameter("outer radius must be positive".into()).into(),
            );
        }
        if p.radius_inner < 0.0 || p.radius_inner >= p.radius_outer {
            return Err(OperationError::InvalidParameter(
                "inner radius must satisfy 0 <= inner < outer".into(),
            )
            .into());
        }
        if p.height < TOLERANCE {
            return Err(
                OperationError::InvalidParameter("cylinder height must be positive".into()).into(),
            );
        }
        let axis_len = p.direction.norm();
        if axis_len < TOLERANCE {
            return Err(
                OperationError::InvalidParameter("cylinder axis must be non-zero".into()).into(),
            );
        }
        if p.rings < 2 {
            return Err(
                OperationError::InvalidParameter("at least 2 radial rings required".into()).into(),
            );
        }
        if p.segments < 3 {
            return Err(
                OperationError::InvalidParameter("at least 3 segments required".into()).into(),
            );
        }

        let mut mesh = TriangleMesh::default();
        let half = p.height / 2.0;

        // End caps as polar grids, annular when the inner radius is nonzero.
        add_cap(&mut mesh, p, half, true);
        add_cap(&mut mesh, p, -half, false);

        // Walls.
        add_wall(&mut mesh, p, p.radius_outer, half, true);
        if p.radius_inner > TOLERANCE {
            add_wall(&mut mesh, p, p.radius_inner, half, false);
        }

        let axis = p.direction / axis_len;
        if let Some(rotation) = nalgebra::Rotation3::rotation_between(&Vector3::z(), &axis) {
            if rotation.angle() > TOLERANCE {
                mesh.apply(&rotation.to_homogeneous());
            }
        } else {
            // Antiparallel axis: half a turn around X.
            let flip = nalgebra::Rotation3::from_axis_angle(
                &nalgebra::Vector3::x_axis(),
                std::f64::consts::PI,
            );
            mesh.apply(&flip.to_homogeneous());
        }
        mesh.translate(&(p.center - Point3::origin()));

        if let Some(transform) = p.transform {
            mesh.apply(&transform);
        }

        Ok(Model {
            mesh,
            style: p.style.clone(),
        })
    }
}

/// Appends an annular cap at `z`, facing +Z when `top` is set.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn add_cap(mesh: &mut TriangleMesh, p: &HollowCylinderParams, z: f64, top: bool) {
    let rows = p.rings;
    let cols = p.segments;
    let base = mesh.vertices.len() as u32;
    let normal = if top { Vector3::z() } else { -Vector3::z() };

    for ir in 0..rows {
        let r = p.radius_inner
            + (p.radius_outer - p.radius_inner) * ir as f64 / (rows - 1) as f64;
        for itheta in 0..cols {
            let theta = TAU * itheta as f64 / cols as f64;
            mesh.vertices
                .push(Point3::new(r * theta.cos(), r * theta.sin(), z));
            mesh.normals.push(normal);
        }
    }

    // Wrap around in the θ direction.
    for ir in 0..rows - 1 {
        for itheta in 0..cols {
            let next = (itheta + 1) % cols;
            let i00 = base + (ir * cols + itheta) as u32;
            let i10 = base + (ir * cols + next) as u32;
            let i01 = base + ((ir + 1) * cols + itheta) as u32;
            let i11 = base + ((ir + 1) * cols + next) as u32;
            if top {
                mesh.indices.push([i00, i11, i10]);
                mesh.indices.push([i00, i01, i11]);
            } else {
                mesh.indices.push([i00, i10, i11]);
                mesh.indices.push([i00, i11, i01]);
            }
        }
    }
}

/// Appends a cylindrical wall at `radius`, facing outward when `outward`
/// is set.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn add_wall(mesh: &mut TriangleMesh, p: &HollowCylinderParams, radius: f64, half: f64, outward: bool) {
    let cols = p.segments;
    let base = mesh.vertices.len() as u32;

    for z in [-half, half] {
        for itheta in 0..cols {
            let theta = TAU * itheta as f64 / cols as f64;
            let radial = Vector3::new(theta.cos(), theta.sin(), 0.0);
            mesh.vertices
                .push(Point3::new(radius * radial.x, radius * radial.y, z));
            mesh.normals.push(if outward { radial } else { -radial });
        }
    }

    for itheta in 0..cols {
        let next = (itheta + 1) % cols;
        let i00 = base + itheta as u32;
        let i10 = base + next as u32;
        let i01 = base + (cols + itheta) as u32;
        let i11 = base + (cols + next) as u32;
        if outward {
            mesh.indices.push([i00, i10, i11]);
            mesh.indices.push([i00, i11, i01]);
        } else {
            mesh.indices.push([i00, i11, i10]);
            mesh.indices.push([i00, i01, i11]);
        }
    }
}
