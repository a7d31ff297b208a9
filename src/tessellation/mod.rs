mod triangulate;

pub use triangulate::triangulate_polygon;

use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// A triangle mesh describing a closed (or open) surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Computes the axis-aligned bounding box of the mesh vertices.
    ///
    /// Returns `None` for a mesh with no vertices.
    #[must_use]
    pub fn aabb(&self) -> Option<Aabb> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }
        Some(Aabb { min, max })
    }

    /// Translates all vertices by a displacement vector.
    pub fn translate(&mut self, displacement: &Vector3) {
        for v in &mut self.vertices {
            *v += displacement;
        }
    }

    /// Applies a 4x4 transformation matrix to the mesh.
    ///
    /// Vertex positions are transformed in homogeneous coordinates. Normals
    /// are transformed with the inverse-transpose of the upper 3x3 block and
    /// renormalized, which keeps them correct under non-uniform scaling. If
    /// the matrix is singular the normals are instead recomputed flat from
    /// the transformed triangles.
    pub fn apply(&mut self, matrix: &Matrix4) {
        for v in &mut self.vertices {
            let h = matrix * nalgebra::Vector4::new(v.x, v.y, v.z, 1.0);
            *v = Point3::new(h.x, h.y, h.z);
        }

        let linear = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        if let Some(inverse) = linear.try_inverse() {
            let normal_matrix = inverse.transpose();
            for n in &mut self.normals {
                let mapped = normal_matrix * *n;
                let len = mapped.norm();
                *n = if len > TOLERANCE { mapped / len } else { *n };
            }
        } else {
            self.recompute_flat_normals();
        }
    }

    /// Recomputes per-vertex normals as flat face normals.
    ///
    /// Each vertex takes the normal of the last triangle that references it,
    /// which is exact for meshes whose vertices are not shared across
    /// differently-oriented faces.
    fn recompute_flat_normals(&mut self) {
        self.normals.resize(self.vertices.len(), Vector3::z());
        for tri in &self.indices {
            let a = self.vertices[tri[0] as usize];
            let b = self.vertices[tri[1] as usize];
            let c = self.vertices[tri[2] as usize];
            let n = (b - a).cross(&(c - a));
            let len = n.norm();
            if len > TOLERANCE {
                let n = n / len;
                for &i in tri {
                    self.normals[i as usize] = n;
                }
            }
        }
    }
}
