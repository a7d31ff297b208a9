pub mod morphology;

pub use morphology::ErodeShell;

use std::ops::Sub;

use crate::error::{OperationError, Result};

/// Element type of a voxel lattice.
///
/// Any nonzero value counts as foreground; morphology results are written
/// back as `ZERO`/`ONE` in the same element type, matching the convention of
/// labelmap volumes (the mask keeps its storage type, not a boolean one).
pub trait Voxel: Copy + PartialEq + Sub<Output = Self> {
    /// The background value.
    const ZERO: Self;
    /// The canonical foreground value.
    const ONE: Self;

    /// Whether this value counts as foreground.
    #[must_use]
    fn is_foreground(self) -> bool {
        self != Self::ZERO
    }
}

macro_rules! impl_voxel_int {
    ($($t:ty),*) => {
        $(impl Voxel for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
        })*
    };
}

macro_rules! impl_voxel_float {
    ($($t:ty),*) => {
        $(impl Voxel for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
        })*
    };
}

impl_voxel_int!(u8, u16, u32, i16, i32);
impl_voxel_float!(f32, f64);

/// A dense 3D voxel lattice.
///
/// Values are stored in row-major order with x varying fastest. The lattice
/// is a plain value type over integer coordinates; spacing, origin, and
/// orientation of the underlying image live with the host.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGrid<T> {
    values: Vec<T>,
    dimensions: (usize, usize, usize),
}

impl<T: Voxel> LabelGrid<T> {
    /// Creates a grid filled with a constant value.
    #[must_use]
    pub fn new(dimensions: (usize, usize, usize), fill: T) -> Self {
        let (nx, ny, nz) = dimensions;
        Self {
            values: vec![fill; nx * ny * nz],
            dimensions,
        }
    }

    /// Creates a grid from existing values in x-fastest order.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidParameter`] if the value count does
    /// not match the dimensions.
    pub fn from_values(dimensions: (usize, usize, usize), values: Vec<T>) -> Result<Self> {
        let (nx, ny, nz) = dimensions;
        if values.len() != nx * ny * nz {
            return Err(OperationError::InvalidParameter(format!(
                "expected {} values for a {nx}x{ny}x{nz} grid, got {}",
                nx * ny * nz,
                values.len()
            ))
            .into());
        }
        Ok(Self { values, dimensions })
    }

    /// Grid dimensions `(nx, ny, nz)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.dimensions
    }

    /// Value at grid coordinates, or `ZERO` when out of bounds.
    #[must_use]
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> T {
        if ix < self.dimensions.0 && iy < self.dimensions.1 && iz < self.dimensions.2 {
            self.values[self.index(ix, iy, iz)]
        } else {
            T::ZERO
        }
    }

    /// Sets the value at grid coordinates. Out-of-bounds writes are ignored.
    pub fn set(&mut self, ix: usize, iy: usize, iz: usize, value: T) {
        if ix < self.dimensions.0 && iy < self.dimensions.1 && iz < self.dimensions.2 {
            let idx = self.index(ix, iy, iz);
            self.values[idx] = value;
        }
    }

    /// Raw values in x-fastest order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Total number of voxels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the grid has no voxels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of foreground (nonzero) voxels.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_foreground()).count()
    }

    /// Converts 3D coordinates to a linear index.
    fn index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        ix + iy * self.dimensions.0 + iz * self.dimensions.0 * self.dimensions.1
    }
}
