use crate::error::{OperationError, Result};

use super::{LabelGrid, Voxel};

/// Decomposes a mask into its binary-eroded interior and the boundary shell
/// removed by the erosion.
///
/// The structuring element is an all-true cube of side `erosion_level`.
/// Erosion of a box element is separable, so the mask is swept with three
/// 1D window passes (x, then y, then z); out-of-bounds neighbors count as
/// background, so the foreground shrinks at the grid boundary.
///
/// Any nonzero voxel counts as foreground. The eroded result holds `ONE`
/// where the element fits entirely inside the foreground and `ZERO`
/// elsewhere, in the input's element type; the shell is the element-wise
/// arithmetic difference `input - eroded` (for a 0/1 mask this equals
/// AND-NOT). Multi-label masks are binarized by the erosion and the shell
/// difference is taken against the original labels; callers wanting
/// label-aware erosion must split the labels first.
///
/// The window at index `i` spans `[i - ⌊k/2⌋, i + ⌊(k-1)/2⌋]`; for even
/// `erosion_level` the element has no center voxel and the extra sample
/// lands on the negative side of each axis.
pub struct ErodeShell {
    erosion_level: usize,
}

impl ErodeShell {
    /// Creates a new `ErodeShell` operation.
    #[must_use]
    pub fn new(erosion_level: usize) -> Self {
        Self { erosion_level }
    }

    /// Executes the decomposition, returning `(eroded, shell)`.
    ///
    /// With `erosion_level = 1` the element is a single voxel, so on a 0/1
    /// mask the eroded result equals the input and the shell is all zero.
    ///
    /// Peak memory is roughly 2-3x the input: two boolean scratch buffers
    /// plus the two output grids.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidParameter`] if `erosion_level < 1`.
    pub fn execute<T: Voxel>(&self, mask: &LabelGrid<T>) -> Result<(LabelGrid<T>, LabelGrid<T>)> {
        let k = self.erosion_level;
        if k < 1 {
            return Err(
                OperationError::InvalidParameter("erosion level must be at least 1".into()).into(),
            );
        }

        let dims = mask.dimensions();
        let mut current: Vec<bool> = mask.values().iter().map(|v| v.is_foreground()).collect();
        let mut scratch = vec![false; current.len()];

        for axis in 0..3 {
            erode_axis(&current, &mut scratch, dims, axis, k);
            std::mem::swap(&mut current, &mut scratch);
        }

        let eroded_values: Vec<T> = current
            .iter()
            .map(|&fits| if fits { T::ONE } else { T::ZERO })
            .collect();
        let shell_values: Vec<T> = mask
            .values()
            .iter()
            .zip(&eroded_values)
            .map(|(&original, &eroded)| original - eroded)
            .collect();

        let eroded = LabelGrid::from_values(dims, eroded_values)?;
        let shell = LabelGrid::from_values(dims, shell_values)?;
        Ok((eroded, shell))
    }
}

/// Erodes `src` into `dst` along one axis with a 1D all-true window of
/// length `k`, using a sliding foreground count per line.
fn erode_axis(
    src: &[bool],
    dst: &mut [bool],
    dims: (usize, usize, usize),
    axis: usize,
    k: usize,
) {
    let (nx, ny, nz) = dims;
    let (len, stride) = match axis {
        0 => (nx, 1),
        1 => (ny, nx),
        _ => (nz, nx * ny),
    };
    let lo = k / 2;
    let hi = (k - 1) / 2;

    let mut line_starts = Vec::new();
    match axis {
        0 => {
            for iz in 0..nz {
                for iy in 0..ny {
                    line_starts.push(iy * nx + iz * nx * ny);
                }
            }
        }
        1 => {
            for iz in 0..nz {
                for ix in 0..nx {
                    line_starts.push(ix + iz * nx * ny);
                }
            }
        }
        _ => {
            for iy in 0..ny {
                for ix in 0..nx {
                    line_starts.push(ix + iy * nx);
                }
            }
        }
    }

    for base in line_starts {
        if len == 0 {
            continue;
        }
        // Prime the window for i = 0: indices [0, hi] clipped to the line.
        let mut count = 0usize;
        for j in 0..=hi.min(len - 1) {
            if src[base + j * stride] {
                count += 1;
            }
        }
        for i in 0..len {
            let window_in_bounds = i >= lo && i + hi < len;
            dst[base + i * stride] = window_in_bounds && count == k;
            if i + 1 < len {
                if i >= lo && src[base + (i - lo) * stride] {
                    count -= 1;
                }
                if i + 1 + hi < len && src[base + (i + 1 + hi) * stride] {
                    count += 1;
                }
            }
        }
    }
}
