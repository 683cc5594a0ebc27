//! Multilinear interpolation/extrapolation on a rectilinear grid.
//!
//! ```rust
//! use enginterp::multilinear::rectilinear;
//!
//! // Define a grid
//! let x = [1.0_f64, 1.2, 2.0];
//! let y = [1.0_f64, 1.3, 1.5];
//!
//! // Grid input for rectilinear method
//! let grids = &[&x[..], &y[..]];
//!
//! // Values at grid points
//! let z = [2.0; 9];
//!
//! // Points to interpolate/extrapolate
//! let xobs = [0.0_f64, 5.0];
//! let yobs = [-1.0, 3.0];
//! let obs = [&xobs[..], &yobs[..]];
//!
//! // Storage for output
//! let mut out = [0.0; 2];
//!
//! rectilinear::interpn(grids, &z, &obs, &mut out).unwrap();
//! assert_eq!(out, [2.0, 2.0]);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Weighted_mean
use num_traits::Float;

use crate::error::Error;

/// Largest number of dimensions handled by the flattened evaluator.
pub const MAXDIMS: usize = 4;

/// Evaluate multilinear interpolation on a rectilinear grid in 1 to 4 dimensions
/// for a batch of observation points.
/// Assumes C-style ordering of vals (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
///
/// Observation points outside the grid are extrapolated linearly from the boundary cell.
///
/// # Errors
/// * If the dimensionality of the observation points does not match the grid
/// * If the grid has more than [`MAXDIMS`] dimensions
/// * If the grid itself is invalid (see [`MultilinearRectilinear::new`])
pub fn interpn<T: Float>(
    grids: &[&[T]],
    vals: &[T],
    obs: &[&[T]],
    out: &mut [T],
) -> Result<(), Error> {
    let ndims = grids.len();
    if obs.len() != ndims {
        return Err(Error::DimensionMismatch {
            got: obs.len(),
            expected: ndims,
        });
    }
    match ndims {
        1 => MultilinearRectilinear::<'_, T, 1>::new(as_array(grids)?, vals)?
            .interp(&as_array(obs)?, out),
        2 => MultilinearRectilinear::<'_, T, 2>::new(as_array(grids)?, vals)?
            .interp(&as_array(obs)?, out),
        3 => MultilinearRectilinear::<'_, T, 3>::new(as_array(grids)?, vals)?
            .interp(&as_array(obs)?, out),
        4 => MultilinearRectilinear::<'_, T, 4>::new(as_array(grids)?, vals)?
            .interp(&as_array(obs)?, out),
        _ => Err(Error::InvalidGrid(
            "Number of dimensions must be between 1 and 4",
        )),
    }
}

/// Evaluate the interpolant at a single point, choosing the arity from the
/// number of grids.
///
/// # Errors
/// Same conditions as [`interpn`].
pub fn interp_one<T: Float>(grids: &[&[T]], vals: &[T], x: &[T]) -> Result<T, Error> {
    let ndims = grids.len();
    if x.len() != ndims {
        return Err(Error::DimensionMismatch {
            got: x.len(),
            expected: ndims,
        });
    }
    match ndims {
        1 => Ok(MultilinearRectilinear::<'_, T, 1>::new(as_array(grids)?, vals)?
            .interp_one(point(x)?)),
        2 => Ok(MultilinearRectilinear::<'_, T, 2>::new(as_array(grids)?, vals)?
            .interp_one(point(x)?)),
        3 => Ok(MultilinearRectilinear::<'_, T, 3>::new(as_array(grids)?, vals)?
            .interp_one(point(x)?)),
        4 => Ok(MultilinearRectilinear::<'_, T, 4>::new(as_array(grids)?, vals)?
            .interp_one(point(x)?)),
        _ => Err(Error::InvalidGrid(
            "Number of dimensions must be between 1 and 4",
        )),
    }
}

#[inline]
fn as_array<'a, T, const N: usize>(s: &[&'a [T]]) -> Result<[&'a [T]; N], Error> {
    s.try_into().map_err(|_| Error::DimensionMismatch {
        got: s.len(),
        expected: N,
    })
}

#[inline]
fn point<T: Copy, const N: usize>(x: &[T]) -> Result<[T; N], Error> {
    x.try_into().map_err(|_| Error::DimensionMismatch {
        got: x.len(),
        expected: N,
    })
}

/// A multilinear interpolator / extrapolator on a rectilinear grid of 1 to 4 dimensions.
///
/// Assumes C-style ordering of vals (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
///
/// Operation Complexity
/// * O(2^N) for interpolation and extrapolation in all regions,
///   plus a bisection search of O(log2(gridsize)) per dimension.
///
/// Memory Complexity
/// * Peak stack usage is O(N). Nothing is allocated.
pub struct MultilinearRectilinear<'a, T: Float, const N: usize> {
    /// x, y, ... coordinate grids, each entry of size dims[i]
    grids: [&'a [T]; N],

    /// Size of each dimension
    dims: [usize; N],

    /// Stride between consecutive indices along each dimension
    dimprod: [usize; N],

    /// Values at each point, size prod(dims)
    vals: &'a [T],
}

impl<'a, T: Float, const N: usize> MultilinearRectilinear<'a, T, N> {
    /// Build a new interpolator, using O(N) storage.
    ///
    /// # Errors
    /// * If the number of values does not match the product of the grid sizes
    /// * If any grid has fewer than 2 entries
    /// * If any grid is not strictly increasing
    pub fn new(grids: [&'a [T]; N], vals: &'a [T]) -> Result<Self, Error> {
        let mut dims = [1_usize; N];
        (0..N).for_each(|i| dims[i] = grids[i].len());
        let nvals = dims
            .iter()
            .try_fold(1_usize, |acc, &n| acc.checked_mul(n))
            .ok_or(Error::InvalidGrid("Grid size overflows usize"))?;
        if vals.len() != nvals {
            return Err(Error::DimensionMismatch {
                got: vals.len(),
                expected: nvals,
            });
        }
        if dims.iter().any(|&n| n < 2) {
            return Err(Error::InvalidGrid("All grids must have at least 2 entries"));
        }
        let increasing = grids.iter().all(|g| g.windows(2).all(|w| w[1] > w[0]));
        if !increasing {
            return Err(Error::InvalidGrid(
                "All grids must be strictly increasing",
            ));
        }

        Ok(Self::from_sorted_axes(grids, vals))
    }

    /// Build an interpolator from axes already known to be strictly
    /// increasing with at least 2 entries each, and `vals` of matching size.
    pub(crate) fn from_sorted_axes(grids: [&'a [T]; N], vals: &'a [T]) -> Self {
        const {
            assert!(
                N > 0 && N <= MAXDIMS,
                "Flattened method defined for 1-4 dimensions"
            );
        }
        let mut dims = [1_usize; N];
        (0..N).for_each(|i| dims[i] = grids[i].len());

        // Each entry is the cumulative product of the size of dimensions
        // higher than this one.
        let mut dimprod = [1_usize; N];
        let mut acc = 1;
        for i in (0..N).rev() {
            dimprod[i] = acc;
            acc *= dims[i];
        }

        Self {
            grids,
            dims,
            dimprod,
            vals,
        }
    }

    /// Interpolate on a contiguous list of observation points.
    ///
    /// # Errors
    ///   * If the number of coordinates for any dimension does not match the output size
    pub fn interp(&self, x: &[&[T]; N], out: &mut [T]) -> Result<(), Error> {
        let n = out.len();
        if let Some(bad) = x.iter().find(|xx| xx.len() != n) {
            return Err(Error::DimensionMismatch {
                got: bad.len(),
                expected: n,
            });
        }

        let mut tmp = [T::zero(); N];
        for i in 0..n {
            (0..N).for_each(|j| tmp[j] = x[j][i]);
            out[i] = self.interp_one(tmp);
        }

        Ok(())
    }

    /// Interpolate the value at a point, using fixed-size intermediate storage.
    ///
    /// Each of the 2^N corners of the bracketing cell is weighted by the
    /// product over dimensions of `t` or `1 - t`, selected by the matching
    /// bit of the corner index. At grid points the weights are exactly zero
    /// or one, so stored values come back unchanged.
    #[inline]
    pub fn interp_one(&self, x: [T; N]) -> T {
        let mut origin = [0_usize; N]; // Indices of lower corner of hypercube
        let mut t = [T::zero(); N]; // Normalized location inside the cell
        for i in 0..N {
            origin[i] = self.get_loc(x[i], i);
            let x0 = self.grids[i][origin[i]];
            let x1 = self.grids[i][origin[i] + 1];
            t[i] = (x[i] - x0) / (x1 - x0);
        }

        let one = T::one();
        let mut acc = T::zero();
        for corner in 0..(1_usize << N) {
            let mut weight = one;
            let mut flat = 0;
            for j in 0..N {
                let offset = (corner >> j) & 1;
                weight = weight * if offset == 1 { t[j] } else { one - t[j] };
                flat += (origin[j] + offset) * self.dimprod[j];
            }
            acc = acc + weight * self.vals[flat];
        }

        acc
    }

    /// Get the lower-corner index along this dimension where `v` is found,
    /// saturating to the boundary cell at the edges.
    #[inline]
    fn get_loc(&self, v: T, dim: usize) -> usize {
        // Returns `0` if the point is outside-low
        // and `self.dims[dim]` if outside-high.
        let iloc: isize = self.grids[dim].partition_point(|x| *x < v) as isize - 1;

        let dimmax = self.dims[dim] as isize - 2; // maximum index for lower corner
        iloc.max(0).min(dimmax) as usize
    }
}
