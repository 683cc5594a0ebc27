//! Dense rectilinear grids built from scattered sample tuples.
//!
//! A [`Grid`] keeps only the *active* dimensions of its samples, those with
//! more than one distinct coordinate value, and evaluates by multilinear
//! interpolation over them: linear, bilinear, trilinear or quadrilinear
//! depending on how many survive. With no active dimension the grid is a
//! constant.
//!
//! ```rust
//! use enginterp::Grid;
//!
//! // Altitude, Mach and a temperature offset that never changes
//! let altitude = [0.0_f64, 0.0, 10000.0, 10000.0];
//! let mach = [0.2, 0.8, 0.2, 0.8];
//! let delta_t = [0.0; 4];
//! let thrust_ratio = [1.0, 2.0, 3.0, 4.0];
//!
//! let grid = Grid::build(&[&altitude[..], &mach[..], &delta_t[..]], &thrust_ratio).unwrap();
//! assert_eq!(grid.active_dims(), &[0, 1]);
//!
//! // Query with the active coordinates only...
//! let v = grid.evaluate(&[5000.0, 0.5]).unwrap();
//! assert!((v - 2.5).abs() < 1e-12);
//!
//! // ...or with the full point
//! let w = grid.evaluate_canonical(&[5000.0, 0.5, 0.0]).unwrap();
//! assert_eq!(v, w);
//! ```
use std::cmp::Ordering;

use itertools::Itertools;
use num_traits::Float;
use tracing::{debug, warn};

use crate::error::{Error, MalformedSampleSet};
use crate::multilinear::rectilinear::MAXDIMS;
use crate::multilinear::MultilinearRectilinear;

pub mod bounds;
pub mod sample;

pub use bounds::{AxisRange, Bounds};
pub use sample::SampleSet;

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// Immutable rectilinear grid over the active dimensions of a sample set.
///
/// Values are stored in C order over the active axes
/// (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    /// Canonical indices of the active dimensions, in canonical order
    active: Vec<usize>,

    /// Sorted distinct coordinates, one axis per active dimension
    axes: Vec<Vec<T>>,

    /// Values at each grid point, size prod(axes[i].len())
    values: Vec<T>,

    /// Sampled envelope over every canonical dimension
    bounds: Bounds<T>,

    /// Number of cells that had no sample and were set to zero
    filled: usize,
}

impl<T: Float> Grid<T> {
    /// Lay sample tuples out on a dense grid.
    ///
    /// `columns` holds one coordinate column per canonical dimension (1 to 4),
    /// `values` one dependent value per sample. Samples are matched to axis
    /// entries by exact equality. Grid cells with no sample are set to zero;
    /// when several samples land on the same cell, the last one wins.
    ///
    /// # Errors
    /// * If there are no columns or more than four
    /// * If the columns are empty or of different lengths
    /// * If the number of values does not match the number of samples
    /// * If any coordinate is NaN or infinite
    /// * If the product of the axis lengths exceeds [`MAX_CELLS`]
    pub fn build(columns: &[&[T]], values: &[T]) -> Result<Self, MalformedSampleSet> {
        let ndims = columns.len();
        if ndims == 0 {
            return Err(MalformedSampleSet::NoDimensions);
        }
        if ndims > MAXDIMS {
            return Err(MalformedSampleSet::TooManyDimensions {
                got: ndims,
                max: MAXDIMS,
            });
        }
        let nsamples = columns[0].len();
        if let Some((dim, c)) = columns.iter().find_position(|c| c.len() != nsamples) {
            return Err(MalformedSampleSet::CoordinateLengthMismatch {
                dim,
                got: c.len(),
                expected: nsamples,
            });
        }
        if nsamples == 0 {
            return Err(MalformedSampleSet::Empty);
        }
        if values.len() != nsamples {
            return Err(MalformedSampleSet::ValueCountMismatch {
                got: values.len(),
                expected: nsamples,
            });
        }
        for (dim, c) in columns.iter().enumerate() {
            if let Some(index) = c.iter().position(|x| !x.is_finite()) {
                return Err(MalformedSampleSet::NonFiniteCoordinate { dim, index });
            }
        }

        let bounds = Bounds::from_columns(columns).ok_or(MalformedSampleSet::Empty)?;

        let (active, axes): (Vec<usize>, Vec<Vec<T>>) = columns
            .iter()
            .map(|c| distinct_sorted(c))
            .enumerate()
            .filter(|(_, axis)| axis.len() > 1)
            .unzip();
        if let Some(k) = axes.iter().position(Vec::is_empty) {
            return Err(MalformedSampleSet::EmptyAxis { dim: active[k] });
        }

        let shape: Vec<usize> = axes.iter().map(Vec::len).collect();
        let size = shape
            .iter()
            .try_fold(1_usize, |acc, &n| acc.checked_mul(n))
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or_else(|| MalformedSampleSet::GridTooLarge {
                shape: shape.clone(),
                max: MAX_CELLS,
            })?;
        let mut strides = vec![1_usize; shape.len()];
        let mut acc = 1;
        for k in (0..shape.len()).rev() {
            strides[k] = acc;
            acc *= shape[k];
        }

        let mut cells: Vec<Option<T>> = vec![None; size];
        let mut duplicates = 0_usize;
        for (s, &v) in values.iter().enumerate() {
            let flat: usize = active
                .iter()
                .zip(&axes)
                .zip(&strides)
                .map(|((&d, axis), &stride)| axis_index(axis, columns[d][s]) * stride)
                .sum();
            if cells[flat].replace(v).is_some() {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            debug!(duplicates, "Duplicate samples overwritten, keeping the last");
        }
        let filled = cells.iter().filter(|c| c.is_none()).count();
        if filled > 0 {
            warn!(
                filled,
                cells = size,
                "Incomplete sample grid, missing cells set to zero"
            );
        }
        debug!(ndims, ?active, ?shape, "Built interpolation grid");

        Ok(Self {
            active,
            axes,
            values: cells.into_iter().map(|c| c.unwrap_or_else(T::zero)).collect(),
            bounds,
            filled,
        })
    }

    /// Evaluate the grid at a point given in active-dimension order.
    ///
    /// The number of coordinates selects the method: none for a constant grid,
    /// then linear, bilinear, trilinear or quadrilinear. Points outside the
    /// sampled domain are extrapolated linearly from the boundary cell; use
    /// [`Grid::in_range`] first to reject them.
    ///
    /// # Errors
    /// * If `query` does not have one coordinate per active dimension
    pub fn evaluate(&self, query: &[T]) -> Result<T, Error> {
        let n = self.active.len();
        if query.len() != n {
            return Err(Error::DimensionMismatch {
                got: query.len(),
                expected: n,
            });
        }
        match n {
            0 => self
                .values
                .first()
                .copied()
                .ok_or(Error::InvalidGrid("Constant grid has no value")),
            1 => self.evaluate_fixed::<1>(query),
            2 => self.evaluate_fixed::<2>(query),
            3 => self.evaluate_fixed::<3>(query),
            4 => self.evaluate_fixed::<4>(query),
            _ => Err(Error::InvalidGrid(
                "Number of dimensions must be between 1 and 4",
            )),
        }
    }

    /// Axes were sorted and deduplicated at build time.
    #[inline]
    fn evaluate_fixed<const N: usize>(&self, query: &[T]) -> Result<T, Error> {
        let x: [T; N] = query.try_into().map_err(|_| Error::DimensionMismatch {
            got: query.len(),
            expected: N,
        })?;
        let empty: &[T] = &[];
        let mut grids = [empty; N];
        (0..N).for_each(|k| grids[k] = self.axes[k].as_slice());
        Ok(MultilinearRectilinear::from_sorted_axes(grids, &self.values).interp_one(x))
    }

    /// Evaluate the grid at a point with one coordinate per canonical
    /// dimension; coordinates of inactive dimensions are ignored.
    ///
    /// # Errors
    /// * If `point` does not have one coordinate per canonical dimension
    pub fn evaluate_canonical(&self, point: &[T]) -> Result<T, Error> {
        self.check_canonical(point)?;
        let mut query = [T::zero(); MAXDIMS];
        self.active
            .iter()
            .enumerate()
            .for_each(|(k, &d)| query[k] = point[d]);
        self.evaluate(&query[..self.active.len()])
    }

    /// Whether a canonical point lies inside the sampled envelope,
    /// including the dimensions that were dropped.
    pub fn in_range(&self, point: &[T]) -> Result<bool, Error> {
        self.bounds.in_range(point)
    }

    fn check_canonical(&self, point: &[T]) -> Result<(), Error> {
        if point.len() != self.ndims() {
            return Err(Error::DimensionMismatch {
                got: point.len(),
                expected: self.ndims(),
            });
        }
        Ok(())
    }

    /// Number of canonical dimensions the samples were given in.
    pub fn ndims(&self) -> usize {
        self.bounds.ndims()
    }

    /// Canonical indices of the dimensions kept for interpolation.
    pub fn active_dims(&self) -> &[usize] {
        &self.active
    }

    /// Whether no dimension varies, so every query gives the same value.
    pub fn is_constant(&self) -> bool {
        self.active.is_empty()
    }

    /// Sorted distinct coordinates of the `k`th active dimension.
    pub fn axis(&self, k: usize) -> Option<&[T]> {
        self.axes.get(k).map(Vec::as_slice)
    }

    /// Number of grid points along each active dimension.
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Vec::len).collect()
    }

    /// Dense values in C order over the active axes.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Sampled envelope over every canonical dimension.
    pub fn bounds(&self) -> &Bounds<T> {
        &self.bounds
    }

    /// Number of grid cells with no matching sample, which hold zero.
    pub fn filled_cells(&self) -> usize {
        self.filled
    }
}

/// Sorted, deduplicated copy of a column of finite values.
fn distinct_sorted<T: Float>(column: &[T]) -> Vec<T> {
    column
        .iter()
        .copied()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .dedup()
        .collect()
}

/// Position of `x` on an axis built from the same column.
#[inline]
fn axis_index<T: Float>(axis: &[T], x: T) -> usize {
    // Every sampled coordinate is on its axis, so the search always hits.
    axis.binary_search_by(|a| a.partial_cmp(&x).unwrap_or(Ordering::Equal))
        .unwrap_or_else(|i| i)
}
