//! Sampled envelope of a grid along every canonical dimension.
//!
//! Bounds are taken from the raw coordinate columns, so dimensions that the
//! builder dropped as degenerate still report their single value as both
//! `min` and `max`.
use num_traits::Float;

use crate::error::Error;

/// Closed interval covered by the samples along one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: Float> AxisRange<T> {
    /// Smallest range containing every entry of `column`, or `None` if it is empty.
    pub fn of(column: &[T]) -> Option<Self> {
        let (&first, rest) = column.split_first()?;
        Some(rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |r, &x| Self {
                min: r.min.min(x),
                max: r.max.max(x),
            },
        ))
    }

    #[inline]
    pub fn contains(&self, x: T) -> bool {
        self.min <= x && x <= self.max
    }
}

/// Per-dimension minimum and maximum of the sampled coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds<T> {
    ranges: Vec<AxisRange<T>>,
}

impl<T: Float> Bounds<T> {
    /// Collect bounds from raw coordinate columns; `None` if any column is empty.
    pub fn from_columns(columns: &[&[T]]) -> Option<Self> {
        let ranges = columns
            .iter()
            .map(|c| AxisRange::of(c))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { ranges })
    }

    /// Number of canonical dimensions tracked.
    pub fn ndims(&self) -> usize {
        self.ranges.len()
    }

    /// Smallest sampled coordinate along `dim`.
    pub fn min(&self, dim: usize) -> Option<T> {
        self.ranges.get(dim).map(|r| r.min)
    }

    /// Largest sampled coordinate along `dim`.
    pub fn max(&self, dim: usize) -> Option<T> {
        self.ranges.get(dim).map(|r| r.max)
    }

    /// Sampled range along `dim`, if the dimension exists.
    pub fn range(&self, dim: usize) -> Option<&AxisRange<T>> {
        self.ranges.get(dim)
    }

    /// Whether `point` lies inside the sampled envelope on every dimension.
    /// NaN coordinates are never in range.
    ///
    /// # Errors
    /// * If `point` does not have one coordinate per canonical dimension
    pub fn in_range(&self, point: &[T]) -> Result<bool, Error> {
        self.check_len(point.len())?;
        Ok(self.ranges.iter().zip(point).all(|(r, &x)| r.contains(x)))
    }

    /// Flag each dimension of `point` that falls outside the envelope by
    /// more than `atol`. Entry `i` of `out` is `true` on a violation.
    ///
    /// # Errors
    /// * If `point` or `out` does not have one entry per canonical dimension
    pub fn violations(&self, point: &[T], atol: T, out: &mut [bool]) -> Result<(), Error> {
        self.check_len(point.len())?;
        self.check_len(out.len())?;
        for (i, r) in self.ranges.iter().enumerate() {
            let x = point[i];
            out[i] = (x - r.min) < -atol || (x - r.max) > atol || x.is_nan();
        }
        Ok(())
    }

    fn check_len(&self, got: usize) -> Result<(), Error> {
        if got != self.ranges.len() {
            return Err(Error::DimensionMismatch {
                got,
                expected: self.ranges.len(),
            });
        }
        Ok(())
    }
}
