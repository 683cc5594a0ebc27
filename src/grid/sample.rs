//! Raw measurement tuples, before they are laid out on a grid.
use num_traits::Float;

use super::Grid;
use crate::error::{Error, MalformedSampleSet};

/// Parallel coordinate columns plus one dependent value per sample.
///
/// Rows need not be sorted, unique, or cover the full Cartesian product of
/// the coordinate values; [`Grid::build`] sorts that out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSet<T> {
    columns: Vec<Vec<T>>,
    values: Vec<T>,
}

impl<T: Float> SampleSet<T> {
    /// Empty set with `ndims` coordinate columns.
    pub fn new(ndims: usize) -> Self {
        Self {
            columns: vec![Vec::new(); ndims],
            values: Vec::new(),
        }
    }

    /// Wrap existing columns. Consistency is checked when the grid is built.
    pub fn from_columns(columns: Vec<Vec<T>>, values: Vec<T>) -> Self {
        Self { columns, values }
    }

    /// Append one sample.
    ///
    /// # Errors
    /// * If `coords` does not have one entry per column
    pub fn push(&mut self, coords: &[T], value: T) -> Result<(), Error> {
        if coords.len() != self.columns.len() {
            return Err(Error::DimensionMismatch {
                got: coords.len(),
                expected: self.columns.len(),
            });
        }
        self.columns
            .iter_mut()
            .zip(coords)
            .for_each(|(c, &x)| c.push(x));
        self.values.push(value);
        Ok(())
    }

    /// Number of coordinate columns.
    pub fn ndims(&self) -> usize {
        self.columns.len()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no sample has been added.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinates of every sample along `dim`.
    pub fn column(&self, dim: usize) -> Option<&[T]> {
        self.columns.get(dim).map(Vec::as_slice)
    }

    /// Dependent value of every sample.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Lay the samples out on a rectilinear grid.
    pub fn build(&self) -> Result<Grid<T>, MalformedSampleSet> {
        let columns: Vec<&[T]> = self.columns.iter().map(Vec::as_slice).collect();
        Grid::build(&columns, &self.values)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_push_rows() {
        let mut s = SampleSet::new(2);
        s.push(&[0.0, 0.2], 1.0).unwrap();
        s.push(&[0.0, 0.8], 2.0).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.column(1), Some(&[0.2, 0.8][..]));
        assert_eq!(s.values(), &[1.0, 2.0]);

        assert_eq!(
            s.push(&[1.0], 3.0),
            Err(Error::DimensionMismatch {
                got: 1,
                expected: 2
            })
        );
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_build_reports_malformed_columns() {
        let s = SampleSet::from_columns(vec![vec![0.0, 1.0], vec![0.0]], vec![1.0, 2.0]);
        assert_eq!(
            s.build(),
            Err(MalformedSampleSet::CoordinateLengthMismatch {
                dim: 1,
                got: 1,
                expected: 2
            })
        );
        assert!(SampleSet::<f64>::new(3).build().is_err());
    }
}
