//! Convenience methods for laying out sample sets and observation grids.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint. A single point yields `[start]`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return vec![start; n];
    }
    let dx: T = (stop - start) / T::from(n - 1).unwrap_or_else(T::one);
    (0..n)
        .map(|i| start + T::from(i).unwrap_or_else(T::zero) * dx)
        .collect()
}

/// Generates a meshgrid in C ordering (x0, y0, z0, x0, y0, z1, ..., x0, yn, zn),
/// one row per point.
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .multi_cartesian_product()
        .map(|xx| xx.iter().map(|y| **y).collect())
        .collect()
}

/// Transposes meshgrid rows into one column per dimension, the layout
/// taken by the grid builder.
pub fn columns<T>(rows: &[Vec<T>]) -> Vec<Vec<T>>
where
    T: Float,
{
    let ndims = rows.first().map_or(0, Vec::len);
    (0..ndims)
        .map(|j| rows.iter().map(|row| row[j]).collect())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linspace_includes_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert!(linspace::<f64>(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_meshgrid_is_c_ordered() {
        let x = vec![0.0, 1.0];
        let y = vec![10.0, 20.0, 30.0];
        let rows = meshgrid(vec![&x, &y]);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1], vec![0.0, 20.0]);
        assert_eq!(rows[3], vec![1.0, 10.0]);

        let cols = columns(&rows);
        assert_eq!(cols[0], vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(cols[1], vec![10.0, 20.0, 30.0, 10.0, 20.0, 30.0]);
    }
}
