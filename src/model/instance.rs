//! Immutable symmetric distance matrix plus instance identity.

use crate::error::{Result, TspError};

/// A TSP instance: name, city count, and a dense symmetric distance matrix
/// stored in row-major order.
///
/// The matrix is fully populated at construction and immutable afterwards;
/// tours are only ever measured against a finished instance.
///
/// # Examples
///
/// ```
/// use tsp_heur::model::TspInstance;
///
/// let instance = TspInstance::from_upper_triangular(
///     "tiny", 3, &[1.0, 2.0, 3.0],
/// ).unwrap();
/// assert_eq!(instance.size(), 3);
/// assert!((instance.distance(0, 1) - 1.0).abs() < 1e-12);
/// assert!((instance.distance(1, 0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    name: String,
    size: usize,
    /// Row-major n*n distances.
    matrix: Vec<f64>,
}

impl TspInstance {
    /// Creates an instance from a full n x n matrix in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::MalformedInstance`] if `size < 2`, the matrix
    /// length does not equal `size * size`, any entry is negative or
    /// non-finite, the diagonal is non-zero, or the matrix is asymmetric.
    pub fn new(name: impl Into<String>, size: usize, matrix: Vec<f64>) -> Result<Self> {
        if size < 2 {
            return Err(TspError::MalformedInstance(format!(
                "instance needs at least 2 cities, got {size}"
            )));
        }
        if matrix.len() != size * size {
            return Err(TspError::MalformedInstance(format!(
                "matrix has {} entries, expected {}",
                matrix.len(),
                size * size
            )));
        }
        for i in 0..size {
            for j in 0..size {
                let d = matrix[i * size + j];
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::MalformedInstance(format!(
                        "distance ({i}, {j}) = {d} is not a finite non-negative number"
                    )));
                }
                if i == j && d != 0.0 {
                    return Err(TspError::MalformedInstance(format!(
                        "diagonal entry ({i}, {i}) = {d} must be zero"
                    )));
                }
                if matrix[j * size + i] != d {
                    return Err(TspError::MalformedInstance(format!(
                        "matrix is asymmetric at ({i}, {j})"
                    )));
                }
            }
        }
        Ok(Self {
            name: name.into(),
            size,
            matrix,
        })
    }

    /// Creates an instance from the strictly-upper-triangular entries
    /// `d(0,1), d(0,2), …, d(0,n-1), d(1,2), …, d(n-2,n-1)` in row-major
    /// order. The full matrix is produced by transpose-addition; the
    /// diagonal is implicit and zero.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::MalformedInstance`] if the entry count is not
    /// `n * (n - 1) / 2` or any entry is invalid.
    pub fn from_upper_triangular(
        name: impl Into<String>,
        size: usize,
        entries: &[f64],
    ) -> Result<Self> {
        if size < 2 {
            return Err(TspError::MalformedInstance(format!(
                "instance needs at least 2 cities, got {size}"
            )));
        }
        let expected = size * (size - 1) / 2;
        if entries.len() != expected {
            return Err(TspError::MalformedInstance(format!(
                "expected {expected} upper-triangular distances for {size} cities, got {}",
                entries.len()
            )));
        }
        let mut matrix = vec![0.0; size * size];
        let mut k = 0;
        for i in 0..size {
            for j in (i + 1)..size {
                let d = entries[k];
                matrix[i * size + j] = d;
                matrix[j * size + i] = d;
                k += 1;
            }
        }
        Self::new(name, size, matrix)
    }

    /// Instance identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance between cities `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.matrix[i * self.size + j]
    }
}
