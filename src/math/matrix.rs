use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::{AddAssign, Index, IndexMut};

/// Dense row-major matrix of `f64`, indexed as `m[(row, col)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills every element with `low + u * (high - low)`, `u` uniform on [0, 1).
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, low: f64, high: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = uniform_sample(rng, low, high);
            }
        }

        res
    }

    /// Builds a matrix from row vectors.
    ///
    /// # Panics
    /// Panics if `data` is empty or the rows are ragged.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        assert!(!data.is_empty(), "Matrix needs at least one row");
        let cols = data[0].len();
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have {cols} columns"
        );
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Sets every element to `value` without reallocating.
    pub fn fill(&mut self, value: f64) {
        for row in &mut self.data {
            row.iter_mut().for_each(|x| *x = value);
        }
    }
}

/// One draw of `low + u * (high - low)`, `u` uniform on [0, 1).
pub fn uniform_sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.gen::<f64>() * (high - low)
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row][col]
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        for i in 0..self.rows {
            for j in 0..self.cols {
                self.data[i][j] += rhs.data[i][j];
            }
        }
    }
}
