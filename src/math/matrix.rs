use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Result};

/// A `rows x cols` weight matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl WeightMatrix {
    pub fn zeros(rows: usize, cols: usize) -> WeightMatrix {
        WeightMatrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Samples every weight uniformly from `[-1/sqrt(n), 1/sqrt(n)]`.
    ///
    /// `n` is the number of neurons the layer feeds, so wider layers start
    /// with smaller weights.
    pub fn random(rows: usize, cols: usize, n: usize) -> WeightMatrix {
        let mut rng = rand::thread_rng();
        let bound = 1.0 / (n.max(1) as f64).sqrt();
        let mut res = WeightMatrix::zeros(rows, cols);

        for w in res.data.iter_mut() {
            *w = rng.gen_range(-bound..=bound);
        }

        res
    }

    /// Builds a matrix from row vectors; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> WeightMatrix {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "Rows are of incorrect sizes"
        );
        WeightMatrix {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row `r` as a slice of `cols` weights.
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Matrix-vector product `W x`; `x` must have `cols` elements.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.cols {
            return Err(DecodeError::ShapeMismatch { expected: self.cols, got: x.len() });
        }
        Ok((0..self.rows)
            .map(|r| self.row(r).iter().zip(x).map(|(w, v)| w * v).sum::<f64>())
            .collect())
    }
}

impl Default for WeightMatrix {
    fn default() -> Self {
        WeightMatrix { rows: 0, cols: 0, data: vec![] }
    }
}
