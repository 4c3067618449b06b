//! Square Boolean matrices and the relation algebra over them.
//!
//! Every operation returns a new matrix; nothing is updated in place
//! behind the caller's back. Operands must share a dimension, and a
//! mismatch is a programming error that panics with a message.

use std::fmt;

/// An owned `n x n` Boolean matrix, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct BoolMatrix {
    dim: usize,
    cells: Vec<bool>,
}

impl BoolMatrix {
    /// The empty relation.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![false; dim * dim],
        }
    }

    /// The identity relation.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        Self::from_fn(dim, |i, j| i == j)
    }

    #[must_use]
    pub fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(dim * dim);
        for i in 0..dim {
            for j in 0..dim {
                cells.push(f(i, j));
            }
        }
        Self { dim, cells }
    }

    /// Build from nested rows. Panics unless the rows form a square.
    #[must_use]
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let dim = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == dim),
            "BoolMatrix::from_rows requires {dim} rows of length {dim}"
        );
        Self {
            dim,
            cells: rows.concat(),
        }
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.dim + j]
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.dim..(i + 1) * self.dim]
    }

    /// Copy of this matrix with `(i, j)` and `(j, i)` set for every pair.
    #[must_use]
    pub fn with_symmetric_pairs<'a>(
        &self,
        pairs: impl IntoIterator<Item = &'a (usize, usize)>,
    ) -> Self {
        let mut out = self.clone();
        for &(i, j) in pairs {
            out.cells[i * self.dim + j] = true;
            out.cells[j * self.dim + i] = true;
        }
        out
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.dim, |i, j| self.get(j, i))
    }

    /// Boolean product: `(A . B)[i][j] = OR_k (A[i][k] AND B[k][j])`.
    #[must_use]
    pub fn product(&self, other: &Self) -> Self {
        self.assert_same_dim(other, "product");
        let n = self.dim;
        let mut out = Self::zeros(n);
        for i in 0..n {
            for k in (0..n).filter(|&k| self.get(i, k)) {
                let src = other.row(k);
                let dst = &mut out.cells[i * n..(i + 1) * n];
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d |= s;
                }
            }
        }
        out
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.zip_with(other, "union", |a, b| a || b)
    }

    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.zip_with(other, "intersection", |a, b| a && b)
    }

    /// Warshall's transitive closure. Reflexive cells are preserved, never
    /// added.
    #[must_use]
    pub fn transitive_closure(&self) -> Self {
        let n = self.dim;
        let mut out = self.clone();
        for k in 0..n {
            let pivot = out.row(k).to_vec();
            for i in 0..n {
                if !out.get(i, k) {
                    continue;
                }
                let dst = &mut out.cells[i * n..(i + 1) * n];
                for (d, &s) in dst.iter_mut().zip(&pivot) {
                    *d |= s;
                }
            }
        }
        out
    }

    #[must_use]
    pub fn is_reflexive(&self) -> bool {
        (0..self.dim).all(|i| self.get(i, i))
    }

    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.dim).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }

    #[must_use]
    pub fn is_transitive(&self) -> bool {
        self.product(self)
            .cells
            .iter()
            .zip(&self.cells)
            .all(|(&composed, &direct)| !composed || direct)
    }

    /// Every pair is related in at least one direction.
    #[must_use]
    pub fn is_total(&self) -> bool {
        (0..self.dim).all(|i| (0..self.dim).all(|j| self.get(i, j) || self.get(j, i)))
    }

    fn zip_with(&self, other: &Self, op: &str, f: impl Fn(bool, bool) -> bool) -> Self {
        self.assert_same_dim(other, op);
        Self {
            dim: self.dim,
            cells: self
                .cells
                .iter()
                .zip(&other.cells)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    fn assert_same_dim(&self, other: &Self, op: &str) {
        assert_eq!(
            self.dim, other.dim,
            "BoolMatrix::{op} requires operands of equal dimension"
        );
    }
}

impl fmt::Debug for BoolMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoolMatrix({})", self.dim)?;
        for i in 0..self.dim {
            let line: String = self
                .row(i)
                .iter()
                .map(|&cell| if cell { '1' } else { '0' })
                .collect();
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
