//! Dense matrices over arbitrary entries.
//!
//! Entries only need `Clone` plus the arithmetic a given method uses, so the
//! same type holds integer matrices, matrices of permutations, or matrices of
//! matrices. Products and determinants never need a zero element.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, Mul, Neg};
use std::sync::OnceLock;

use thiserror::Error;

/// Errors from matrix construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix rows must not be empty")]
    EmptyRow,

    #[error("dimension mismatch: {left:?} and {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// Dense matrix stored in row-major order.
///
/// A matrix is immutable once built, which is what makes the cached
/// determinant valid.
#[derive(Clone)]
pub struct Matrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
    /// Determinant, filled on first request. Boxed so `Matrix<Element>` can
    /// live inside `Element`.
    det: Box<OnceLock<Option<T>>>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns an error if rows have different lengths, or if the rows are
    /// empty while there is at least one row.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows > 0 && num_cols == 0 {
            return Err(MatrixError::EmptyRow);
        }
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != num_cols {
                return Err(MatrixError::RaggedRow {
                    row,
                    expected: num_cols,
                    found: entries.len(),
                });
            }
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self::from_parts(data, num_rows, num_cols))
    }

    /// Creates a `num_rows x num_cols` matrix whose entry at `(r, c)` is
    /// `f(r, c)`.
    ///
    /// A zero dimension gives the 0x0 matrix.
    pub fn from_fn(num_rows: usize, num_cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        if num_rows == 0 || num_cols == 0 {
            return Self::from_parts(Vec::new(), 0, 0);
        }
        let data = (0..num_rows)
            .flat_map(|r| (0..num_cols).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();
        Self::from_parts(data, num_rows, num_cols)
    }

    fn from_parts(data: Vec<T>, num_rows: usize, num_cols: usize) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
            det: Box::default(),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns all entries in row-major order.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.data
    }

    /// Returns the rows as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.num_rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = (0..self.num_cols)
            .flat_map(|c| (0..self.num_rows).map(move |r| (r, c)))
            .map(|(r, c)| self[(r, c)].clone())
            .collect();
        Self::from_parts(data, self.num_cols, self.num_rows)
    }

    /// Returns the matrix with `row` and `col` deleted.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(row < self.num_rows && col < self.num_cols, "minor out of range");
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|(i, _)| i / self.num_cols != row && i % self.num_cols != col)
            .map(|(_, v)| v.clone())
            .collect();
        Self::from_parts(data, self.num_rows - 1, self.num_cols - 1)
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map<U: Clone>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix::from_parts(self.data.iter().map(f).collect(), self.num_rows, self.num_cols)
    }

    /// Combines two matrices of the same shape entry by entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn zip_with<U: Clone>(
        &self,
        other: &Self,
        mut f: impl FnMut(&T, &T) -> U,
    ) -> Result<Matrix<U>, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(data, self.num_rows, self.num_cols))
    }
}

impl<T> Matrix<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    /// Matrix-matrix multiply: C = A * B.
    ///
    /// Each entry is the sum of its products, starting from the first
    /// product, so the entry type needs no zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.num_cols() != other.num_rows()`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.num_cols != other.num_rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut terms =
                    (0..self.num_cols).map(|k| self[(i, k)].clone() * other[(k, j)].clone());
                if let Some(first) = terms.next() {
                    data.push(terms.fold(first, |acc, t| acc + t));
                }
            }
        }
        Ok(Self::from_parts(data, self.num_rows, other.num_cols))
    }

    /// Entrywise sum.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Multiplies every entry by a scalar, entry on the left.
    #[must_use]
    pub fn scale(&self, scalar: &T) -> Self {
        self.map(|v| v.clone() * scalar.clone())
    }

    /// Adds a scalar to every entry, entry on the left.
    #[must_use]
    pub fn offset(&self, scalar: &T) -> Self {
        self.map(|v| v.clone() + scalar.clone())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// Returns `None` for non-square or empty matrices. The result is cached.
    #[must_use]
    pub fn det(&self) -> Option<T> {
        self.det.get_or_init(|| self.cofactor_det()).clone()
    }

    fn cofactor_det(&self) -> Option<T> {
        if !self.is_square() || self.num_rows == 0 {
            return None;
        }
        if self.num_rows == 1 {
            return Some(self.data[0].clone());
        }

        let mut det: Option<T> = None;
        for c in 0..self.num_cols {
            let entry = self[(0, c)].clone();
            let signed = if c % 2 == 1 { -entry } else { entry };
            let term = signed * self.minor(0, c).det()?;
            det = Some(match det {
                Some(acc) => acc + term,
                None => term,
            });
        }
        det
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<T> Mul for Matrix<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics on a dimension mismatch. Use [`Matrix::checked_mul`] to handle it.
    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(&rhs) {
            Ok(product) => product,
            Err(e) => panic!("matrix product failed: {e}"),
        }
    }
}

impl<T> Add for Matrix<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics on a shape mismatch. Use [`Matrix::checked_add`] to handle it.
    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(&rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("matrix sum failed: {e}"),
        }
    }
}

impl<T: Clone + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|v| -v.clone())
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: Hash> Hash for Matrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num_rows.hash(state);
        self.num_cols.hash(state);
        self.data.hash(state);
    }
}

impl<T: Ord> PartialOrd for Matrix<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Matrix<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num_rows, self.num_cols)
            .cmp(&(other.num_rows, other.num_cols))
            .then_with(|| self.data.cmp(&other.data))
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        if self.num_cols > 0 {
            for row in self.data.chunks(self.num_cols) {
                list.entry(&row);
            }
        }
        list.finish()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if self.num_cols > 0 {
            for (r, row) in self.data.chunks(self.num_cols).enumerate() {
                if r > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "[")?;
                for (c, v) in row.iter().enumerate() {
                    if c > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")?;
            }
        }
        write!(f, "]")
    }
}
