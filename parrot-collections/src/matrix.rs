//! A dense, row-major two-dimensional container.
//!
//! [`Matrix`] keeps its cells in a single contiguous buffer laid out row by row. A matrix is
//! either empty (zero rows *and* zero columns, nothing allocated) or has both dimensions
//! strictly positive; asking for a zero in either dimension collapses it to the empty state.
//!
//! Construction from jagged sources pads short rows with `T::default()` up to the length of
//! the longest row. This is the only place the matrix ever widens its input.

use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::error::{CollectionError, Result};
use crate::utils::bitset::Bitset64;

/// How [`Matrix::resize`] treats the existing cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeMode {
    /// Throw all data away; every cell of the new store is `T::default()`.
    #[default]
    Discard,
    /// Carry over the sub-rectangle shared by the old and new dimensions.
    Preserve,
}

/// A rows × columns grid of `T`.
///
/// ## Examples
///
/// ```rust
/// use parrot_collections::matrix::{Matrix, ResizeMode};
///
/// let mut m = Matrix::from(vec![vec![1, 2, 3], vec![4, 5]]);
/// assert_eq!(m.dimensions(), (2, 3));
/// assert_eq!(m[(1, 2)], 0);
///
/// m.resize(4, 5, ResizeMode::Preserve);
/// assert_eq!(m[(0, 1)], 2);
///
/// m.transpose();
/// assert_eq!(m.dimensions(), (5, 4));
/// assert_eq!(m[(1, 0)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    cells: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Matrix<T> {
    /// The canonical empty matrix.
    pub const fn empty() -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
            columns: 0,
        }
    }

    /// A rows × columns matrix with every cell set to `T::default()`.
    ///
    /// # Panics
    ///
    /// If `rows * columns` overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Self
    where
        T: Default,
    {
        if rows == 0 || columns == 0 {
            return Self::empty();
        }
        let len = cell_count(rows, columns);
        trace!(rows, columns, "allocating matrix");
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, T::default);
        Self {
            cells,
            rows,
            columns,
        }
    }

    /// A rows × columns matrix with every cell set to a clone of `value`.
    ///
    /// # Panics
    ///
    /// If `rows * columns` overflows `usize`.
    pub fn with_value(rows: usize, columns: usize, value: T) -> Self
    where
        T: Clone,
    {
        if rows == 0 || columns == 0 {
            return Self::empty();
        }
        Self {
            cells: vec![value; cell_count(rows, columns)],
            rows,
            columns,
        }
    }

    /// Builds a matrix over a dense row-major buffer. Fails with
    /// [`CollectionError::ShapeMismatch`] unless `cells` holds exactly `rows * columns` values,
    /// which includes dimensions whose product does not fit in `usize`.
    pub fn from_vec(rows: usize, columns: usize, cells: Vec<T>) -> Result<Self> {
        if rows.checked_mul(columns) != Some(cells.len()) {
            return Err(CollectionError::ShapeMismatch {
                rows,
                columns,
                len: cells.len(),
            });
        }
        if cells.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self {
            cells,
            rows,
            columns,
        })
    }

    /// Builds a matrix from a sequence of rows of possibly differing lengths. The column count
    /// is the longest row; shorter rows are padded with `T::default()`.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Default,
    {
        let rows: Vec<Vec<T>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let row_count = rows.len();
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut matrix = Self::new(row_count, column_count);
        if matrix.is_empty() {
            return matrix;
        }
        for (row_cells, row) in matrix.cells.chunks_exact_mut(column_count).zip(rows) {
            for (cell, value) in row_cells.iter_mut().zip(row) {
                *cell = value;
            }
        }
        matrix
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// True when no store is allocated, which is the case iff both dimensions are zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    fn out_of_bounds(&self, row: usize, column: usize) -> CollectionError {
        CollectionError::CellOutOfBounds {
            row,
            column,
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        let offset = self.offset(row, column)?;
        self.cells.get(offset)
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        let offset = self.offset(row, column)?;
        self.cells.get_mut(offset)
    }

    /// Stores `value` at (row, column), returning what was there before.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<T> {
        match self.offset(row, column) {
            Some(offset) => Ok(std::mem::replace(&mut self.cells[offset], value)),
            None => Err(self.out_of_bounds(row, column)),
        }
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&mut self.cells[start..start + self.columns])
    }

    /// The cells of one column, top to bottom.
    pub fn column(&self, column: usize) -> Option<impl Iterator<Item = &T> + '_> {
        if column >= self.columns {
            return None;
        }
        Some(self.cells.iter().skip(column).step_by(self.columns))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // An empty matrix has no cells, so the chunk size only has to be non-zero.
        self.cells.chunks_exact(self.columns.max(1))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Reallocates the store at rows × columns. With [`ResizeMode::Preserve`] the overlapping
    /// `min(rows) × min(columns)` region is moved across; cells outside it are dropped and
    /// newly exposed cells start at `T::default()`.
    pub fn resize(&mut self, rows: usize, columns: usize, mode: ResizeMode)
    where
        T: Default,
    {
        trace!(
            from_rows = self.rows,
            from_columns = self.columns,
            rows,
            columns,
            ?mode,
            "resizing matrix"
        );
        let mut resized = Self::new(rows, columns);
        if mode == ResizeMode::Preserve {
            let keep_rows = self.rows.min(resized.rows);
            let keep_columns = self.columns.min(resized.columns);
            for row in 0..keep_rows {
                for column in 0..keep_columns {
                    std::mem::swap(
                        &mut resized.cells[row * resized.columns + column],
                        &mut self.cells[row * self.columns + column],
                    );
                }
            }
        }
        *self = resized;
    }

    /// Replaces this matrix with a copy of `source`.
    pub fn copy_from(&mut self, source: &Matrix<T>)
    where
        T: Clone,
    {
        self.clone_from(source);
    }

    /// Replaces this matrix with the contents of a jagged row source, padding as
    /// [`Matrix::from_rows`] does.
    pub fn copy_from_rows<I, R>(&mut self, rows: I)
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Default,
    {
        *self = Self::from_rows(rows);
    }

    /// Swaps rows and columns in place: the cell at (i, j) moves to (j, i).
    ///
    /// The buffer is permuted by following each cycle of the row-major index mapping, so no
    /// second store is allocated beyond a visited bitset.
    pub fn transpose(&mut self) {
        let (rows, columns) = (self.rows, self.columns);
        trace!(rows, columns, "transposing matrix");
        if rows > 1 && columns > 1 {
            let len = self.cells.len();
            let destination = |k: usize| (k % columns) * rows + k / columns;

            let mut visited = Bitset64::new(len);
            // First and last cells never move.
            visited.set(0);
            visited.set(len - 1);

            let mut next = visited.first_empty_from(1);
            while let Some(start) = next {
                visited.set(start);
                let mut k = start;
                loop {
                    let d = destination(k);
                    if d == start {
                        break;
                    }
                    self.cells.swap(start, d);
                    visited.set(d);
                    k = d;
                }
                next = visited.first_empty_from(start + 1);
            }
        }
        self.rows = columns;
        self.columns = rows;
    }
}

fn cell_count(rows: usize, columns: usize) -> usize {
    match rows.checked_mul(columns) {
        Some(len) => len,
        None => panic!("a {rows}x{columns} matrix has more cells than fit in usize"),
    }
}

impl<T: Default> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(grid: [[T; C]; R]) -> Self {
        if R == 0 || C == 0 {
            return Self::empty();
        }
        Self {
            cells: grid.into_iter().flatten().collect(),
            rows: R,
            columns: C,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.offset(row, column) {
            Some(offset) => &self.cells[offset],
            None => panic!("{}", self.out_of_bounds(row, column)),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        match self.offset(row, column) {
            Some(offset) => &mut self.cells[offset],
            None => panic!("{}", self.out_of_bounds(row, column)),
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
