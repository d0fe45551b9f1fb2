#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use parrot_collections::{Matrix, ResizeMode};

#[derive(Arbitrary, Debug)]
enum MatrixMethod {
    Set { row: u8, column: u8, val: u16 },
    Get { row: u8, column: u8 },
    Resize { rows: u8, columns: u8, preserve: bool },
    Transpose,
    CopyFromRows { rows: Vec<Vec<u16>> },
}

/// Reference model: a rectangular `Vec<Vec<_>>`, empty when either dimension is zero.
#[derive(Default)]
struct Model {
    rows: Vec<Vec<u16>>,
}

impl Model {
    fn from_jagged(rows: &[Vec<u16>]) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return Self::default();
        }
        let rows = rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(columns, 0);
                row
            })
            .collect();
        Self { rows }
    }

    fn dimensions(&self) -> (usize, usize) {
        match self.rows.first() {
            Some(first) => (self.rows.len(), first.len()),
            None => (0, 0),
        }
    }

    fn resize(&mut self, rows: usize, columns: usize, preserve: bool) {
        if rows == 0 || columns == 0 {
            self.rows.clear();
            return;
        }
        let mut resized = vec![vec![0; columns]; rows];
        if preserve {
            for (r, row) in self.rows.iter().enumerate().take(rows) {
                for (c, value) in row.iter().enumerate().take(columns) {
                    resized[r][c] = *value;
                }
            }
        }
        self.rows = resized;
    }

    fn transpose(&mut self) {
        let (rows, columns) = self.dimensions();
        self.rows = (0..columns)
            .map(|c| (0..rows).map(|r| self.rows[r][c]).collect())
            .collect();
    }
}

fn assert_same(matrix: &Matrix<u16>, model: &Model) {
    assert_eq!(matrix.dimensions(), model.dimensions());
    assert_eq!(matrix.is_empty(), model.rows.is_empty());
    assert!(matrix.iter().eq(model.rows.iter().flatten()));
}

fuzz_target!(|methods: Vec<MatrixMethod>| {
    let mut matrix = Matrix::<u16>::empty();
    let mut model = Model::default();

    for m in methods {
        match m {
            MatrixMethod::Set { row, column, val } => {
                let (row, column) = (row as usize, column as usize);
                let result = matrix.set(row, column, val);
                match model.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
                    Some(cell) => {
                        assert_eq!(result, Ok(*cell));
                        *cell = val;
                    }
                    None => assert!(result.is_err()),
                }
            }
            MatrixMethod::Get { row, column } => {
                let (row, column) = (row as usize, column as usize);
                let expected = model.rows.get(row).and_then(|r| r.get(column));
                assert_eq!(matrix.get(row, column), expected);
            }
            MatrixMethod::Resize {
                rows,
                columns,
                preserve,
            } => {
                // Keep allocations small.
                let (rows, columns) = (rows as usize % 64, columns as usize % 64);
                let mode = if preserve {
                    ResizeMode::Preserve
                } else {
                    ResizeMode::Discard
                };
                matrix.resize(rows, columns, mode);
                model.resize(rows, columns, preserve);
            }
            MatrixMethod::Transpose => {
                matrix.transpose();
                model.transpose();
            }
            MatrixMethod::CopyFromRows { rows } => {
                matrix.copy_from_rows(rows.iter().cloned());
                model = Model::from_jagged(&rows);
            }
        }
        assert_same(&matrix, &model);
    }
});
