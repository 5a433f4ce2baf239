use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A cell position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Errors raised while constructing a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The size has no integer square root, so no box partition exists
    #[error("grid size {size} has no integer square root")]
    SizeNotSquare { size: usize },
    /// The size cannot be represented in a cell value
    #[error("grid size {size} exceeds the supported maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },
    /// Row data is ragged or not square
    #[error("expected a square grid, got {rows} rows and a row of {cols} cells")]
    NotSquare { rows: usize, cols: usize },
    /// A cell value outside `0..=size`
    #[error("value {value} at ({row}, {col}) is outside 0..={size}")]
    ValueOutOfRange {
        row: usize,
        col: usize,
        value: u8,
        size: usize,
    },
}

/// A square Sudoku board of any size with an integer square root.
///
/// Cells hold values in `0..=size`, with `0` meaning empty. The square
/// invariants (size with an integer square root, rows of matching length,
/// values in range) are enforced at construction and at deserialization, so
/// every `Grid` the solver sees has a well-defined box partition.
///
/// On the wire a grid is its rows: `[[5, 3, 0, ...], ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    size: usize,
    box_dim: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-empty grid of the given size.
    pub fn empty(size: usize) -> Result<Self, GridError> {
        let box_dim = Self::check_size(size)?;
        Ok(Self {
            size,
            box_dim,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from row data, validating shape, size, and value ranges.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let size = rows.len();
        for row in rows {
            if row.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    cols: row.len(),
                });
            }
        }
        let box_dim = Self::check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value as usize > size {
                    return Err(GridError::ValueOutOfRange {
                        row,
                        col,
                        value,
                        size,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            size,
            box_dim,
            cells,
        })
    }

    fn check_size(size: usize) -> Result<usize, GridError> {
        if size > u8::MAX as usize {
            return Err(GridError::SizeTooLarge {
                size,
                max: u8::MAX as usize,
            });
        }
        Self::box_dimension(size).ok_or(GridError::SizeNotSquare { size })
    }

    /// Integer square root of `size`, if it has one.
    fn box_dimension(size: usize) -> Option<usize> {
        if size == 0 {
            return None;
        }
        let n = (size as f64).sqrt().round() as usize;
        (n * n == size).then_some(n)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of one box (`sqrt(size)`)
    pub fn box_dim(&self) -> usize {
        self.box_dim
    }

    /// Value at a position, `0` meaning empty
    pub fn get(&self, pos: Position) -> u8 {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        self.cells[pos.row * self.size + pos.col]
    }

    /// Place a value at a position
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        debug_assert!(value as usize <= self.size);
        self.cells[pos.row * self.size + pos.col] = value;
    }

    /// Erase a position back to empty
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, 0);
    }

    /// First empty cell in row-major order, if any remain
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|&value| value == 0)
            .map(|idx| Position::new(idx / self.size, idx % self.size))
    }

    /// Number of filled (non-zero) cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.size * self.size - self.filled_count()
    }

    /// The grid as row data, the shape it travels in over the wire
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    /// Whether placing `value` at `pos` violates no row, column, or box
    /// constraint. Pure; the grid is never mutated.
    pub fn is_valid(&self, pos: Position, value: u8) -> bool {
        // Row
        for col in 0..self.size {
            if self.get(Position::new(pos.row, col)) == value {
                return false;
            }
        }

        // Column
        for row in 0..self.size {
            if self.get(Position::new(row, pos.col)) == value {
                return false;
            }
        }

        // Box
        let n = self.box_dim;
        let box_row = n * (pos.row / n);
        let box_col = n * (pos.col / n);
        for row in box_row..box_row + n {
            for col in box_col..box_col + n {
                if self.get(Position::new(row, col)) == value {
                    return false;
                }
            }
        }

        true
    }

    /// Whether the grid is completely filled and every row, column, and box
    /// contains each value `1..=size` exactly once.
    pub fn is_solved(&self) -> bool {
        let n = self.box_dim;

        for row in 0..self.size {
            if !self.unit_complete((0..self.size).map(|col| self.get(Position::new(row, col)))) {
                return false;
            }
        }

        for col in 0..self.size {
            if !self.unit_complete((0..self.size).map(|row| self.get(Position::new(row, col)))) {
                return false;
            }
        }

        for box_row in (0..self.size).step_by(n) {
            for box_col in (0..self.size).step_by(n) {
                let cells = (0..self.size)
                    .map(|i| self.get(Position::new(box_row + i / n, box_col + i % n)));
                if !self.unit_complete(cells) {
                    return false;
                }
            }
        }

        true
    }

    fn unit_complete(&self, values: impl Iterator<Item = u8>) -> bool {
        let mut seen = vec![false; self.size + 1];
        for value in values {
            if value == 0 || seen[value as usize] {
                return false;
            }
            seen[value as usize] = true;
        }
        true
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();
        let segment = "-".repeat(self.box_dim * (width + 1));
        let separator = vec![segment; self.box_dim].join("+-");

        for row in 0..self.size {
            if row > 0 && row % self.box_dim == 0 {
                writeln!(f, "{separator}")?;
            }
            for col in 0..self.size {
                if col > 0 && col % self.box_dim == 0 {
                    write!(f, "| ")?;
                }
                let value = self.get(Position::new(row, col));
                if value == 0 {
                    write!(f, "{:>width$} ", '.')?;
                } else {
                    write!(f, "{value:>width$} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty(9).unwrap();
        assert_eq!(grid.size(), 9);
        assert_eq!(grid.box_dim(), 3);
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.empty_count(), 81);
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_rejects_non_square_size() {
        assert_eq!(Grid::empty(6), Err(GridError::SizeNotSquare { size: 6 }));
        assert_eq!(Grid::empty(0), Err(GridError::SizeNotSquare { size: 0 }));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let rows = vec![vec![0u8; 4], vec![0u8; 3], vec![0u8; 4], vec![0u8; 4]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::NotSquare { rows: 4, cols: 3 })
        );
    }

    #[test]
    fn test_rejects_out_of_range_value() {
        let mut rows = vec![vec![0u8; 4]; 4];
        rows[1][2] = 5;
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::ValueOutOfRange {
                row: 1,
                col: 2,
                value: 5,
                size: 4
            })
        );
    }

    #[test]
    fn test_validity_checks_row_col_box() {
        let mut grid = Grid::empty(9).unwrap();
        grid.set(Position::new(0, 0), 5);

        assert!(!grid.is_valid(Position::new(0, 8), 5)); // same row
        assert!(!grid.is_valid(Position::new(8, 0), 5)); // same column
        assert!(!grid.is_valid(Position::new(1, 1), 5)); // same box
        assert!(grid.is_valid(Position::new(4, 4), 5));
        assert!(grid.is_valid(Position::new(0, 8), 6));
    }

    #[test]
    fn test_validity_across_sizes() {
        for size in [4usize, 9, 16] {
            let mut grid = Grid::empty(size).unwrap();
            grid.set(Position::new(0, 0), 1);

            assert!(!grid.is_valid(Position::new(0, size - 1), 1));
            assert!(!grid.is_valid(Position::new(size - 1, 0), 1));
            // (1, 1) shares the top-left box for every supported box size
            assert!(!grid.is_valid(Position::new(1, 1), 1));
            assert!(grid.is_valid(Position::new(size - 1, size - 1), 1));
        }
    }

    #[test]
    fn test_validity_is_pure() {
        let mut grid = Grid::empty(4).unwrap();
        grid.set(Position::new(0, 0), 1);
        let before = grid.clone();

        assert_eq!(
            grid.is_valid(Position::new(2, 2), 1),
            grid.is_valid(Position::new(2, 2), 1)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_serde_round_trip() {
        let rows = vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 0],
        ];
        let grid = Grid::from_rows(&rows).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[1,2,3,4],[3,4,1,2],[2,1,4,3],[4,3,2,0]]");

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_serde_rejects_malformed_shapes() {
        assert!(serde_json::from_str::<Grid>("[[1,2],[3]]").is_err());
        // 3x3 is square-shaped but 3 has no integer square root
        assert!(serde_json::from_str::<Grid>("[[0,0,0],[0,0,0],[0,0,0]]").is_err());
    }

    #[test]
    fn test_is_solved() {
        let solved = Grid::from_rows(&[
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ])
        .unwrap();
        assert!(solved.is_solved());

        let incomplete = Grid::from_rows(&[
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 0],
        ])
        .unwrap();
        assert!(!incomplete.is_solved());

        // Rows valid, columns not
        let column_dup = Grid::from_rows(&[
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
        ])
        .unwrap();
        assert!(!column_dup.is_solved());
    }
}
