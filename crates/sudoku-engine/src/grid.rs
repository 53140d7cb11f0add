use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A cell coordinate on the 9x9 board, both axes in 0..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Iterate all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(|i| Position::new(i / 9, i % 9))
    }

    /// Top-left corner of the 3x3 box containing this position.
    pub fn box_origin(&self) -> Position {
        Position::new(self.row / 3 * 3, self.col / 3 * 3)
    }
}

/// Errors from constructing or mutating a grid with malformed input.
///
/// These exist only at the boundary: once a `Grid` exists, every value in it
/// is in 0..=9 and the validation predicates and solver never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected 81 cells, got {len}")]
    BadLength { len: usize },
    #[error("invalid character {ch:?} at index {index}")]
    BadCharacter { ch: char, index: usize },
    #[error("cell value {value} out of range 0..=9")]
    ValueOutOfRange { value: u8 },
}

/// A 9x9 Sudoku board. 0 means empty, 1..=9 are placed values.
///
/// `Grid` is a plain value type: the solver and generator work on their own
/// clones, so a grid handed to a caller is never aliased by engine internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// An all-empty grid.
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Build a grid from raw rows, rejecting out-of-range values.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, GridError> {
        for row in &rows {
            for &value in row {
                if value > 9 {
                    return Err(GridError::ValueOutOfRange { value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Parse an 81-character row-major string of digits, with `0` or `.`
    /// standing for empty cells.
    pub fn from_string(s: &str) -> Result<Self, GridError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(GridError::BadLength { len });
        }
        let mut grid = Self::empty();
        for (index, ch) in s.chars().enumerate() {
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(GridError::BadCharacter { ch, index }),
            };
            grid.cells[index / 9][index % 9] = value;
        }
        Ok(grid)
    }

    /// Value at `pos`; 0 if the cell is empty.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Place a value at `pos`, or 0 to clear it. Range-checked; does not
    /// enforce Sudoku constraints (use [`is_valid_placement`](Self::is_valid_placement)).
    pub fn set(&mut self, pos: Position, value: u8) -> Result<(), GridError> {
        if value > 9 {
            return Err(GridError::ValueOutOfRange { value });
        }
        self.cells[pos.row][pos.col] = value;
        Ok(())
    }

    /// Internal setter for values known to be in range.
    pub(crate) fn set_cell_unchecked(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Empty the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0;
    }

    /// Number of non-zero cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }

    /// True iff no cell is empty. Completeness does not imply validity;
    /// check [`is_valid`](Self::is_valid) separately.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos) == 0)
    }

    /// True iff `value` can go at `pos` without clashing with the current
    /// row, column, or 3x3 box contents. Pure; reads at most 27 cells.
    ///
    /// The scan does not exempt the target cell itself: ask only about empty
    /// cells, or a cell already holding `value` is reported as conflicting
    /// with itself.
    pub fn is_valid_placement(&self, pos: Position, value: u8) -> bool {
        for i in 0..9 {
            if self.cells[pos.row][i] == value || self.cells[i][pos.col] == value {
                return false;
            }
        }
        let origin = pos.box_origin();
        for row in origin.row..origin.row + 3 {
            for col in origin.col..origin.col + 3 {
                if self.cells[row][col] == value {
                    return false;
                }
            }
        }
        true
    }

    /// True iff no row, column, or box holds a duplicate non-zero value.
    /// Empty cells never conflict, so the all-empty grid is valid.
    pub fn is_valid(&self) -> bool {
        for i in 0..9 {
            let mut row_seen = [false; 10];
            let mut col_seen = [false; 10];
            let mut box_seen = [false; 10];
            for j in 0..9 {
                let in_row = self.cells[i][j] as usize;
                let in_col = self.cells[j][i] as usize;
                let in_box = self.cells[i / 3 * 3 + j / 3][i % 3 * 3 + j % 3] as usize;
                if in_row != 0 {
                    if row_seen[in_row] {
                        return false;
                    }
                    row_seen[in_row] = true;
                }
                if in_col != 0 {
                    if col_seen[in_col] {
                        return false;
                    }
                    col_seen[in_col] = true;
                }
                if in_box != 0 {
                    if box_seen[in_box] {
                        return false;
                    }
                    box_seen[in_box] = true;
                }
            }
        }
        true
    }

    /// Compact 81-character form, `.` for empty cells.
    pub fn to_line_string(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| if v == 0 { '.' } else { (b'0' + v) as char })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for (c, &value) in row.iter().enumerate() {
                if c % 3 == 0 {
                    write!(f, "| ")?;
                }
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", value)?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}
