//! Exhaustive backtracking search: solving and bounded solution counting.

use crate::grid::Grid;

/// Stateless backtracking solver.
///
/// All search state lives in per-call working grids, so a single instance
/// can serve any number of independent calls, including from different
/// threads on distinct grids.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning an owned solved grid if a completion
    /// exists, or `None` when none does. The input is never mutated.
    ///
    /// The search fills the first empty cell in row-major order and tries
    /// candidates 1..=9 in ascending order, so the result is deterministic
    /// for a given input. Grids that already break the Sudoku rules are
    /// outside the contract and yield an unspecified result.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_recursive(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Count completions of `grid`, stopping once `limit` have been found.
    ///
    /// `count_solutions(grid, 2)` distinguishes "exactly one solution" from
    /// "zero or several" without paying for a full enumeration. Works on an
    /// internal clone; the caller's grid is untouched.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        let mut count = 0;
        self.count_solutions_recursive(&mut working, &mut count, limit);
        count
    }

    /// True iff the puzzle has exactly one completion.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    fn solve_recursive(&self, grid: &mut Grid) -> bool {
        let Some(pos) = grid.first_empty() else {
            return true;
        };
        for value in 1..=9 {
            if grid.is_valid_placement(pos, value) {
                grid.set_cell_unchecked(pos, value);
                if self.solve_recursive(grid) {
                    return true;
                }
                grid.clear(pos);
            }
        }
        false
    }

    fn count_solutions_recursive(&self, grid: &mut Grid, count: &mut usize, limit: usize) {
        let Some(pos) = grid.first_empty() else {
            *count += 1;
            return;
        };
        for value in 1..=9 {
            if *count >= limit {
                return;
            }
            if grid.is_valid_placement(pos, value) {
                grid.set_cell_unchecked(pos, value);
                self.count_solutions_recursive(grid, count, limit);
                // Undo the trial placement so the caller's frame sees the
                // grid it passed down.
                grid.clear(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_finds_the_unique_solution() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert!(solution.is_complete());
        assert!(solution.is_valid());
        assert_eq!(solution, Grid::from_string(SOLUTION).unwrap());
        // The input stays as it was.
        assert_eq!(grid, Grid::from_string(PUZZLE).unwrap());
    }

    #[test]
    fn test_solve_complete_grid_returns_it_unchanged() {
        let solved = Grid::from_string(SOLUTION).unwrap();
        let solver = Solver::new();
        assert_eq!(solver.solve(&solved), Some(solved));
    }

    #[test]
    fn test_solve_single_blank_restores_original() {
        let mut grid = Grid::from_string(SOLUTION).unwrap();
        grid.clear(Position::new(4, 4));

        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();
        assert_eq!(solution, Grid::from_string(SOLUTION).unwrap());
    }

    #[test]
    fn test_solve_contradiction_fails() {
        // Blank one cell, then block its only candidate: (0, 0) must be 5,
        // but a second 5 in row 0 makes every candidate clash.
        let mut grid = Grid::from_string(SOLUTION).unwrap();
        grid.clear(Position::new(0, 0));
        grid.set(Position::new(0, 1), 5).unwrap();

        let solver = Solver::new();
        assert_eq!(solver.solve(&grid), None);
    }

    #[test]
    fn test_count_solutions_unique_puzzle() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&grid, 2), 1);
        assert!(solver.has_unique_solution(&grid));
    }

    #[test]
    fn test_count_solutions_caps_at_limit() {
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&Grid::empty(), 2), 2);
        assert!(!solver.has_unique_solution(&Grid::empty()));
    }

    #[test]
    fn test_count_solutions_zero_for_contradiction() {
        let mut grid = Grid::from_string(SOLUTION).unwrap();
        grid.clear(Position::new(0, 0));
        grid.set(Position::new(0, 1), 5).unwrap();

        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&grid, 2), 0);
    }

    #[test]
    fn test_count_solutions_leaves_input_untouched() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let snapshot = grid.clone();
        let solver = Solver::new();
        solver.count_solutions(&grid, 2);
        assert_eq!(grid, snapshot);
    }
}
