//! Constraint-satisfaction engine for 9x9 Sudoku.
//!
//! Three layers, bottom up: board validation (row/column/box constraints),
//! exhaustive backtracking search with bounded solution counting, and
//! randomized puzzle generation that removes givens only while the puzzle
//! keeps a unique solution.
//!
//! Everything is single-threaded and synchronous. Solving and generation
//! are CPU-bound and may block for a while on hard boards; interactive
//! callers should run them off their main thread. Every call works on
//! grids owned by the caller and returns owned grids, so parallel calls on
//! distinct grids are independently safe.
//!
//! ```
//! use sudoku_engine::{Difficulty, Generator, Solver};
//!
//! let mut generator = Generator::with_seed(1);
//! let puzzle = generator.generate(Difficulty::Easy)?;
//! assert!(puzzle.is_valid());
//!
//! let solver = Solver::new();
//! let solution = solver.solve(&puzzle).expect("generated puzzles are solvable");
//! assert!(solution.is_complete() && solution.is_valid());
//! # Ok::<(), sudoku_engine::GeneratorError>(())
//! ```

mod generator;
mod grid;
mod solver;

pub use generator::{
    filled_cells_range, Difficulty, Generator, GeneratorError, DEFAULT_FILLED_RANGE,
};
pub use grid::{Grid, GridError, Position};
pub use solver::Solver;
