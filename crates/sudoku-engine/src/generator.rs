//! Puzzle generation: diagonal-box seeding, a full solve, then shuffled
//! cell removal gated on solution uniqueness.

use crate::grid::{Grid, Position};
use crate::solver::Solver;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Puzzle difficulty, measured purely by how many givens remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

/// Filled-cell range applied to difficulty names outside the closed set.
pub const DEFAULT_FILLED_RANGE: (usize, usize) = (30, 35);

/// Seed grids are retried at most this many times before generation gives
/// up. A diagonal seed is completable in practice, so reaching the cap
/// means a logic bug, not bad input.
const MAX_SEED_ATTEMPTS: usize = 32;

impl Difficulty {
    /// Look up a difficulty by its case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Easy" => Some(Self::Easy),
            "Moderate" => Some(Self::Moderate),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Inclusive range of filled cells a puzzle of this difficulty keeps.
    pub fn filled_range(self) -> (usize, usize) {
        match self {
            Self::Easy => (35, 39),
            Self::Moderate => (30, 34),
            Self::Hard => (25, 29),
        }
    }

    /// All difficulty levels.
    pub fn all() -> &'static [Difficulty] {
        &[Self::Easy, Self::Moderate, Self::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Moderate => write!(f, "Moderate"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Inclusive filled-cell range for a difficulty name. Unrecognized names
/// fall back to [`DEFAULT_FILLED_RANGE`] rather than failing.
pub fn filled_cells_range(name: &str) -> (usize, usize) {
    match Difficulty::from_name(name) {
        Some(difficulty) => difficulty.filled_range(),
        None => DEFAULT_FILLED_RANGE,
    }
}

/// Generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// No diagonal seed solved within the retry cap. Seeded grids are
    /// expected to always complete, so this signals an internal invariant
    /// violation rather than a condition callers can recover from.
    #[error("no solvable seed grid after {attempts} attempts")]
    SeedingFailed { attempts: usize },
}

/// Randomized Sudoku puzzle generator.
///
/// Holds its own random source so that a seeded instance replays the exact
/// same sequence of puzzles.
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create an entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle with exactly one solution whose filled-cell count
    /// lies within the difficulty's range.
    ///
    /// The solved grid the puzzle was carved from is discarded; callers
    /// needing the solution should run [`Solver::solve`] on the result.
    pub fn generate(&mut self, difficulty: Difficulty) -> Result<Grid, GeneratorError> {
        let (min, max) = difficulty.filled_range();
        self.generate_in_range(min, max)
    }

    /// Name-keyed variant of [`generate`](Self::generate). Unrecognized
    /// names use [`DEFAULT_FILLED_RANGE`] instead of failing.
    pub fn generate_named(&mut self, name: &str) -> Result<Grid, GeneratorError> {
        let (min, max) = filled_cells_range(name);
        self.generate_in_range(min, max)
    }

    fn generate_in_range(
        &mut self,
        min_filled: usize,
        max_filled: usize,
    ) -> Result<Grid, GeneratorError> {
        let solved = self.solved_grid()?;
        let target_filled = self.rng.gen_range(min_filled..=max_filled);
        Ok(self.remove_cells(solved, 81 - target_filled))
    }

    /// Produce one fully solved random grid by seeding the three diagonal
    /// boxes and solving the rest.
    fn solved_grid(&mut self) -> Result<Grid, GeneratorError> {
        let solver = Solver::new();
        for attempt in 1..=MAX_SEED_ATTEMPTS {
            let mut grid = Grid::empty();
            // The boxes on the main diagonal share no row or column, so any
            // permutation of 1..=9 in each is a valid seed.
            for origin in [0, 3, 6] {
                self.fill_box(&mut grid, origin, origin);
            }
            if let Some(solved) = solver.solve(&grid) {
                return Ok(solved);
            }
            debug!("seed grid unsolvable (attempt {attempt}), retrying");
        }
        Err(GeneratorError::SeedingFailed {
            attempts: MAX_SEED_ATTEMPTS,
        })
    }

    /// Fill one 3x3 box with a random permutation of 1..=9.
    fn fill_box(&mut self, grid: &mut Grid, start_row: usize, start_col: usize) {
        let mut values: Vec<u8> = (1..=9).collect();
        values.shuffle(&mut self.rng);

        let mut idx = 0;
        for row in start_row..start_row + 3 {
            for col in start_col..start_col + 3 {
                grid.set_cell_unchecked(Position::new(row, col), values[idx]);
                idx += 1;
            }
        }
    }

    /// Clear up to `budget` cells, visiting positions in random order and
    /// keeping only clearings that preserve solution uniqueness.
    ///
    /// Stops once the budget is met or every cell has been visited. Falling
    /// short of the budget is accepted silently; the puzzle just keeps more
    /// givens than the target.
    fn remove_cells(&mut self, mut grid: Grid, budget: usize) -> Grid {
        let solver = Solver::new();
        let mut positions: Vec<Position> = Position::all().collect();
        positions.shuffle(&mut self.rng);

        let mut removed = 0;
        for pos in positions {
            if removed >= budget {
                break;
            }
            let value = grid.get(pos);
            if value == 0 {
                continue;
            }
            grid.clear(pos);
            if solver.count_solutions(&grid, 2) == 1 {
                removed += 1;
            } else {
                grid.set_cell_unchecked(pos, value);
            }
        }
        debug!(
            "removed {removed} of {budget} cells, {} givens left",
            grid.filled_count()
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_ranges() {
        assert_eq!(Difficulty::Easy.filled_range(), (35, 39));
        assert_eq!(Difficulty::Moderate.filled_range(), (30, 34));
        assert_eq!(Difficulty::Hard.filled_range(), (25, 29));
    }

    #[test]
    fn test_range_lookup_by_name() {
        assert_eq!(filled_cells_range("Easy"), (35, 39));
        assert_eq!(filled_cells_range("Hard"), (25, 29));
        // Names are case-sensitive; anything else gets the default range.
        assert_eq!(filled_cells_range("easy"), DEFAULT_FILLED_RANGE);
        assert_eq!(filled_cells_range("Nightmare"), DEFAULT_FILLED_RANGE);
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Difficulty::from_name("Moderate"), Some(Difficulty::Moderate));
        assert_eq!(Difficulty::from_name("moderate"), None);
    }

    #[test]
    fn test_generate_easy_puzzle() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(Difficulty::Easy).unwrap();

        let (min, max) = Difficulty::Easy.filled_range();
        assert!(puzzle.filled_count() >= min && puzzle.filled_count() <= max);
        assert!(puzzle.is_valid());
        assert!(!puzzle.is_complete());

        let solver = Solver::new();
        assert!(solver.has_unique_solution(&puzzle));
    }

    #[test]
    fn test_generate_every_difficulty_in_range() {
        let solver = Solver::new();
        for &difficulty in Difficulty::all() {
            let mut generator = Generator::with_seed(7);
            let puzzle = generator.generate(difficulty).unwrap();

            let (min, max) = difficulty.filled_range();
            let filled = puzzle.filled_count();
            assert!(
                filled >= min && filled <= max,
                "{difficulty}: {filled} givens outside [{min}, {max}]"
            );
            assert!(solver.has_unique_solution(&puzzle));
        }
    }

    #[test]
    fn test_generate_named_unknown_uses_default_range() {
        let mut generator = Generator::with_seed(3);
        let puzzle = generator.generate_named("Nightmare").unwrap();

        let (min, max) = DEFAULT_FILLED_RANGE;
        assert!(puzzle.filled_count() >= min && puzzle.filled_count() <= max);
        assert!(Solver::new().has_unique_solution(&puzzle));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = Generator::with_seed(99).generate(Difficulty::Moderate).unwrap();
        let second = Generator::with_seed(99).generate(Difficulty::Moderate).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_puzzle_is_solvable() {
        let mut generator = Generator::with_seed(1);
        let puzzle = generator.generate(Difficulty::Hard).unwrap();

        let solution = Solver::new().solve(&puzzle).unwrap();
        assert!(solution.is_complete());
        assert!(solution.is_valid());
        // The solution extends the puzzle's givens.
        for pos in Position::all() {
            let given = puzzle.get(pos);
            if given != 0 {
                assert_eq!(solution.get(pos), given);
            }
        }
    }
}
