//! Basic example of using the Sudoku engine.

use sudoku_engine::{Difficulty, Generator, Grid, Solver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate a puzzle
    println!("Generating a Moderate difficulty puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate(Difficulty::Moderate)?;

    println!("Generated puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.filled_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    let solver = Solver::new();
    match solver.solve(&puzzle) {
        Some(solution) => {
            println!("Solution:");
            println!("{}", solution);
        }
        None => println!("No solution found (this shouldn't happen for a generated puzzle!)"),
    }

    // Parse a puzzle from a string
    println!("\n--- Parsing a puzzle from string ---\n");
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let grid = Grid::from_string(puzzle_string)?;
    println!("Parsed puzzle:");
    println!("{}", grid);

    // Check uniqueness
    let solutions = solver.count_solutions(&grid, 2);
    println!("Number of solutions (up to 2): {}", solutions);

    Ok(())
}
