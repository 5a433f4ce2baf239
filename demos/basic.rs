//! Basic example of using the Sudoku engine

use sudoku_engine::{Generator, Solver};

fn main() {
    // Generate a 9x9 puzzle with 40 clues
    println!("Generating a 9x9 puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = match generator.generate(9, 40) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("generation failed: {err}");
            return;
        }
    };

    println!("Generated puzzle:");
    println!("{puzzle}");

    // Show some stats
    println!("Filled cells: {}", puzzle.filled_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    let solver = Solver::new();
    if let Some(solution) = solver.solve(&puzzle) {
        println!("Solution:");
        println!("{solution}");
    } else {
        println!("No solution found (this shouldn't happen for a generated puzzle!)");
    }

    // Smaller boards work the same way
    println!("\n--- A 4x4 puzzle ---\n");
    if let Ok(small) = generator.generate(4, 8) {
        println!("{small}");
    }
}
