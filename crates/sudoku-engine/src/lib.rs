//! Sudoku solving and generation for square boards of any size with an
//! integer square root (4x4, 9x9, 16x16, ...).
//!
//! The engine is a plain backtracking constraint solver: a validity predicate
//! over rows, columns, and boxes, a depth-first search that erases failed
//! placements as it unwinds, and a fill-then-remove puzzle generator on top.
//! There is no constraint propagation and no uniqueness guarantee for
//! generated puzzles.
//!
//! ```
//! use sudoku_engine::{Generator, Solver};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.generate(9, 40).unwrap();
//! assert_eq!(puzzle.filled_count(), 40);
//!
//! let solver = Solver::new();
//! let solution = solver.solve(&puzzle).expect("generated puzzles are solvable");
//! assert!(solution.is_solved());
//! ```

mod generator;
mod grid;
mod rng;
mod solver;

pub use generator::Generator;
pub use grid::{Grid, GridError, Position};
pub use rng::SimpleRng;
pub use solver::Solver;
