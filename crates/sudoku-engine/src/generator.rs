use crate::grid::{Grid, GridError, Position};
use crate::rng::SimpleRng;
use crate::solver::Solver;

/// Puzzle generator: fill a board completely, then knock cells back out.
///
/// The generator owns its RNG, so independent generators never share state
/// and a seeded generator replays the same sequence of puzzles.
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle of the given size with `clues` cells left filled.
    ///
    /// `clues` is clamped to `size * size`, so asking for more clues than the
    /// board has cells returns the fully solved board untouched. The puzzle is
    /// always solvable (the pre-removal board is a witness), but random
    /// removal makes no promise that the solution is unique.
    pub fn generate(&mut self, size: usize, clues: usize) -> Result<Grid, GridError> {
        let mut grid = Grid::empty(size)?;

        // An empty board always has a completion
        let filled = Solver::new().solve_shuffled(&mut grid, &mut self.rng);
        debug_assert!(filled);

        let clues = clues.min(size * size);
        let mut cells_to_remove = size * size - clues;

        // Sampling with replacement: re-drawing an already cleared cell just
        // retries, and the filled set shrinks until the target is met
        while cells_to_remove > 0 {
            let pos = Position::new(self.rng.next_usize(size), self.rng.next_usize(size));
            if grid.get(pos) != 0 {
                grid.clear(pos);
                cells_to_remove -= 1;
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_exact_clue_count() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(9, 40).unwrap();

        assert_eq!(puzzle.filled_count(), 40);
        // The pre-removal solution witnesses solvability
        assert!(Solver::new().solve(&puzzle).is_some());
    }

    #[test]
    fn test_generate_full_board() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(9, 81).unwrap();

        assert_eq!(puzzle.filled_count(), 81);
        assert!(puzzle.is_solved());
    }

    #[test]
    fn test_generate_clamps_excess_clues() {
        let mut generator = Generator::with_seed(1);
        let puzzle = generator.generate(4, 100).unwrap();

        assert_eq!(puzzle.filled_count(), 16);
        assert!(puzzle.is_solved());
    }

    #[test]
    fn test_generate_zero_clues() {
        let mut generator = Generator::with_seed(1);
        let puzzle = generator.generate(4, 0).unwrap();
        assert_eq!(puzzle.filled_count(), 0);
    }

    #[test]
    fn test_generate_4x4() {
        let mut generator = Generator::with_seed(9);
        let puzzle = generator.generate(4, 8).unwrap();

        assert_eq!(puzzle.size(), 4);
        assert_eq!(puzzle.filled_count(), 8);
        assert!(Solver::new().solve(&puzzle).is_some());
    }

    #[test]
    fn test_generate_rejects_non_square_size() {
        let mut generator = Generator::with_seed(1);
        assert_eq!(
            generator.generate(6, 10),
            Err(GridError::SizeNotSquare { size: 6 })
        );
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let a = Generator::with_seed(7).generate(9, 30).unwrap();
        let b = Generator::with_seed(7).generate(9, 30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        // Not guaranteed in principle, but two 40-clue boards colliding would
        // mean the seed is being ignored
        let a = Generator::with_seed(1).generate(9, 40).unwrap();
        let b = Generator::with_seed(2).generate(9, 40).unwrap();
        assert_ne!(a, b);
    }
}
