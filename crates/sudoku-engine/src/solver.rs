use crate::grid::Grid;
use crate::rng::SimpleRng;

/// Backtracking Sudoku solver.
///
/// Stateless: one instance can serve any number of grids, including from
/// independent threads, as long as each call owns its grid exclusively.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved grid if one exists.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        self.solve_in_place(&mut working).then_some(working)
    }

    /// Complete the grid in place, returning whether a solution was found.
    ///
    /// Candidates are tried in ascending order, so the search is fully
    /// deterministic: the same input always yields the same solution. On
    /// failure every attempted placement has been erased and the grid is back
    /// in its exact input state.
    ///
    /// There is no internal deadline; an adversarial near-empty unsolvable
    /// grid can keep the search busy for a very long time. Callers bound the
    /// input, not the engine.
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        self.search(grid, None)
    }

    /// Like [`solve_in_place`](Self::solve_in_place), but with candidate order
    /// shuffled by `rng` at every cell. Used by the generator to produce a
    /// different full board per RNG stream.
    pub(crate) fn solve_shuffled(&self, grid: &mut Grid, rng: &mut SimpleRng) -> bool {
        self.search(grid, Some(rng))
    }

    fn search(&self, grid: &mut Grid, mut rng: Option<&mut SimpleRng>) -> bool {
        // Base case: nothing left to fill
        let Some(pos) = grid.first_empty() else {
            return true;
        };

        let mut candidates: Vec<u8> = (1..=grid.size() as u8).collect();
        if let Some(rng) = rng.as_deref_mut() {
            rng.shuffle(&mut candidates);
        }

        for value in candidates {
            if grid.is_valid(pos, value) {
                grid.set(pos, value);
                if self.search(grid, rng.as_deref_mut()) {
                    return true;
                }
                // Erase before trying a sibling or giving up, so no stale
                // value leaks into another branch or back to the caller
                grid.clear(pos);
            }
        }

        false
    }
}
