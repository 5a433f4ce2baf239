//! Request and response shapes for the solve/generate boundary.
//!
//! These mirror the JSON bodies a fronting HTTP service would speak:
//! `{"grid": [[int]], "size": int}` in, `{"solution": [[int]]}` or
//! `{"error": "..."}` out, and `{"puzzle": [[int]]}` for generation. The
//! handlers here validate shape and translate failures; all solving lives in
//! the engine.

use serde::{Deserialize, Serialize};
use sudoku_engine::{Generator, Grid, GridError, Solver};
use thiserror::Error;

/// Board size assumed when a request does not declare one.
pub const DEFAULT_SIZE: usize = 9;

/// Failures surfaced to the client as an [`ErrorResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Grid dimensions disagree with the declared size
    #[error("Invalid Sudoku grid. Expected {size}x{size}")]
    ShapeMismatch { size: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The search exhausted every branch; a domain failure, not a defect
    #[error("No solution exists")]
    Unsolvable,
}

/// Body of a solve request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub grid: Vec<Vec<u8>>,
    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

/// Successful solve response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    pub solution: Vec<Vec<u8>>,
}

/// Successful generate response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub puzzle: Vec<Vec<u8>>,
}

/// Client-error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Check the declared size against the grid's shape, build the board, and
/// solve it.
pub fn solve(request: SolveRequest) -> Result<Grid, ApiError> {
    let SolveRequest { grid, size } = request;

    if grid.len() != size || grid.iter().any(|row| row.len() != size) {
        return Err(ApiError::ShapeMismatch { size });
    }

    let mut board = Grid::from_rows(&grid)?;
    if Solver::new().solve_in_place(&mut board) {
        Ok(board)
    } else {
        Err(ApiError::Unsolvable)
    }
}

/// Generate a puzzle. `clues` defaults to half the board when not given.
pub fn generate(size: usize, clues: Option<usize>, seed: Option<u64>) -> Result<Grid, ApiError> {
    let clues = clues.unwrap_or(size * size / 2);
    let mut generator = match seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    Ok(generator.generate(size, clues)?)
}
