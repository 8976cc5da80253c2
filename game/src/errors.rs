use crate::game::Player;

use std::error::Error;
use std::fmt;

/// Failure conditions of the solving pipeline. All of them are local and
/// deterministic; nothing here is retryable and the core never substitutes a
/// default value in place of reporting one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Construction input had no rows, no columns, or ragged rows.
    InvalidShape(String),
    /// Checked element access outside the matrix bounds.
    IndexOutOfRange { row: usize, col: usize },
    /// Dominance elimination left the given player with no strategies.
    DegenerateReduction(Player),
    /// Mixed-strategy solving was attempted on a matrix that is not 2x2.
    UnsupportedShape { num_rows: usize, num_cols: usize },
    /// The 2x2 closed form has a zero denominator.
    NoMixedSolution,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidShape(reason) => write!(f, "invalid matrix shape: {}", reason),
            GameError::IndexOutOfRange { row, col } => {
                write!(f, "matrix access ({}, {}) out of range", row, col)
            }
            GameError::DegenerateReduction(player) => write!(
                f,
                "dominance elimination removed every strategy of the {:?} player",
                player
            ),
            GameError::UnsupportedShape { num_rows, num_cols } => write!(
                f,
                "mixed-strategy solving requires a 2x2 matrix, got {}x{}",
                num_rows, num_cols
            ),
            GameError::NoMixedSolution => write!(
                f,
                "the game has no solution in mixed strategies (denominator is zero)"
            ),
        }
    }
}

impl Error for GameError {}
