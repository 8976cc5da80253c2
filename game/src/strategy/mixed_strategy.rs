use crate::errors::GameError;
use crate::game::{MatrixGame, Player};

use assert_approx_eq::assert_approx_eq;
use log::debug;

/// Below this magnitude the closed-form denominator counts as zero.
const DENOMINATOR_EPSILON: f64 = 1e-9;
const THRESHOLD_ACCURACY: f64 = 1e-6;

/// Mixed-strategy equilibrium expanded back to the original strategy space.
/// Each probability vector is sized to the original matrix dimension, with
/// zero mass on every eliminated strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedStrategySolution {
    row_strategy: Vec<f64>,
    col_strategy: Vec<f64>,
    game_value: f64,
}

impl MixedStrategySolution {
    pub fn strategy(&self, player: Player) -> &[f64] {
        match player {
            Player::Row => &self.row_strategy,
            Player::Column => &self.col_strategy,
        }
    }

    pub fn game_value(&self) -> f64 {
        self.game_value
    }

    /// Validates that each player's probabilities form a distribution.
    /// Panics upon failure.
    pub fn validate(&self) {
        let row_mass: f64 = self.row_strategy.iter().sum();
        let col_mass: f64 = self.col_strategy.iter().sum();
        assert_approx_eq!(row_mass, 1.0, THRESHOLD_ACCURACY);
        assert_approx_eq!(col_mass, 1.0, THRESHOLD_ACCURACY);
    }
}

/// Solves a 2x2 game in closed form and maps the probabilities back onto the
/// original strategy indices.
///
/// For entries [[a, b], [c, d]] with denominator (a + d) - (b + c):
///   p = (d - c) / denominator       row player, first surviving strategy
///   q = (d - b) / denominator       column player, first surviving strategy
///   v = (a*d - b*c) / denominator   value of the game
///
/// A denominator within `DENOMINATOR_EPSILON` of zero means the closed form
/// does not apply and the solve fails with `NoMixedSolution` instead of
/// dividing.
pub fn solve_reduced(
    reduced: &MatrixGame,
    original_rows: usize,
    original_cols: usize,
    removed_rows: &[usize],
    removed_cols: &[usize],
) -> Result<MixedStrategySolution, GameError> {
    if reduced.num_rows() != 2 || reduced.num_cols() != 2 {
        return Err(GameError::UnsupportedShape {
            num_rows: reduced.num_rows(),
            num_cols: reduced.num_cols(),
        });
    }

    let a = reduced[(0, 0)];
    let b = reduced[(0, 1)];
    let c = reduced[(1, 0)];
    let d = reduced[(1, 1)];

    let denominator = (a + d) - (b + c);
    if abs_diff_eq!(denominator, 0.0, epsilon = DENOMINATOR_EPSILON) {
        return Err(GameError::NoMixedSolution);
    }

    let p = (d - c) / denominator;
    let q = (d - b) / denominator;
    let game_value = (a * d - b * c) / denominator;
    debug!("closed form: p = {}, q = {}, value = {}", p, q, game_value);

    let solution = MixedStrategySolution {
        row_strategy: expand(original_rows, removed_rows, p),
        col_strategy: expand(original_cols, removed_cols, q),
        game_value,
    };
    solution.validate();
    Ok(solution)
}

/// Spreads (prob, 1 - prob) over the two surviving original indices, in
/// ascending order, leaving zero mass everywhere else. Exactly two indices
/// must survive whenever the reduced game is 2x2; anything else is an
/// internal inconsistency with the reducer.
fn expand(original_len: usize, removed: &[usize], prob: f64) -> Vec<f64> {
    let surviving: Vec<usize> = (0..original_len)
        .filter(|index| !removed.contains(index))
        .collect();
    assert_eq!(
        surviving.len(),
        2,
        "reduced game is 2x2 but {} original strategies survive",
        surviving.len()
    );

    let mut probabilities = vec![0.0; original_len];
    probabilities[surviving[0]] = prob;
    probabilities[surviving[1]] = 1.0 - prob;
    probabilities
}
