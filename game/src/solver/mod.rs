use crate::analysis::{compute_prices, find_saddle_points, GamePrices, SaddlePoint};
use crate::dominance::{reduce, ReductionResult};
use crate::errors::GameError;
use crate::game::MatrixGame;
use crate::strategy::{solve_reduced, MixedStrategySolution};

use log::{debug, info};

/// How the pipeline resolved the game after price analysis.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// At least one saddle point exists. Every reported point is an equally
    /// valid pure-strategy equilibrium with value equal to both prices.
    PureStrategies,
    /// No saddle point; dominance left a 2x2 game solved in closed form.
    /// The reduction is kept alongside the solution so a renderer can tell
    /// eliminated strategies apart from surviving ones.
    MixedStrategies {
        solution: MixedStrategySolution,
        reduction: ReductionResult,
    },
    /// No saddle point and the reduced game is not 2x2. This is a defined
    /// terminal outcome; no further solving method is available.
    Irreducible(ReductionResult),
}

/// Structured output of one solve: the game prices, every saddle point in
/// row-major order (possibly none), and the resolution. Rendering, locale
/// and formatting are the consumer's concern.
#[derive(Debug, Clone)]
pub struct GameReport {
    pub prices: GamePrices,
    pub saddle_points: Vec<SaddlePoint>,
    pub resolution: Resolution,
}

pub struct GameSolver<'a> {
    game: &'a MatrixGame,
}

impl<'a> GameSolver<'a> {
    pub fn new(game: &'a MatrixGame) -> GameSolver<'a> {
        GameSolver { game }
    }

    /// Runs the full pipeline: prices, saddle-point search, then (only when
    /// no saddle point exists) dominance reduction and, if the reduction is
    /// 2x2, the closed-form mixed-strategy solve.
    pub fn solve(&self) -> Result<GameReport, GameError> {
        let prices = compute_prices(self.game);
        debug!("lower price {}, upper price {}", prices.lower, prices.upper);

        let saddle_points = find_saddle_points(self.game);
        if !saddle_points.is_empty() {
            info!("{} saddle point(s), pure-strategy solution", saddle_points.len());
            return Ok(GameReport {
                prices,
                saddle_points,
                resolution: Resolution::PureStrategies,
            });
        }

        let reduction = reduce(self.game)?;
        let resolution = if reduction.reduced.num_rows() == 2 && reduction.reduced.num_cols() == 2
        {
            let solution = solve_reduced(
                &reduction.reduced,
                self.game.num_rows(),
                self.game.num_cols(),
                &reduction.removed_rows,
                &reduction.removed_cols,
            )?;
            Resolution::MixedStrategies {
                solution,
                reduction,
            }
        } else {
            info!(
                "reduced game is {}x{}, not solvable by the 2x2 closed form",
                reduction.reduced.num_rows(),
                reduction.reduced.num_cols()
            );
            Resolution::Irreducible(reduction)
        };

        Ok(GameReport {
            prices,
            saddle_points,
            resolution,
        })
    }
}
