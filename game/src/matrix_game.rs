#[macro_use]
extern crate approx;

pub mod analysis;
pub mod dominance;
pub mod errors;
pub mod game;
pub mod solver;
pub mod strategy;

pub use crate::analysis::{compute_prices, find_saddle_points, GamePrices, SaddlePoint};
pub use crate::dominance::{reduce, ReductionResult};
pub use crate::errors::GameError;
pub use crate::game::{MatrixGame, Player};
pub use crate::solver::{GameReport, GameSolver, Resolution};
pub use crate::strategy::{solve_reduced, MixedStrategySolution};
