mod mixed_strategy;

pub use self::mixed_strategy::{solve_reduced, MixedStrategySolution};
