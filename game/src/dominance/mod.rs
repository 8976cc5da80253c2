mod reducer;

pub use self::reducer::{reduce, ReductionResult};
