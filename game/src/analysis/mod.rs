mod prices;
mod saddle;

pub use self::prices::{compute_prices, GamePrices};
pub use self::saddle::{find_saddle_points, SaddlePoint};
