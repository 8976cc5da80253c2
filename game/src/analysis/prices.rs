use crate::game::MatrixGame;

/// Lower and upper prices of the game. The lower price is the row player's
/// maximin, the upper price the column player's minimax; `lower <= upper`
/// holds for every matrix, with equality exactly when a saddle point exists.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GamePrices {
    pub lower: f64,
    pub upper: f64,
}

/// Single O(M*N) scan per price. Ties between rows (or columns) are broken
/// arbitrarily since only the value is reported, not a location.
pub fn compute_prices(game: &MatrixGame) -> GamePrices {
    let lower = (0..game.num_rows())
        .map(|row| {
            game.row(row)
                .iter()
                .cloned()
                .fold(std::f64::INFINITY, f64::min)
        })
        .fold(std::f64::NEG_INFINITY, f64::max);

    let upper = (0..game.num_cols())
        .map(|col| game.column(col).fold(std::f64::NEG_INFINITY, f64::max))
        .fold(std::f64::INFINITY, f64::min);

    GamePrices { lower, upper }
}
