use crate::game::MatrixGame;

/// A cell that is simultaneously the minimum of its row and the maximum of
/// its column, i.e. a pure-strategy equilibrium. Coordinates are 0-based
/// into the original matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SaddlePoint {
    pub row: usize,
    pub col: usize,
}

/// Scans every cell in row-major order. Both membership tests are
/// tie-inclusive ("no other entry is strictly smaller/larger"), so a matrix
/// with tied entries may yield several saddle points; they all carry the
/// same value, equal to the lower price of the game.
pub fn find_saddle_points(game: &MatrixGame) -> Vec<SaddlePoint> {
    let mut saddle_points = Vec::new();
    for row in 0..game.num_rows() {
        for col in 0..game.num_cols() {
            let entry = game[(row, col)];
            let min_in_row = game.row(row).iter().all(|&other| other >= entry);
            let max_in_col = game.column(col).all(|other| other <= entry);
            if min_in_row && max_in_col {
                saddle_points.push(SaddlePoint { row, col });
            }
        }
    }
    saddle_points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_prices;
    use assert_approx_eq::assert_approx_eq;

    fn game(rows: Vec<Vec<f64>>) -> MatrixGame {
        MatrixGame::from_rows(rows).unwrap()
    }

    #[test]
    fn no_saddle_point() {
        let g = game(vec![vec![3.0, 1.0], vec![0.0, 2.0]]);
        assert!(find_saddle_points(&g).is_empty());
    }

    #[test]
    fn every_cell_of_constant_matrix() {
        let g = game(vec![vec![2.0, 2.0], vec![2.0, 2.0]]);
        let points = find_saddle_points(&g);
        assert_eq!(
            points,
            vec![
                SaddlePoint { row: 0, col: 0 },
                SaddlePoint { row: 0, col: 1 },
                SaddlePoint { row: 1, col: 0 },
                SaddlePoint { row: 1, col: 1 },
            ]
        );
    }

    #[test]
    fn single_saddle_point() {
        let g = game(vec![vec![4.0, 2.0], vec![3.0, 1.0]]);
        let points = find_saddle_points(&g);
        assert_eq!(points, vec![SaddlePoint { row: 0, col: 1 }]);
    }

    #[test]
    fn saddle_points_exist_iff_prices_coincide() {
        let games = vec![
            game(vec![vec![3.0, 1.0], vec![0.0, 2.0]]),
            game(vec![vec![2.0, 2.0], vec![2.0, 2.0]]),
            game(vec![vec![4.0, 2.0], vec![3.0, 1.0]]),
            game(vec![vec![3.0, 2.0, 4.0], vec![1.0, 5.0, 2.0], vec![2.0, 4.0, 3.0]]),
            game(vec![vec![0.0, 1.0, -1.0], vec![-1.0, 0.0, 1.0], vec![1.0, -1.0, 0.0]]),
        ];
        for g in games.iter() {
            let prices = compute_prices(g);
            let points = find_saddle_points(g);
            assert_eq!(!points.is_empty(), prices.lower == prices.upper);
            for point in points.iter() {
                assert_approx_eq!(g[(point.row, point.col)], prices.lower);
            }
        }
    }
}
