use crate::errors::GameError;

use std::ops::Index;

/// Immutable view over an M x N payoff matrix, stored row-major. Entries are
/// payoffs to the row player. Contents are fixed at construction; one solve
/// never mutates its game.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGame {
    num_rows: usize,
    num_cols: usize,
    entries: Vec<f64>,
}

impl MatrixGame {
    /// Builds a game from row-major rows. There must be at least one row,
    /// at least one column, and every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<MatrixGame, GameError> {
        if rows.is_empty() {
            return Err(GameError::InvalidShape(
                "matrix must have at least one row".to_string(),
            ));
        }
        let num_cols = rows[0].len();
        if num_cols == 0 {
            return Err(GameError::InvalidShape(
                "matrix must have at least one column".to_string(),
            ));
        }
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != num_cols {
                return Err(GameError::InvalidShape(format!(
                    "row {} has {} entries, expected {}",
                    row_index,
                    row.len(),
                    num_cols
                )));
            }
        }

        let num_rows = rows.len();
        let entries = rows.into_iter().flatten().collect();
        Ok(MatrixGame {
            num_rows,
            num_cols,
            entries,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checked element access for callers that cannot guarantee bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, GameError> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(GameError::IndexOutOfRange { row, col });
        }
        Ok(self.entries[row * self.num_cols + col])
    }

    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.num_rows, "row {} out of range", row);
        &self.entries[row * self.num_cols..(row + 1) * self.num_cols]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(col < self.num_cols, "column {} out of range", col);
        (0..self.num_rows).map(move |row| self[(row, col)])
    }
}

impl Index<(usize, usize)> for MatrixGame {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "matrix access ({}, {}) outside {}x{}",
            row,
            col,
            self.num_rows,
            self.num_cols
        );
        &self.entries[row * self.num_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn from_rows_rejects_empty() {
        match MatrixGame::from_rows(vec![]) {
            Err(GameError::InvalidShape(_)) => {}
            other => panic!("expected InvalidShape, got {:?}", other),
        }
        match MatrixGame::from_rows(vec![vec![]]) {
            Err(GameError::InvalidShape(_)) => {}
            other => panic!("expected InvalidShape, got {:?}", other),
        }
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        match MatrixGame::from_rows(rows) {
            Err(GameError::InvalidShape(_)) => {}
            other => panic!("expected InvalidShape, got {:?}", other),
        }
    }

    #[test]
    fn element_access() {
        let game = MatrixGame::from_rows(vec![vec![3.0, 1.0], vec![0.0, 2.0]]).unwrap();
        assert_eq!(game.num_rows(), 2);
        assert_eq!(game.num_cols(), 2);
        assert_approx_eq!(game[(0, 0)], 3.0);
        assert_approx_eq!(game[(1, 0)], 0.0);
        assert_approx_eq!(game.get(0, 1).unwrap(), 1.0);

        assert_eq!(game.row(1), &[0.0, 2.0]);
        let col: Vec<f64> = game.column(1).collect();
        assert_eq!(col, vec![1.0, 2.0]);
    }

    #[test]
    fn get_out_of_range() {
        let game = MatrixGame::from_rows(vec![vec![1.0]]).unwrap();
        assert_eq!(
            game.get(0, 1),
            Err(GameError::IndexOutOfRange { row: 0, col: 1 })
        );
        assert_eq!(
            game.get(3, 0),
            Err(GameError::IndexOutOfRange { row: 3, col: 0 })
        );
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let game = MatrixGame::from_rows(vec![vec![1.0]]).unwrap();
        let _ = game[(1, 0)];
    }
}
