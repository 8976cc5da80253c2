use crate::errors::GameError;
use crate::game::{MatrixGame, Player};

use itertools::Itertools;
use log::{debug, info};

/// Outcome of iterated elimination of dominated strategies. Surviving
/// indices keep their original relative order; removed indices are listed in
/// the order the reducer discovered them (discovery order carries no
/// meaning, compare them as sets).
#[derive(Debug, Clone)]
pub struct ReductionResult {
    pub reduced: MatrixGame,
    pub surviving_rows: Vec<usize>,
    pub surviving_cols: Vec<usize>,
    pub removed_rows: Vec<usize>,
    pub removed_cols: Vec<usize>,
}

/// State threaded through the fixed-point rounds: the strategies still alive
/// for each player, plus whether the last round changed anything.
#[derive(Debug, Clone)]
struct RoundState {
    live_rows: Vec<usize>,
    live_cols: Vec<usize>,
    changed: bool,
}

/// Iterated elimination of weakly dominated rows and columns.
///
/// Each round runs a row pass then a column pass, comparing only over the
/// strategies currently alive in the other dimension, and repeats until a
/// full round removes nothing. Alternating is required: removing a row can
/// enable a column elimination in the next round and vice versa. Removal is
/// monotonic, an eliminated strategy is never reinstated.
pub fn reduce(game: &MatrixGame) -> Result<ReductionResult, GameError> {
    let mut state = RoundState {
        live_rows: (0..game.num_rows()).collect(),
        live_cols: (0..game.num_cols()).collect(),
        changed: true,
    };
    let mut removed_rows = Vec::new();
    let mut removed_cols = Vec::new();

    while state.changed {
        state = reduction_round(game, state, &mut removed_rows, &mut removed_cols);
    }

    if state.live_rows.is_empty() {
        return Err(GameError::DegenerateReduction(Player::Row));
    }
    if state.live_cols.is_empty() {
        return Err(GameError::DegenerateReduction(Player::Column));
    }

    info!(
        "matrix reduced from {}x{} to {}x{}",
        game.num_rows(),
        game.num_cols(),
        state.live_rows.len(),
        state.live_cols.len()
    );

    let rows = state
        .live_rows
        .iter()
        .map(|&row| state.live_cols.iter().map(|&col| game[(row, col)]).collect())
        .collect();
    let reduced = MatrixGame::from_rows(rows)?;

    Ok(ReductionResult {
        reduced,
        surviving_rows: state.live_rows,
        surviving_cols: state.live_cols,
        removed_rows,
        removed_cols,
    })
}

fn reduction_round(
    game: &MatrixGame,
    mut state: RoundState,
    removed_rows: &mut Vec<usize>,
    removed_cols: &mut Vec<usize>,
) -> RoundState {
    state.changed = false;

    let marked = eliminate_dominated(&state.live_rows, &state.live_cols, |row, col| {
        game[(row, col)]
    });
    if !marked.is_empty() {
        for &row in marked.iter() {
            debug!("row {} eliminated, dominated", row);
        }
        state.live_rows.retain(|row| !marked.contains(row));
        removed_rows.extend(marked);
        state.changed = true;
    }

    // The column player minimizes, so a column dominates when it is
    // smaller-or-equal everywhere; negating the entries reuses the row rule.
    let marked = eliminate_dominated(&state.live_cols, &state.live_rows, |col, row| {
        -game[(row, col)]
    });
    if !marked.is_empty() {
        for &col in marked.iter() {
            debug!("column {} eliminated, dominated", col);
        }
        state.live_cols.retain(|col| !marked.contains(col));
        removed_cols.extend(marked);
        state.changed = true;
    }

    state
}

/// One pass over all pairs of live strategies. A strategy is marked when the
/// other one is at-least-as-good everywhere over the opponent's live
/// strategies and the reverse does not also hold (two identical strategies
/// dominate each other and neither is removed). Marked strategies drop out
/// of later comparisons within the same pass.
fn eliminate_dominated<F>(live: &[usize], opponent: &[usize], entry: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> f64,
{
    let mut marked: Vec<usize> = Vec::new();
    for (&first, &second) in live.iter().tuple_combinations::<(_, _)>() {
        if marked.contains(&first) || marked.contains(&second) {
            continue;
        }
        let first_covers = opponent
            .iter()
            .all(|&other| entry(first, other) >= entry(second, other));
        let second_covers = opponent
            .iter()
            .all(|&other| entry(second, other) >= entry(first, other));
        match (first_covers, second_covers) {
            (true, false) => marked.push(second),
            (false, true) => marked.push(first),
            _ => {}
        }
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(rows: Vec<Vec<f64>>) -> MatrixGame {
        MatrixGame::from_rows(rows).unwrap()
    }

    fn as_set(mut indices: Vec<usize>) -> Vec<usize> {
        indices.sort();
        indices
    }

    #[test]
    fn eliminates_dominated_column() {
        // Column 2 is entrywise at least column 0, so the minimizing player
        // never plays it. No row dominance exists, before or after.
        let g = game(vec![
            vec![3.0, 2.0, 4.0],
            vec![1.0, 5.0, 2.0],
            vec![2.0, 4.0, 3.0],
        ]);
        let result = reduce(&g).unwrap();
        assert!(result.removed_rows.is_empty());
        assert_eq!(as_set(result.removed_cols), vec![2]);
        assert_eq!(result.surviving_rows, vec![0, 1, 2]);
        assert_eq!(result.surviving_cols, vec![0, 1]);
        assert_eq!(
            result.reduced,
            game(vec![vec![3.0, 2.0], vec![1.0, 5.0], vec![2.0, 4.0]])
        );
    }

    #[test]
    fn row_and_column_rounds_interact() {
        // Column 1 falls in round one; only then does row 0 dominate row 1
        // over the surviving columns. The fixed point is the embedded 2x2
        // game [[3, 1], [0, 2]].
        let g = game(vec![
            vec![3.0, 4.0, 1.0],
            vec![2.0, 5.0, 0.0],
            vec![0.0, 1.0, 2.0],
        ]);
        let result = reduce(&g).unwrap();
        assert_eq!(as_set(result.removed_rows), vec![1]);
        assert_eq!(as_set(result.removed_cols), vec![1]);
        assert_eq!(result.surviving_rows, vec![0, 2]);
        assert_eq!(result.surviving_cols, vec![0, 2]);
        assert_eq!(result.reduced, game(vec![vec![3.0, 1.0], vec![0.0, 2.0]]));
    }

    #[test]
    fn identical_strategies_are_kept() {
        // Mutual domination is excluded, so duplicated strategies survive.
        let g = game(vec![vec![2.0, 2.0], vec![2.0, 2.0]]);
        let result = reduce(&g).unwrap();
        assert!(result.removed_rows.is_empty());
        assert!(result.removed_cols.is_empty());
    }

    #[test]
    fn irreducible_matrix_is_untouched() {
        // Rock-paper-scissors has no dominated strategy.
        let g = game(vec![
            vec![0.0, 1.0, -1.0],
            vec![-1.0, 0.0, 1.0],
            vec![1.0, -1.0, 0.0],
        ]);
        let result = reduce(&g).unwrap();
        assert!(result.removed_rows.is_empty());
        assert!(result.removed_cols.is_empty());
        assert_eq!(result.reduced, g);
    }

    #[test]
    fn reduction_is_idempotent() {
        let g = game(vec![
            vec![3.0, 2.0, 4.0],
            vec![1.0, 5.0, 2.0],
            vec![2.0, 4.0, 3.0],
        ]);
        let once = reduce(&g).unwrap();
        let twice = reduce(&once.reduced).unwrap();
        assert!(twice.removed_rows.is_empty());
        assert!(twice.removed_cols.is_empty());
        assert_eq!(twice.reduced, once.reduced);
    }

    #[test]
    fn single_cell_game() {
        let result = reduce(&game(vec![vec![7.0]])).unwrap();
        assert_eq!(result.surviving_rows, vec![0]);
        assert_eq!(result.surviving_cols, vec![0]);
    }
}
