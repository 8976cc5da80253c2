use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use log::{error, info};
use structopt::StructOpt;

use matrix_game::{GameReport, GameSolver, MatrixGame, Player, ReductionResult, Resolution};

#[derive(StructOpt, Debug)]
#[structopt(name = "MatrixGameSolver")]
struct Opt {
    /// Text file holding the payoff matrix, one whitespace-separated row of
    /// numbers per line. Dimensions are inferred from the rows.
    #[structopt(short = "g", long = "input_game_file", parse(from_os_str))]
    input_file: PathBuf,
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();

    let rows = match read_matrix(&opt.input_file) {
        Ok(rows) => rows,
        Err(err) => {
            error!("could not read payoff matrix: {}", err);
            process::exit(1);
        }
    };

    let game = match MatrixGame::from_rows(rows) {
        Ok(game) => game,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    info!(
        "loaded a {}x{} payoff matrix",
        game.num_rows(),
        game.num_cols()
    );

    println!("Payoff matrix:");
    print_matrix(&game);

    match GameSolver::new(&game).solve() {
        Ok(report) => print_report(&game, &report),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

/// Reads a payoff matrix in textual whitespace-separated form, one row per
/// line. Blank lines are skipped; anything non-numeric is an error (no
/// silent default substitution).
fn read_matrix(path: &Path) -> io::Result<Vec<Vec<f64>>> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for line in reader.lines() {
        let row: Vec<f64> = line?
            .split_whitespace()
            .map(|field| {
                field
                    .parse()
                    .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
            })
            .collect::<io::Result<Vec<f64>>>()?;
        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn print_matrix(game: &MatrixGame) {
    for row in 0..game.num_rows() {
        for col in 0..game.num_cols() {
            print!("{:8.2}", game[(row, col)]);
        }
        println!();
    }
}

/// Renders the structured report with 1-based strategy numbers, following
/// the layout of the classic console solver.
fn print_report(game: &MatrixGame, report: &GameReport) {
    println!();
    println!("Lower price of the game (maximin): {}", report.prices.lower);
    println!("Upper price of the game (minimax): {}", report.prices.upper);

    match &report.resolution {
        Resolution::PureStrategies => {
            println!();
            println!("Saddle points found:");
            for point in report.saddle_points.iter() {
                println!(
                    "  Position: ({}, {}), Value: {}",
                    point.row + 1,
                    point.col + 1,
                    game[(point.row, point.col)]
                );
            }
            println!();
            println!("Solutions in pure strategies:");
            for point in report.saddle_points.iter() {
                println!(
                    "  Player A chooses strategy {}, Player B chooses strategy {}",
                    point.row + 1,
                    point.col + 1
                );
            }
        }
        Resolution::MixedStrategies {
            solution,
            reduction,
        } => {
            println!();
            println!("No saddle points found.");
            print_reduction(reduction);

            println!();
            println!("Optimal mixed strategy for Player A:");
            print_strategy(solution.strategy(Player::Row), &reduction.removed_rows);
            println!("Optimal mixed strategy for Player B:");
            print_strategy(solution.strategy(Player::Column), &reduction.removed_cols);
            println!();
            println!("Value of the game: {:.4}", solution.game_value());
        }
        Resolution::Irreducible(reduction) => {
            println!();
            println!("No saddle points found.");
            print_reduction(reduction);

            println!();
            println!(
                "Simplified matrix size: {}x{}",
                reduction.reduced.num_rows(),
                reduction.reduced.num_cols()
            );
            println!("Matrix is not 2x2, cannot solve in mixed strategies with this implementation.");
            print_matrix(&reduction.reduced);
        }
    }
}

fn print_reduction(reduction: &ReductionResult) {
    if !reduction.removed_rows.is_empty() {
        println!(
            "Removed rows (dominated strategies of Player A): {:?}",
            one_based(&reduction.removed_rows)
        );
    }
    if !reduction.removed_cols.is_empty() {
        println!(
            "Removed columns (dominated strategies of Player B): {:?}",
            one_based(&reduction.removed_cols)
        );
    }
}

fn print_strategy(probabilities: &[f64], removed: &[usize]) {
    for (index, probability) in probabilities.iter().enumerate() {
        let tag = if removed.contains(&index) {
            " (dominated)"
        } else {
            ""
        };
        println!("  Strategy {}: {:.4}{}", index + 1, probability, tag);
    }
}

fn one_based(indices: &[usize]) -> Vec<usize> {
    let mut shifted: Vec<usize> = indices.iter().map(|index| index + 1).collect();
    shifted.sort();
    shifted
}
