//! Command line front end: scramble a cube, hand it to one solver, print
//! what came back and optionally append a CSV record of the run.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use nxn_cube::notation::{format_sequence, parse_sequence, parse_state_string};
use nxn_cube::{solve, CubeState, SolveResult, SolverConfig, SolverKind};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cube-solve")]
#[command(about = "Scramble and solve NxN cubes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a cube with one solver
    Solve {
        /// Cube size
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// IDDFS, IDA*, BFS or Kociemba
        #[arg(long, default_value = "IDDFS")]
        solver: String,

        /// Scramble a fresh cube with this many random moves
        #[arg(long, conflicts_with_all = ["state", "moves"])]
        scramble: Option<usize>,

        /// State string, color letters or Kociemba facelets
        #[arg(long, conflicts_with = "moves")]
        state: Option<String>,

        /// Apply these moves to a fresh cube, e.g. "R U R' U'"
        #[arg(long)]
        moves: Option<String>,

        /// Solver options (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Append a record of the run to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print a random scramble and the state it leads to
    Scramble {
        /// Cube size
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Number of random moves
        #[arg(short, long, default_value = "20")]
        count: usize,
    },
}

#[derive(Serialize)]
struct Record {
    solver: String,
    size: usize,
    scramble: String,
    state: String,
    solution: String,
    solved: bool,
    move_count: usize,
    comparison_count: u64,
    moves_tried: u64,
    time_taken_ms: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            size,
            solver,
            scramble,
            state,
            moves,
            config,
            csv,
        } => {
            let kind: SolverKind = solver.parse()?;
            let config = match config {
                Some(path) => SolverConfig::from_path(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => SolverConfig::default(),
            };

            let (cube, scramble_notation) = match (scramble, state, moves) {
                (Some(count), _, _) => {
                    let mut cube = CubeState::new(size)?;
                    let moves = cube.scramble(count)?;
                    let notation = format_sequence(&moves, size)?;
                    (cube, notation)
                }
                (None, Some(state), _) => {
                    let cube = parse_state_string(&state)?;
                    if cube.size() != size {
                        log::info!("state string describes a {0}x{0} cube", cube.size());
                    }
                    (cube, String::new())
                }
                (None, None, Some(moves)) => {
                    let mut cube = CubeState::new(size)?;
                    cube.apply_moves(&parse_sequence(&moves, size)?)?;
                    (cube, moves)
                }
                (None, None, None) => bail!("one of --scramble, --state or --moves is required"),
            };

            if !scramble_notation.is_empty() {
                println!("Scramble: {}", scramble_notation);
            }
            println!("{}", cube);

            let result = solve(kind, &cube, &config)?;
            print_result(kind, &result);

            if let Some(path) = csv {
                append_record(
                    &path,
                    Record {
                        solver: kind.to_string(),
                        size: cube.size(),
                        scramble: scramble_notation,
                        state: cube.to_notation_string(),
                        solution: result.notation.clone().unwrap_or_default(),
                        solved: result.solved,
                        move_count: result.move_count,
                        comparison_count: result.comparison_count,
                        moves_tried: result.moves_tried,
                        time_taken_ms: result.time_taken_ms,
                    },
                )?;
                println!("CSV appended to: {}", path.display());
            }
        }

        Commands::Scramble { size, count } => {
            let scramble = nxn_cube::scramble_with(size, count, &mut rand::thread_rng())?;
            println!("{}", scramble.notation);
            println!("{}", scramble.state);
        }
    }

    Ok(())
}

fn print_result(kind: SolverKind, result: &SolveResult) {
    match &result.failure {
        None => {
            let moves = match &result.notation {
                Some(notation) => notation.clone(),
                None => result
                    .moves
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
            };
            println!("{}: {} moves: {}", kind, result.move_count, moves);
        }
        Some(failure) => println!("{}: {}", kind, failure),
    }
    println!(
        "{} comparisons, {} moves tried, {:.1}ms",
        result.comparison_count, result.moves_tried, result.time_taken_ms
    );
}

fn append_record(path: &Path, record: Record) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let write_headers = file.metadata()?.len() == 0;
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(write_headers)
        .from_writer(file);
    csv_writer.serialize(record)?;
    csv_writer.flush()?;
    Ok(())
}
