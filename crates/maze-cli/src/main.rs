use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use maze_core::{Maze, MazeLimits};
use maze_gen::{GenConfig, MazeGen};
use maze_paths::{Algorithm, PathSession, Route, Selection};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Load, generate and solve typed-cell mazes")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a maze file with one or all algorithms.
    Solve {
        /// Maze file in the `rows cols` + cell codes text format.
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = AlgoArg::All)]
        algo: AlgoArg,
        /// Emit routes as JSON instead of text.
        #[arg(long)]
        json: bool,
        #[arg(long, default_value_t = MazeLimits::default().max_rows)]
        max_rows: usize,
        #[arg(long, default_value_t = MazeLimits::default().max_cols)]
        max_cols: usize,
    },
    /// Generate a random solvable maze.
    Generate {
        #[arg(long, default_value_t = 20)]
        rows: usize,
        #[arg(long, default_value_t = 20)]
        cols: usize,
        /// Seed for reproducible output; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate a maze and replay the selections 1, 2, 3, 4, 0.
    Demo {
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AlgoArg {
    Dfs,
    Bfs,
    Dijkstra,
    Lava,
    All,
}

impl AlgoArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgoArg::Dfs => vec![Algorithm::Dfs],
            AlgoArg::Bfs => vec![Algorithm::Bfs],
            AlgoArg::Dijkstra => vec![Algorithm::Dijkstra],
            AlgoArg::Lava => vec![Algorithm::DijkstraOneLava],
            AlgoArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve {
            file,
            algo,
            json,
            max_rows,
            max_cols,
        } => handle_solve(&file, algo, json, MazeLimits::new(max_rows, max_cols)),
        Command::Generate {
            rows,
            cols,
            seed,
            output,
        } => handle_generate(rows, cols, seed, output.as_deref()),
        Command::Demo { seed } => handle_demo(seed),
    }
}

fn handle_solve(file: &Path, algo: AlgoArg, json: bool, limits: MazeLimits) -> Result<()> {
    let maze = Maze::load(file, &limits)
        .with_context(|| format!("failed to load maze from {}", file.display()))?;
    let routes = algo
        .algorithms()
        .into_iter()
        .map(|alg| alg.solve(&maze))
        .collect::<Result<Vec<Route>, _>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }
    for route in &routes {
        print_route(&maze, route);
    }
    Ok(())
}

fn handle_generate(
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    let maze = generate(rows, cols, seed)?;
    match output {
        Some(path) => {
            fs::write(path, maze.to_string())
                .with_context(|| format!("failed to write maze to {}", path.display()))?;
            info!("wrote {} to {}", maze_size(&maze), path.display());
        }
        None => print!("{maze}"),
    }
    Ok(())
}

fn handle_demo(seed: Option<u64>) -> Result<()> {
    let maze = generate(20, 20, seed)?;
    println!("{maze}");
    let mut session = PathSession::new(&maze);
    for sel in [1, 2, 3, 4, 0] {
        match session.apply(Selection::from_selector(sel)?)? {
            Some(route) => print_route(&maze, route),
            None => println!("[{sel}] cleared\n"),
        }
    }
    Ok(())
}

fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Result<Maze> {
    let seed = seed.unwrap_or_else(rand::random);
    info!("generating with seed {seed}");
    let maze = MazeGen::seeded(GenConfig::default(), seed)
        .generate(rows, cols)
        .context("failed to generate maze")?;
    Ok(maze)
}

fn print_route(maze: &Maze, route: &Route) {
    println!("{}", render::summary(route));
    println!("{}", render::overlay(maze, route));
}

fn maze_size(maze: &Maze) -> String {
    format!("{}x{} maze", maze.rows(), maze.cols())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
