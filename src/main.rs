use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csv::Writer;
use log::{error, info};
use std::io;
use std::path::{Path, PathBuf};

use weather_routes::export::write_distances;
use weather_routes::shell::{describe_center, describe_route};
use weather_routes::{load_edge_list, solve, Condition, Shell, Snapshot, WeightedGraph};

#[derive(Parser, Debug)]
#[command(name = "weather-routes")]
#[command(about = "Load a city edge list with per-weather travel times and answer shortest-route and graph-center queries.", long_about = None)]
struct Cli {
    /// Edge list: one `city1 city2 normal rain snow storm` line per directed edge
    graph: PathBuf,

    /// Weather condition to route under
    #[arg(short, long, value_enum, default_value_t = Condition::Normal)]
    condition: Condition,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Run one query and exit. Without a command an interactive menu starts.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shortest route between two cities
    Route { from: String, to: String },

    /// Print the city with the smallest eccentricity
    Center,

    /// Write every shortest distance as CSV (from,to,hours)
    Matrix {
        /// Output CSV. If omitted, prints a summary to stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Include unreachable pairs with infinite hours
        #[arg(long, default_value_t = false)]
        include_unreachable: bool,
    },
}

fn write_matrix(graph: &WeightedGraph, snapshot: &Snapshot, out: &Path, include_unreachable: bool) -> Result<()> {
    let mut wtr = Writer::from_path(out).with_context(|| format!("creating CSV {}", out.display()))?;
    let written = write_distances(graph, snapshot, &mut wtr, include_unreachable)
        .with_context(|| format!("writing CSV {}", out.display()))?;
    println!("Wrote {} distances to {}", written, out.display());
    Ok(())
}

fn print_summary(graph: &WeightedGraph, snapshot: &Snapshot) {
    let n = graph.len();
    let finite: Vec<f64> = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| i != j)
        .map(|(i, j)| snapshot.distance(i, j))
        .filter(|d| d.is_finite())
        .collect();
    println!("Cities: {}", n);
    println!("Directed edges: {}", graph.edge_count());
    println!("Reachable ordered pairs ({}): {}", snapshot.condition(), finite.len());
    if let Some(maxd) = finite.iter().copied().reduce(f64::max) {
        println!("Longest shortest route (hours): {}", maxd);
    }
}

fn run(cli: Cli) -> Result<()> {
    let edge_list = load_edge_list(&cli.graph).with_context(|| format!("reading {}", cli.graph.display()))?;
    if !edge_list.malformed.is_empty() {
        info!("Skipped {} malformed lines", edge_list.malformed.len());
    }
    let graph = WeightedGraph::from_edge_list(&edge_list)?;

    match cli.command {
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(graph, cli.condition, stdin.lock(), io::stdout());
            shell.run()?;
        }
        Some(Command::Route { from, to }) => {
            let snapshot = solve(&graph, cli.condition);
            println!("{}", describe_route(&graph, &snapshot, &from, &to)?);
        }
        Some(Command::Center) => {
            let snapshot = solve(&graph, cli.condition);
            println!("{}", describe_center(&graph, &snapshot));
        }
        Some(Command::Matrix { out, include_unreachable }) => {
            let snapshot = solve(&graph, cli.condition);
            match out {
                Some(path) => write_matrix(&graph, &snapshot, &path, include_unreachable)?,
                None => print_summary(&graph, &snapshot),
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
