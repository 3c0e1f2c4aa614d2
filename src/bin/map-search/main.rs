mod refimpl;

use graf_search::{Graph, Heuristic, Node, NodeMap, Path, Strategy, Weight, Zero};

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Comma separated weight matrix. Cell (row, column) is the weight of the
    /// edge column -> row, the first row and column hold the node labels
    map: PathBuf,
    /// Label of the start node
    #[arg(long, required_unless_present = "sweep")]
    start: Option<String>,
    /// Label of the goal node
    #[arg(long, required_unless_present = "sweep")]
    goal: Option<String>,
    /// `label,estimate` lines with the estimated distance to the goal, used by
    /// the greedy and astar strategies
    #[arg(long)]
    heuristic: Option<PathBuf>,
    /// Strategy to run, can be repeated. Runs all of them by default
    #[arg(long = "strategy", short)]
    strategies: Vec<Strategy>,
    /// Write the map in Graphviz format, with the first path found in red
    #[arg(long)]
    output_dot: Option<PathBuf>,
    /// Search between every pair of nodes and check the results against an
    /// exhaustive reference. Only feasible for small maps
    #[arg(long)]
    sweep: bool,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Search(#[from] graf_search::Error),
    #[error("{0}")]
    Usage(String),
    #[error("{0} results disagree with the reference")]
    Mismatch(usize),
}

fn read(path: &std::path::Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        "map_search=debug,graf_search=debug"
    } else {
        "map_search=info,graf_search=warn"
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(())
}

fn format_path(graph: &Graph, path: &Path) -> String {
    let labels: Vec<&str> = graph.labels_of(path).into_iter().map(String::as_str).collect();
    match graph.path_cost(path) {
        Some(cost) => format!("{} (cost {})", labels.join(" -> "), cost),
        None => format!("{} (cost n/a, uses a reverse edge)", labels.join(" -> ")),
    }
}

/// One output line per strategy. A failing strategy reports its error on its
/// own line and the remaining ones still run.
fn run_single(
    graph: &Graph,
    heuristic: Option<&NodeMap<Weight>>,
    strategies: &[Strategy],
    start: &str,
    goal: &str,
) -> Result<(Vec<String>, Option<Path>), CliError> {
    let start = graph.node(&start.to_string())?;
    let goal = graph.node(&goal.to_string())?;
    let heuristic = heuristic.map(|h| h as &dyn Heuristic);

    let mut lines = Vec::with_capacity(strategies.len());
    let mut first_found = None;
    for &strategy in strategies {
        if strategy.needs_heuristic() && heuristic.is_none() {
            lines.push(format!("{strategy}: skipped, needs --heuristic"));
            continue;
        }
        match strategy.search(graph, start, goal, heuristic) {
            Ok(Some(path)) => {
                lines.push(format!("{strategy}: {}", format_path(graph, &path)));
                first_found.get_or_insert(path);
            }
            Ok(None) => lines.push(format!("{strategy}: no path")),
            Err(e) => {
                tracing::warn!(%strategy, error = %e, "search failed");
                lines.push(format!("{strategy}: {e}"));
            }
        }
    }
    Ok((lines, first_found))
}

fn same_cost(a: Option<Weight>, b: Option<Weight>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => (a - b).abs() <= 0.001 * b.max(1.0),
        (None, None) => true,
        _ => false,
    }
}

/// Compare one search result with the exhaustive reference. On maps with one
/// way edges bidirectional results may step against an edge, so only their
/// endpoints are checked there.
fn check_result(
    graph: &Graph,
    symmetric: bool,
    strategy: Strategy,
    start: Node,
    goal: Node,
    found: Option<&Path>,
    reference: &refimpl::Reference,
) -> Option<String> {
    let Some(path) = found else {
        return reference
            .cheapest
            .is_some()
            .then(|| "no path found".to_string());
    };
    if path.first() != Some(&start) || path.last() != Some(&goal) {
        return Some("path does not connect start and goal".to_string());
    }
    if strategy == Strategy::Bidirectional && !symmetric {
        return None;
    }
    if reference.cheapest.is_none() {
        return Some("path found where none exists".to_string());
    }
    if !graph.is_simple_walk(path) {
        return Some("not a simple walk".to_string());
    }
    match strategy {
        Strategy::UniformCost | Strategy::AStar
            if !same_cost(graph.path_cost(path), reference.cheapest) =>
        {
            Some(format!(
                "cost {:?}, expected {:?}",
                graph.path_cost(path),
                reference.cheapest
            ))
        }
        Strategy::BreadthFirst if Some(path.len() - 1) != reference.fewest_edges => Some(format!(
            "{} edges, expected {:?}",
            path.len() - 1,
            reference.fewest_edges
        )),
        _ => None,
    }
}

fn run_sweep(graph: &Graph, strategies: &[Strategy]) -> Result<(), CliError> {
    let symmetric = graph.is_symmetric();
    let pairs = (graph.len() * graph.len()) as u64;
    // Estimates in the heuristic file only hold for one goal
    let zero: &dyn Heuristic = &Zero;

    let pg = indicatif::ProgressBar::new(pairs);
    let mut mismatches = 0;
    for start in graph.nodes() {
        for goal in graph.nodes() {
            pg.inc(1);
            let reference = refimpl::reference(graph, start, goal);
            for &strategy in strategies {
                let found = strategy.search(graph, start, goal, Some(zero))?;
                let problem = check_result(
                    graph,
                    symmetric,
                    strategy,
                    start,
                    goal,
                    found.as_ref(),
                    &reference,
                );
                if let Some(problem) = problem {
                    mismatches += 1;
                    pg.println(format!(
                        "[{strategy}] {} -> {}: {problem}",
                        graph.label(start),
                        graph.label(goal)
                    ));
                }
            }
        }
    }
    pg.finish_and_clear();

    println!(
        "Checked {} strategies over {} pairs",
        strategies.len(),
        pairs
    );
    if mismatches > 0 {
        return Err(CliError::Mismatch(mismatches));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let start = std::time::Instant::now();

    let graph = graf_search::from_csv(&read(&cli.map)?)?;
    tracing::info!(nodes = graph.len(), map = %cli.map.display(), "map loaded");

    let heuristic = match &cli.heuristic {
        Some(path) => Some(graf_search::heuristic_from_csv(&graph, &read(path)?)?),
        None => None,
    };

    let strategies = if cli.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        cli.strategies.clone()
    };
    if strategies.contains(&Strategy::Bidirectional) && !graph.is_symmetric() {
        tracing::warn!("map has one way edges, bidirectional results may not follow them");
    }

    let path = if cli.sweep {
        run_sweep(&graph, &strategies)?;
        None
    } else {
        let (Some(from), Some(to)) = (&cli.start, &cli.goal) else {
            return Err(CliError::Usage("--start and --goal are required".to_string()));
        };
        let (lines, found) = run_single(&graph, heuristic.as_ref(), &strategies, from, to)?;
        for line in lines {
            println!("{line}");
        }
        found
    };

    if let Some(o) = &cli.output_dot {
        let dot = graf_search::to_dot_with_path(&graph, path.as_deref().unwrap_or(&[]));
        std::fs::write(o, dot).map_err(|source| CliError::Io {
            path: o.clone(),
            source,
        })?;
        tracing::info!(path = %o.display(), "wrote dot file");
    }

    tracing::debug!(elapsed = ?start.elapsed(), "done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
