mod demo;
mod error;

use clap::{Parser, Subcommand, ValueEnum};
use fp_core::Location;
use fp_graph::Graph;
use fp_planner::{Layout, PlanOptions, PlanProgress, Planner, PlannerConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;

use crate::demo::Labelled;
use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "fp-cli")]
#[command(about = "ForcePlan CLI - force-directed graph layout", long_about = None)]
struct Cli {
    /// Log planner diagnostics at DEBUG level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a demo graph and print the vertex locations
    Plan {
        #[command(subcommand)]
        graph: DemoGraph,
        /// Seed for the starting positions (random if omitted)
        #[arg(long, global = true)]
        seed: Option<u64>,
        /// Override the iteration budget
        #[arg(long, global = true)]
        iterations: Option<usize>,
        /// Planner configuration YAML file
        #[arg(long, global = true)]
        config: Option<PathBuf>,
        /// Compute forces on all cores
        #[arg(long, global = true)]
        parallel: bool,
        /// Show a progress bar on stderr
        #[arg(long, global = true)]
        progress: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
        format: OutputFormat,
    },
    /// Print the default planner configuration as YAML
    Config,
}

#[derive(Subcommand)]
enum DemoGraph {
    /// Rectangular lattice with spacing growing toward one corner
    Grid {
        #[arg(long, default_value_t = 5)]
        rows: usize,
        #[arg(long, default_value_t = 5)]
        columns: usize,
    },
    /// Five-pointed star inside a pentagon
    Pentagram,
    /// Ring of equally weighted edges
    Cycle {
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long, default_value_t = 1.0)]
        weight: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

struct PlanArgs {
    seed: Option<u64>,
    iterations: Option<usize>,
    config: Option<PathBuf>,
    parallel: bool,
    progress: bool,
    format: OutputFormat,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    match cli.command {
        Commands::Plan {
            graph,
            seed,
            iterations,
            config,
            parallel,
            progress,
            format,
        } => cmd_plan(
            graph,
            PlanArgs {
                seed,
                iterations,
                config,
                parallel,
                progress,
                format,
            },
        ),
        Commands::Config => cmd_config(),
    }
}

fn cmd_config() -> CliResult<()> {
    print!("{}", serde_yaml::to_string(&PlannerConfig::default())?);
    Ok(())
}

fn cmd_plan(demo: DemoGraph, args: PlanArgs) -> CliResult<()> {
    let (graph, labels) = match demo {
        DemoGraph::Grid { rows, columns } => demo::grid(rows, columns)?,
        DemoGraph::Pentagram => demo::pentagram()?,
        DemoGraph::Cycle { size, weight } => demo::cycle(size, weight)?,
    };

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(iterations) = args.iterations {
        config.max_iterations = iterations;
    }
    config.parallel |= args.parallel;

    let started = Instant::now();
    let layout = run_planner(&graph, config, &args)?;
    let elapsed = started.elapsed();

    match args.format {
        OutputFormat::Table => print_table(&labels, &layout)?,
        OutputFormat::Json => print_json(&labels, &layout)?,
    }
    eprintln!(
        "{} vertices, {} edges, {} iterations, displacement {:.3e}, {:.1} ms",
        graph.vertex_count(),
        graph.edge_count(),
        layout.iterations(),
        layout.total_displacement(),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

fn load_config(path: &Path) -> CliResult<PlannerConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&text)?)
}

fn run_planner(graph: &Graph, config: PlannerConfig, args: &PlanArgs) -> CliResult<Layout> {
    let planner = Planner::new(config);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut last_emit = Instant::now();
    let mut render = |p: &PlanProgress<'_>| {
        if last_emit.elapsed().as_millis() >= 100 || p.iteration == p.max_iterations {
            render_progress(p);
            last_emit = Instant::now();
        }
    };
    let mut options = PlanOptions::default();
    if args.progress {
        options.progress = Some(&mut render);
    }

    let layout = planner.plan_with(graph, &mut rng, options)?;
    if args.progress {
        clear_progress_line();
    }
    layout.ensure_finite()?;
    Ok(layout)
}

fn render_progress(p: &PlanProgress<'_>) {
    let width = 28usize;
    let filled = ((p.fraction_complete() * width as f64).round() as usize).min(width);
    eprint!(
        "\r[{}{}] {:>6.2}%  iteration={}/{}  displacement={:.3e}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled)),
        p.fraction_complete() * 100.0,
        p.iteration,
        p.max_iterations,
        p.total_displacement
    );
    let _ = io::stderr().flush();
}

fn clear_progress_line() {
    eprint!("\r{}\r", " ".repeat(100));
    let _ = io::stderr().flush();
}

#[derive(Serialize)]
struct Row<'a> {
    label: &'a str,
    location: Location,
}

fn rows<'a>(labels: &'a [Labelled], layout: &Layout) -> CliResult<Vec<Row<'a>>> {
    labels
        .iter()
        .map(|label| -> CliResult<Row<'a>> {
            Ok(Row {
                label: label.payload(),
                location: layout.try_get(label.vertex())?,
            })
        })
        .collect()
}

fn print_table(labels: &[Labelled], layout: &Layout) -> CliResult<()> {
    let rows = rows(labels, layout)?;
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0).max(6);
    println!("{:<width$}  {:>12}  {:>12}", "vertex", "x", "y");
    for row in rows {
        println!(
            "{:<width$}  {:>12.4}  {:>12.4}",
            row.label, row.location.x, row.location.y
        );
    }
    Ok(())
}

fn print_json(labels: &[Labelled], layout: &Layout) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(&rows(labels, layout)?)?);
    Ok(())
}
