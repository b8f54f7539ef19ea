//! Hexmesh CLI - generate and inspect cops-and-robbers benchmark graphs
//!
//! Usage:
//!   hexmesh generate --order 10 -o triangle10.txt
//!   hexmesh batch --dir graphs
//!   hexmesh inspect graphs/triangle15.txt

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hexmesh::prelude::*;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "hexmesh")]
#[command(about = "Generate hexagonal-motif graphs for the cops-and-robbers solver")]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one graph file
    Generate {
        /// JSON config file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Subdivision depth
        #[arg(long)]
        order: Option<usize>,

        /// Number of cops
        #[arg(long)]
        cops: Option<usize>,

        /// Number of robbers
        #[arg(long)]
        robbers: Option<usize>,

        /// Turn budget (default: 2 * robbers * floor(sqrt(vertices)))
        #[arg(long)]
        max_turn: Option<usize>,

        /// Digits after the decimal point
        #[arg(long)]
        precision: Option<usize>,

        /// Center dedup mode
        #[arg(long, value_enum)]
        dedup: Option<DedupArg>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write the reference triangle3/10/15 graphs
    Batch {
        /// Output directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Parse a graph file and print its statistics
    Inspect {
        /// Graph file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DedupArg {
    Legacy,
    Unified,
}

impl From<DedupArg> for DedupMode {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::Legacy => DedupMode::Legacy,
            DedupArg::Unified => DedupMode::Unified,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Command::Generate {
            config,
            order,
            cops,
            robbers,
            max_turn,
            precision,
            dedup,
            output,
        } => {
            let mut cfg = match &config {
                Some(path) => GeneratorConfig::load_json(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => GeneratorConfig::default(),
            };
            if let Some(order) = order {
                cfg.order = order;
            }
            if let Some(cops) = cops {
                cfg.cops = cops;
            }
            if let Some(robbers) = robbers {
                cfg.robbers = robbers;
            }
            if max_turn.is_some() {
                cfg.max_turn = max_turn;
            }
            if let Some(precision) = precision {
                cfg.precision = precision;
            }
            if let Some(dedup) = dedup {
                cfg.dedup = dedup.into();
            }

            let file = generate(&cfg)?;
            file.save(&output)
                .with_context(|| format!("writing {}", output.display()))?;
        }
        Command::Batch { dir } => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            for cfg in GeneratorConfig::presets() {
                let path = dir.join(cfg.file_name());
                let file = generate(&cfg)?;
                file.save(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }
        Command::Inspect { file } => {
            let parsed = GraphFile::load(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let graph = &parsed.graph;
            info!(
                cops = parsed.header.cops,
                robbers = parsed.header.robbers,
                max_turn = parsed.header.max_turn,
                precision = parsed.precision,
                "header"
            );
            println!("Vertices: {}", graph.num_vertices());
            println!("Edges:    {}", graph.num_edges());
            if let Some(summary) = graph.degree_summary() {
                println!(
                    "Degree:   min {} / max {} / mean {:.2} ({} isolated)",
                    summary.min, summary.max, summary.mean, summary.isolated
                );
            }
        }
    }

    Ok(())
}
