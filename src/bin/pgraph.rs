//! CLI entry point for the `pgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use proper_graph::cli::commands;
use proper_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "pgraph",
    about = "pgraph CLI — query graphs described in JSON documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node/edge counts and graph flags
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// List nodes in breadth-first order
    Bfs {
        /// Path to the graph document
        file: PathBuf,
        /// Starting node
        from: String,
    },
    /// Find the shortest path between two nodes
    Path {
        /// Path to the graph document
        file: PathBuf,
        /// Source node
        from: String,
        /// Target node
        to: String,
    },
    /// Check whether two nodes are connected (either direction when directed)
    Connected {
        /// Path to the graph document
        file: PathBuf,
        /// First node
        a: String,
        /// Second node
        b: String,
    },
    /// Show outgoing, incoming and adjacent nodes
    Neighbors {
        /// Path to the graph document
        file: PathBuf,
        /// Node to inspect
        node: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Invalid output format: {}", other);
            process::exit(3);
        }
    };

    // RUST_LOG wins over --verbose when set.
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Bfs { file, from } => commands::cmd_bfs(&file, &from, json),
        Commands::Path { file, from, to } => commands::cmd_path(&file, &from, &to, json),
        Commands::Connected { file, a, b } => commands::cmd_connected(&file, &a, &b, json),
        Commands::Neighbors { file, node } => commands::cmd_neighbors(&file, &node, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Document(_) => 2,
            GraphError::NodeNotFound(_) => 4,
            GraphError::Weight(_) | GraphError::MissingWeight => 5,
            GraphError::NegativeCycle(_) => 6,
        };
        process::exit(code);
    }
}
