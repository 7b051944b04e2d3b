//! CLI entry point for the `gx` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

use graph_engine::cli::commands::{self, GraphInput};
use graph_engine::graph::SearchOrder;
use graph_engine::GraphError;

#[derive(Parser)]
#[command(
    name = "gx",
    about = "gx: query small directed and undirected graphs built from edge lists"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Graph given on the command line.
#[derive(Args)]
struct GraphArgs {
    /// Build a directed weighted graph (edges SRC:DST[:WEIGHT]) instead of an
    /// undirected one (edges U:V)
    #[arg(long)]
    directed: bool,

    /// Edge spec; repeat for each edge
    #[arg(long = "edge", short = 'e', value_name = "EDGE")]
    edges: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the graph
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// List every edge once
    Edges {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Check whether a vertex sequence is a valid path
    Path {
        #[command(flatten)]
        graph: GraphArgs,
        /// Vertices along the path
        vertices: Vec<String>,
    },
    /// Depth-first search
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// Starting vertex
        start: String,
        /// Stop once this vertex is reached
        #[arg(long)]
        end: Option<String>,
    },
    /// Breadth-first search
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// Starting vertex
        start: String,
        /// Stop once this vertex is reached
        #[arg(long)]
        end: Option<String>,
    },
    /// Report whether the graph contains a cycle
    Cycle {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Count connected components (undirected only)
    Components {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Shortest distances from a source vertex (directed only)
    Dijkstra {
        #[command(flatten)]
        graph: GraphArgs,
        /// Source vertex index
        source: String,
    },
}

fn build(args: &GraphArgs) -> Result<GraphInput, GraphError> {
    GraphInput::from_specs(args.directed, &args.edges)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == OutputFormat::Json;

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Show { graph } => build(&graph).and_then(|g| commands::cmd_show(&g, json)),
        Commands::Edges { graph } => build(&graph).and_then(|g| commands::cmd_edges(&g, json)),
        Commands::Path { graph, vertices } => {
            build(&graph).and_then(|g| commands::cmd_path(&g, &vertices, json))
        }
        Commands::Dfs { graph, start, end } => build(&graph).and_then(|g| {
            commands::cmd_search(&g, &start, end.as_deref(), SearchOrder::DepthFirst, json)
        }),
        Commands::Bfs { graph, start, end } => build(&graph).and_then(|g| {
            commands::cmd_search(&g, &start, end.as_deref(), SearchOrder::BreadthFirst, json)
        }),
        Commands::Cycle { graph } => build(&graph).and_then(|g| commands::cmd_cycle(&g, json)),
        Commands::Components { graph } => {
            build(&graph).and_then(|g| commands::cmd_components(&g, json))
        }
        Commands::Dijkstra { graph, source } => {
            build(&graph).and_then(|g| commands::cmd_dijkstra(&g, &source, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec { .. } | GraphError::InvalidVertex(_) => 3,
            GraphError::VertexOutOfRange { .. } => 4,
            GraphError::Unsupported(_) => 5,
        };
        process::exit(code);
    }
}
