use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use graph_diameter::graphs::{read_graph_from_file, Distance, Graph, Vertex};
use itertools::Itertools;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Computes the shortest-path tree for one root vertex and prints the
/// distance table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file: vertex count on the first line, one 'u v weight' edge per
    /// following line
    #[arg(short, long)]
    file: PathBuf,

    /// Root vertex of the tree
    #[arg(short, long, default_value_t = 0)]
    root: Vertex,

    /// Also print the traced path from the root to this vertex
    #[arg(short, long)]
    path_to: Option<Vertex>,

    /// Print the parsed graph before the table
    #[arg(long)]
    print_graph: bool,

    /// Emit the table as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TableRow {
    vertex: Vertex,
    visited: bool,
    distance: Option<Distance>,
    parent: Option<Vertex>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("graph_diameter=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let graph = read_graph_from_file(&args.file)?;
    if args.print_graph {
        print_graph(&graph);
    }

    let table = graph.shortest_path_tree(args.root)?;

    let rows = (0..graph.order())
        .map(|vertex| {
            Ok(TableRow {
                vertex,
                visited: table.visited(vertex)?,
                distance: table.distance(vertex)?,
                parent: table.parent(vertex)?,
            })
        })
        .collect::<Result<Vec<_>, anyhow::Error>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!(
            "{:>8} {:>8} {:>8} {:>8}",
            "Vertex", "Visited", "Distance", "Parent"
        );
        for row in &rows {
            println!(
                "{:>8} {:>8} {:>8} {:>8}",
                row.vertex,
                row.visited,
                row.distance
                    .map_or_else(|| "-".to_string(), |distance| distance.to_string()),
                row.parent
                    .map_or_else(|| "-".to_string(), |parent| parent.to_string()),
            );
        }
    }

    if let Some(target) = args.path_to {
        match (table.path_to(target)?, table.distance(target)?) {
            (Some(path), Some(distance)) => {
                println!(
                    "path from {} to {}: {} (distance {})",
                    args.root,
                    target,
                    path.iter().join(" -> "),
                    distance
                );
            }
            _ => println!("vertex {} is not reachable from {}", target, args.root),
        }
    }

    Ok(())
}

fn print_graph(graph: &Graph) {
    println!("Order: {}", graph.order());
    for vertex in 0..graph.order() {
        let edges = graph
            .adjacent(vertex)
            .iter()
            .map(|edge| format!("({}, {}, w={})", edge.u(), edge.v(), edge.weight()))
            .join(" ");
        println!("\t{}: {}", vertex, edges);
    }
}
