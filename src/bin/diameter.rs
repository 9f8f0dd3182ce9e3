use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use graph_diameter::{
    graphs::{graph_functions::is_connected, read_graph_from_file},
    utility::get_progressspinner,
};
use tracing_subscriber::EnvFilter;

/// Computes the diameter of a graph: the maximum shortest-path distance
/// between any pair of vertices, with the endpoints realizing it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file: vertex count on the first line, one 'u v weight' edge per
    /// following line
    #[arg(short, long)]
    file: PathBuf,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("graph_diameter=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let graph = read_graph_from_file(&args.file)?;
    println!(
        "graph has {} vertices and {} edges",
        graph.order(),
        graph.number_of_edges()
    );

    if !is_connected(&graph) {
        println!("warning: graph is disconnected, the diameter only covers vertex pairs within a component");
    }

    let spinner = get_progressspinner("computing diameter");
    let diameter = graph.diameter();
    spinner.finish_and_clear();

    match diameter {
        Some(diameter) if args.json => println!("{}", serde_json::to_string_pretty(&diameter)?),
        Some(diameter) => println!(
            "diameter is {}, realized by the path from {} to {}",
            diameter.distance, diameter.start, diameter.end
        ),
        None => println!("graph has no vertices, the diameter is undefined"),
    }

    Ok(())
}
