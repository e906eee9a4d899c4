use std::path::PathBuf;

use clap::Parser;
use dijkstra_paths::parser::parser_for;
use dijkstra_paths::report::{GraphReport, PathsReport};
use dijkstra_paths::{Error, ShortestPathEngine};

/// Shortest paths from one node of a weighted graph file
#[derive(Parser, Debug)]
#[command(name = "dijkstra-paths")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input format: `basic` (`A B weight` lines) or `db1b` (flight market CSV)
    file_type: String,

    /// Graph file to read
    file: PathBuf,

    /// Label of the origin node
    origin: String,

    /// Label of the destination; omit to list every reachable node
    destination: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Dump the parsed graph before the results
    #[arg(long)]
    report: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let parser = parser_for(&cli.file_type)?;
    let graph = match parser.parse_file(&cli.file) {
        Ok(graph) => graph,
        Err(Error::Io(err)) => {
            return Err(format!("Could not open file {}: {}", cli.file.display(), err).into())
        }
        Err(err) => return Err(err.into()),
    };

    if cli.report {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&GraphReport::from_graph(&graph))?);
        } else {
            print!("{}", graph.report());
        }
    }

    let mut engine = ShortestPathEngine::new();
    let paths = engine.compute_from(&graph, &cli.origin)?;

    let Some(destination) = cli.destination else {
        if cli.json {
            let report = PathsReport::reachable(&graph, paths);
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            for (node, data) in paths.paths() {
                println!("Node: {} {}", graph.label(*node).unwrap_or("?"), data.distance);
            }
        }
        return Ok(());
    };

    let destination = graph.lookup(&destination)?;
    if cli.json {
        let report = PathsReport::destination(&graph, paths, destination);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let path = paths.shortest_path(destination);
    if path.is_empty() {
        println!("No path exists.");
    } else {
        let labels: Vec<&str> = path
            .iter()
            .filter_map(|&node| graph.label(node))
            .collect();
        println!("{}", labels.join(" "));
        println!("Total path length is: {}", paths.shortest_path_length(destination));
    }

    Ok(())
}
