use log::debug;
use std::io::BufRead;

use crate::graph::Graph;
use crate::parser::{at_line, GraphParser};
use crate::{Error, Result};

/// Parser for whitespace-delimited edge lists
///
/// Each line is `FROM TO WEIGHT` and adds one directed edge. A line holding a
/// single label declares a node without edges. Blank lines and lines starting
/// with `#` are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicParser;

impl BasicParser {
    pub fn new() -> Self {
        BasicParser
    }
}

impl GraphParser for BasicParser {
    fn parse(&self, reader: &mut dyn BufRead) -> Result<Graph> {
        let mut graph = Graph::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [label] => {
                    graph.get_node(label);
                }
                [from, to, weight] => {
                    let weight: f64 = weight.parse().map_err(|_| Error::Parse {
                        line: line_no,
                        message: format!("invalid weight `{}`", weight),
                    })?;
                    let from = graph.get_node(from);
                    let to = graph.get_node(to);
                    graph.add_edge(from, to, weight).map_err(at_line(line_no))?;
                }
                _ => {
                    return Err(Error::Parse {
                        line: line_no,
                        message: format!("expected `FROM TO WEIGHT`, got `{}`", line),
                    })
                }
            }
        }

        debug!(
            "Parsed basic graph: {} nodes, {} edges",
            graph.nodes().count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}
