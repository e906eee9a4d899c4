use log::debug;
use std::io::BufRead;

use crate::graph::{Graph, WeightedGraph};
use crate::parser::{at_line, GraphParser};
use crate::{Error, Result};

/// Column selection for DB1B market records
#[derive(Debug, Clone)]
pub struct Db1bOptions {
    /// Header name of the origin airport code column
    pub origin_column: String,
    /// Header name of the destination airport code column
    pub dest_column: String,
    /// Header name of the column used as edge weight
    pub weight_column: String,
}

impl Default for Db1bOptions {
    fn default() -> Self {
        Db1bOptions {
            origin_column: "ORIGIN".to_string(),
            dest_column: "DEST".to_string(),
            weight_column: "MARKET_FARE".to_string(),
        }
    }
}

/// Parser for DB1B flight market CSV exports
///
/// The first non-blank line is a header naming the columns. Every record adds
/// an edge from origin to destination airport; when a route shows up more
/// than once the cheapest weight wins.
#[derive(Debug, Default, Clone)]
pub struct Db1bParser {
    options: Db1bOptions,
}

impl Db1bParser {
    pub fn new(options: Db1bOptions) -> Self {
        Db1bParser { options }
    }

    pub fn options(&self) -> &Db1bOptions {
        &self.options
    }
}

/// Column positions resolved from the header
struct Columns {
    origin: usize,
    dest: usize,
    weight: usize,
}

impl Columns {
    fn resolve(header: &[String], options: &Db1bOptions, line: usize) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| Error::Parse {
                    line,
                    message: format!("missing column `{}`", name),
                })
        };
        Ok(Columns {
            origin: find(&options.origin_column)?,
            dest: find(&options.dest_column)?,
            weight: find(&options.weight_column)?,
        })
    }

    fn width(&self) -> usize {
        self.origin.max(self.dest).max(self.weight) + 1
    }
}

/// Splits one CSV record, honoring double-quoted fields and `""` escapes
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

impl GraphParser for Db1bParser {
    fn parse(&self, reader: &mut dyn BufRead) -> Result<Graph> {
        let mut graph = Graph::new();
        let mut records = 0usize;
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|line| (index + 1, line)));

        let cols = loop {
            match lines.next() {
                None => return Ok(graph),
                Some(item) => {
                    let (line_no, line) = item?;
                    // Spreadsheet exports often lead with a byte order mark
                    let line = line.trim_start_matches('\u{feff}');
                    if !line.trim().is_empty() {
                        break Columns::resolve(&split_record(line), &self.options, line_no)?;
                    }
                }
            }
        };

        for item in lines {
            let (line_no, line) = item?;
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_record(&line);
            if fields.len() < cols.width() {
                return Err(Error::Parse {
                    line: line_no,
                    message: format!(
                        "expected at least {} fields, got {}",
                        cols.width(),
                        fields.len()
                    ),
                });
            }

            let raw_weight = &fields[cols.weight];
            let weight: f64 = raw_weight.parse().map_err(|_| Error::Parse {
                line: line_no,
                message: format!("invalid weight `{}`", raw_weight),
            })?;

            let from = graph.get_node(&fields[cols.origin]);
            let to = graph.get_node(&fields[cols.dest]);
            let cheaper = graph
                .edge_weight(from, to)
                .map_or(true, |existing| weight < existing);
            if cheaper {
                graph.add_edge(from, to, weight).map_err(at_line(line_no))?;
            }
            records += 1;
        }

        debug!(
            "Parsed {} DB1B records into {} airports and {} routes",
            records,
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::split_record;

    #[test]
    fn splits_quoted_fields() {
        assert_eq!(
            split_record(r#""JFK","LAX",123.5"#),
            vec!["JFK", "LAX", "123.5"]
        );
        assert_eq!(
            split_record(r#"a,"b, c","say ""hi""""#),
            vec!["a", "b, c", r#"say "hi""#]
        );
        assert_eq!(split_record("x,,y"), vec!["x", "", "y"]);
    }
}
