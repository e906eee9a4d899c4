//! Readers that build a [`Graph`] from text input
//!
//! Each format implements [`GraphParser`]; [`parser_for`] picks one by name.

pub mod basic;
pub mod db1b;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::Graph;
use crate::{Error, Result};

pub use basic::BasicParser;
pub use db1b::{Db1bOptions, Db1bParser};

/// Capability to turn a text source into a graph
pub trait GraphParser {
    /// Parses a whole source
    fn parse(&self, reader: &mut dyn BufRead) -> Result<Graph>;

    /// Parses an in-memory string
    fn parse_str(&self, source: &str) -> Result<Graph> {
        self.parse(&mut source.as_bytes())
    }

    /// Opens and parses a file
    fn parse_file(&self, path: &Path) -> Result<Graph> {
        let file = File::open(path)?;
        self.parse(&mut BufReader::new(file))
    }
}

/// Returns the parser for a format name (`basic` or `db1b`)
pub fn parser_for(kind: &str) -> Result<Box<dyn GraphParser>> {
    match kind {
        "basic" => Ok(Box::new(BasicParser::new())),
        "db1b" => Ok(Box::new(Db1bParser::default())),
        other => Err(Error::UnsupportedFormat(other.to_string())),
    }
}

/// Wraps a graph construction failure with the line it came from
pub(crate) fn at_line(line: usize) -> impl Fn(Error) -> Error {
    move |err| match err {
        Error::Parse { .. } => err,
        other => Error::Parse {
            line,
            message: other.to_string(),
        },
    }
}
